// src/data_input/telemetry_data.rs

use crate::channel_names::POSITION_COMPONENT_NAMES;

/// A single telemetry sample: one timestamped value from one channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,  // Milliseconds since the testbed run started.
    pub value: f64, // Angle delta in radians, or a position component in meters.
}

/// Ordered (time, value) sample sequence from one telemetry channel.
///
/// Kept as parallel arrays, matching the file layout. The arrays are equal
/// length whenever the series comes out of the parser; `from_parts` takes
/// whatever it is given, and `data_analysis::series_analysis::validate`
/// checks the invariant before any statistic touches the indices.
#[derive(Debug, Clone, Default)]
pub struct Series {
    times: Vec<f64>,
    values: Vec<f64>,
}

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a series from already-collected parallel arrays, as-is.
    pub fn from_parts(times: Vec<f64>, values: Vec<f64>) -> Self {
        Self { times, values }
    }

    pub fn push(&mut self, time: f64, value: f64) {
        self.times.push(time);
        self.values.push(value);
    }

    /// Number of value samples held. Only meaningful once the series has
    /// passed validation.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        self.times
            .iter()
            .zip(self.values.iter())
            .map(|(&time, &value)| Sample { time, value })
    }
}

/// One parsed telemetry file.
#[derive(Debug, Clone)]
pub enum TelemetryLog {
    /// Two-column angle log ("heading" or "pitch" label): a single channel
    /// of angle deltas over time.
    Angle { label: String, series: Series },
    /// Four-column position log (any other label, "Our" / "Provided" in the
    /// testbed writers): one channel per world axis.
    Position {
        label: String,
        components: [Series; 3],
    },
}

impl TelemetryLog {
    pub fn label(&self) -> &str {
        match self {
            TelemetryLog::Angle { label, .. } | TelemetryLog::Position { label, .. } => label,
        }
    }

    /// Channel name / series pairs in plotting order.
    pub fn channels(&self) -> Vec<(String, &Series)> {
        match self {
            TelemetryLog::Angle { label, series } => vec![(label.clone(), series)],
            TelemetryLog::Position { components, .. } => POSITION_COMPONENT_NAMES
                .iter()
                .zip(components.iter())
                .map(|(name, series)| (name.to_string(), series))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_arrays_parallel() {
        let mut series = Series::new();
        series.push(0.0, 1.5);
        series.push(1.0, -0.5);
        assert_eq!(series.len(), 2);
        assert_eq!(series.times(), &[0.0, 1.0]);
        assert_eq!(series.values(), &[1.5, -0.5]);
    }

    #[test]
    fn test_channels_order_for_position_log() {
        let log = TelemetryLog::Position {
            label: "Our".to_string(),
            components: [Series::new(), Series::new(), Series::new()],
        };
        let names: Vec<String> = log.channels().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["X", "Y", "Z"]);
    }
}
