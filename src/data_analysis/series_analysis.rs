// src/data_analysis/series_analysis.rs

use ndarray::ArrayView1;
use ndarray_stats::QuantileExt;
use thiserror::Error;

use crate::data_input::telemetry_data::{Sample, Series};

/// Recoverable analysis failures.
///
/// `LengthMismatch` aborts the whole channel before any index math runs.
/// `ValueNotFound` is an exact-match lookup miss; callers must handle it,
/// it is never papered over with a default index.
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("length mismatch: {times} time samples vs {values} value samples")]
    LengthMismatch { times: usize, values: usize },
    #[error("value {value} not present in series")]
    ValueNotFound { value: f64 },
    #[error("series has no samples to summarize")]
    EmptySeries,
}

/// Per-channel summary: global extrema plus the heuristic zero-crossing
/// point, when one is detected. Derived on demand, never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub max: Sample,
    pub min: Sample,
    pub intersection: Option<Sample>,
}

/// Checks the parallel-array invariant. Must run before any statistic;
/// all downstream indexing assumes equal lengths.
pub fn validate(series: &Series) -> Result<(), AnalysisError> {
    let times = series.times().len();
    let values = series.values().len();
    if times != values {
        return Err(AnalysisError::LengthMismatch { times, values });
    }
    Ok(())
}

/// Returns the time of the first sample whose value equals `value` exactly.
///
/// Exact floating-point equality is intentional: every lookup in this module
/// feeds values straight back out of the same array. It is also the one
/// place a tolerance-based match could be swapped in without touching any
/// caller, should lookups of externally computed values ever be needed.
pub fn find_time_for_value(series: &Series, value: f64) -> Result<f64, AnalysisError> {
    series
        .values()
        .iter()
        .position(|&v| v == value)
        .map(|index| series.times()[index])
        .ok_or(AnalysisError::ValueNotFound { value })
}

/// Global maximum and minimum samples of a series. Ties resolve to the
/// earliest occurrence, because the time pairing goes through
/// `find_time_for_value`.
pub fn extrema(series: &Series) -> Result<(Sample, Sample), AnalysisError> {
    validate(series)?;
    let values = ArrayView1::from(series.values());
    let max_value = *values.max().map_err(|_| AnalysisError::EmptySeries)?;
    let min_value = *values.min().map_err(|_| AnalysisError::EmptySeries)?;
    let max = Sample {
        time: find_time_for_value(series, max_value)?,
        value: max_value,
    };
    let min = Sample {
        time: find_time_for_value(series, min_value)?,
        value: min_value,
    };
    Ok((max, min))
}

// Sign with a distinct zero, so a sample sitting exactly on the axis does
// not count as either side of a crossing.
fn sign(value: f64) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

/// Heuristic zero-crossing detection, preserved from the original analysis
/// scripts: at each index whose neighbours disagree in sign, the smaller
/// magnitude of the current and previous sample is looked up by exact value
/// anywhere in the series, and the first index with a hit wins.
///
/// Note: no interpolation happens, and because the lookup scans the whole
/// series from the start, the returned sample can sit far away from the
/// sign change itself (e.g. an earlier sample that happens to carry the
/// same value). A crossing whose magnitude never appears as a literal value
/// (the bracketing samples are both negative, say) is skipped and the scan
/// continues.
pub fn detect_intersection(series: &Series) -> Result<Option<Sample>, AnalysisError> {
    validate(series)?;
    let values = series.values();
    for i in 1..values.len().saturating_sub(1) {
        if sign(values[i - 1]) != sign(values[i + 1]) {
            let magnitude = values[i].abs().min(values[i - 1].abs());
            match find_time_for_value(series, magnitude) {
                Ok(time) => {
                    return Ok(Some(Sample {
                        time,
                        value: magnitude,
                    }))
                }
                Err(AnalysisError::ValueNotFound { .. }) => continue,
                Err(other) => return Err(other),
            }
        }
    }
    Ok(None)
}

/// Full summary of one channel: validation, extrema, intersection.
pub fn summarize(series: &Series) -> Result<SeriesSummary, AnalysisError> {
    validate(series)?;
    let (max, min) = extrema(series)?;
    let intersection = detect_intersection(series)?;
    Ok(SeriesSummary {
        max,
        min,
        intersection,
    })
}
