// tests/telemetry_parser_test.rs

#![allow(non_snake_case)]

use Testbed_Telemetry_Render::data_analysis::series_analysis::summarize;
use Testbed_Telemetry_Render::data_input::telemetry_data::TelemetryLog;
use Testbed_Telemetry_Render::data_input::telemetry_parser::parse_telemetry_content;

/// Builds a telemetry file body: label line plus one data line per row.
fn telemetry_content(label: &str, rows: &[&str]) -> String {
    let mut content = String::from(label);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_log_drops_the_trailing_samples() {
        // 15 data lines; the last 10 are treated as unreliable, leaving 5.
        let rows: Vec<String> = (0..15).map(|i| format!("{}.0 {}.5", i, i)).collect();
        let row_refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        let content = telemetry_content("heading", &row_refs);

        let log = parse_telemetry_content(&content).unwrap();
        match log {
            TelemetryLog::Angle { label, series } => {
                assert_eq!(label, "heading");
                assert_eq!(series.len(), 5);
                assert_eq!(series.times(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
                assert_eq!(series.values(), &[0.5, 1.5, 2.5, 3.5, 4.5]);
            }
            TelemetryLog::Position { .. } => panic!("heading log parsed as position"),
        }
    }

    #[test]
    fn test_pitch_label_takes_the_angle_branch() {
        let rows: Vec<String> = (0..12).map(|i| format!("{}.0 0.25", i)).collect();
        let row_refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        let content = telemetry_content("pitch", &row_refs);

        let log = parse_telemetry_content(&content).unwrap();
        match log {
            TelemetryLog::Angle { label, series } => {
                assert_eq!(label, "pitch");
                assert_eq!(series.len(), 2);
            }
            TelemetryLog::Position { .. } => panic!("pitch log parsed as position"),
        }
    }

    #[test]
    fn test_short_angle_log_parses_to_an_empty_series() {
        // Ten or fewer data lines leaves nothing after the trailing trim.
        let content = telemetry_content("heading", &["0.0 1.0", "1.0 2.0"]);
        let log = parse_telemetry_content(&content).unwrap();
        match log {
            TelemetryLog::Angle { series, .. } => assert!(series.is_empty()),
            TelemetryLog::Position { .. } => panic!("heading log parsed as position"),
        }
    }

    #[test]
    fn test_position_log_splits_into_components_without_trimming() {
        let rows: Vec<String> = (0..12)
            .map(|i| format!("{}.0 {}.1 {}.2 {}.3", i, i, i, i))
            .collect();
        let row_refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        let content = telemetry_content("Our", &row_refs);

        let log = parse_telemetry_content(&content).unwrap();
        match log {
            TelemetryLog::Position { label, components } => {
                assert_eq!(label, "Our");
                for series in &components {
                    assert_eq!(series.len(), 12);
                }
                assert_eq!(components[0].values()[3], 3.1);
                assert_eq!(components[1].values()[3], 3.2);
                assert_eq!(components[2].values()[3], 3.3);
                assert_eq!(components[2].times()[3], 3.0);
            }
            TelemetryLog::Angle { .. } => panic!("position log parsed as angle"),
        }
    }

    #[test]
    fn test_unknown_label_takes_the_position_branch() {
        let content = telemetry_content("Provided", &["0.0 1.0 2.0 3.0"]);
        let log = parse_telemetry_content(&content).unwrap();
        assert!(matches!(&log, TelemetryLog::Position { .. }));
        assert_eq!(log.label(), "Provided");
    }

    #[test]
    fn test_malformed_rows_are_skipped_and_arrays_stay_parallel() {
        let mut rows: Vec<String> = vec![
            "0.0 1.0".to_string(),
            "abc 2.0".to_string(),     // non-numeric time
            "1.0".to_string(),          // too few columns
            "2.0 3.0 4.0".to_string(),  // too many columns
            "3.0 4.0".to_string(),
        ];
        // Padding so the good rows survive the trailing trim.
        for i in 0..10 {
            rows.push(format!("{}.0 0.0", 100 + i));
        }
        let row_refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        let content = telemetry_content("heading", &row_refs);

        let log = parse_telemetry_content(&content).unwrap();
        match log {
            TelemetryLog::Angle { series, .. } => {
                assert_eq!(series.times(), &[0.0, 3.0]);
                assert_eq!(series.values(), &[1.0, 4.0]);
            }
            TelemetryLog::Position { .. } => panic!("heading log parsed as position"),
        }
    }

    #[test]
    fn test_empty_file_is_an_error() {
        assert!(parse_telemetry_content("").is_err());
        assert!(parse_telemetry_content("   \n1.0 2.0").is_err());
    }

    #[test]
    fn test_parsed_log_summarizes_end_to_end() {
        let mut rows: Vec<String> = vec![
            "0.0 1.0".to_string(),
            "1.0 2.0".to_string(),
            "2.0 -1.0".to_string(),
            "3.0 -3.0".to_string(),
            "4.0 0.5".to_string(),
        ];
        for i in 0..10 {
            rows.push(format!("{}.0 0.0", 100 + i));
        }
        let row_refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        let content = telemetry_content("heading", &row_refs);

        let log = parse_telemetry_content(&content).unwrap();
        let channels = log.channels();
        assert_eq!(channels.len(), 1);

        let summary = summarize(channels[0].1).unwrap();
        assert_eq!((summary.max.time, summary.max.value), (1.0, 2.0));
        assert_eq!((summary.min.time, summary.min.value), (3.0, -3.0));
        let intersection = summary.intersection.expect("crossing should be detected");
        assert_eq!((intersection.time, intersection.value), (0.0, 1.0));
    }
}
