// src/data_input/telemetry_parser.rs

use csv::ReaderBuilder;
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::constants::TRAILING_SAMPLES_TRIMMED;
use crate::data_input::telemetry_data::{Series, TelemetryLog};

/// Labels marking a two-column angle log. Any other label is treated as a
/// four-column position log ("Our" / "Provided" in the testbed writers).
const ANGLE_LABELS: [&str; 2] = ["heading", "pitch"];

/// Parses a telemetry file from disk. See `parse_telemetry_content` for the
/// format.
pub fn parse_telemetry_file(input_file_path: &Path) -> Result<TelemetryLog, Box<dyn Error>> {
    let content = fs::read_to_string(input_file_path)?;
    parse_telemetry_content(&content)
}

/// Parses telemetry text: a label line followed by space-separated numeric
/// rows, `time value` for angle logs or `time x y z` for position logs.
///
/// The last `TRAILING_SAMPLES_TRIMMED` lines of an angle log are dropped
/// before parsing (the trailing samples are mostly incorrect). Rows with
/// the wrong column count or non-numeric fields are reported and skipped,
/// so the series always comes out with parallel arrays of equal length.
pub fn parse_telemetry_content(content: &str) -> Result<TelemetryLog, Box<dyn Error>> {
    let mut lines = content.lines();
    let label = match lines.next() {
        Some(first) => first.trim().to_string(),
        None => return Err("telemetry file is empty".into()),
    };
    if label.is_empty() {
        return Err("telemetry file has an empty label line".into());
    }

    let mut data_lines: Vec<&str> = lines.collect();
    let is_angle = ANGLE_LABELS.contains(&label.as_str());
    if is_angle {
        let keep = data_lines.len().saturating_sub(TRAILING_SAMPLES_TRIMMED);
        data_lines.truncate(keep);
    }

    let expected_columns = if is_angle { 2 } else { 4 };
    let rows = parse_numeric_rows(&data_lines, expected_columns);

    if is_angle {
        let mut series = Series::new();
        for row in &rows {
            series.push(row[0], row[1]);
        }
        Ok(TelemetryLog::Angle { label, series })
    } else {
        let mut components: [Series; 3] = Default::default();
        for row in &rows {
            for (component, series) in components.iter_mut().enumerate() {
                series.push(row[0], row[1 + component]);
            }
        }
        Ok(TelemetryLog::Position { label, components })
    }
}

/// Runs the collected data lines through a CSV reader configured for the
/// writers' single-space format, reporting and skipping every row that does
/// not carry exactly `expected_columns` parseable numbers.
fn parse_numeric_rows(data_lines: &[&str], expected_columns: usize) -> Vec<Vec<f64>> {
    let csv_content = data_lines.join("\n");
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b' ')
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(csv_content.as_bytes());

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (row_index, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                // Runs of spaces show up as empty fields; ignore them.
                let fields: Vec<&str> = record.iter().filter(|field| !field.is_empty()).collect();
                if fields.is_empty() {
                    continue;
                }
                if fields.len() != expected_columns {
                    eprintln!(
                        "Warning: Skipping row {}: expected {} columns, found {}",
                        row_index + 1,
                        expected_columns,
                        fields.len()
                    );
                    continue;
                }

                let parsed: Vec<f64> = fields
                    .iter()
                    .filter_map(|field| field.parse::<f64>().ok())
                    .collect();
                if parsed.len() != expected_columns {
                    eprintln!(
                        "Warning: Skipping row {} due to non-numeric field",
                        row_index + 1
                    );
                    continue;
                }
                rows.push(parsed);
            }
            Err(e) => {
                eprintln!(
                    "Warning: Skipping row {} due to read error: {}",
                    row_index + 1,
                    e
                );
            }
        }
    }
    rows
}
