// src/plot_functions/plot_telemetry_overview.rs

use std::error::Error;

use crate::constants::{
    ANNOTATION_OFFSET_FACTOR, COLOR_EXTREMA_ANNOTATION, COLOR_INTERSECTION_ANNOTATION,
    COLOR_SERIES_MAIN, COLOR_ZERO_BASELINE, INTERSECTION_LABEL_TIME_OFFSET_MS,
    INTERSECTION_LABEL_VALUE_OFFSET, LINE_WIDTH_PLOT, Y_AXIS_HEADROOM_FACTOR,
};
use crate::data_analysis::series_analysis::{self, SeriesSummary};
use crate::data_input::telemetry_data::{Series, TelemetryLog};
use crate::plot_framework::{calculate_range, draw_stacked_plot, PlotSeries, PointAnnotation};
use crate::types::ChannelPlotData;

/// Generates the per-file summary chart: one stacked subplot per channel,
/// each with the series line, the zero baseline and the extrema /
/// intersection annotations.
///
/// A channel whose analysis fails (length mismatch, empty series, lookup
/// miss) is reported and gets a placeholder subplot; if no channel survives
/// analysis, no chart file is written at all.
pub fn plot_telemetry_overview(
    telemetry: &TelemetryLog,
    root_name: &str,
) -> Result<(), Box<dyn Error>> {
    let output_file = format!("{root_name}_summary.png");
    let plot_type_name = "Telemetry Summary";

    let channels = telemetry.channels();
    let mut channel_plots: Vec<Option<ChannelPlotData>> = Vec::with_capacity(channels.len());
    for (channel_name, series) in &channels {
        match series_analysis::summarize(series) {
            Ok(summary) => {
                report_summary(channel_name, &summary);
                channel_plots.push(Some(build_channel_plot(
                    telemetry,
                    channel_name,
                    series,
                    &summary,
                )));
            }
            Err(e) => {
                eprintln!("Warning: Skipping the {channel_name} channel: {e}");
                channel_plots.push(None);
            }
        }
    }

    if channel_plots.iter().all(Option::is_none) {
        println!(
            "  Skipping {plot_type_name} plot for '{root_name}': no channel produced a valid summary."
        );
        return Ok(());
    }

    let channel_names: Vec<&str> = channels.iter().map(|(name, _)| name.as_str()).collect();
    draw_stacked_plot(
        &output_file,
        root_name,
        plot_type_name,
        &channel_names,
        move |channel_index| channel_plots[channel_index].take(),
    )
}

fn report_summary(channel_name: &str, summary: &SeriesSummary) {
    println!(
        "  {channel_name}: maximum ({:.2}, {:.2}), minimum ({:.2}, {:.2})",
        summary.max.time, summary.max.value, summary.min.time, summary.min.value
    );
    match summary.intersection {
        Some(sample) => println!(
            "    Intersection Value: ({:.2}, {:.2})",
            sample.time, sample.value
        ),
        None => println!("    No intersection with the zero axis detected."),
    }
}

fn build_channel_plot(
    telemetry: &TelemetryLog,
    channel_name: &str,
    series: &Series,
    summary: &SeriesSummary,
) -> ChannelPlotData {
    let series_data: Vec<(f64, f64)> = series.iter().map(|s| (s.time, s.value)).collect();

    let mut time_min = f64::INFINITY;
    let mut time_max = f64::NEG_INFINITY;
    for &(time, _) in &series_data {
        time_min = time_min.min(time);
        time_max = time_max.max(time);
    }

    // Zero baseline from t = 0 to the rounded last timestamp, the reference
    // the series is compared against.
    let baseline_end = time_max.round();
    let baseline = vec![(0.0, 0.0), (baseline_end, 0.0)];

    let x_lo = time_min.min(0.0);
    let x_hi = time_max.max(baseline_end);
    let (x_lo, x_hi) = if x_hi > x_lo {
        (x_lo, x_hi)
    } else {
        calculate_range(x_lo, x_hi)
    };

    // The Y window spans +/- twice the series maximum; a window that
    // collapses (non-positive maximum) falls back to padded data bounds.
    let y_hi = Y_AXIS_HEADROOM_FACTOR * summary.max.value;
    let y_lo = -y_hi;
    let (y_lo, y_hi) = if y_hi > y_lo {
        (y_lo, y_hi)
    } else {
        calculate_range(summary.min.value, summary.max.value)
    };

    let label_offset = summary.max.value * ANNOTATION_OFFSET_FACTOR;
    let mut annotations = vec![
        PointAnnotation {
            label: format!(
                "maximum: ({:.2}, {:.2})",
                summary.max.time, summary.max.value
            ),
            at: (summary.max.time, summary.max.value),
            text_at: (summary.max.time, summary.max.value + label_offset),
            color: *COLOR_EXTREMA_ANNOTATION,
        },
        PointAnnotation {
            label: format!(
                "minimum: ({:.2}, {:.2})",
                summary.min.time, summary.min.value
            ),
            at: (summary.min.time, summary.min.value),
            text_at: (summary.min.time, summary.min.value - label_offset),
            color: *COLOR_EXTREMA_ANNOTATION,
        },
    ];
    if let Some(intersection) = summary.intersection {
        annotations.push(PointAnnotation {
            label: format!(
                "Intersection Value: ({:.2}, {:.2})",
                intersection.time, intersection.value
            ),
            at: (intersection.time, intersection.value),
            text_at: (
                intersection.time + INTERSECTION_LABEL_TIME_OFFSET_MS,
                intersection.value + INTERSECTION_LABEL_VALUE_OFFSET,
            ),
            color: *COLOR_INTERSECTION_ANNOTATION,
        });
    }

    let (chart_title, series_label, y_label) = match telemetry {
        TelemetryLog::Angle { label, .. } => (
            label.clone(),
            format!("Δ {label}"),
            format!("Δ {label} [radians]"),
        ),
        TelemetryLog::Position { label, .. } => (
            format!("{label} Position {channel_name}"),
            format!("{channel_name} position"),
            format!("{channel_name} [meters]"),
        ),
    };

    let plot_series = vec![
        PlotSeries {
            data: series_data,
            label: series_label,
            color: *COLOR_SERIES_MAIN,
            stroke_width: LINE_WIDTH_PLOT,
        },
        PlotSeries {
            data: baseline,
            label: "Zero reference".to_string(),
            color: *COLOR_ZERO_BASELINE,
            stroke_width: LINE_WIDTH_PLOT,
        },
    ];

    (
        chart_title,
        x_lo..x_hi,
        y_lo..y_hi,
        plot_series,
        annotations,
        "Time [milliseconds]".to_string(),
        y_label,
    )
}
