// src/plot_framework.rs

use plotters::backend::{BitMapBackend, DrawingBackend};
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::Circle;
use plotters::element::PathElement;
use plotters::element::Text;
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;

use crate::constants::{
    ANNOTATION_MARKER_RADIUS, FONT_SIZE_ANNOTATION, FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE,
    FONT_SIZE_LEGEND, FONT_SIZE_MAIN_TITLE, FONT_SIZE_MESSAGE, LINE_WIDTH_LEGEND, PLOT_HEIGHT,
    PLOT_WIDTH,
};
use crate::types::ChannelPlotData;

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    channel_name: &str,
    plot_type: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    // Constants for text rendering
    const CHAR_WIDTH_RATIO: f32 = 0.6; // Approximate character width relative to font size
    const LINE_HEIGHT_SPACING: i32 = 4; // Additional spacing between lines

    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (
        (x_range.end - x_range.start) as u32,
        (y_range.end - y_range.start) as u32,
    );
    let message = format!("{channel_name} {plot_type} Data Unavailable:\n{reason}");

    // Estimate text dimensions for better centering
    let estimated_char_width = (FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;
    let estimated_line_height = FONT_SIZE_MESSAGE + LINE_HEIGHT_SPACING;

    // Find the longest line to estimate width
    let lines: Vec<&str> = message.split('\n').collect();
    let max_line_length = lines.iter().map(|line| line.len()).max().unwrap_or(0);
    let estimated_text_width = max_line_length.saturating_mul(estimated_char_width as usize) as i32;
    let estimated_text_height = lines.len().saturating_mul(estimated_line_height as usize) as i32;

    // Calculate center position with better offset estimation
    let center_x = width as i32 / 2 - estimated_text_width / 2;
    let center_y = height as i32 / 2 - estimated_text_height / 2;

    let text_style = ("sans-serif", FONT_SIZE_MESSAGE).into_font().color(&RED);
    area.draw(&Text::new(message, (center_x, center_y), text_style))?;
    Ok(())
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

/// A labelled point called out on a chart (an extremum or the detected
/// intersection): a marker at the sample plus a text label anchored nearby.
#[derive(Clone)]
pub struct PointAnnotation {
    pub label: String,
    pub at: (f64, f64),
    pub text_at: (f64, f64),
    pub color: RGBColor,
}

/// Draws a single channel chart: mesh, series lines, legend and point
/// annotations.
fn draw_single_channel_chart(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    chart_title: &str,
    x_range: std::ops::Range<f64>,
    y_range: std::ops::Range<f64>,
    series: &[PlotSeries],
    annotations: &[PointAnnotation],
    x_label: &str,
    y_label: &str,
) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption(chart_title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .x_labels(10)
        .y_labels(5)
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    let mut legend_series_count = 0;
    for s in series {
        if s.data.is_empty() {
            continue;
        }
        let color = s.color;
        let drawn = chart.draw_series(LineSeries::new(
            s.data.iter().cloned(),
            color.stroke_width(s.stroke_width),
        ))?;
        if !s.label.is_empty() {
            drawn.label(&s.label).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH_LEGEND))
            });
            legend_series_count += 1;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", FONT_SIZE_LEGEND))
            .draw()?;
    }

    // Point annotations: a filled marker at the sample, label text anchored
    // at the offset position chosen by the plot function.
    for annotation in annotations {
        chart.draw_series(std::iter::once(Circle::new(
            annotation.at,
            ANNOTATION_MARKER_RADIUS,
            annotation.color.filled(),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            annotation.label.clone(),
            annotation.text_at,
            ("sans-serif", FONT_SIZE_ANNOTATION)
                .into_font()
                .color(&BLACK),
        )))?;
    }

    Ok(())
}

/// Renders one chart file with a vertically stacked subplot per channel.
/// The closure yields the plot payload for each channel index, or None when
/// that channel has nothing plottable (a placeholder is drawn instead).
pub fn draw_stacked_plot<'a, F>(
    output_filename: &'a str,
    root_name: &str,
    plot_type_name: &str,
    channel_names: &[&str],
    mut get_channel_plot_data: F,
) -> Result<(), Box<dyn Error>>
where
    F: FnMut(usize) -> Option<ChannelPlotData>,
    <BitMapBackend<'a> as DrawingBackend>::ErrorType: 'static,
{
    let root_area =
        BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name.to_string(),
        (10, 10),
        ("sans-serif", FONT_SIZE_MAIN_TITLE)
            .into_font()
            .color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(50, 5, 5, 5);
    let sub_plot_areas = margined_root_area.split_evenly((channel_names.len(), 1));

    for (channel_index, channel_name) in channel_names.iter().enumerate() {
        let area = &sub_plot_areas[channel_index];
        match get_channel_plot_data(channel_index) {
            Some((chart_title, x_range, y_range, series, annotations, x_label, y_label))
                if series.iter().any(|s| !s.data.is_empty()) =>
            {
                draw_single_channel_chart(
                    area,
                    &chart_title,
                    x_range,
                    y_range,
                    &series,
                    &annotations,
                    &x_label,
                    &y_label,
                )?;
            }
            _ => {
                println!(
                    "  INFO: No {plot_type_name} data available for the {channel_name} channel. Drawing placeholder."
                );
                draw_unavailable_message(area, channel_name, plot_type_name, "Data Missing/Invalid")?;
            }
        }
    }

    root_area.present()?;
    println!("  Stacked {plot_type_name} plot saved as '{output_filename}'.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_range_pads_by_fifteen_percent() {
        let (lo, hi) = calculate_range(0.0, 10.0);
        assert!((lo - -1.5).abs() < 1e-9);
        assert!((hi - 11.5).abs() < 1e-9);
    }

    #[test]
    fn test_calculate_range_handles_degenerate_span() {
        let (lo, hi) = calculate_range(2.0, 2.0);
        assert!((lo - 1.5).abs() < 1e-9);
        assert!((hi - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_calculate_range_swaps_reversed_bounds() {
        let (lo, hi) = calculate_range(5.0, -5.0);
        assert!(lo < -5.0 && hi > 5.0);
    }
}
