// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::{BLUEGREY, LIGHTBLUE, ORANGE, PURPLE};
use plotters::style::RGBColor;

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1080;

// Fixed input filename the testbed writers produce when no arguments are given.
pub const DEFAULT_INPUT_FILE: &str = "invoer.txt";

// Number of trailing samples of an angle log that are dropped before parsing.
// The testbed keeps logging while the simulation winds down, so the tail of
// the file holds unreliable values.
pub const TRAILING_SAMPLES_TRIMMED: usize = 10;

// The summary charts clamp the Y axis to this multiple of the series maximum.
pub const Y_AXIS_HEADROOM_FACTOR: f64 = 2.0;

// Annotation label placement, relative to the annotated sample. Extremum
// labels sit a fraction of the series maximum above (or below) the marker;
// the intersection label sits slightly up and to the right.
pub const ANNOTATION_OFFSET_FACTOR: f64 = 0.2;
pub const INTERSECTION_LABEL_TIME_OFFSET_MS: f64 = 200.0;
pub const INTERSECTION_LABEL_VALUE_OFFSET: f64 = 0.01;
pub const ANNOTATION_MARKER_RADIUS: i32 = 4;

// --- Plot Color Assignments ---
pub const COLOR_SERIES_MAIN: &RGBColor = &LIGHTBLUE;
pub const COLOR_ZERO_BASELINE: &RGBColor = &BLUEGREY;
pub const COLOR_EXTREMA_ANNOTATION: &RGBColor = &ORANGE;
pub const COLOR_INTERSECTION_ANNOTATION: &RGBColor = &PURPLE;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// --- Font Sizes ---
pub const FONT_SIZE_MAIN_TITLE: i32 = 30;
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 12;
pub const FONT_SIZE_LEGEND: i32 = 12;
pub const FONT_SIZE_MESSAGE: i32 = 20;
pub const FONT_SIZE_ANNOTATION: i32 = 14;

// src/constants.rs
