// src/types.rs
// Type aliases shared between the plot functions and the plot framework

use std::ops::Range;

use crate::plot_framework::{PlotSeries, PointAnnotation};

/// Payload one channel's closure hands back to `draw_stacked_plot`.
pub type ChannelPlotData = (
    String,               // title
    Range<f64>,           // x_range
    Range<f64>,           // y_range
    Vec<PlotSeries>,      // series
    Vec<PointAnnotation>, // annotations
    String,               // x_label
    String,               // y_label
);
