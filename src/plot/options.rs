use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Image format written by [save_and_show](crate::plot::save_and_show).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileFormat {
    Png,
    Svg,
}

/// Styling of a route overlay polyline.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RouteStyle {
    pub color: RGBColor,
    pub linewidth: u32,
    pub alpha: f64,
}

impl Default for RouteStyle {
    fn default() -> Self {
        RouteStyle {
            color: RGBColor(255, 0, 0),
            linewidth: 4,
            alpha: 0.5,
        }
    }
}

/// Display, styling and output options forwarded through the plotting
/// functions.
///
/// `save`, `show` and `close` only take effect in
/// [save_and_show](crate::plot::save_and_show); base-graph rendering via
/// [plot_graph](crate::plot::plot_graph) never touches the filesystem.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    /// Figure width and height, in inches.
    pub figsize: (f64, f64),
    pub dpi: u32,

    /// Padding applied around the graph extent, as a fraction of its span.
    pub margin: f64,

    pub bgcolor: RGBColor,
    pub node_color: RGBColor,
    pub node_size: i32,
    pub edge_color: RGBColor,
    pub edge_linewidth: u32,

    pub save: bool,
    pub show: bool,
    pub close: bool,

    pub filepath: PathBuf,
    pub file_format: FileFormat,
}

impl Default for PlotOptions {
    fn default() -> Self {
        PlotOptions {
            figsize: (8.0, 8.0),
            dpi: 100,
            margin: 0.02,
            bgcolor: RGBColor(17, 17, 17),
            node_color: RGBColor(255, 255, 255),
            node_size: 3,
            edge_color: RGBColor(153, 153, 153),
            edge_linewidth: 1,
            save: false,
            show: false,
            close: false,
            filepath: PathBuf::from("graph.png"),
            file_format: FileFormat::Png,
        }
    }
}
