pub mod error;
pub mod figure;
pub mod options;
pub mod render;
pub mod route;
#[cfg(test)]
mod test;

pub use error::PlotError;
pub use figure::{Axes, Figure, Layer};
pub use options::{FileFormat, PlotOptions, RouteStyle};
pub use render::save_and_show;
pub use route::{plot_graph, plot_graph_route};
