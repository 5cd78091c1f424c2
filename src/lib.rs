#![doc = include_str!("../README.md")]

pub mod graph;
pub mod plot;
pub mod primitive;
pub mod util;

pub use graph::{Graph, GraphError, Measure};
pub use plot::{
    plot_graph, plot_graph_route, save_and_show, Axes, Figure, FileFormat, Layer, PlotError,
    PlotOptions, RouteStyle,
};
pub use primitive::{Entry, Node, NodeId, Segment};

use thiserror::Error;

/// Top-level error, aggregating each submodule's failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("graph error: {0}")]
    Graph(GraphError),

    #[error("plot error: {0}")]
    Plot(PlotError),
}

crate::impl_err!(GraphError, Graph);
crate::impl_err!(PlotError, Plot);
