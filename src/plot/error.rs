use thiserror::Error;

/// Failures raised while assembling or rendering a figure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlotError {
    #[error("route contains no nodes")]
    EmptyRoute,

    #[error("graph contains no nodes to draw")]
    EmptyGraph,

    #[error("no node with identifier {0}")]
    MissingNode(i64),

    #[error("no edge between {source} and {target} in either direction")]
    MissingEdge { r#source: i64, target: i64 },

    #[error("drawing backend failure: {0}")]
    Backend(String),
}
