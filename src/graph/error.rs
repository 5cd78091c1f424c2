use thiserror::Error;

/// Failures raised by graph construction and measurement.
///
/// Nodes are reported through
/// [Entry::identifier](crate::primitive::Entry::identifier).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("no node with identifier {0}")]
    MissingNode(i64),

    #[error("no edge from {source} to {target}")]
    MissingEdge { r#source: i64, target: i64 },

    #[error("route contains no nodes")]
    EmptyRoute,
}
