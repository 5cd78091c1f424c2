use std::fmt::Debug;
use std::hash::Hash;

pub mod node;
pub mod segment;

pub use node::{Node, NodeId};
pub use segment::Segment;

/// Identifier of a graph node.
///
/// Implementors are cheap to copy and hash; the numeric
/// [identifier](Entry::identifier) is used when reporting the node in
/// errors and logs.
pub trait Entry:
    Default + Copy + Clone + PartialEq + Eq + Ord + Hash + Debug + Send + Sync
{
    fn identifier(&self) -> i64;
}
