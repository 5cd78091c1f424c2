use geo::Point;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::primitive::Entry;

/// The standardised node primitive containing a generic
/// identifier which must implement [Entry], and a given [Point]
/// position (x = longitude, y = latitude).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Node<E>
where
    E: Entry,
{
    pub id: E,
    pub position: Point,
}

impl<E> Node<E>
where
    E: Entry,
{
    /// Constructs a `Node` from a given position and `id`.
    pub fn new(position: Point, id: E) -> Self {
        Self { id, position }
    }
}

/// Plain numeric node identifier, sufficient for graphs keyed by
/// OSM node ids or any other `i64` namespace.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct NodeId(pub i64);

impl NodeId {
    pub const fn new(id: i64) -> NodeId {
        NodeId(id)
    }
}

impl Entry for NodeId {
    #[inline]
    fn identifier(&self) -> i64 {
        self.0
    }
}

impl From<i64> for NodeId {
    fn from(value: i64) -> Self {
        NodeId(value)
    }
}
