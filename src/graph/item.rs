use crate::graph::GraphError;
use crate::primitive::{Entry, Node, Segment};

use geo::Point;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use std::fmt::{Debug, Formatter};

/// Geographic directed multigraph.
///
/// Nodes carry their position, segments carry length and optional geometry.
/// Parallel segments between the same ordered node pair are keyed by
/// insertion order; key `0` is the first segment inserted and the canonical
/// one for lookups that do not name a key.
///
/// Measurement and plotting treat the graph as read-only; the mutating API
/// exists only so a caller can supply one.
pub struct Graph<E>
where
    E: Entry,
{
    pub(crate) graph: DiGraph<Node<E>, Segment>,
    pub(crate) hash: FxHashMap<E, NodeIndex>,

    // Ordered parallel-segment table: (source, target) -> edge indices by key.
    pub(crate) parallel: FxHashMap<(E, E), SmallVec<[EdgeIndex; 1]>>,
}

impl<E> Debug for Graph<E>
where
    E: Entry,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Graph with Nodes: {}, Segments: {}",
            self.hash.len(),
            self.graph.edge_count()
        )
    }
}

impl<E> Default for Graph<E>
where
    E: Entry,
{
    fn default() -> Self {
        Graph::new()
    }
}

impl<E> Graph<E>
where
    E: Entry,
{
    pub fn new() -> Self {
        Graph {
            graph: DiGraph::new(),
            hash: FxHashMap::default(),
            parallel: FxHashMap::default(),
        }
    }

    /// Inserts a node, replacing the position of an existing node
    /// with the same identifier.
    pub fn add_node(&mut self, node: Node<E>) {
        match self.hash.get(&node.id) {
            Some(index) => self.graph[*index] = node,
            None => {
                let index = self.graph.add_node(node);
                self.hash.insert(node.id, index);
            }
        }
    }

    /// Inserts a directed segment from `source` to `target`, returning its
    /// parallel key. Both endpoints must already exist.
    pub fn add_segment(
        &mut self,
        source: E,
        target: E,
        segment: Segment,
    ) -> Result<usize, GraphError> {
        let source_index = self.index_of(source)?;
        let target_index = self.index_of(target)?;

        let edge = self.graph.add_edge(source_index, target_index, segment);
        let keys = self.parallel.entry((source, target)).or_default();
        keys.push(edge);

        Ok(keys.len() - 1)
    }

    fn index_of(&self, node: E) -> Result<NodeIndex, GraphError> {
        self.hash
            .get(&node)
            .copied()
            .ok_or(GraphError::MissingNode(node.identifier()))
    }

    pub fn size(&self) -> usize {
        self.hash.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hash.is_empty()
    }

    /// The canonical (key `0`) segment from `source` to `target`,
    /// in that direction only.
    #[inline]
    pub fn edge_data(&self, source: E, target: E) -> Option<&Segment> {
        self.segment(source, target, 0)
    }

    /// The segment with the given parallel key from `source` to `target`.
    pub fn segment(&self, source: E, target: E, key: usize) -> Option<&Segment> {
        self.parallel
            .get(&(source, target))
            .and_then(|keys| keys.get(key))
            .map(|edge| &self.graph[*edge])
    }

    /// Number of parallel segments from `source` to `target`.
    pub fn parallel_count(&self, source: E, target: E) -> usize {
        self.parallel
            .get(&(source, target))
            .map_or(0, |keys| keys.len())
    }

    #[inline]
    pub fn get_position(&self, node_index: &E) -> Option<Point<f64>> {
        self.hash
            .get(node_index)
            .map(|index| self.graph[*index].position)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node<E>> {
        self.graph.node_weights()
    }

    /// All segments with their endpoint nodes, in arbitrary order.
    pub fn segments(&self) -> impl Iterator<Item = (&Node<E>, &Node<E>, &Segment)> {
        self.graph.edge_references().map(|edge| {
            (
                &self.graph[edge.source()],
                &self.graph[edge.target()],
                edge.weight(),
            )
        })
    }
}
