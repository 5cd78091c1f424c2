use geo::LineString;

/// Edge payload carried between two [Node](crate::primitive::Node)s.
///
/// Parallel segments between the same ordered node pair are distinguished
/// by an insertion-order key on the owning [Graph](crate::graph::Graph);
/// key `0` is the canonical segment for measurement and plotting.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Physical length of the segment, in metres.
    pub length: f64,

    /// Digitised shape of the segment, endpoints included. The digitisation
    /// direction is arbitrary and may oppose the traversal direction.
    /// `None` means a straight line between the two endpoint nodes.
    pub geometry: Option<LineString>,
}

impl Segment {
    /// A straight segment of the given length in metres.
    pub fn new(length: f64) -> Self {
        Segment {
            length,
            geometry: None,
        }
    }

    /// A segment following the given digitised geometry.
    pub fn with_geometry(length: f64, geometry: LineString) -> Self {
        Segment {
            length,
            geometry: Some(geometry),
        }
    }
}
