use crate::graph::GraphError;
use crate::primitive::Entry;

pub trait Measure<E>
where
    E: Entry,
{
    /// Total length of the route in kilometres, treating it as a closed
    /// cycle (the last node connects back to the first).
    ///
    /// Each consecutive pair must have a segment in the traversal
    /// direction; the reverse direction is never consulted. Parallel
    /// segments resolve to key `0`.
    fn route_length(&self, route: &[E]) -> Result<f64, GraphError>;

    /// The longest of the given candidate cycles, with its length in
    /// kilometres.
    ///
    /// Ties keep the earliest candidate. An empty candidate set yields
    /// `(vec![], 0.0)` rather than an error.
    fn longest_route(&self, cycles: &[Vec<E>]) -> Result<(Vec<E>, f64), GraphError>;
}
