use crate::graph::traits::measure::definition::Measure;
use crate::graph::{Graph, GraphError};
use crate::primitive::Entry;

use itertools::Itertools;
use log::debug;

impl<E> Measure<E> for Graph<E>
where
    E: Entry,
{
    fn route_length(&self, route: &[E]) -> Result<f64, GraphError> {
        if route.is_empty() {
            return Err(GraphError::EmptyRoute);
        }

        let mut total = 0.0;
        for (u, v) in route.iter().copied().circular_tuple_windows() {
            let segment = self.edge_data(u, v).ok_or(GraphError::MissingEdge {
                source: u.identifier(),
                target: v.identifier(),
            })?;

            total += segment.length;
        }

        Ok(total / 1000.0)
    }

    fn longest_route(&self, cycles: &[Vec<E>]) -> Result<(Vec<E>, f64), GraphError> {
        debug!("Measuring {} candidate cycles", cycles.len());

        let mut longest: (Option<&Vec<E>>, f64) = (None, 0.0);
        for cycle in cycles {
            let length = self.route_length(cycle)?;

            // Strictly-greater keeps the earliest of equal candidates.
            if longest.1 < length {
                longest = (Some(cycle), length);
            }
        }

        Ok((longest.0.cloned().unwrap_or_default(), longest.1))
    }
}
