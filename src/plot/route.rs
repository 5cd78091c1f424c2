use crate::graph::Graph;
use crate::plot::figure::Figure;
use crate::plot::options::{PlotOptions, RouteStyle};
use crate::plot::render::save_and_show;
use crate::plot::PlotError;
use crate::primitive::Entry;

use geo::{Coord, LineString, Rect};
use itertools::Itertools;
use log::debug;

/// Renders the base graph into a fresh [Figure]: one polyline layer per
/// segment (its geometry where digitised, else a straight line between the
/// endpoints) beneath a single marker layer for the nodes.
///
/// Purely in-memory; saving or displaying is deferred to
/// [save_and_show].
pub fn plot_graph<E>(graph: &Graph<E>, options: &PlotOptions) -> Result<Figure, PlotError>
where
    E: Entry,
{
    let extent = graph_extent(graph, options.margin)?;
    let mut figure = Figure::new(options.figsize, options.dpi, options.bgcolor, extent);

    debug!("Plotting {graph:?} over {extent:?}");

    for (source, target, segment) in graph.segments() {
        let line = match &segment.geometry {
            Some(geometry) => geometry.clone(),
            None => LineString::from(vec![source.position, target.position]),
        };

        figure
            .axes_mut()
            .polyline(line, options.edge_color, options.edge_linewidth, 1.0);
    }

    let positions = graph.nodes().map(|node| node.position).collect();
    figure
        .axes_mut()
        .markers(positions, options.node_color, options.node_size);

    Ok(figure)
}

/// Draws `route` as a closed overlay polyline on top of the graph.
///
/// Without an existing figure the base graph is rendered first via
/// [plot_graph]; a supplied figure is reused as-is, with no second base
/// render. The result is then passed through [save_and_show], honouring
/// the `save`/`show`/`close` options.
pub fn plot_graph_route<E>(
    graph: &Graph<E>,
    route: &[E],
    style: &RouteStyle,
    figure: Option<Figure>,
    options: &PlotOptions,
) -> Result<Figure, PlotError>
where
    E: Entry,
{
    let mut figure = match figure {
        Some(figure) => figure,
        None => plot_graph(graph, options)?,
    };

    let line = assemble_route_line(graph, route)?;
    figure
        .axes_mut()
        .polyline(line, style.color, style.linewidth, style.alpha);

    save_and_show(figure, options)
}

/// Walks the closed route and assembles its polyline coordinates.
///
/// Edge data is looked up as (target, source) first and (source, target)
/// second, so overlays follow segments digitised against the traversal
/// direction. Segment geometry is appended whole, reversed when its first
/// coordinate does not continue the running polyline; segments without
/// geometry contribute the two endpoint positions in traversal order.
pub(crate) fn assemble_route_line<E>(
    graph: &Graph<E>,
    route: &[E],
) -> Result<LineString, PlotError>
where
    E: Entry,
{
    let first = route.first().ok_or(PlotError::EmptyRoute)?;
    let start = graph
        .get_position(first)
        .ok_or(PlotError::MissingNode(first.identifier()))?;

    let mut coords: Vec<Coord> = vec![start.into()];
    let mut tail: Coord = start.into();

    for (u, v) in route.iter().copied().circular_tuple_windows() {
        let segment = graph
            .edge_data(v, u)
            .or_else(|| graph.edge_data(u, v))
            .ok_or(PlotError::MissingEdge {
                source: u.identifier(),
                target: v.identifier(),
            })?;

        match &segment.geometry {
            Some(geometry) => {
                // Revert the geometry if it was digitised the other way.
                if geometry.0.first() != Some(&tail) {
                    coords.extend(geometry.0.iter().rev());
                } else {
                    coords.extend(geometry.0.iter());
                }
            }
            None => {
                let from = graph
                    .get_position(&u)
                    .ok_or(PlotError::MissingNode(u.identifier()))?;
                let to = graph
                    .get_position(&v)
                    .ok_or(PlotError::MissingNode(v.identifier()))?;

                coords.push(from.into());
                coords.push(to.into());
            }
        }

        if let Some(last) = coords.last() {
            tail = *last;
        }
    }

    Ok(LineString::new(coords))
}

/// Bounding extent of every node position and digitised coordinate,
/// padded by `margin` of the span on each side.
fn graph_extent<E>(graph: &Graph<E>, margin: f64) -> Result<Rect, PlotError>
where
    E: Entry,
{
    if graph.is_empty() {
        return Err(PlotError::EmptyGraph);
    }

    let mut min = Coord {
        x: f64::INFINITY,
        y: f64::INFINITY,
    };
    let mut max = Coord {
        x: f64::NEG_INFINITY,
        y: f64::NEG_INFINITY,
    };

    let mut expand = |coord: Coord| {
        min.x = min.x.min(coord.x);
        min.y = min.y.min(coord.y);
        max.x = max.x.max(coord.x);
        max.y = max.y.max(coord.y);
    };

    for node in graph.nodes() {
        expand(node.position.into());
    }

    for (_, _, segment) in graph.segments() {
        if let Some(geometry) = &segment.geometry {
            for coord in geometry.coords() {
                expand(*coord);
            }
        }
    }

    // Degenerate spans still need a drawable window.
    let pad = |span: f64| if span == 0.0 { 0.01 } else { span * margin };
    let padding = Coord {
        x: pad(max.x - min.x),
        y: pad(max.y - min.y),
    };

    Ok(Rect::new(min - padding, max + padding))
}
