use crate::graph::traits::util::{build_graph, triangle};
use crate::plot::route::assemble_route_line;
use crate::plot::{plot_graph, plot_graph_route, save_and_show, FileFormat, Layer, PlotError, PlotOptions, RouteStyle};
use crate::primitive::{NodeId, Segment};

use geo::{coord, LineString};
use wkt::ToWkt;

fn overlay_line(figure: &crate::plot::Figure) -> &LineString {
    match figure.axes().layers().last() {
        Some(Layer::Polyline { line, .. }) => line,
        other => panic!("expected a polyline overlay, found {other:?}"),
    }
}

#[test]
fn base_graph_renders_edges_beneath_nodes() {
    let graph = triangle();
    let figure = plot_graph(&graph, &PlotOptions::default()).expect("triangle must plot");

    // Six segment layers, one marker layer on top.
    let layers = figure.axes().layers();
    assert_eq!(layers.len(), 7);
    assert!(matches!(layers.last(), Some(Layer::Markers { points, .. }) if points.len() == 3));

    let extent = figure.axes().extent();
    assert!(extent.min().x < 0.0 && extent.max().x > 1.0);
    assert!(extent.min().y < 0.0 && extent.max().y > 1.0);
}

#[test]
fn empty_graph_cannot_be_plotted() {
    let graph = build_graph(&[], &[]);
    let result = plot_graph(&graph, &PlotOptions::default());
    assert_eq!(result.err(), Some(PlotError::EmptyGraph));
}

#[test]
fn straight_route_follows_node_positions() {
    let graph = triangle();

    let line = assemble_route_line(&graph, &[NodeId(1), NodeId(2), NodeId(3)])
        .expect("triangle route must assemble");
    println!("{}", line.wkt_string());

    // Seeded with the first node, then each segment contributes both
    // endpoints, closing back to the start.
    let expected = LineString::new(vec![
        coord! { x: 0.0, y: 0.0 },
        coord! { x: 0.0, y: 0.0 },
        coord! { x: 1.0, y: 0.0 },
        coord! { x: 1.0, y: 0.0 },
        coord! { x: 0.0, y: 1.0 },
        coord! { x: 0.0, y: 1.0 },
        coord! { x: 0.0, y: 0.0 },
    ]);

    assert_eq!(line, expected);
}

#[test]
fn flipped_geometry_is_appended_reversed() {
    let mut graph = build_graph(
        &[(1, 0.0, 0.0), (2, 2.0, 0.0), (3, 1.0, 1.0)],
        &[(2, 3, 1000.0), (3, 1, 1000.0)],
    );

    // Digitised from node 2 back to node 1, against the traversal.
    let geometry = LineString::new(vec![
        coord! { x: 2.0, y: 0.0 },
        coord! { x: 1.0, y: 0.5 },
        coord! { x: 0.0, y: 0.0 },
    ]);
    graph
        .add_segment(NodeId(1), NodeId(2), Segment::with_geometry(1000.0, geometry))
        .expect("endpoints exist");

    let line = assemble_route_line(&graph, &[NodeId(1), NodeId(2), NodeId(3)])
        .expect("route must assemble");

    let expected = LineString::new(vec![
        coord! { x: 0.0, y: 0.0 },
        // geometry, reversed to continue from the seed
        coord! { x: 0.0, y: 0.0 },
        coord! { x: 1.0, y: 0.5 },
        coord! { x: 2.0, y: 0.0 },
        // straight 2 -> 3 and 3 -> 1
        coord! { x: 2.0, y: 0.0 },
        coord! { x: 1.0, y: 1.0 },
        coord! { x: 1.0, y: 1.0 },
        coord! { x: 0.0, y: 0.0 },
    ]);
    assert_eq!(line, expected);

    // Continuity: every coordinate chunk starts where the last one ended.
    for window in line.0.windows(2) {
        let jump = ((window[1].x - window[0].x).powi(2) + (window[1].y - window[0].y).powi(2)).sqrt();
        assert!(jump <= f64::sqrt(2.0), "discontinuous polyline at {window:?}");
    }
}

#[test]
fn aligned_geometry_is_appended_as_is() {
    let mut graph = build_graph(
        &[(1, 0.0, 0.0), (2, 2.0, 0.0), (3, 1.0, 1.0)],
        &[(2, 3, 1000.0), (3, 1, 1000.0)],
    );

    let geometry = LineString::new(vec![
        coord! { x: 0.0, y: 0.0 },
        coord! { x: 1.0, y: 0.5 },
        coord! { x: 2.0, y: 0.0 },
    ]);
    graph
        .add_segment(NodeId(1), NodeId(2), Segment::with_geometry(1000.0, geometry.clone()))
        .expect("endpoints exist");

    let line = assemble_route_line(&graph, &[NodeId(1), NodeId(2), NodeId(3)])
        .expect("route must assemble");

    assert_eq!(&line.0[1..4], &geometry.0[..]);
}

#[test]
fn overlay_lookup_accepts_either_direction() {
    // Only the 2 -> 1 segment exists; measurement rejects this route
    // while the overlay resolves it through the reverse direction.
    let graph = build_graph(&[(1, 0.0, 0.0), (2, 1.0, 0.0)], &[(2, 1, 1000.0)]);

    let line =
        assemble_route_line(&graph, &[NodeId(1), NodeId(2)]).expect("overlay must assemble");
    assert_eq!(line.0.len(), 5);

    use crate::graph::Measure;
    assert!(graph.route_length(&[NodeId(1), NodeId(2)]).is_err());
}

#[test]
fn missing_edge_in_both_directions_fails() {
    let graph = build_graph(&[(1, 0.0, 0.0), (2, 1.0, 0.0), (3, 2.0, 0.0)], &[]);

    let result = assemble_route_line(&graph, &[NodeId(1), NodeId(3)]);
    assert_eq!(
        result.err(),
        Some(PlotError::MissingEdge {
            source: 1,
            target: 3
        })
    );
}

#[test]
fn empty_route_cannot_be_overlaid() {
    let graph = triangle();
    let result = plot_graph_route(
        &graph,
        &[],
        &RouteStyle::default(),
        None,
        &PlotOptions::default(),
    );
    assert_eq!(result.err(), Some(PlotError::EmptyRoute));
}

#[test]
fn supplied_figure_skips_the_base_render() {
    let graph = triangle();
    let options = PlotOptions::default();

    let base = plot_graph(&graph, &options).expect("triangle must plot");
    let base_layers = base.axes().layers().to_vec();

    let figure = plot_graph_route(
        &graph,
        &[NodeId(1), NodeId(2), NodeId(3)],
        &RouteStyle::default(),
        Some(base),
        &options,
    )
    .expect("route must overlay");

    // Exactly one new layer; the base graph was not drawn again.
    assert_eq!(figure.axes().layers().len(), base_layers.len() + 1);
    assert_eq!(&figure.axes().layers()[..base_layers.len()], &base_layers[..]);
    assert_eq!(overlay_line(&figure).0.len(), 7);
}

#[test_log::test]
fn saving_writes_a_non_empty_svg() {
    let graph = triangle();
    let filepath = std::env::temp_dir().join("routers_overlay_route.svg");

    let options = PlotOptions {
        save: true,
        filepath: filepath.clone(),
        file_format: FileFormat::Svg,
        ..PlotOptions::default()
    };

    plot_graph_route(
        &graph,
        &[NodeId(1), NodeId(2), NodeId(3)],
        &RouteStyle::default(),
        None,
        &options,
    )
    .expect("route must save");

    let written = std::fs::metadata(&filepath).expect("file must exist");
    assert!(written.len() > 0);

    std::fs::remove_file(&filepath).ok();
}

#[test]
fn closing_clears_the_figure() {
    let graph = triangle();
    let options = PlotOptions {
        close: true,
        ..PlotOptions::default()
    };

    let figure = plot_graph(&graph, &PlotOptions::default())
        .and_then(|figure| save_and_show(figure, &options))
        .expect("figure must close");

    assert!(figure.axes().layers().is_empty());
}
