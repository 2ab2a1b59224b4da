//! Navigation Tests
//!
//! Zoom clamping and anchoring, pan linearity, fit-to-content and drag
//! application.

use crate::helpers::{TestGraphBuilder, assert_close, id_set};
use nodeboard::constants::{MAX_ZOOM, MIN_ZOOM};
use nodeboard::error::InteractionError;
use nodeboard::geometry::{canvas_to_screen, screen_to_canvas, viewport_bounds};
use nodeboard::navigation::{
    apply_drag_to_nodes, calculate_drag_delta, fit_viewport, pan_viewport, wheel_zoom_factor,
    zoom_about_center, zoom_viewport,
};
use nodeboard::types::{Node, Viewport};

fn viewport() -> Viewport {
    Viewport::new(25.0, -40.0, 1.5, 800.0, 600.0).unwrap()
}

// ============================================================================
// Zoom
// ============================================================================

#[test]
fn test_zoom_always_clamped() {
    let v = viewport();
    for factor in [1e-6, 0.01, 0.5, 1.0, 3.0, 100.0, 1e6] {
        let zoomed = zoom_viewport(&v, factor, 400.0, 300.0).unwrap();
        assert!(zoomed.zoom >= MIN_ZOOM && zoomed.zoom <= MAX_ZOOM, "factor {factor}");
    }
}

#[test]
fn test_zoom_keeps_anchor_fixed() {
    let v = viewport();
    let anchors = [(0.0, 0.0), (123.0, 456.0), (800.0, 600.0)];
    for (sx, sy) in anchors {
        for factor in [0.5, 1.1, 2.0] {
            let before = screen_to_canvas(&v, sx, sy);
            let zoomed = zoom_viewport(&v, factor, sx, sy).unwrap();
            let after = canvas_to_screen(&zoomed, before.x, before.y);
            assert_close(after.x, sx);
            assert_close(after.y, sy);
        }
    }
}

#[test]
fn test_zoom_rejects_bad_factors() {
    let v = viewport();
    for factor in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        let err = zoom_viewport(&v, factor, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, InteractionError::InvalidZoomFactor(_)));
    }
}

#[test]
fn test_zoom_about_center_keeps_centre() {
    let v = viewport();
    let before = screen_to_canvas(&v, 400.0, 300.0);
    let zoomed = zoom_about_center(&v, 1.2).unwrap();
    let after = screen_to_canvas(&zoomed, 400.0, 300.0);
    assert_close(after.x, before.x);
    assert_close(after.y, before.y);
}

#[test]
fn test_wheel_factor_direction() {
    assert!(wheel_zoom_factor(120.0) < 1.0);
    assert!(wheel_zoom_factor(-120.0) > 1.0);
    assert_close(wheel_zoom_factor(0.0), 1.0);
}

// ============================================================================
// Pan
// ============================================================================

#[test]
fn test_pan_is_linear() {
    let v = viewport();
    let once = pan_viewport(&v, 30.0, -12.0);
    let twice = pan_viewport(&pan_viewport(&v, 10.0, -4.0), 20.0, -8.0);
    assert_close(once.x, twice.x);
    assert_close(once.y, twice.y);

    let back = pan_viewport(&once, -30.0, 12.0);
    assert_close(back.x, v.x);
    assert_close(back.y, v.y);
    assert_eq!(back.zoom, v.zoom);
}

// ============================================================================
// Fit
// ============================================================================

#[test]
fn test_fit_scenario_two_nodes() {
    let graph = TestGraphBuilder::new()
        .with_node("a", (0.0, 0.0))
        .with_node("b", (300.0, 300.0))
        .build();
    let fitted = fit_viewport(&Viewport::with_size(800.0, 600.0).unwrap(), &graph.nodes);

    assert!(fitted.zoom <= 1.0);
    assert_close(fitted.x, -50.0);
    assert_close(fitted.y, -50.0);
}

#[test]
fn test_fit_shows_every_node() {
    let graph = TestGraphBuilder::new()
        .with_node("a", (-500.0, 200.0))
        .with_sized_node("b", (900.0, -300.0), (300.0, 40.0))
        .with_node("c", (0.0, 1200.0))
        .build();
    let fitted = fit_viewport(&Viewport::with_size(640.0, 480.0).unwrap(), &graph.nodes);
    let visible = viewport_bounds(&fitted);

    for n in &graph.nodes {
        assert!(n.x >= visible.x - 1e-3 && n.y >= visible.y - 1e-3, "{}", n.id);
        assert!(n.x + n.width <= visible.x + visible.width + 1e-3, "{}", n.id);
        assert!(n.y + n.height <= visible.y + visible.height + 1e-3, "{}", n.id);
    }
    assert!(fitted.zoom < 1.0);
}

#[test]
fn test_fit_never_magnifies() {
    let graph = TestGraphBuilder::new().with_sized_node("tiny", (10.0, 10.0), (5.0, 5.0)).build();
    let fitted = fit_viewport(&viewport(), &graph.nodes);
    assert_eq!(fitted.zoom, 1.0);
}

#[test]
fn test_fit_empty_graph_resets() {
    let fitted = fit_viewport(&viewport(), &[]);
    assert_eq!((fitted.x, fitted.y, fitted.zoom), (0.0, 0.0, 1.0));
    assert_eq!((fitted.width, fitted.height), (800.0, 600.0));
}

// ============================================================================
// Drag
// ============================================================================

#[test]
fn test_drag_delta_scales_with_zoom() {
    let v = Viewport::new(0.0, 0.0, 2.0, 800.0, 600.0).unwrap();
    let d = calculate_drag_delta(&v, 100.0, 100.0, 140.0, 80.0);
    assert_close(d.x, 20.0);
    assert_close(d.y, -10.0);
}

#[test]
fn test_apply_drag_moves_only_selected() {
    let nodes = vec![
        Node::new("a", 0.0, 0.0, 10.0, 10.0),
        Node::new("b", 50.0, 50.0, 10.0, 10.0),
        Node::new("c", 90.0, 0.0, 10.0, 10.0),
    ];
    let moved = apply_drag_to_nodes(&nodes, &id_set(&["a", "c"]), 5.0, -5.0);

    assert_eq!(moved.len(), 3);
    assert_eq!((moved[0].x, moved[0].y), (5.0, -5.0));
    assert_eq!(moved[1], nodes[1]);
    assert_eq!((moved[2].x, moved[2].y), (95.0, -5.0));
    // Input untouched
    assert_eq!(nodes[0].x, 0.0);
}
