//! Geometry Tests
//!
//! Coordinate transforms and the distance / curve helpers.

use crate::helpers::assert_close;
use nodeboard::geometry::{
    Point, Rect, bezier_point, canvas_to_screen, edge_curve, point_to_segment_distance,
    rect_bounds, rect_contains_point, rect_intersects, screen_to_canvas, viewport_bounds,
};
use nodeboard::types::Viewport;

// ============================================================================
// Transforms
// ============================================================================

#[test]
fn test_round_trip_across_viewports() {
    let viewports = [
        Viewport::new(0.0, 0.0, 1.0, 800.0, 600.0).unwrap(),
        Viewport::new(-120.0, 45.5, 0.1, 800.0, 600.0).unwrap(),
        Viewport::new(300.0, -80.0, 2.5, 1024.0, 768.0).unwrap(),
        Viewport::new(12.0, 7.0, 5.0, 640.0, 480.0).unwrap(),
    ];
    let points = [(0.0, 0.0), (17.0, 311.0), (799.0, 1.0), (-40.0, 900.0)];

    for v in &viewports {
        for &(sx, sy) in &points {
            let c = screen_to_canvas(v, sx, sy);
            let back = canvas_to_screen(v, c.x, c.y);
            assert_close(back.x, sx);
            assert_close(back.y, sy);
        }
    }
}

#[test]
fn test_screen_origin_is_viewport_offset() {
    let v = Viewport::new(100.0, 50.0, 2.0, 800.0, 600.0).unwrap();
    assert_eq!(screen_to_canvas(&v, 0.0, 0.0), Point::new(100.0, 50.0));
    assert_eq!(screen_to_canvas(&v, 200.0, 100.0), Point::new(200.0, 100.0));
}

#[test]
fn test_viewport_bounds_scale_with_zoom() {
    let v = Viewport::new(10.0, 20.0, 2.0, 800.0, 600.0).unwrap();
    assert_eq!(viewport_bounds(&v), Rect::new(10.0, 20.0, 400.0, 300.0));
}

// ============================================================================
// Distances and rectangles
// ============================================================================

#[test]
fn test_point_to_segment_scenarios() {
    assert_close(point_to_segment_distance(5.0, 5.0, 0.0, 0.0, 10.0, 0.0), 5.0);
    // Beyond the end the distance is to the endpoint
    assert_close(point_to_segment_distance(15.0, 0.0, 0.0, 0.0, 10.0, 0.0), 5.0);
    assert_close(point_to_segment_distance(-3.0, 4.0, 0.0, 0.0, 10.0, 0.0), 5.0);
    // Degenerate segment
    assert_close(point_to_segment_distance(3.0, 4.0, 0.0, 0.0, 0.0, 0.0), 5.0);
}

#[test]
fn test_rect_edges_are_inclusive() {
    let r = Rect::new(0.0, 0.0, 100.0, 50.0);
    assert!(rect_contains_point(&r, 0.0, 0.0));
    assert!(rect_contains_point(&r, 100.0, 50.0));
    assert!(!rect_contains_point(&r, 100.1, 50.0));

    let touching = Rect::new(100.0, 50.0, 10.0, 10.0);
    assert!(rect_intersects(&r, &touching));
    assert!(!rect_intersects(&r, &Rect::new(101.0, 0.0, 10.0, 10.0)));
}

#[test]
fn test_rect_bounds_union() {
    let rects = [Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(-5.0, 20.0, 10.0, 5.0)];
    assert_eq!(rect_bounds(&rects), Some(Rect::new(-5.0, 0.0, 15.0, 25.0)));
    assert_eq!(rect_bounds(std::iter::empty::<&Rect>()), None);
}

// ============================================================================
// Curves
// ============================================================================

#[test]
fn test_edge_curve_endpoints_are_centres() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(300.0, 100.0, 100.0, 100.0);
    let [p0, p1, p2, p3] = edge_curve(&a, &b);

    assert_eq!(p0, Point::new(50.0, 50.0));
    assert_eq!(p3, Point::new(350.0, 150.0));
    // Control points pull horizontally by 40% of the x distance
    assert_close(p1.x, 170.0);
    assert_close(p1.y, 50.0);
    assert_close(p2.x, 230.0);
    assert_close(p2.y, 150.0);

    assert_eq!(bezier_point(0.0, p0, p1, p2, p3), p0);
    let end = bezier_point(1.0, p0, p1, p2, p3);
    assert_close(end.x, p3.x);
    assert_close(end.y, p3.y);
}
