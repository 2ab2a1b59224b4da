//! Viewport navigation (zoom, pan, fit) and drag-delta math.
//!
//! All functions take a viewport by reference and return a fresh one.

use crate::constants::{FIT_PADDING, MAX_ZOOM, MIN_ZOOM, WHEEL_ZOOM_BASE};
use crate::error::{InteractionError, InteractionResult};
use crate::geometry::{Point, rect_bounds, screen_to_canvas};
use crate::types::{Node, Viewport};
use std::collections::BTreeSet;

/// Zoom by `factor` keeping the canvas point under `(screen_cx, screen_cy)`
/// fixed on screen.
///
/// The resulting zoom is clamped to `[MIN_ZOOM, MAX_ZOOM]`. A factor that is
/// not finite and positive is a caller error.
pub fn zoom_viewport(
    viewport: &Viewport,
    factor: f32,
    screen_cx: f32,
    screen_cy: f32,
) -> InteractionResult<Viewport> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(InteractionError::InvalidZoomFactor(factor));
    }

    let anchor = screen_to_canvas(viewport, screen_cx, screen_cy);
    let zoom = (viewport.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);

    Ok(Viewport {
        x: anchor.x - screen_cx / zoom,
        y: anchor.y - screen_cy / zoom,
        zoom,
        ..*viewport
    })
}

/// Zoom anchored at the centre of the viewport (toolbar zoom buttons).
pub fn zoom_about_center(viewport: &Viewport, factor: f32) -> InteractionResult<Viewport> {
    let center = viewport.screen_center();
    zoom_viewport(viewport, factor, center.x, center.y)
}

/// Zoom factor for a wheel delta: `WHEEL_ZOOM_BASE ^ delta`.
///
/// Positive deltas (scrolling down) zoom out. Huge deltas saturate to the
/// smallest/largest positive factor instead of reaching 0 or infinity.
#[inline]
pub fn wheel_zoom_factor(delta: f32) -> f32 {
    WHEEL_ZOOM_BASE.powf(delta).clamp(f32::MIN_POSITIVE, f32::MAX)
}

/// Pan by a screen-space pixel delta.
///
/// Dragging the canvas right moves the visible window left in canvas space,
/// so the delta is subtracted.
pub fn pan_viewport(viewport: &Viewport, screen_dx: f32, screen_dy: f32) -> Viewport {
    Viewport {
        x: viewport.x - screen_dx / viewport.zoom,
        y: viewport.y - screen_dy / viewport.zoom,
        ..*viewport
    }
}

/// Fit all nodes into view.
///
/// With no nodes the viewport resets to the origin at zoom 1. Otherwise the
/// node bounding box is padded by [`FIT_PADDING`] and the largest zoom not
/// above 1 that shows the whole padded box is chosen.
pub fn fit_viewport(viewport: &Viewport, nodes: &[Node]) -> Viewport {
    let rects: Vec<_> = nodes.iter().map(Node::rect).collect();

    let Some(bounds) = rect_bounds(&rects) else {
        return Viewport {
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
            ..*viewport
        };
    };

    let padded = bounds.padded(FIT_PADDING);
    let zoom = (viewport.width / padded.width)
        .min(viewport.height / padded.height)
        .min(1.0)
        .clamp(MIN_ZOOM, MAX_ZOOM);

    Viewport {
        x: padded.x,
        y: padded.y,
        zoom,
        ..*viewport
    }
}

// ============================================================================
// Drag
// ============================================================================

/// Canvas-space movement between two screen positions.
///
/// Both positions are converted with the same viewport and subtracted,
/// rather than dividing the screen delta by zoom.
pub fn calculate_drag_delta(
    viewport: &Viewport,
    start_screen_x: f32,
    start_screen_y: f32,
    end_screen_x: f32,
    end_screen_y: f32,
) -> Point {
    let start = screen_to_canvas(viewport, start_screen_x, start_screen_y);
    let end = screen_to_canvas(viewport, end_screen_x, end_screen_y);
    Point::new(end.x - start.x, end.y - start.y)
}

/// Copy of `node` offset by `(dx, dy)`.
pub fn apply_drag_to_node(node: &Node, dx: f32, dy: f32) -> Node {
    node.moved_by(dx, dy)
}

/// Offset every node whose ID is in `ids`; order and other nodes unchanged.
pub fn apply_drag_to_nodes(nodes: &[Node], ids: &BTreeSet<String>, dx: f32, dy: f32) -> Vec<Node> {
    nodes
        .iter()
        .map(|n| {
            if ids.contains(&n.id) {
                apply_drag_to_node(n, dx, dy)
            } else {
                n.clone()
            }
        })
        .collect()
}
