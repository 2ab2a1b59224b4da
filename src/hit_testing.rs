//! Hit testing - map screen positions to nodes and edges.
//!
//! The free functions scan linearly and are what the gesture machine uses.
//! [`HitTester`] answers the same node queries from an R-tree for hosts
//! with many nodes; its answers match the linear scan exactly.

use crate::constants::{BORDER_ZONE_FRACTION, SLOW_HANDLER_MS};
use crate::geometry::{
    Rect, canvas_to_screen, point_to_segment_distance, rect_contains_point, rect_intersects,
    screen_to_canvas,
};
use crate::perf::measure_and_log;
use crate::profile_scope;
use crate::spatial_index::SpatialIndex;
use crate::types::{Edge, Node, Viewport};
use std::collections::HashMap;

/// Topmost node under a screen position.
///
/// Later nodes render on top, so the last match in iteration order wins.
pub fn node_at_point<'a>(
    nodes: &'a [Node],
    viewport: &Viewport,
    screen_x: f32,
    screen_y: f32,
) -> Option<&'a Node> {
    node_at_point_where(nodes, viewport, screen_x, screen_y, |_| true)
}

/// [`node_at_point`] restricted to nodes accepted by `filter`.
pub fn node_at_point_where<'a, F>(
    nodes: &'a [Node],
    viewport: &Viewport,
    screen_x: f32,
    screen_y: f32,
    filter: F,
) -> Option<&'a Node>
where
    F: Fn(&Node) -> bool,
{
    let p = screen_to_canvas(viewport, screen_x, screen_y);
    nodes
        .iter()
        .rev()
        .find(|n| filter(n) && rect_contains_point(&n.rect(), p.x, p.y))
}

/// Topmost edge whose centre-to-centre segment lies within
/// `pixel_threshold` screen pixels of the position.
///
/// Edges with a missing endpoint are skipped.
pub fn edge_at_point<'a>(
    edges: &'a [Edge],
    nodes: &[Node],
    viewport: &Viewport,
    screen_x: f32,
    screen_y: f32,
    pixel_threshold: f32,
) -> Option<&'a Edge> {
    profile_scope!("edge_at_point");

    let p = screen_to_canvas(viewport, screen_x, screen_y);
    let threshold = pixel_threshold / viewport.zoom;
    let by_id: HashMap<&str, &Node> = nodes.iter().map(|n| (n.id.as_str(), n)).collect();

    edges.iter().rev().find(|edge| {
        let (Some(source), Some(target)) = (
            by_id.get(edge.source.as_str()),
            by_id.get(edge.target.as_str()),
        ) else {
            return false;
        };
        let a = source.center();
        let b = target.center();
        point_to_segment_distance(p.x, p.y, a.x, a.y, b.x, b.y) <= threshold
    })
}

/// Every node whose rectangle intersects (or touches) a screen rectangle.
pub fn nodes_in_rect<'a>(nodes: &'a [Node], viewport: &Viewport, screen_rect: &Rect) -> Vec<&'a Node> {
    let canvas_rect = screen_rect_to_canvas(viewport, screen_rect);
    nodes
        .iter()
        .filter(|n| rect_intersects(&n.rect(), &canvas_rect))
        .collect()
}

/// True when the screen position falls in the node's border zone: the outer
/// [`BORDER_ZONE_FRACTION`] of its on-screen width or height on any side.
///
/// Positions outside the node are not in its border zone.
pub fn is_in_border_zone(node: &Node, viewport: &Viewport, screen_x: f32, screen_y: f32) -> bool {
    let origin = canvas_to_screen(viewport, node.x, node.y);
    let width = node.width * viewport.zoom;
    let height = node.height * viewport.zoom;

    let rel_x = (screen_x - origin.x) / width;
    let rel_y = (screen_y - origin.y) / height;
    if !(0.0..=1.0).contains(&rel_x) || !(0.0..=1.0).contains(&rel_y) {
        return false;
    }

    rel_x < BORDER_ZONE_FRACTION
        || rel_x > 1.0 - BORDER_ZONE_FRACTION
        || rel_y < BORDER_ZONE_FRACTION
        || rel_y > 1.0 - BORDER_ZONE_FRACTION
}

/// Convert both corners of a screen rectangle to canvas space.
fn screen_rect_to_canvas(viewport: &Viewport, screen_rect: &Rect) -> Rect {
    let min = screen_to_canvas(viewport, screen_rect.x, screen_rect.y);
    let max = screen_to_canvas(viewport, screen_rect.right(), screen_rect.bottom());
    Rect::from_corners(min, max)
}

// ============================================================================
// Indexed hit testing
// ============================================================================

/// R-tree backed node hit testing over a snapshot of the node list.
///
/// Rebuild after the host changes node positions.
pub struct HitTester {
    index: SpatialIndex,
    ids: Vec<String>,
}

impl HitTester {
    pub fn new(nodes: &[Node]) -> Self {
        let rects: Vec<Rect> = nodes.iter().map(Node::rect).collect();
        Self {
            index: measure_and_log("hit_tester_build", SLOW_HANDLER_MS, || {
                SpatialIndex::from_rects(&rects)
            }),
            ids: nodes.iter().map(|n| n.id.clone()).collect(),
        }
    }

    pub fn rebuild(&mut self, nodes: &[Node]) {
        *self = Self::new(nodes);
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// ID of the topmost node under a screen position.
    pub fn node_at_point(&self, viewport: &Viewport, screen_x: f32, screen_y: f32) -> Option<&str> {
        profile_scope!("hit_tester_point");

        let p = screen_to_canvas(viewport, screen_x, screen_y);
        self.index
            .query_point(p.x, p.y)
            .last()
            .and_then(|&order| self.ids.get(order))
            .map(String::as_str)
    }

    /// IDs of nodes intersecting a screen rectangle, in render order.
    pub fn nodes_in_rect(&self, viewport: &Viewport, screen_rect: &Rect) -> Vec<&str> {
        let canvas_rect = screen_rect_to_canvas(viewport, screen_rect);
        self.index
            .query_rect(&canvas_rect)
            .into_iter()
            .filter_map(|order| self.ids.get(order))
            .map(String::as_str)
            .collect()
    }
}
