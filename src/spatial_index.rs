//! R-tree over node rectangles.
//!
//! Entries are keyed by their position in render order, so "topmost wins"
//! is resolved by taking the largest key of a query result. Point queries
//! cost O(log n) instead of a scan over every node.

use crate::geometry::{Rect, rect_contains_point};
use rstar::{AABB, RTree, RTreeObject};

/// One indexed rectangle and its render-order key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedRect {
    pub order: usize,
    pub rect: Rect,
}

impl RTreeObject for IndexedRect {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        aabb(&self.rect)
    }
}

fn aabb(rect: &Rect) -> AABB<[f32; 2]> {
    AABB::from_corners([rect.x, rect.y], [rect.right(), rect.bottom()])
}

/// Sorted render-order keys of the given entries.
fn sorted_keys<'a>(entries: impl Iterator<Item = &'a IndexedRect>) -> Vec<usize> {
    let mut keys: Vec<usize> = entries.map(|e| e.order).collect();
    keys.sort_unstable();
    keys
}

pub struct SpatialIndex {
    tree: RTree<IndexedRect>,
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Bulk-load rectangles given in render order.
    pub fn from_rects<'a, I>(rects: I) -> Self
    where
        I: IntoIterator<Item = &'a Rect>,
    {
        let entries = rects
            .into_iter()
            .enumerate()
            .map(|(order, rect)| IndexedRect { order, rect: *rect })
            .collect();
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Keys of every rectangle containing the point (edges inclusive),
    /// ascending.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<usize> {
        let probe = AABB::from_point([x, y]);
        sorted_keys(
            self.tree
                .locate_in_envelope_intersecting(&probe)
                .filter(|e| rect_contains_point(&e.rect, x, y)),
        )
    }

    /// Keys of every rectangle intersecting or touching `rect`, ascending.
    pub fn query_rect(&self, rect: &Rect) -> Vec<usize> {
        sorted_keys(self.tree.locate_in_envelope_intersecting(&aabb(rect)))
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
    }
}
