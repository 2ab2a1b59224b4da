//! Stateless geometry: points, rectangles, segment distance, Bézier curves
//! and the screen <-> canvas transforms.
//!
//! Everything here is a pure function over `f32` values. Nothing validates
//! its input beyond what is needed to avoid dividing by zero; callers own
//! invariants such as positive rectangle sizes.

use crate::constants::BEZIER_CONTROL_FRACTION;
use crate::types::Viewport;
use serde::{Deserialize, Serialize};

/// A coordinate pair, in whichever space the caller is working in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// True when both components are exactly zero
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Axis-aligned rectangle. `width` and `height` are expected to be positive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle spanned by two corners given in any order.
    /// Width and height are never negative.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let min_x = a.x.min(b.x);
        let min_y = a.y.min(b.y);
        Self {
            x: min_x,
            y: min_y,
            width: a.x.max(b.x) - min_x,
            height: a.y.max(b.y) - min_y,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Grow the rectangle by `margin` on every side
    pub fn padded(&self, margin: f32) -> Self {
        Self {
            x: self.x - margin,
            y: self.y - margin,
            width: self.width + margin * 2.0,
            height: self.height + margin * 2.0,
        }
    }
}

// ============================================================================
// Distances & Rectangles
// ============================================================================

/// Euclidean distance between two points.
#[inline]
pub fn distance(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    (x2 - x1).hypot(y2 - y1)
}

/// Inclusive on all four edges.
#[inline]
pub fn rect_contains_point(rect: &Rect, px: f32, py: f32) -> bool {
    px >= rect.x && px <= rect.right() && py >= rect.y && py <= rect.bottom()
}

/// True if the rectangles overlap or share an edge.
#[inline]
pub fn rect_intersects(r1: &Rect, r2: &Rect) -> bool {
    r1.x <= r2.right() && r2.x <= r1.right() && r1.y <= r2.bottom() && r2.y <= r1.bottom()
}

pub fn rect_center(rect: &Rect) -> Point {
    Point::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0)
}

/// Bounding box of a collection of rectangles, `None` when empty.
pub fn rect_bounds<'a, I>(rects: I) -> Option<Rect>
where
    I: IntoIterator<Item = &'a Rect>,
{
    let mut iter = rects.into_iter();
    let first = iter.next()?;
    let (mut min_x, mut min_y) = (first.x, first.y);
    let (mut max_x, mut max_y) = (first.right(), first.bottom());

    for r in iter {
        min_x = min_x.min(r.x);
        min_y = min_y.min(r.y);
        max_x = max_x.max(r.right());
        max_y = max_y.max(r.bottom());
    }

    Some(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
}

/// Distance from a point to the segment `(x1,y1)-(x2,y2)`.
///
/// The projection parameter is clamped to `[0, 1]`, so points beyond either
/// end measure to the nearest endpoint. A zero-length segment is a point.
pub fn point_to_segment_distance(px: f32, py: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let len_sq = dx * dx + dy * dy;

    if len_sq == 0.0 {
        return distance(px, py, x1, y1);
    }

    let t = (((px - x1) * dx + (py - y1) * dy) / len_sq).clamp(0.0, 1.0);
    distance(px, py, x1 + t * dx, y1 + t * dy)
}

// ============================================================================
// Curves & Angles
// ============================================================================

/// Cubic Bernstein evaluation on one axis. `t` is not range-checked.
#[inline]
pub fn cubic_bezier_point(t: f32, p0: f32, p1: f32, p2: f32, p3: f32) -> f32 {
    let mt = 1.0 - t;
    mt * mt * mt * p0 + 3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t * p3
}

/// Two-axis convenience over [`cubic_bezier_point`].
pub fn bezier_point(t: f32, p0: Point, p1: Point, p2: Point, p3: Point) -> Point {
    Point::new(
        cubic_bezier_point(t, p0.x, p1.x, p2.x, p3.x),
        cubic_bezier_point(t, p0.y, p1.y, p2.y, p3.y),
    )
}

/// Control points for an S-curve between two horizontally offset endpoints.
///
/// Returns `[c1x, c1y, c2x, c2y]`: each control point sits on its
/// endpoint's row, pulled toward the other end by
/// [`BEZIER_CONTROL_FRACTION`] of the horizontal distance.
pub fn simple_bezier_control_points(x1: f32, y1: f32, x2: f32, y2: f32) -> [f32; 4] {
    let offset = (x2 - x1) * BEZIER_CONTROL_FRACTION;
    [x1 + offset, y1, x2 - offset, y2]
}

/// Centre-to-centre curve between two node rectangles as
/// `[start, control1, control2, end]`.
pub fn edge_curve(source: &Rect, target: &Rect) -> [Point; 4] {
    let start = rect_center(source);
    let end = rect_center(target);
    let [c1x, c1y, c2x, c2y] = simple_bezier_control_points(start.x, start.y, end.x, end.y);
    [start, Point::new(c1x, c1y), Point::new(c2x, c2y), end]
}

/// Angle in radians of the vector from the first point to the second.
#[inline]
pub fn angle_between_points(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    (y2 - y1).atan2(x2 - x1)
}

/// Rotate `(px, py)` about `(cx, cy)` by `angle` radians.
pub fn rotate_point(px: f32, py: f32, cx: f32, cy: f32, angle: f32) -> Point {
    let (sin, cos) = angle.sin_cos();
    let dx = px - cx;
    let dy = py - cy;
    Point::new(cx + dx * cos - dy * sin, cy + dx * sin + dy * cos)
}

// ============================================================================
// Viewport Transforms
// ============================================================================

/// Convert a screen position to canvas coordinates.
///
/// Formula: `canvas = viewport.offset + screen / zoom`
#[inline]
pub fn screen_to_canvas(viewport: &Viewport, sx: f32, sy: f32) -> Point {
    Point::new(viewport.x + sx / viewport.zoom, viewport.y + sy / viewport.zoom)
}

/// Convert a canvas position to screen coordinates (inverse of
/// [`screen_to_canvas`]).
#[inline]
pub fn canvas_to_screen(viewport: &Viewport, cx: f32, cy: f32) -> Point {
    Point::new((cx - viewport.x) * viewport.zoom, (cy - viewport.y) * viewport.zoom)
}

/// The canvas-space rectangle currently visible through the viewport.
pub fn viewport_bounds(viewport: &Viewport) -> Rect {
    Rect::new(
        viewport.x,
        viewport.y,
        viewport.width / viewport.zoom,
        viewport.height / viewport.zoom,
    )
}
