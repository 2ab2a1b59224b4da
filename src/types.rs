//! Core value records: viewport, node and edge.
//!
//! All records are plain values. Updates build a new record from the old one
//! (`with_*`, `moved_by`) instead of mutating in place.

use crate::constants::{DEFAULT_ZOOM, EDGE_ID_PREFIX, MAX_ZOOM, MIN_ZOOM};
use crate::error::{InteractionError, InteractionResult};
use crate::geometry::{Point, Rect, rect_center};
use serde::{Deserialize, Serialize};

// ============================================================================
// Viewport
// ============================================================================

/// Affine mapping between canvas space and screen space, plus the on-screen
/// size of the visible area.
///
/// `x`/`y` are the canvas coordinates of the screen origin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub zoom: f32,
    /// Screen width in pixels
    pub width: f32,
    /// Screen height in pixels
    pub height: f32,
}

impl Viewport {
    /// Create a validated viewport.
    pub fn new(x: f32, y: f32, zoom: f32, width: f32, height: f32) -> InteractionResult<Self> {
        let viewport = Self {
            x,
            y,
            zoom,
            width,
            height,
        };
        viewport.validate()?;
        Ok(viewport)
    }

    /// Viewport at the canvas origin with the default zoom.
    pub fn with_size(width: f32, height: f32) -> InteractionResult<Self> {
        Self::new(0.0, 0.0, DEFAULT_ZOOM, width, height)
    }

    /// Check the record's invariants: finite fields, positive size, zoom in
    /// `[MIN_ZOOM, MAX_ZOOM]`.
    pub fn validate(&self) -> InteractionResult<()> {
        for (name, value) in [
            ("x", self.x),
            ("y", self.y),
            ("zoom", self.zoom),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !value.is_finite() {
                return Err(InteractionError::NonFinite(name));
            }
        }

        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(InteractionError::InvalidViewportSize {
                width: self.width,
                height: self.height,
            });
        }

        if !(MIN_ZOOM..=MAX_ZOOM).contains(&self.zoom) {
            return Err(InteractionError::ZoomOutOfRange {
                zoom: self.zoom,
                min: MIN_ZOOM,
                max: MAX_ZOOM,
            });
        }

        Ok(())
    }

    /// Copy with a new canvas offset
    pub fn with_offset(self, x: f32, y: f32) -> Self {
        Self { x, y, ..self }
    }

    /// Copy with a new zoom, clamped to the supported range
    pub fn with_zoom(self, zoom: f32) -> Self {
        Self {
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            ..self
        }
    }

    /// Screen-space centre of the viewport
    pub fn screen_center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

// ============================================================================
// Node
// ============================================================================

fn default_kind() -> String {
    "default".to_string()
}

/// A graph node, positioned in canvas space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique within a graph
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Free-form node type used by the presentation layer
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    /// Arbitrary payload owned by the host
    #[serde(default)]
    pub data: serde_json::Value,
}

impl Node {
    pub fn new(id: impl Into<String>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            width,
            height,
            kind: default_kind(),
            data: serde_json::Value::Null,
        }
    }

    pub fn with_kind(self, kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..self
        }
    }

    pub fn with_data(self, data: serde_json::Value) -> Self {
        Self { data, ..self }
    }

    /// Canvas-space bounding rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Point {
        rect_center(&self.rect())
    }

    /// Copy translated by `(dx, dy)`
    pub fn moved_by(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self.clone()
        }
    }

    /// Copy placed at `(x, y)`
    pub fn moved_to(&self, x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            ..self.clone()
        }
    }
}

// ============================================================================
// Edge
// ============================================================================

/// A directed connection between two nodes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl Edge {
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            kind: default_kind(),
            data: serde_json::Value::Null,
        }
    }

    /// Edge with the deterministic ID `edge-{source}-{target}`.
    pub fn between(source: &str, target: &str) -> Self {
        Self::new(generated_edge_id(source, target), source, target)
    }

    pub fn with_kind(self, kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..self
        }
    }

    /// True if this edge joins `a` and `b` in either direction
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }

    /// True if either endpoint is `node_id`
    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }
}

/// ID given to edges created by dragging from `source` to `target`.
pub fn generated_edge_id(source: &str, target: &str) -> String {
    format!("{EDGE_ID_PREFIX}{source}-{target}")
}
