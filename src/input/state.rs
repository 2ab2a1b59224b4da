//! Gesture state machine - the tagged state for one pointer-down to
//! pointer-up cycle.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Pan          (pointer down on empty canvas)
//! Idle -> RubberBand   (pointer down on empty canvas with Shift)
//! Idle -> NodeDrag     (pointer down on a node body)
//! Idle -> EdgeCreate   (pointer down on a node's border zone)
//!
//! Any -> Idle          (pointer up or pointer leave - commits the gesture)
//! ```
//!
//! Idle is represented by the absence of a state (`Option::None`) on the
//! controller.

use crate::geometry::{Point, Rect};
use std::collections::BTreeMap;

/// The gesture currently occupying the pointer.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureState {
    /// Canvas panning
    Pan {
        /// Pointer position at the previous move, in screen space
        last: Point,
    },

    /// Moving one or more nodes
    NodeDrag {
        /// Node under the pointer at press
        node_id: String,
        /// Screen position at press; deltas are measured from here
        start: Point,
        /// Canvas position at press of every node being moved
        origins: BTreeMap<String, Point>,
        /// Canvas-space delta since press, for live rendering
        delta: Point,
    },

    /// Drawing a new edge out of a node's border zone
    EdgeCreate {
        source: String,
        /// Current pointer position, in screen space
        cursor: Point,
        /// Node that would become the target if released now
        hover_target: Option<String>,
    },

    /// Rubber-band (marquee) selection
    RubberBand {
        /// Screen position at press
        anchor: Point,
        /// Current pointer position, in screen space
        current: Point,
        /// Whether the result is unioned into the existing selection
        additive: bool,
    },
}

impl GestureState {
    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Pan { .. } => "pan",
            Self::NodeDrag { .. } => "node_drag",
            Self::EdgeCreate { .. } => "edge_create",
            Self::RubberBand { .. } => "rubber_band",
        }
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Pan { .. })
    }

    pub fn is_dragging_nodes(&self) -> bool {
        matches!(self, Self::NodeDrag { .. })
    }

    pub fn is_creating_edge(&self) -> bool {
        matches!(self, Self::EdgeCreate { .. })
    }

    pub fn is_rubber_banding(&self) -> bool {
        matches!(self, Self::RubberBand { .. })
    }

    /// IDs of the nodes being dragged, if dragging
    pub fn dragged_node_ids(&self) -> Option<impl Iterator<Item = &str>> {
        match self {
            Self::NodeDrag { origins, .. } => Some(origins.keys().map(String::as_str)),
            _ => None,
        }
    }

    /// Live canvas offset to draw `node_id` with, if it is being dragged
    pub fn node_offset(&self, node_id: &str) -> Option<Point> {
        match self {
            Self::NodeDrag { origins, delta, .. } if origins.contains_key(node_id) => Some(*delta),
            _ => None,
        }
    }

    /// Current drag delta, if dragging nodes
    pub fn drag_delta(&self) -> Option<Point> {
        match self {
            Self::NodeDrag { delta, .. } => Some(*delta),
            _ => None,
        }
    }

    /// Source node and cursor of an in-progress edge, for the preview line
    pub fn edge_preview(&self) -> Option<(&str, Point)> {
        match self {
            Self::EdgeCreate { source, cursor, .. } => Some((source.as_str(), *cursor)),
            _ => None,
        }
    }

    pub fn hover_target(&self) -> Option<&str> {
        match self {
            Self::EdgeCreate { hover_target, .. } => hover_target.as_deref(),
            _ => None,
        }
    }

    /// Normalised screen rectangle of a rubber-band selection
    pub fn rubber_band_rect(&self) -> Option<Rect> {
        match self {
            Self::RubberBand { anchor, current, .. } => Some(Rect::from_corners(*anchor, *current)),
            _ => None,
        }
    }
}
