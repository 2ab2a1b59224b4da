//! Pointer and wheel input handling for the canvas.
//!
//! This module implements the gesture state machine: it interprets a stream
//! of pointer events as panning, node dragging, edge creation or rubber-band
//! selection, and reports the outcome to the host.
//!
//! ## Architecture
//!
//! [`GestureController`] owns only the active [`GestureState`]. The host
//! owns the [`CanvasState`] (viewport + selection) and the graph, passes
//! them into every handler, and receives the next `CanvasState` back along
//! with synchronous [`InteractionHost`] callbacks. The controller never
//! mutates the graph.
//!
//! ## Modules
//!
//! - `state` - Gesture state enum and helper methods
//! - `host` - Host callback trait and the recorded event type
//! - `pointer_down` - Hit resolution and gesture start
//! - `drag` - Pointer move handling (pan, node drag, edge preview, marquee)
//! - `pointer_up` - Gesture commit on pointer up / leave
//! - `transform` - Wheel zoom, zoom buttons and fit-to-content
//! - `commands` - Delete and select-all commands

mod commands;
mod drag;
mod host;
mod pointer_down;
mod pointer_up;
mod state;
mod transform;

pub use host::{HostEvent, InteractionHost};
pub use state::GestureState;

use crate::geometry::Point;
use crate::selection::Selection;
use crate::types::Viewport;
use serde::{Deserialize, Serialize};

/// Modifier keys held during an event.
///
/// `shift` starts rubber-band selection on empty canvas and toggles
/// membership when clicking edges or unselected nodes. `control`/`platform` make
/// selection changes additive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    /// Command on macOS, Windows key elsewhere
    pub platform: bool,
}

impl Modifiers {
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }

    pub fn control() -> Self {
        Self {
            control: true,
            ..Self::default()
        }
    }

    /// Rubber-band selection modifier
    #[inline]
    pub fn region(&self) -> bool {
        self.shift
    }

    /// Keep the existing selection instead of replacing it
    #[inline]
    pub fn additive(&self) -> bool {
        self.control || self.platform
    }

    /// Toggle membership on node/edge click
    #[inline]
    pub fn multi_select(&self) -> bool {
        self.shift || self.additive()
    }
}

/// A pointer down / move / up / leave event in screen space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(self, modifiers: Modifiers) -> Self {
        Self { modifiers, ..self }
    }

    #[inline]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A wheel event. Positive `delta_y` scrolls down (zooms out).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WheelEvent {
    pub x: f32,
    pub y: f32,
    pub delta_y: f32,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl WheelEvent {
    pub fn at(x: f32, y: f32, delta_y: f32) -> Self {
        Self {
            x,
            y,
            delta_y,
            modifiers: Modifiers::default(),
        }
    }
}

/// Host-owned state that every handler takes and returns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasState {
    pub viewport: Viewport,
    #[serde(default)]
    pub selection: Selection,
}

impl CanvasState {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            selection: Selection::default(),
        }
    }

    pub fn with_selection(self, selection: Selection) -> Self {
        Self { selection, ..self }
    }

    pub fn with_viewport(self, viewport: Viewport) -> Self {
        Self { viewport, ..self }
    }
}

/// Gesture state machine.
///
/// Holds at most one active gesture; it is created on pointer down and
/// dropped on pointer up or leave.
#[derive(Debug, Default, Clone)]
pub struct GestureController {
    gesture: Option<GestureState>,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active gesture, `None` when idle
    pub fn gesture(&self) -> Option<&GestureState> {
        self.gesture.as_ref()
    }

    pub fn is_idle(&self) -> bool {
        self.gesture.is_none()
    }
}
