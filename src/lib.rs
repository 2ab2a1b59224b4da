//! Interaction core for node-and-edge diagram canvases.
//!
//! Turns raw pointer and wheel input over a pannable, zoomable canvas into
//! viewport changes, selection changes and structural edit requests. The
//! crate does no drawing; a presentation layer renders the [`Graph`], reads
//! the active [`input::GestureState`] for previews and feeds events in.
//!
//! - [`geometry`], [`navigation`] - coordinate maths and viewport updates
//! - [`hit_testing`], [`selection`] - what is under the pointer, what is
//!   selected
//! - [`input`] - the gesture state machine and host callback trait
//! - [`graph`], [`board`] - the data model and a reference host

pub mod board;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod hit_testing;
pub mod input;
pub mod logging;
pub mod navigation;
pub mod perf;
pub mod selection;
pub mod spatial_index;
pub mod types;

pub use board::Board;
pub use error::{GraphError, GraphResult, InteractionError, InteractionResult};
pub use graph::Graph;
pub use input::{
    CanvasState, GestureController, GestureState, HostEvent, InteractionHost, Modifiers,
    PointerEvent, WheelEvent,
};
pub use selection::{IdSet, Selection};
pub use types::{Edge, Node, Viewport};
