//! Outbound notifications from the interaction core to the host.
//!
//! Every effect the core has outside its own gesture state goes through an
//! [`InteractionHost`] passed into the handler call. Callbacks are invoked
//! synchronously, at most once per triggering event (per node for the
//! drag callbacks).

use crate::selection::IdSet;
use crate::types::{Edge, Viewport};
use serde::{Deserialize, Serialize};

/// Receiver for interaction callbacks. Every method defaults to a no-op.
pub trait InteractionHost {
    /// A node was pressed and released without moving
    fn node_clicked(&mut self, _id: &str) {}

    /// A node moved during a drag; `(dx, dy)` is the canvas delta since the
    /// drag started
    fn node_dragged(&mut self, _id: &str, _dx: f32, _dy: f32) {}

    /// A drag finished; `(x, y)` is the node's final canvas position
    fn node_drag_ended(&mut self, _id: &str, _x: f32, _y: f32) {}

    fn edge_clicked(&mut self, _id: &str) {}

    /// The user asked for a new edge. The host may apply or ignore it.
    fn edge_create_requested(&mut self, _edge: &Edge) {}

    fn viewport_changed(&mut self, _viewport: &Viewport) {}

    fn nodes_deleted(&mut self, _ids: &IdSet) {}

    fn edges_deleted(&mut self, _ids: &IdSet) {}
}

/// Host that ignores every callback
impl InteractionHost for () {}

/// One recorded callback.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    NodeClicked { id: String },
    NodeDragged { id: String, dx: f32, dy: f32 },
    NodeDragEnded { id: String, x: f32, y: f32 },
    EdgeClicked { id: String },
    EdgeCreateRequested { edge: Edge },
    ViewportChanged { viewport: Viewport },
    NodesDeleted { ids: IdSet },
    EdgesDeleted { ids: IdSet },
}

/// Records callbacks in the order they were made.
impl InteractionHost for Vec<HostEvent> {
    fn node_clicked(&mut self, id: &str) {
        self.push(HostEvent::NodeClicked { id: id.to_string() });
    }

    fn node_dragged(&mut self, id: &str, dx: f32, dy: f32) {
        self.push(HostEvent::NodeDragged {
            id: id.to_string(),
            dx,
            dy,
        });
    }

    fn node_drag_ended(&mut self, id: &str, x: f32, y: f32) {
        self.push(HostEvent::NodeDragEnded {
            id: id.to_string(),
            x,
            y,
        });
    }

    fn edge_clicked(&mut self, id: &str) {
        self.push(HostEvent::EdgeClicked { id: id.to_string() });
    }

    fn edge_create_requested(&mut self, edge: &Edge) {
        self.push(HostEvent::EdgeCreateRequested { edge: edge.clone() });
    }

    fn viewport_changed(&mut self, viewport: &Viewport) {
        self.push(HostEvent::ViewportChanged {
            viewport: *viewport,
        });
    }

    fn nodes_deleted(&mut self, ids: &IdSet) {
        self.push(HostEvent::NodesDeleted { ids: ids.clone() });
    }

    fn edges_deleted(&mut self, ids: &IdSet) {
        self.push(HostEvent::EdgesDeleted { ids: ids.clone() });
    }
}
