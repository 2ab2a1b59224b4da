//! Commands forwarded from outside the pointer stream (keyboard shortcuts,
//! menus): delete and select-all.

use super::{CanvasState, GestureController, InteractionHost};
use crate::graph::Graph;
use crate::selection::{Selection, select_all};
use tracing::debug;

impl GestureController {
    /// Delete the selection.
    ///
    /// Selected nodes win: if any are selected only they are reported (the
    /// host cascades their edges); otherwise the selected edges are. Both
    /// selections are cleared afterwards. Ignored during a gesture.
    pub fn delete_selection<H: InteractionHost>(&mut self, state: CanvasState, host: &mut H) -> CanvasState {
        if let Some(active) = &self.gesture {
            debug!(gesture = active.kind(), "Ignoring delete during active gesture");
            return state;
        }
        if state.selection.is_empty() {
            return state;
        }

        if !state.selection.nodes.is_empty() {
            debug!(count = state.selection.nodes.len(), "Deleting nodes");
            host.nodes_deleted(&state.selection.nodes);
        } else {
            debug!(count = state.selection.edges.len(), "Deleting edges");
            host.edges_deleted(&state.selection.edges);
        }

        state.with_selection(Selection::new())
    }

    /// Select every node. The edge selection is left as is.
    pub fn select_all(&mut self, graph: &Graph, state: CanvasState) -> CanvasState {
        if !self.is_idle() {
            return state;
        }
        let selection = state.selection.clone().with_nodes(select_all(&graph.nodes));
        state.with_selection(selection)
    }
}
