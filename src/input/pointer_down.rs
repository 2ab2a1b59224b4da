//! Pointer down handling - hit resolution, selection, gesture start.
//!
//! Targets are resolved front to back: the topmost node (its border zone
//! starts edge creation, its body starts a drag), then the nearest edge,
//! then the empty canvas.

use super::{CanvasState, GestureController, GestureState, InteractionHost, PointerEvent};
use crate::constants::EDGE_HIT_THRESHOLD;
use crate::error::InteractionResult;
use crate::geometry::Point;
use crate::graph::Graph;
use crate::hit_testing::{edge_at_point, is_in_border_zone, node_at_point};
use crate::profile_scope;
use crate::selection::{Selection, toggle_selection};
use crate::types::Node;
use std::collections::BTreeMap;
use tracing::debug;

impl GestureController {
    pub fn pointer_down<H: InteractionHost>(
        &mut self,
        graph: &Graph,
        state: CanvasState,
        event: PointerEvent,
        host: &mut H,
    ) -> InteractionResult<CanvasState> {
        profile_scope!("pointer_down");
        state.viewport.validate()?;

        // One gesture at a time; a second press waits for the first release
        if let Some(active) = &self.gesture {
            debug!(gesture = active.kind(), "Ignoring pointer down during active gesture");
            return Ok(state);
        }

        let viewport = state.viewport;

        if let Some(node) = node_at_point(&graph.nodes, &viewport, event.x, event.y) {
            if is_in_border_zone(node, &viewport, event.x, event.y) {
                debug!(source = %node.id, "Edge creation started");
                self.gesture = Some(GestureState::EdgeCreate {
                    source: node.id.clone(),
                    cursor: event.position(),
                    hover_target: None,
                });
                return Ok(state);
            }
            return Ok(self.start_node_drag(graph, state, node, event));
        }

        if let Some(edge) = edge_at_point(
            &graph.edges,
            &graph.nodes,
            &viewport,
            event.x,
            event.y,
            EDGE_HIT_THRESHOLD,
        ) {
            host.edge_clicked(&edge.id);
            let selection = &state.selection;
            let selection = if event.modifiers.multi_select() {
                selection
                    .clone()
                    .with_edges(toggle_selection(&selection.edges, &edge.id, true))
            } else {
                Selection::new().with_edges(toggle_selection(&selection.edges, &edge.id, false))
            };
            return Ok(state.with_selection(selection));
        }

        // Empty canvas
        if event.modifiers.region() {
            debug!(x = event.x, y = event.y, "Rubber-band selection started");
            self.gesture = Some(GestureState::RubberBand {
                anchor: event.position(),
                current: event.position(),
                additive: event.modifiers.additive(),
            });
            return Ok(state);
        }

        let state = if event.modifiers.additive() {
            state
        } else {
            state.with_selection(Selection::new())
        };
        self.gesture = Some(GestureState::Pan {
            last: event.position(),
        });
        Ok(state)
    }

    /// Update the node selection for a press on `node` and start dragging
    /// whatever ends up selected.
    fn start_node_drag(
        &mut self,
        graph: &Graph,
        state: CanvasState,
        node: &Node,
        event: PointerEvent,
    ) -> CanvasState {
        let current = &state.selection;
        let already_selected = current.contains_node(&node.id);

        // A selected node drags the whole selection, modifiers or not
        let selection = if already_selected {
            current.clone()
        } else if event.modifiers.multi_select() {
            current
                .clone()
                .with_nodes(toggle_selection(&current.nodes, &node.id, true))
        } else {
            // A plain click on an unselected node drops any edge selection too
            Selection::new().with_nodes(toggle_selection(&current.nodes, &node.id, false))
        };

        let origins: BTreeMap<String, _> = selection
            .nodes
            .iter()
            .filter_map(|id| graph.find_node(id))
            .map(|n| (n.id.clone(), Point::new(n.x, n.y)))
            .collect();

        debug!(node = %node.id, count = origins.len(), "Node drag started");
        self.gesture = Some(GestureState::NodeDrag {
            node_id: node.id.clone(),
            start: event.position(),
            origins,
            delta: Point::default(),
        });

        state.with_selection(selection)
    }
}
