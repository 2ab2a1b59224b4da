//! Pointer up / leave handling - commit the active gesture.
//!
//! Leaving the surface is treated exactly like releasing the button so no
//! gesture is ever left dangling.

use super::{CanvasState, GestureController, GestureState, InteractionHost, PointerEvent};
use crate::error::InteractionResult;
use crate::geometry::Rect;
use crate::graph::Graph;
use crate::hit_testing::nodes_in_rect;
use crate::navigation::calculate_drag_delta;
use crate::profile_scope;
use crate::selection::{IdSet, Selection, add_to_selection};
use crate::types::Edge;
use tracing::debug;

impl GestureController {
    pub fn pointer_up<H: InteractionHost>(
        &mut self,
        graph: &Graph,
        state: CanvasState,
        event: PointerEvent,
        host: &mut H,
    ) -> InteractionResult<CanvasState> {
        profile_scope!("pointer_up");
        state.viewport.validate()?;

        let Some(gesture) = self.gesture.take() else {
            return Ok(state);
        };
        debug!(gesture = gesture.kind(), "Gesture ended");

        match gesture {
            GestureState::Pan { .. } => Ok(state),

            GestureState::NodeDrag {
                node_id,
                start,
                origins,
                ..
            } => {
                let d = calculate_drag_delta(&state.viewport, start.x, start.y, event.x, event.y);

                // A drag that went nowhere is a click
                if d.is_zero() {
                    host.node_clicked(&node_id);
                    return Ok(state);
                }

                for (id, origin) in &origins {
                    host.node_drag_ended(id, origin.x + d.x, origin.y + d.y);
                }
                Ok(state)
            }

            GestureState::EdgeCreate {
                source,
                hover_target,
                ..
            } => {
                // Re-check against the graph as it is now
                let target = hover_target.filter(|target| {
                    graph.has_node(target) && !graph.nodes_connected(&source, target)
                });
                let Some(target) = target else {
                    debug!(%source, "Edge creation ended without a target");
                    return Ok(state);
                };

                debug!(%source, %target, "Edge creation requested");
                host.edge_create_requested(&Edge::between(&source, &target));
                Ok(state)
            }

            GestureState::RubberBand {
                anchor, additive, ..
            } => {
                let screen_rect = Rect::from_corners(anchor, event.position());
                let hits: IdSet = nodes_in_rect(&graph.nodes, &state.viewport, &screen_rect)
                    .into_iter()
                    .map(|n| n.id.clone())
                    .collect();

                let additive = additive || event.modifiers.additive();
                let selection = if additive {
                    let nodes = add_to_selection(&state.selection.nodes, &hits);
                    state.selection.clone().with_nodes(nodes)
                } else {
                    Selection::new().with_nodes(hits)
                };

                debug!(selected = selection.nodes.len(), additive, "Rubber-band selection committed");
                Ok(state.with_selection(selection))
            }
        }
    }

    /// The pointer left the surface; commits like [`Self::pointer_up`].
    pub fn pointer_leave<H: InteractionHost>(
        &mut self,
        graph: &Graph,
        state: CanvasState,
        event: PointerEvent,
        host: &mut H,
    ) -> InteractionResult<CanvasState> {
        self.pointer_up(graph, state, event, host)
    }
}
