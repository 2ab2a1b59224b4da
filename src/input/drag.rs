//! Pointer move handling - pan, node drag, edge preview, marquee.
//!
//! ## Performance Notes
//!
//! Pointer move fires for every input sample while a button is held, so
//! each branch does the minimum: an early return when idle, one delta
//! computation, one hit test at most.

use super::{CanvasState, GestureController, GestureState, InteractionHost, PointerEvent};
use crate::error::InteractionResult;
use crate::graph::Graph;
use crate::hit_testing::node_at_point_where;
use crate::navigation::{calculate_drag_delta, pan_viewport};
use crate::profile_scope;
use crate::types::Viewport;
use tracing::trace;

impl GestureController {
    pub fn pointer_move<H: InteractionHost>(
        &mut self,
        graph: &Graph,
        state: CanvasState,
        event: PointerEvent,
        host: &mut H,
    ) -> InteractionResult<CanvasState> {
        profile_scope!("pointer_move");
        state.viewport.validate()?;

        let Some(gesture) = self.gesture.as_mut() else {
            return Ok(state);
        };

        match gesture {
            GestureState::Pan { last } => {
                // Delta since the previous move, then rebase
                let dx = event.x - last.x;
                let dy = event.y - last.y;
                *last = event.position();

                if dx == 0.0 && dy == 0.0 {
                    return Ok(state);
                }

                let viewport = pan_viewport(&state.viewport, dx, dy);
                trace!(x = viewport.x, y = viewport.y, "Panned");
                host.viewport_changed(&viewport);
                Ok(state.with_viewport(viewport))
            }

            GestureState::NodeDrag {
                start,
                origins,
                delta,
                ..
            } => {
                // Always measured from the press position so rounding never accumulates
                let d = calculate_drag_delta(&state.viewport, start.x, start.y, event.x, event.y);
                *delta = d;
                for id in origins.keys() {
                    host.node_dragged(id, d.x, d.y);
                }
                Ok(state)
            }

            GestureState::EdgeCreate {
                source,
                cursor,
                hover_target,
            } => {
                *cursor = event.position();
                *hover_target = edge_target_at(graph, &state.viewport, source, event.x, event.y);
                Ok(state)
            }

            GestureState::RubberBand { current, .. } => {
                *current = event.position();
                Ok(state)
            }
        }
    }
}

/// Node under the pointer that a new edge from `source` may connect to.
///
/// The source itself is skipped so a target stacked beneath it can still be
/// found. A node already connected to the source in either direction is
/// never a target.
fn edge_target_at(
    graph: &Graph,
    viewport: &Viewport,
    source: &str,
    screen_x: f32,
    screen_y: f32,
) -> Option<String> {
    let candidate = node_at_point_where(&graph.nodes, viewport, screen_x, screen_y, |n| {
        n.id != source
    })?;

    if !graph.has_node(source) || graph.nodes_connected(source, &candidate.id) {
        return None;
    }
    Some(candidate.id.clone())
}
