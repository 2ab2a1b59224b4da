//! Canvas transformations - wheel zoom, zoom buttons, fit to content.
//!
//! Navigation and gestures are mutually exclusive: while a gesture is
//! active these handlers leave the viewport alone.

use super::{CanvasState, GestureController, InteractionHost, WheelEvent};
use crate::error::InteractionResult;
use crate::graph::Graph;
use crate::navigation::{fit_viewport, wheel_zoom_factor, zoom_about_center, zoom_viewport};
use crate::types::Viewport;
use tracing::debug;

impl GestureController {
    /// Zoom anchored at the pointer by `WHEEL_ZOOM_BASE ^ delta_y`.
    pub fn wheel<H: InteractionHost>(
        &mut self,
        state: CanvasState,
        event: WheelEvent,
        host: &mut H,
    ) -> InteractionResult<CanvasState> {
        state.viewport.validate()?;

        if let Some(active) = &self.gesture {
            debug!(gesture = active.kind(), "Ignoring wheel during active gesture");
            return Ok(state);
        }
        if event.delta_y == 0.0 {
            return Ok(state);
        }

        let viewport = zoom_viewport(
            &state.viewport,
            wheel_zoom_factor(event.delta_y),
            event.x,
            event.y,
        )?;
        Ok(commit_viewport(state, viewport, host))
    }

    /// Zoom about the viewport centre (toolbar buttons).
    pub fn zoom_by<H: InteractionHost>(
        &mut self,
        state: CanvasState,
        factor: f32,
        host: &mut H,
    ) -> InteractionResult<CanvasState> {
        state.viewport.validate()?;
        if !self.is_idle() {
            return Ok(state);
        }

        let viewport = zoom_about_center(&state.viewport, factor)?;
        Ok(commit_viewport(state, viewport, host))
    }

    /// Fit every node into view.
    pub fn fit_to_content<H: InteractionHost>(
        &mut self,
        graph: &Graph,
        state: CanvasState,
        host: &mut H,
    ) -> InteractionResult<CanvasState> {
        state.viewport.validate()?;
        if !self.is_idle() {
            return Ok(state);
        }

        let viewport = fit_viewport(&state.viewport, &graph.nodes);
        Ok(commit_viewport(state, viewport, host))
    }
}

/// Store a new viewport, notifying the host only when it actually changed.
fn commit_viewport<H: InteractionHost>(
    state: CanvasState,
    viewport: Viewport,
    host: &mut H,
) -> CanvasState {
    if viewport == state.viewport {
        return state;
    }
    debug!(zoom = viewport.zoom, x = viewport.x, y = viewport.y, "Viewport changed");
    host.viewport_changed(&viewport);
    state.with_viewport(viewport)
}
