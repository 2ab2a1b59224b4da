//! Reference host - owns a graph and applies what the gesture machine asks
//! for.
//!
//! `Board` is the smallest complete embedding of the interaction core:
//! every input is forwarded to the [`GestureController`], the callbacks it
//! makes are recorded, and the structural ones are then applied to the
//! graph through the checked [`Graph`] operations. The recorded events are
//! returned to the caller so a presentation layer can react to them.
//!
//! Live `node_dragged` events are not applied; only the final
//! `node_drag_ended` positions are written back.

use crate::constants::ZOOM_STEP_FACTOR;
use crate::error::InteractionResult;
use crate::graph::Graph;
use crate::input::{CanvasState, GestureController, GestureState, HostEvent, PointerEvent, WheelEvent};
use crate::perf::ScopedTimer;
use crate::selection::Selection;
use crate::types::Viewport;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct Board {
    graph: Graph,
    state: CanvasState,
    controller: GestureController,
}

impl Board {
    /// Create a board showing `graph` through `viewport`.
    pub fn new(graph: Graph, viewport: Viewport) -> InteractionResult<Self> {
        viewport.validate()?;
        Ok(Self {
            graph,
            state: CanvasState::new(viewport),
            controller: GestureController::new(),
        })
    }

    /// Restore a board from a graph with a saved viewport, falling back to
    /// an untransformed view of the given size.
    pub fn restore(graph: Graph, width: f32, height: f32) -> InteractionResult<Self> {
        let viewport = match graph.viewport {
            Some(saved) => Viewport::new(saved.x, saved.y, saved.zoom, width, height)?,
            None => Viewport::with_size(width, height)?,
        };
        Self::new(graph, viewport)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn state(&self) -> &CanvasState {
        &self.state
    }

    pub fn viewport(&self) -> &Viewport {
        &self.state.viewport
    }

    pub fn selection(&self) -> &Selection {
        &self.state.selection
    }

    /// The active gesture, for drawing drag offsets, edge previews and the
    /// marquee
    pub fn gesture(&self) -> Option<&GestureState> {
        self.controller.gesture()
    }

    /// The graph with the current viewport stored in it, ready to persist
    pub fn snapshot(&self) -> Graph {
        self.graph.clone().with_viewport(self.state.viewport)
    }

    /// Resize the visible surface, keeping offset and zoom.
    pub fn resize(&mut self, width: f32, height: f32) -> InteractionResult<()> {
        let v = self.state.viewport;
        let viewport = Viewport::new(v.x, v.y, v.zoom, width, height)?;
        self.state = self.state.clone().with_viewport(viewport);
        Ok(())
    }

    // ========================================================================
    // Input
    // ========================================================================

    pub fn pointer_down(&mut self, event: PointerEvent) -> InteractionResult<Vec<HostEvent>> {
        self.dispatch("pointer_down", |c, g, s, h| c.pointer_down(g, s, event, h))
    }

    pub fn pointer_move(&mut self, event: PointerEvent) -> InteractionResult<Vec<HostEvent>> {
        self.dispatch("pointer_move", |c, g, s, h| c.pointer_move(g, s, event, h))
    }

    pub fn pointer_up(&mut self, event: PointerEvent) -> InteractionResult<Vec<HostEvent>> {
        self.dispatch("pointer_up", |c, g, s, h| c.pointer_up(g, s, event, h))
    }

    pub fn pointer_leave(&mut self, event: PointerEvent) -> InteractionResult<Vec<HostEvent>> {
        self.dispatch("pointer_leave", |c, g, s, h| c.pointer_leave(g, s, event, h))
    }

    pub fn wheel(&mut self, event: WheelEvent) -> InteractionResult<Vec<HostEvent>> {
        self.dispatch("wheel", |c, _, s, h| c.wheel(s, event, h))
    }

    // ========================================================================
    // Commands
    // ========================================================================

    pub fn zoom_in(&mut self) -> InteractionResult<Vec<HostEvent>> {
        self.zoom_by(ZOOM_STEP_FACTOR)
    }

    pub fn zoom_out(&mut self) -> InteractionResult<Vec<HostEvent>> {
        self.zoom_by(1.0 / ZOOM_STEP_FACTOR)
    }

    pub fn zoom_by(&mut self, factor: f32) -> InteractionResult<Vec<HostEvent>> {
        self.dispatch("zoom_by", |c, _, s, h| c.zoom_by(s, factor, h))
    }

    pub fn fit_to_content(&mut self) -> InteractionResult<Vec<HostEvent>> {
        self.dispatch("fit_to_content", |c, g, s, h| c.fit_to_content(g, s, h))
    }

    pub fn delete_selection(&mut self) -> Vec<HostEvent> {
        let mut events = Vec::new();
        self.state = self
            .controller
            .delete_selection(self.state.clone(), &mut events);
        self.apply(&events);
        events
    }

    pub fn select_all(&mut self) {
        self.state = self.controller.select_all(&self.graph, self.state.clone());
    }

    /// Run one handler, record its callbacks and apply them.
    ///
    /// On error the canvas state is left untouched and nothing is applied.
    fn dispatch<F>(&mut self, name: &'static str, handler: F) -> InteractionResult<Vec<HostEvent>>
    where
        F: FnOnce(
            &mut GestureController,
            &Graph,
            CanvasState,
            &mut Vec<HostEvent>,
        ) -> InteractionResult<CanvasState>,
    {
        let _timer = ScopedTimer::for_handler(name);
        let mut events = Vec::new();
        self.state = handler(&mut self.controller, &self.graph, self.state.clone(), &mut events)?;
        self.apply(&events);
        Ok(events)
    }

    /// Write structural callbacks back into the graph.
    fn apply(&mut self, events: &[HostEvent]) {
        for event in events {
            match event {
                HostEvent::NodeDragEnded { id, x, y } => match self.graph.move_node(id, *x, *y) {
                    Ok(graph) => self.graph = graph,
                    Err(e) => warn!(error = %e, "Dropping node move"),
                },
                HostEvent::EdgeCreateRequested { edge } => match self.graph.add_edge(edge.clone()) {
                    Ok(graph) => {
                        debug!(edge = %edge.id, "Edge added");
                        self.graph = graph;
                    }
                    Err(e) => warn!(error = %e, "Rejected edge request"),
                },
                HostEvent::NodesDeleted { ids } => {
                    self.graph = self.graph.remove_nodes(ids);
                    debug!(count = ids.len(), "Nodes removed");
                }
                HostEvent::EdgesDeleted { ids } => {
                    self.graph = self.graph.remove_edges(ids);
                    debug!(count = ids.len(), "Edges removed");
                }
                HostEvent::NodeClicked { .. }
                | HostEvent::NodeDragged { .. }
                | HostEvent::EdgeClicked { .. }
                | HostEvent::ViewportChanged { .. } => {}
            }
        }
    }
}
