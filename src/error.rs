//! Error types for the interaction core and the graph model.
//!
//! Only host programming errors are errors here. "Nothing under the cursor"
//! and similar runtime outcomes are `None` or empty results.

use thiserror::Error;

/// Precondition violations at the interaction-core call boundary
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InteractionError {
    /// Zoom factor was zero, negative, NaN or infinite
    #[error("Invalid zoom factor: {0} (must be finite and > 0)")]
    InvalidZoomFactor(f32),

    /// Viewport size is not strictly positive
    #[error("Invalid viewport size: {width}x{height}")]
    InvalidViewportSize { width: f32, height: f32 },

    /// Viewport zoom is outside the supported range
    #[error("Viewport zoom {zoom} outside [{min}, {max}]")]
    ZoomOutOfRange { zoom: f32, min: f32, max: f32 },

    /// Viewport carries a NaN or infinite coordinate
    #[error("Viewport has non-finite field: {0}")]
    NonFinite(&'static str),
}

/// Result type alias for interaction-core operations
pub type InteractionResult<T> = Result<T, InteractionError>;

/// Structural invariant violations in the graph model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A node with this ID already exists
    #[error("Duplicate node id: {0}")]
    DuplicateNode(String),

    /// An edge with this ID already exists
    #[error("Duplicate edge id: {0}")]
    DuplicateEdge(String),

    /// Node has a non-positive width or height
    #[error("Node {0} has non-positive size")]
    InvalidNodeSize(String),

    /// Edge connects a node to itself
    #[error("Self-loop on node {0}")]
    SelfLoop(String),

    /// Edge endpoint does not reference an existing node
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    /// An edge between these two nodes already exists
    #[error("Edge {from} -> {to} already exists")]
    AlreadyConnected { from: String, to: String },

    /// No edge with this ID exists
    #[error("Unknown edge: {0}")]
    UnknownEdge(String),
}

/// Result type alias for graph operations
pub type GraphResult<T> = Result<T, GraphError>;
