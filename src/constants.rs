//! Interaction constants.
//!
//! Centralizes the magic numbers of the interaction core. None of these are
//! runtime-configurable.

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f32 = 0.1;

/// Maximum zoom level
pub const MAX_ZOOM: f32 = 5.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Zoom multiplier per wheel-delta unit (`factor = base^delta`)
pub const WHEEL_ZOOM_BASE: f32 = 0.999;

/// Zoom multiplier for toolbar zoom-in / zoom-out steps
pub const ZOOM_STEP_FACTOR: f32 = 1.2;

/// Margin in canvas units around the content when fitting the view
pub const FIT_PADDING: f32 = 50.0;

// ============================================================================
// Hit Testing
// ============================================================================

/// Fraction of a node's width/height, per side, that starts edge creation
pub const BORDER_ZONE_FRACTION: f32 = 0.25;

/// Maximum pointer distance in pixels for an edge to count as hit
pub const EDGE_HIT_THRESHOLD: f32 = 8.0;

// ============================================================================
// Edge Rendering
// ============================================================================

/// Horizontal control-point offset as a fraction of the endpoint dx
pub const BEZIER_CONTROL_FRACTION: f32 = 0.4;

/// Prefix of generated edge IDs (`edge-{source}-{target}`)
pub const EDGE_ID_PREFIX: &str = "edge-";

// ============================================================================
// Profiling
// ============================================================================

/// Threshold above which a single pointer handler is reported as slow
pub const SLOW_HANDLER_MS: f64 = 4.0;
