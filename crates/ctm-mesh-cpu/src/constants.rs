//! Shared constants for ctm-mesh-cpu. Centralizes the border/corner tuning values.

/// Fraction of the face the interior keeps along each bordered edge.
pub const DEFAULT_SCALE_FACTOR: f32 = 15.0 / 16.0;

/// Inset of the corner-fill quad from its tip, along each edge direction.
pub(crate) const CORNER_INSET: f32 = 1.0 / 16.0;
/// Push of the corner tip along the face normal (z-fighting with the face).
pub(crate) const CORNER_NUDGE: f32 = 0.001;
/// Per-component floor applied to the corner tip before the bounds adjustment.
pub(crate) const CORNER_FLOOR: f32 = -0.001;

// Colors
pub(crate) const OPAQUE_WHITE: [u8; 4] = [255, 255, 255, 255];
