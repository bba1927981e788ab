//! Error types for geometry construction.

use thiserror::Error;

use crate::Point;

/// Errors raised while building geometric primitives.
///
/// Only construction can fail. Inconsistencies inside the sweep structures
/// are logged and never surface as errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// Two defining points coincide within tolerance, or a triangle has no area.
    #[error("degenerate geometry: {reason} near ({x}, {y})", x = .at.x, y = .at.y)]
    Degenerate {
        /// Short description of what collapsed.
        reason: &'static str,
        /// A point close to the offending location.
        at: Point,
    },
}

impl GeometryError {
    pub(crate) fn degenerate(reason: &'static str, at: Point) -> Self {
        Self::Degenerate { reason, at }
    }
}
