//! # Normal Visualization Errors
//!
//! Error type shared by the geometry, visualization and gizmo modules.

use thiserror::Error;

/// Which kind of mesh element a degenerate normal belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshElement {
    /// A single vertex, indexed into the vertex arrays
    Vertex,
    /// A triangle, indexed by triangle number (not by index-buffer offset)
    Triangle,
}

impl std::fmt::Display for MeshElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeshElement::Vertex => write!(f, "vertex"),
            MeshElement::Triangle => write!(f, "triangle"),
        }
    }
}

/// Errors raised while turning mesh geometry into debug rays
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalError {
    /// The mesh buffers break the snapshot contract. Aborts the whole pass.
    #[error("Invalid geometry: {reason}")]
    InvalidGeometry { reason: String },

    /// A normal (or averaged face normal) has zero length and cannot be normalized.
    /// Only that element is skipped; the pass continues.
    #[error("Degenerate normal on {element} {index}")]
    DegenerateNormal { element: MeshElement, index: usize },
}

impl NormalError {
    pub(crate) fn invalid_geometry(reason: impl Into<String>) -> Self {
        NormalError::InvalidGeometry {
            reason: reason.into(),
        }
    }
}

/// Result alias for normal visualization operations
pub type NormalResult<T> = Result<T, NormalError>;
