//! # Visualization Module
//!
//! Pure computations that turn mesh data into debug primitives. Nothing here
//! draws or keeps state between calls; the [`gizmos`](crate::gfx::gizmos)
//! layer takes the results to the renderer.
//!
//! ## Key Components
//!
//! - [`compute_normal_rays`] - Vertex or surface normal rays for one mesh
//! - [`NormalVisualizerConfig`] - Draw mode, ray length and coloring

pub mod normals;

// Re-export main types
pub use normals::{compute_normal_rays, DebugRay, DrawMode, NormalRays, NormalVisualizerConfig};
