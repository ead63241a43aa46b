// src/lib.rs
//! Haggis Normals
//!
//! Debug-overlay visualization of mesh normals for the Haggis engine: per-vertex
//! or per-face rays, optionally colored by direction, submitted through the
//! host renderer's line drawing.

pub mod error;
pub mod gfx;
pub mod prelude;
pub mod visualization;

// Re-export main types for convenience
pub use error::{NormalError, NormalResult};
pub use visualization::normals::{compute_normal_rays, DrawMode, NormalVisualizerConfig};
