//! # Graphics Module
//!
//! This module contains the graphics-side pieces of normal visualization:
//! mesh geometry, object transforms, and the gizmo layer that submits debug
//! lines to the host renderer.
//!
//! ## Architecture Overview
//!
//! - **Geometry** ([`geometry`]) - Owned mesh buffers, borrowed snapshots, procedural primitives
//! - **Transform** ([`transform`]) - Object position, rotation and scale
//! - **Gizmos** ([`gizmos`]) - Debug overlays, line sink and per-frame dispatch

pub mod geometry;
pub mod gizmos;
pub mod transform;

// Re-export commonly used types
pub use geometry::{GeometryData, MeshSnapshot};
pub use transform::WorldTransform;
