//! # Haggis Normals Prelude
//!
//! This module provides a convenient way to import commonly used types and traits.
//! It's designed to reduce boilerplate imports in hosts wiring up normal gizmos.
//!
//! ## Usage
//!
//! ```rust
//! use haggis_normals::prelude::*;
//!
//! let cube = generate_cube();
//! let config = NormalVisualizerConfig::new().with_draw_mode(DrawMode::Vertex);
//!
//! let mut lines = LineBatch::new();
//! for ray in compute_normal_rays(cube.snapshot(), &config)? {
//!     let world = WorldTransform::default().apply(&ray);
//!     lines.draw_ray(world.origin, world.direction, world.color);
//! }
//! assert_eq!(lines.line_count(), 24);
//! # Ok::<(), NormalError>(())
//! ```

// Re-export errors
pub use crate::error::{MeshElement, NormalError, NormalResult};

// Re-export geometry and transform types
pub use crate::gfx::geometry::{
    generate_cube, generate_plane, generate_smooth_cube, generate_sphere, generate_triangle,
    GeometryData, MeshSnapshot,
};
pub use crate::gfx::transform::WorldTransform;

// Re-export gizmo framework
pub use crate::gfx::gizmos::{
    DebugDraw, Gizmo, GizmoManager, GizmoTarget, LineBatch, LineVertex, NormalGizmo,
};

// Re-export visualization types
pub use crate::visualization::normals::{
    compute_normal_rays, direction_color, DebugRay, DrawMode, NormalRays, NormalVisualizerConfig,
};

// Re-export common external dependencies
pub use cgmath::{Deg, InnerSpace, Quaternion, Vector3};
