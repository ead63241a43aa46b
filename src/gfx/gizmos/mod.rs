//! # Gizmo System
//!
//! This module provides the gizmo layer that connects normal visualization to
//! a host engine's debug drawing. Gizmos are debug overlays drawn on demand;
//! they read a mesh and its world transform and submit colored lines.
//!
//! ## Architecture
//!
//! The gizmo system is built around the [`Gizmo`] trait. The [`GizmoManager`]
//! replaces the host's implicit per-frame callback with an explicit
//! [`GizmoManager::draw_all`] call, and the [`DebugDraw`] trait abstracts the
//! host's immediate-mode line facility.
//!
//! ## Key Components
//!
//! - [`Gizmo`] - Base trait for all gizmo implementations
//! - [`GizmoManager`] - Manages multiple gizmo instances
//! - [`NormalGizmo`] - Shows vertex or surface normals
//! - [`LineBatch`] - Collects rays into a GPU-ready line list
//!
//! ## Usage
//!
//! ```rust
//! use haggis_normals::gfx::geometry::generate_sphere;
//! use haggis_normals::gfx::gizmos::{GizmoManager, GizmoTarget, LineBatch, NormalGizmo};
//! use haggis_normals::gfx::transform::WorldTransform;
//!
//! let sphere = generate_sphere(16, 8);
//! let mut gizmo_manager = GizmoManager::new();
//! gizmo_manager.add_gizmo("normals", Box::new(NormalGizmo::new()));
//!
//! // Once per frame
//! let target = GizmoTarget::new(sphere.snapshot(), WorldTransform::default());
//! let mut lines = LineBatch::new();
//! let drawn = gizmo_manager.draw_all(&target, &mut lines);
//! assert_eq!(drawn, lines.line_count());
//! ```

pub mod line_batch;
pub mod manager;
pub mod normal_gizmo;
pub mod traits;

// Re-export main types
pub use line_batch::{LineBatch, LineVertex};
pub use manager::GizmoManager;
pub use normal_gizmo::NormalGizmo;
pub use traits::{DebugDraw, Gizmo, GizmoTarget};
