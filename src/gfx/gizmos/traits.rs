//! # Gizmo Traits
//!
//! This module defines the seams between gizmos and the host engine: the
//! [`DebugDraw`] sink gizmos submit lines to, the per-frame [`GizmoTarget`]
//! input, and the [`Gizmo`] trait itself.

use crate::error::NormalResult;
use crate::gfx::geometry::MeshSnapshot;
use crate::gfx::transform::WorldTransform;
use cgmath::Vector3;
use std::any::Any;

/// Immediate-mode line drawing facility provided by the host renderer.
///
/// Coordinates are in world space. Colors are passed through unclamped; the
/// implementation decides how to display out-of-range components.
pub trait DebugDraw {
    /// Draw a line from `origin` to `origin + direction`
    fn draw_ray(&mut self, origin: Vector3<f32>, direction: Vector3<f32>, color: [f32; 3]);
}

/// Everything a gizmo may read while drawing one frame.
///
/// Built fresh by the caller every frame and dropped afterwards; gizmos never
/// keep references to it.
#[derive(Debug, Clone, Copy)]
pub struct GizmoTarget<'a> {
    /// Geometry of the object being inspected
    pub mesh: MeshSnapshot<'a>,
    /// Placement of that object in the world
    pub transform: WorldTransform,
}

impl<'a> GizmoTarget<'a> {
    pub fn new(mesh: MeshSnapshot<'a>, transform: WorldTransform) -> Self {
        Self { mesh, transform }
    }
}

/// Core trait for gizmo components.
///
/// Gizmos are debug overlays drawn on demand. The host calls [`Gizmo::draw`]
/// once per frame (usually through a [`GizmoManager`](super::GizmoManager))
/// with the current target and a line sink.
///
/// ## Examples
///
/// ```rust
/// use haggis_normals::error::NormalResult;
/// use haggis_normals::gfx::gizmos::{DebugDraw, Gizmo, GizmoTarget};
/// use std::any::Any;
///
/// struct OriginGizmo {
///     enabled: bool,
/// }
///
/// impl Gizmo for OriginGizmo {
///     fn draw(&mut self, target: &GizmoTarget<'_>, sink: &mut dyn DebugDraw) -> NormalResult<usize> {
///         let origin = target.transform.position;
///         sink.draw_ray(origin, cgmath::Vector3::unit_y(), [0.0, 1.0, 0.0]);
///         Ok(1)
///     }
///
///     fn name(&self) -> &str { "Origin Gizmo" }
///     fn is_enabled(&self) -> bool { self.enabled }
///     fn set_enabled(&mut self, enabled: bool) { self.enabled = enabled; }
///     fn as_any(&self) -> &dyn Any { self }
///     fn as_any_mut(&mut self) -> &mut dyn Any { self }
/// }
/// ```
pub trait Gizmo {
    /// Draw the gizmo for the current frame.
    ///
    /// # Arguments
    ///
    /// * `target` - Mesh and transform of the inspected object
    /// * `sink` - Line facility to submit world-space rays to
    ///
    /// # Returns
    ///
    /// The number of rays submitted, or the error that aborted the pass
    fn draw(&mut self, target: &GizmoTarget<'_>, sink: &mut dyn DebugDraw) -> NormalResult<usize>;

    /// Get the name of the gizmo, used for display and logging
    fn name(&self) -> &str;

    /// Check if the gizmo is currently enabled
    fn is_enabled(&self) -> bool;

    /// Set the enabled state of the gizmo
    fn set_enabled(&mut self, enabled: bool);

    /// Get the priority of this gizmo for drawing order.
    ///
    /// Gizmos with higher priority values are drawn later (on top).
    /// Default priority is 0.
    fn get_priority(&self) -> i32 {
        0
    }

    /// Support for downcasting to concrete types
    fn as_any(&self) -> &dyn Any;

    /// Support for mutable downcasting to concrete types
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
