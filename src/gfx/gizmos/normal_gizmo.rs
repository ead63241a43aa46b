//! # Normal Gizmo
//!
//! Draws vertex or surface normals of the target mesh as colored rays.
//! Rays are computed in mesh-local space and mapped through the target's
//! world transform just before they reach the sink.

use crate::error::NormalResult;
use crate::gfx::gizmos::traits::{DebugDraw, Gizmo, GizmoTarget};
use crate::visualization::normals::{compute_normal_rays, DrawMode, NormalVisualizerConfig};
use log::trace;
use std::any::Any;

/// Gizmo that visualizes mesh normals
#[derive(Debug, Clone)]
pub struct NormalGizmo {
    /// Whether the gizmo is currently enabled
    enabled: bool,

    /// Settings for the next draw
    config: NormalVisualizerConfig,
}

impl NormalGizmo {
    /// Create a new normal gizmo with default settings
    pub fn new() -> Self {
        Self::with_config(NormalVisualizerConfig::default())
    }

    pub fn with_config(config: NormalVisualizerConfig) -> Self {
        Self {
            enabled: true,
            config,
        }
    }

    pub fn config(&self) -> &NormalVisualizerConfig {
        &self.config
    }

    /// Mutable access for editor controls; changes apply from the next draw
    pub fn config_mut(&mut self) -> &mut NormalVisualizerConfig {
        &mut self.config
    }

    /// Advance to the next draw mode (None -> Vertex -> Surface -> None)
    pub fn cycle_draw_mode(&mut self) -> DrawMode {
        self.config.draw_mode = self.config.draw_mode.next();
        self.config.draw_mode
    }
}

impl Default for NormalGizmo {
    fn default() -> Self {
        Self::new()
    }
}

impl Gizmo for NormalGizmo {
    fn draw(&mut self, target: &GizmoTarget<'_>, sink: &mut dyn DebugDraw) -> NormalResult<usize> {
        if !self.enabled || self.config.draw_mode == DrawMode::None {
            return Ok(0);
        }

        let mut drawn = 0;
        for local in compute_normal_rays(target.mesh, &self.config)? {
            let world = target.transform.apply(&local);
            sink.draw_ray(world.origin, world.direction, world.color);
            drawn += 1;
        }

        trace!("{}: drew {} {}", self.name(), drawn, self.config.draw_mode.label());
        Ok(drawn)
    }

    fn name(&self) -> &str {
        "Normal Gizmo"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
