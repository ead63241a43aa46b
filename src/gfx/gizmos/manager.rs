//! # Gizmo Manager
//!
//! This module provides the registry that stands in for the host engine's
//! "draw gizmos" callback. The host calls [`GizmoManager::draw_all`] once per
//! frame with the current target; each enabled gizmo then draws in priority order.

use crate::gfx::gizmos::traits::{DebugDraw, Gizmo, GizmoTarget};
use log::warn;
use std::collections::HashMap;

/// Manager for handling multiple gizmo instances
pub struct GizmoManager {
    /// Collection of registered gizmos
    gizmos: HashMap<String, Box<dyn Gizmo>>,

    /// Whether the gizmo system is globally enabled
    enabled: bool,
}

impl GizmoManager {
    /// Create a new gizmo manager
    pub fn new() -> Self {
        Self {
            gizmos: HashMap::new(),
            enabled: true,
        }
    }

    /// Add a new gizmo to the manager, replacing any gizmo with the same name
    ///
    /// # Arguments
    ///
    /// * `name` - Unique identifier for the gizmo
    /// * `gizmo` - The gizmo instance to add
    pub fn add_gizmo(&mut self, name: impl Into<String>, gizmo: Box<dyn Gizmo>) {
        self.gizmos.insert(name.into(), gizmo);
    }

    /// Remove a gizmo from the manager, handing it back to the caller
    pub fn remove_gizmo(&mut self, name: &str) -> Option<Box<dyn Gizmo>> {
        self.gizmos.remove(name)
    }

    /// Check if a gizmo exists by name
    pub fn has_gizmo(&self, name: &str) -> bool {
        self.gizmos.contains_key(name)
    }

    /// Look up a gizmo for reconfiguration.
    ///
    /// Use [`Gizmo::as_any_mut`] to reach the concrete type.
    pub fn get_gizmo_mut(&mut self, name: &str) -> Option<&mut (dyn Gizmo + 'static)> {
        self.gizmos.get_mut(name).map(|gizmo| gizmo.as_mut())
    }

    /// Draw every enabled gizmo for the current frame.
    ///
    /// Gizmos run in ascending priority order (ties broken by name). A gizmo
    /// that fails is logged and skipped; the others still draw.
    ///
    /// # Returns
    ///
    /// Total number of rays submitted to `sink`
    pub fn draw_all(&mut self, target: &GizmoTarget<'_>, sink: &mut dyn DebugDraw) -> usize {
        if !self.enabled {
            return 0;
        }

        let mut visible_gizmos: Vec<_> = self
            .gizmos
            .iter_mut()
            .filter(|(_, gizmo)| gizmo.is_enabled())
            .collect();

        visible_gizmos.sort_by(|(a_name, a), (b_name, b)| {
            a.get_priority()
                .cmp(&b.get_priority())
                .then_with(|| a_name.cmp(b_name))
        });

        let mut total = 0;
        for (name, gizmo) in visible_gizmos {
            match gizmo.draw(target, sink) {
                Ok(drawn) => total += drawn,
                Err(err) => warn!("Gizmo '{}' ({}) failed: {}", name, gizmo.name(), err),
            }
        }
        total
    }

    /// Check if the gizmo system is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set the enabled state of the gizmo system
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Enable or disable every registered gizmo
    pub fn set_all_enabled(&mut self, enabled: bool) {
        for gizmo in self.gizmos.values_mut() {
            gizmo.set_enabled(enabled);
        }
    }

    /// Get the number of registered gizmos
    pub fn gizmo_count(&self) -> usize {
        self.gizmos.len()
    }

    /// Get a sorted list of all gizmo names
    pub fn get_gizmo_names(&self) -> Vec<&String> {
        let mut names: Vec<_> = self.gizmos.keys().collect();
        names.sort();
        names
    }
}

impl Default for GizmoManager {
    fn default() -> Self {
        Self::new()
    }
}
