//! # Normal Gizmo Demo
//!
//! Draws vertex and surface normals for a few procedural meshes into a
//! `LineBatch`, the way a host renderer would once per frame.
//!
//! ## What this example shows:
//! - How to register a `NormalGizmo` with the `GizmoManager`
//! - How to build a per-frame `GizmoTarget` from a mesh and its transform
//! - How flat and smooth shading change the surface normals
//!
//! ## Usage:
//! ```bash
//! RUST_LOG=debug cargo run --example normal_gizmo_demo
//! ```

use anyhow::{bail, Context, Result};
use haggis_normals::prelude::*;
use log::info;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let meshes = [
        ("flat cube", generate_cube()),
        ("smooth cube", generate_smooth_cube()),
        ("sphere", generate_sphere(24, 12)),
        ("plane", generate_plane(4.0, 4.0, 4, 4)),
    ];

    let transform = WorldTransform::from_translation(Vector3::new(0.0, 1.0, 0.0))
        .with_rotation_y(Deg(30.0))
        .with_scale(Vector3::new(1.0, 2.0, 1.0));

    let mut gizmo_manager = GizmoManager::new();
    gizmo_manager.add_gizmo(
        "normals",
        Box::new(NormalGizmo::with_config(
            NormalVisualizerConfig::new().with_ray_length(0.25),
        )),
    );

    let mut lines = LineBatch::new();
    for (name, mesh) in &meshes {
        // Walk every draw mode, as an editor hotkey would
        for _ in 0..3 {
            let mode = gizmo_manager
                .get_gizmo_mut("normals")
                .and_then(|gizmo| gizmo.as_any_mut().downcast_mut::<NormalGizmo>())
                .context("normal gizmo is not registered")?
                .cycle_draw_mode();

            lines.clear();
            let target = GizmoTarget::new(mesh.snapshot(), transform);
            let drawn = gizmo_manager.draw_all(&target, &mut lines);

            info!(
                "{:<12} {:<16} {:>4} rays, {:>6} bytes of line vertices",
                name,
                mode.label(),
                drawn,
                lines.as_bytes().len()
            );
        }
    }

    // Broken geometry fails the pass instead of drawing garbage
    let cube = generate_cube();
    let truncated = MeshSnapshot::new(&cube.vertices, &cube.normals, &cube.indices[..35]);
    match compute_normal_rays(truncated, &NormalVisualizerConfig::default()) {
        Err(err @ NormalError::InvalidGeometry { .. }) => info!("Rejected truncated mesh: {}", err),
        Err(err) => return Err(err.into()),
        Ok(_) => bail!("truncated index list was accepted"),
    }

    Ok(())
}
