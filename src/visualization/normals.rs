//! # Normal Visualizer
//!
//! Turns a [`MeshSnapshot`] into debug rays showing either per-vertex normals
//! or per-triangle (surface) normals.
//!
//! Surface normals are the normalized mean of the triangle's three vertex
//! normals rather than the geometric cross product, so the rays agree with
//! what a renderer interpolating the same vertex normals would shade.
//!
//! All output is in mesh-local space. Mapping into world space is the
//! consumer's job (see [`WorldTransform::apply`](crate::gfx::transform::WorldTransform::apply)).
//!
//! ## Usage
//!
//! ```rust
//! use haggis_normals::gfx::geometry::generate_triangle;
//! use haggis_normals::visualization::normals::{compute_normal_rays, DrawMode, NormalVisualizerConfig};
//!
//! let triangle = generate_triangle();
//! let config = NormalVisualizerConfig::new()
//!     .with_draw_mode(DrawMode::Vertex)
//!     .with_ray_length(0.5);
//!
//! let rays: Vec<_> = compute_normal_rays(triangle.snapshot(), &config)?.collect();
//! assert_eq!(rays.len(), 3);
//! # Ok::<(), haggis_normals::error::NormalError>(())
//! ```

use crate::error::{MeshElement, NormalError, NormalResult};
use crate::gfx::geometry::MeshSnapshot;
use cgmath::{InnerSpace, Vector3};
use log::{debug, trace};

/// Default ray length in mesh units
pub const DEFAULT_RAY_LENGTH: f32 = 0.1;

/// Ray length range offered by editor sliders
pub const RAY_LENGTH_UI_RANGE: (f32, f32) = (0.0, 1.0);

/// Which normals to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    /// Draw nothing
    None,
    /// One ray per vertex
    Vertex,
    /// One ray per triangle, from its centroid
    #[default]
    Surface,
}

impl DrawMode {
    /// Cycle to the next mode: None -> Vertex -> Surface -> None
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            DrawMode::None => DrawMode::Vertex,
            DrawMode::Vertex => DrawMode::Surface,
            DrawMode::Surface => DrawMode::None,
        }
    }

    /// Display label for editor controls
    pub fn label(&self) -> &'static str {
        match self {
            DrawMode::None => "None",
            DrawMode::Vertex => "Vertex Normals",
            DrawMode::Surface => "Surface Normals",
        }
    }
}

/// Settings for one visualization pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalVisualizerConfig {
    /// Which normals to draw
    pub draw_mode: DrawMode,
    /// Length of every emitted ray. Non-negative; editors usually keep it in [0, 1].
    pub ray_length: f32,
    /// Ray color (RGB) when `color_from_direction` is off
    pub base_color: [f32; 3],
    /// Color each ray by its direction, mapping (x, y, z) onto (r, g, b)
    pub color_from_direction: bool,
}

impl NormalVisualizerConfig {
    /// Create a configuration with the default settings
    pub fn new() -> Self {
        Self {
            draw_mode: DrawMode::Surface,
            ray_length: DEFAULT_RAY_LENGTH,
            base_color: [1.0, 1.0, 1.0],
            color_from_direction: true,
        }
    }

    pub fn with_draw_mode(mut self, draw_mode: DrawMode) -> Self {
        self.draw_mode = draw_mode;
        self
    }

    pub fn with_ray_length(mut self, ray_length: f32) -> Self {
        self.ray_length = ray_length;
        self
    }

    pub fn with_base_color(mut self, base_color: [f32; 3]) -> Self {
        self.base_color = base_color;
        self
    }

    pub fn with_color_from_direction(mut self, color_from_direction: bool) -> Self {
        self.color_from_direction = color_from_direction;
        self
    }

    /// Ray length clamped to [`RAY_LENGTH_UI_RANGE`], for slider widgets
    pub fn ray_length_clamped(&self) -> f32 {
        self.ray_length
            .clamp(RAY_LENGTH_UI_RANGE.0, RAY_LENGTH_UI_RANGE.1)
    }

    fn ray_color(&self, unit_normal: Vector3<f32>) -> [f32; 3] {
        if self.color_from_direction {
            direction_color(unit_normal)
        } else {
            self.base_color
        }
    }
}

impl Default for NormalVisualizerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A single debug line: start point, scaled direction and color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugRay {
    /// Start of the ray
    pub origin: Vector3<f32>,
    /// Direction already scaled by the ray length
    pub direction: Vector3<f32>,
    /// RGB color; components may fall outside [0, 1]
    pub color: [f32; 3],
}

impl DebugRay {
    /// End point of the ray (`origin + direction`)
    pub fn end(&self) -> Vector3<f32> {
        self.origin + self.direction
    }
}

/// Map a unit direction straight onto RGB.
///
/// Negative components stay negative; clamping is up to the renderer.
pub fn direction_color(unit_normal: Vector3<f32>) -> [f32; 3] {
    [unit_normal.x, unit_normal.y, unit_normal.z]
}

/// Normalize `normal`, rejecting zero vectors and NaN or infinite components.
///
/// The vector is first divided by its largest component, so huge but finite
/// normals do not overflow when squared.
pub fn normalize_normal(
    normal: Vector3<f32>,
    element: MeshElement,
    index: usize,
) -> NormalResult<Vector3<f32>> {
    let largest = normal.x.abs().max(normal.y.abs()).max(normal.z.abs());
    // f32::max drops NaN, so check it separately
    let has_nan = normal.x.is_nan() || normal.y.is_nan() || normal.z.is_nan();
    if has_nan || !(largest > 0.0 && largest.is_finite()) {
        return Err(NormalError::DegenerateNormal { element, index });
    }

    let scaled = normal / largest;
    Ok(scaled / scaled.magnitude())
}

/// Compute the debug rays for `mesh` under `config`.
///
/// The mesh is validated up front: mismatched position/normal counts, and in
/// surface mode a partial triangle or an out-of-range index, fail with
/// [`NormalError::InvalidGeometry`] before any ray is produced. In
/// [`DrawMode::None`] the mesh is not read at all.
///
/// Rays are produced lazily. Elements whose normal cannot be normalized are
/// skipped and counted (see [`NormalRays::skipped`]).
pub fn compute_normal_rays<'a>(
    mesh: MeshSnapshot<'a>,
    config: &NormalVisualizerConfig,
) -> NormalResult<NormalRays<'a>> {
    // None mode walks zero elements
    let (elements, len) = match config.draw_mode {
        DrawMode::None => (MeshElement::Vertex, 0),
        DrawMode::Vertex => {
            mesh.validate_vertices()?;
            (MeshElement::Vertex, mesh.vertex_count())
        }
        DrawMode::Surface => {
            mesh.validate_triangles()?;
            (MeshElement::Triangle, mesh.triangle_count())
        }
    };

    Ok(NormalRays {
        mesh,
        config: *config,
        elements,
        cursor: 0,
        len,
        skipped: 0,
        reported: false,
    })
}

/// Lazy iterator over the rays of one visualization pass
#[derive(Debug, Clone)]
pub struct NormalRays<'a> {
    mesh: MeshSnapshot<'a>,
    config: NormalVisualizerConfig,
    elements: MeshElement,
    cursor: usize,
    len: usize,
    skipped: usize,
    reported: bool,
}

impl<'a> NormalRays<'a> {
    /// Number of degenerate vertices or triangles skipped so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn vertex_ray(&self, index: usize) -> NormalResult<DebugRay> {
        let normal = normalize_normal(
            Vector3::from(self.mesh.normals[index]),
            MeshElement::Vertex,
            index,
        )?;

        Ok(DebugRay {
            origin: Vector3::from(self.mesh.vertices[index]),
            direction: normal * self.config.ray_length,
            color: self.config.ray_color(normal),
        })
    }

    fn surface_ray(&self, triangle: usize) -> NormalResult<DebugRay> {
        let corners = &self.mesh.indices[triangle * 3..triangle * 3 + 3];

        // Divide before summing so three large finite values cannot overflow
        let mut centroid = Vector3::new(0.0, 0.0, 0.0);
        let mut mean_normal = Vector3::new(0.0, 0.0, 0.0);
        for &corner in corners {
            let corner = corner as usize;
            centroid += Vector3::from(self.mesh.vertices[corner]) / 3.0;
            mean_normal += Vector3::from(self.mesh.normals[corner]) / 3.0;
        }

        let normal = normalize_normal(mean_normal, MeshElement::Triangle, triangle)?;

        Ok(DebugRay {
            origin: centroid,
            direction: normal * self.config.ray_length,
            color: self.config.ray_color(normal),
        })
    }
}

impl<'a> Iterator for NormalRays<'a> {
    type Item = DebugRay;

    fn next(&mut self) -> Option<DebugRay> {
        while self.cursor < self.len {
            let index = self.cursor;
            self.cursor += 1;

            let ray = match self.elements {
                MeshElement::Vertex => self.vertex_ray(index),
                MeshElement::Triangle => self.surface_ray(index),
            };

            match ray {
                Ok(ray) => return Some(ray),
                Err(err) => {
                    trace!("Skipping ray: {}", err);
                    self.skipped += 1;
                }
            }
        }

        if self.skipped > 0 && !self.reported {
            self.reported = true;
            debug!(
                "{} pass skipped {} degenerate normal(s)",
                self.config.draw_mode.label(),
                self.skipped
            );
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.len - self.cursor))
    }
}

impl<'a> std::iter::FusedIterator for NormalRays<'a> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::{generate_cube, generate_smooth_cube, generate_sphere, generate_triangle};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const EPSILON: f32 = 1e-5;

    fn assert_vec_near(actual: Vector3<f32>, expected: Vector3<f32>) {
        assert!(
            (actual - expected).magnitude() < EPSILON,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    fn collect(mesh: MeshSnapshot<'_>, config: &NormalVisualizerConfig) -> Vec<DebugRay> {
        compute_normal_rays(mesh, config)
            .expect("valid geometry")
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = NormalVisualizerConfig::default();
        assert_eq!(config.draw_mode, DrawMode::Surface);
        assert_eq!(config.ray_length, 0.1);
        assert_eq!(config.base_color, [1.0, 1.0, 1.0]);
        assert!(config.color_from_direction);
    }

    #[test]
    fn test_draw_mode_cycle() {
        let mut mode = DrawMode::None;
        let mut seen = Vec::new();
        for _ in 0..3 {
            mode = mode.next();
            seen.push(mode);
        }
        assert_eq!(seen, vec![DrawMode::Vertex, DrawMode::Surface, DrawMode::None]);
        assert!(!DrawMode::Surface.label().is_empty());
    }

    #[test]
    fn test_ray_length_clamped() {
        let config = NormalVisualizerConfig::new().with_ray_length(2.5);
        assert_eq!(config.ray_length_clamped(), 1.0);
        // The stored length itself is not clamped
        assert_eq!(config.ray_length, 2.5);
    }

    #[test]
    fn test_none_mode_ignores_geometry() {
        // Deliberately broken mesh: the None pass must not even look at it
        let vertices = [[0.0, 0.0, 0.0]];
        let indices = [0, 5];
        let mesh = MeshSnapshot::new(&vertices, &[], &indices);
        let config = NormalVisualizerConfig::new().with_draw_mode(DrawMode::None);

        let mut rays = compute_normal_rays(mesh, &config).expect("none mode never fails");
        assert_eq!(rays.size_hint(), (0, Some(0)));
        assert!(rays.next().is_none());
        assert_eq!(rays.skipped(), 0);

        let cube = generate_cube();
        assert!(collect(cube.snapshot(), &config).is_empty());
    }

    #[test]
    fn test_unit_triangle_surface() {
        let triangle = generate_triangle();
        let config = NormalVisualizerConfig::new()
            .with_draw_mode(DrawMode::Surface)
            .with_ray_length(0.5);

        let rays = collect(triangle.snapshot(), &config);
        assert_eq!(rays.len(), 1);
        assert_vec_near(rays[0].origin, Vector3::new(1.0 / 3.0, 1.0 / 3.0, 0.0));
        assert_vec_near(rays[0].direction, Vector3::new(0.0, 0.0, 0.5));
    }

    #[test]
    fn test_unit_triangle_vertex() {
        let triangle = generate_triangle();
        let config = NormalVisualizerConfig::new()
            .with_draw_mode(DrawMode::Vertex)
            .with_ray_length(0.5);

        let rays = collect(triangle.snapshot(), &config);
        assert_eq!(rays.len(), 3);
        for (ray, vertex) in rays.iter().zip(&triangle.vertices) {
            assert_eq!(ray.origin, Vector3::from(*vertex));
            assert_vec_near(ray.direction, Vector3::new(0.0, 0.0, 0.5));
            assert_vec_near(ray.end(), Vector3::from(*vertex) + Vector3::new(0.0, 0.0, 0.5));
        }
    }

    #[test]
    fn test_partial_triangle_fails_in_surface_mode() {
        let triangle = generate_triangle();
        let indices = [0, 1, 2, 0];
        let mesh = MeshSnapshot::new(&triangle.vertices, &triangle.normals, &indices);

        let surface = NormalVisualizerConfig::new().with_draw_mode(DrawMode::Surface);
        assert!(matches!(
            compute_normal_rays(mesh, &surface),
            Err(NormalError::InvalidGeometry { .. })
        ));

        // Vertex mode never reads the index list
        let vertex = surface.with_draw_mode(DrawMode::Vertex);
        assert_eq!(collect(mesh, &vertex).len(), 3);
    }

    #[test]
    fn test_mismatched_normals_fail_in_vertex_mode() {
        let triangle = generate_triangle();
        let mesh = MeshSnapshot::new(&triangle.vertices, &triangle.normals[..2], &triangle.indices);
        let config = NormalVisualizerConfig::new().with_draw_mode(DrawMode::Vertex);

        assert!(matches!(
            compute_normal_rays(mesh, &config),
            Err(NormalError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn test_degenerate_vertex_is_skipped() {
        let vertices = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let normals = [[0.0, 0.0, 1.0], [0.0, 0.0, 0.0], [0.0, 2.0, 0.0]];
        let mesh = MeshSnapshot::new(&vertices, &normals, &[0, 1, 2]);
        let config = NormalVisualizerConfig::new()
            .with_draw_mode(DrawMode::Vertex)
            .with_ray_length(1.0);

        let mut rays = compute_normal_rays(mesh, &config).expect("valid geometry");
        let first = rays.next().expect("first vertex");
        let second = rays.next().expect("third vertex");
        assert!(rays.next().is_none());
        assert_eq!(rays.skipped(), 1);

        assert_eq!(first.origin, Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(second.origin, Vector3::new(0.0, 1.0, 0.0));
        assert_vec_near(second.direction, Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_degenerate_face_is_skipped() {
        // Opposing normals cancel out on the first triangle
        let vertices = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]];
        let normals = [[0.0, 0.0, 1.0], [0.0, 0.0, -1.0], [0.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
        let indices = [0, 1, 2, 0, 3, 2];
        let mesh = MeshSnapshot::new(&vertices, &normals, &indices);
        let config = NormalVisualizerConfig::new().with_draw_mode(DrawMode::Surface);

        let mut rays = compute_normal_rays(mesh, &config).expect("valid geometry");
        let only = rays.next().expect("second triangle");
        assert!(rays.next().is_none());
        assert_eq!(rays.skipped(), 1);
        assert_vec_near(only.origin, Vector3::new(1.0 / 3.0, 2.0 / 3.0, 0.0));
    }

    #[test]
    fn test_normalize_rejects_non_finite() {
        let result = normalize_normal(
            Vector3::new(f32::NAN, 0.0, 1.0),
            MeshElement::Vertex,
            4,
        );
        assert_eq!(
            result,
            Err(NormalError::DegenerateNormal {
                element: MeshElement::Vertex,
                index: 4
            })
        );
    }

    #[test]
    fn test_large_finite_normals_are_not_degenerate() {
        let vertices = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let normals = [[1e20, 0.0, 0.0], [3e38, 0.0, 0.0], [3e38, 1e38, 0.0]];
        let indices = [0, 1, 2];
        let mesh = MeshSnapshot::new(&vertices, &normals, &indices);

        let vertex = NormalVisualizerConfig::new()
            .with_draw_mode(DrawMode::Vertex)
            .with_ray_length(0.5);
        let mut rays = compute_normal_rays(mesh, &vertex).expect("valid geometry");
        let first = rays.next().expect("large normal is drawn");
        assert_vec_near(first.direction, Vector3::new(0.5, 0.0, 0.0));
        assert_eq!(rays.by_ref().count(), 2);
        assert_eq!(rays.skipped(), 0);

        let surface = vertex.with_draw_mode(DrawMode::Surface);
        let mut rays = compute_normal_rays(mesh, &surface).expect("valid geometry");
        let face = rays.next().expect("face with huge normals is drawn");
        assert!((face.direction.magnitude() - 0.5).abs() < EPSILON);
        assert!(face.direction.x > 0.0 && face.direction.y > 0.0);
        assert_eq!(rays.skipped(), 0);
    }

    #[test]
    fn test_infinite_normal_is_degenerate() {
        let result = normalize_normal(
            Vector3::new(f32::INFINITY, 0.0, 0.0),
            MeshElement::Triangle,
            2,
        );
        assert!(matches!(result, Err(NormalError::DegenerateNormal { index: 2, .. })));
    }

    #[test]
    fn test_base_color_without_direction_coloring() {
        let sphere = generate_sphere(12, 8);
        let base_color = [0.2, 0.4, 0.8];

        for mode in [DrawMode::Vertex, DrawMode::Surface] {
            let config = NormalVisualizerConfig::new()
                .with_draw_mode(mode)
                .with_base_color(base_color)
                .with_color_from_direction(false);

            let rays = collect(sphere.snapshot(), &config);
            assert!(!rays.is_empty());
            assert!(rays.iter().all(|ray| ray.color == base_color));
        }
    }

    #[test]
    fn test_direction_coloring_matches_unit_direction() {
        let cube = generate_smooth_cube();
        let config = NormalVisualizerConfig::new()
            .with_draw_mode(DrawMode::Surface)
            .with_ray_length(0.25);

        for ray in collect(cube.snapshot(), &config) {
            let unit = ray.direction / 0.25;
            assert_vec_near(Vector3::from(ray.color), unit);
        }

        // Negative components pass through unclamped
        assert_eq!(direction_color(Vector3::new(0.0, -1.0, 0.0)), [0.0, -1.0, 0.0]);
    }

    #[test]
    fn test_surface_origins_are_centroids() {
        let cube = generate_smooth_cube();
        let config = NormalVisualizerConfig::new().with_draw_mode(DrawMode::Surface);
        let rays = collect(cube.snapshot(), &config);
        assert_eq!(rays.len(), cube.triangle_count());

        for (ray, corners) in rays.iter().zip(cube.indices.chunks(3)) {
            let centroid = corners
                .iter()
                .map(|&i| Vector3::from(cube.vertices[i as usize]))
                .fold(Vector3::new(0.0, 0.0, 0.0), |acc, p| acc + p)
                / 3.0;
            assert_vec_near(ray.origin, centroid);
        }
    }

    #[test]
    fn test_random_meshes_keep_ray_length_and_are_repeatable() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..20 {
            let vertex_count = rng.random_range(3..40usize);
            let vertices: Vec<[f32; 3]> = (0..vertex_count)
                .map(|_| {
                    [
                        rng.random_range(-5.0..5.0),
                        rng.random_range(-5.0..5.0),
                        rng.random_range(-5.0..5.0),
                    ]
                })
                .collect();
            let normals: Vec<[f32; 3]> = (0..vertex_count)
                .map(|_| {
                    [
                        rng.random_range(0.1..1.0),
                        rng.random_range(0.1..1.0),
                        rng.random_range(0.1..1.0),
                    ]
                })
                .collect();
            let indices: Vec<u32> = (0..rng.random_range(1..30usize) * 3)
                .map(|_| rng.random_range(0..vertex_count as u32))
                .collect();
            let mesh = MeshSnapshot::new(&vertices, &normals, &indices);
            let ray_length = rng.random_range(0.0..1.0);

            for mode in [DrawMode::Vertex, DrawMode::Surface] {
                let config = NormalVisualizerConfig::new()
                    .with_draw_mode(mode)
                    .with_ray_length(ray_length);

                let first = collect(mesh, &config);
                let second = collect(mesh, &config);
                assert_eq!(first, second);

                let expected = match mode {
                    DrawMode::Vertex => vertex_count,
                    _ => indices.len() / 3,
                };
                assert_eq!(first.len(), expected);
                for ray in &first {
                    assert!((ray.direction.magnitude() - ray_length).abs() < EPSILON);
                }
            }
        }
    }

    #[test]
    fn test_size_hint_is_upper_bound() {
        let cube = generate_cube();
        let config = NormalVisualizerConfig::new().with_draw_mode(DrawMode::Vertex);
        let mut rays = compute_normal_rays(cube.snapshot(), &config).expect("valid geometry");
        assert_eq!(rays.size_hint(), (0, Some(24)));
        let _ = rays.next();
        assert_eq!(rays.size_hint(), (0, Some(23)));
    }
}
