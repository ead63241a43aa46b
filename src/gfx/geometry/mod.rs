//! # Mesh Geometry
//!
//! This module holds the geometry types the normal visualizer reads from:
//! an owned [`GeometryData`] buffer set and the borrowed [`MeshSnapshot`] view
//! handed to a single visualization pass. It also provides procedural
//! primitives that act as ready-made geometry providers.
//!
//! ## Supported Primitives
//!
//! - **Cube**: Unit cube with flat per-face normals
//! - **Sphere**: UV sphere with configurable resolution
//! - **Plane**: Flat plane with configurable size and subdivisions
//!
//! ## Usage
//!
//! ```rust
//! use haggis_normals::gfx::geometry::{generate_cube, generate_sphere};
//!
//! let cube = generate_cube();
//! let snapshot = cube.snapshot();
//! assert_eq!(snapshot.triangle_count(), 12);
//!
//! let sphere = generate_sphere(32, 16);
//! assert_eq!(sphere.vertex_count(), sphere.normals.len());
//! ```

pub mod primitives;

pub use primitives::*;

use crate::error::{NormalError, NormalResult};

/// Owned geometry buffers, as produced by a mesh loader or generator
///
/// This is the full per-vertex layout a loader hands over. Normal
/// visualization only borrows positions, normals and indices through
/// [`GeometryData::snapshot`]; `tex_coords` travels along for hosts that
/// also render the mesh.
#[derive(Debug, Clone)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Texture coordinates (u, v)
    pub tex_coords: Vec<[f32; 2]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl GeometryData {
    /// Create a new empty geometry data structure
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            tex_coords: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Borrow the buffers as a read-only snapshot for one visualization pass
    pub fn snapshot(&self) -> MeshSnapshot<'_> {
        MeshSnapshot::new(&self.vertices, &self.normals, &self.indices)
    }
}

impl Default for GeometryData {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view over a mesh's positions, normals and triangle indices.
///
/// The view borrows from whatever owns the mesh for the duration of one
/// visualization pass. Nothing is checked at construction; call
/// [`MeshSnapshot::validate_vertices`] or [`MeshSnapshot::validate_triangles`]
/// (the visualizer does this for you) before indexing.
#[derive(Debug, Clone, Copy)]
pub struct MeshSnapshot<'a> {
    /// Vertex positions in mesh-local space
    pub vertices: &'a [[f32; 3]],
    /// One normal per vertex, parallel to `vertices`
    pub normals: &'a [[f32; 3]],
    /// Triangle list, three indices per triangle
    pub indices: &'a [u32],
}

impl<'a> MeshSnapshot<'a> {
    pub fn new(vertices: &'a [[f32; 3]], normals: &'a [[f32; 3]], indices: &'a [u32]) -> Self {
        Self {
            vertices,
            normals,
            indices,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of complete triangles in the index list
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check that every vertex has exactly one normal.
    pub fn validate_vertices(&self) -> NormalResult<()> {
        if self.vertices.len() != self.normals.len() {
            return Err(NormalError::invalid_geometry(format!(
                "{} vertex positions but {} vertex normals",
                self.vertices.len(),
                self.normals.len()
            )));
        }
        Ok(())
    }

    /// Check the vertex arrays plus the triangle list: the index count must be
    /// a multiple of three and every index must address an existing vertex.
    pub fn validate_triangles(&self) -> NormalResult<()> {
        self.validate_vertices()?;

        if self.indices.len() % 3 != 0 {
            return Err(NormalError::invalid_geometry(format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            )));
        }

        let vertex_count = self.vertices.len();
        if let Some((offset, &index)) = self
            .indices
            .iter()
            .enumerate()
            .find(|(_, &index)| index as usize >= vertex_count)
        {
            return Err(NormalError::invalid_geometry(format!(
                "index {} at offset {} is out of bounds for {} vertices",
                index, offset, vertex_count
            )));
        }

        Ok(())
    }
}
