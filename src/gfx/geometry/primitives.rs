//! # Primitive Shape Generation
//!
//! Procedural meshes used as geometry providers for the normal gizmo.
//! All shapes come with per-vertex normals and texture coordinates, so their
//! snapshots pass validation in every draw mode.

use super::GeometryData;
use std::f32::consts::PI;

/// Outward normal, then the two in-plane axes spanning each cube face
const CUBE_FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
];

/// Generate a single right triangle in the XY plane
///
/// Vertices are `(0,0,0)`, `(1,0,0)` and `(0,1,0)`, all with normal `+Z`.
/// Handy as the smallest mesh that exercises both draw modes.
pub fn generate_triangle() -> GeometryData {
    let mut data = GeometryData::new();
    data.vertices = vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
    data.normals = vec![[0.0, 0.0, 1.0]; 3];
    data.tex_coords = vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
    data.indices = vec![0, 1, 2];
    data
}

/// Generate a unit cube centered at the origin with flat shading
///
/// Returns a cube with vertices from -0.5 to 0.5 on all axes. Every face owns
/// its four corners, so vertex normals equal the face normal and vertex and
/// surface modes point the same way.
pub fn generate_cube() -> GeometryData {
    let mut data = GeometryData::new();

    for (normal, u_axis, v_axis) in CUBE_FACES.iter() {
        let base = data.vertices.len() as u32;

        for &(u, v) in &[(0.0f32, 0.0f32), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
            let su = u - 0.5;
            let sv = v - 0.5;
            data.vertices.push([
                normal[0] * 0.5 + u_axis[0] * su + v_axis[0] * sv,
                normal[1] * 0.5 + u_axis[1] * su + v_axis[1] * sv,
                normal[2] * 0.5 + u_axis[2] * su + v_axis[2] * sv,
            ]);
            data.normals.push(*normal);
            data.tex_coords.push([u, v]);
        }

        // Two counter-clockwise triangles per face
        data.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    data
}

/// Generate a unit cube with shared corners and smooth normals
///
/// Only the eight corners exist, each carrying the normalized diagonal as its
/// normal. Surface mode therefore averages three diagonals per face instead of
/// reading a flat face normal, which makes the two draw modes visibly differ.
pub fn generate_smooth_cube() -> GeometryData {
    let mut data = GeometryData::new();
    let inv_sqrt3 = 1.0 / 3.0f32.sqrt();

    for corner in 0..8u32 {
        let x: f32 = if corner & 1 == 0 { -0.5 } else { 0.5 };
        let y: f32 = if corner & 2 == 0 { -0.5 } else { 0.5 };
        let z: f32 = if corner & 4 == 0 { -0.5 } else { 0.5 };
        data.vertices.push([x, y, z]);
        data.normals.push([
            x.signum() * inv_sqrt3,
            y.signum() * inv_sqrt3,
            z.signum() * inv_sqrt3,
        ]);
        data.tex_coords.push([x + 0.5, y + 0.5]);
    }

    // Corner index = x | y << 1 | z << 2
    let quads: [[u32; 4]; 6] = [
        [4, 5, 7, 6], // +Z
        [1, 0, 2, 3], // -Z
        [0, 4, 6, 2], // -X
        [5, 1, 3, 7], // +X
        [6, 7, 3, 2], // +Y
        [0, 1, 5, 4], // -Y
    ];
    for [a, b, c, d] in quads {
        data.indices.extend_from_slice(&[a, b, c, c, d, a]);
    }

    data
}

/// Generate a UV sphere with specified resolution
///
/// # Arguments
/// * `longitude_segments` - Number of vertical segments (at least 3)
/// * `latitude_segments` - Number of horizontal segments (at least 2)
///
/// Returns a sphere of radius 1.0 centered at the origin, Y-up.
pub fn generate_sphere(longitude_segments: u32, latitude_segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let long_segs = longitude_segments.max(3);
    let lat_segs = latitude_segments.max(2);

    for lat in 0..=lat_segs {
        let v = lat as f32 / lat_segs as f32;
        let (sin_theta, cos_theta) = (v * PI).sin_cos();

        for long in 0..=long_segs {
            let u = long as f32 / long_segs as f32;
            let (sin_phi, cos_phi) = (u * 2.0 * PI).sin_cos();

            // Unit sphere: the position is its own normal
            let point = [sin_theta * cos_phi, cos_theta, sin_theta * sin_phi];
            data.vertices.push(point);
            data.normals.push(point);
            data.tex_coords.push([u, v]);
        }
    }

    let row = long_segs + 1;
    for lat in 0..lat_segs {
        for long in 0..long_segs {
            let first = lat * row + long;
            let second = first + row;

            data.indices
                .extend_from_slice(&[first, second, first + 1, second, second + 1, first + 1]);
        }
    }

    data
}

/// Generate a plane in the XY plane (horizontal in Z-up coordinate system)
///
/// # Arguments
/// * `width` - Width of the plane (X direction)
/// * `height` - Height of the plane (Y direction)
/// * `width_segments` - Number of subdivisions along width
/// * `height_segments` - Number of subdivisions along height
///
/// Returns a plane centered at the origin with every normal pointing along +Z.
pub fn generate_plane(width: f32, height: f32, width_segments: u32, height_segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let w_segs = width_segments.max(1);
    let h_segs = height_segments.max(1);

    for y in 0..=h_segs {
        let v = y as f32 / h_segs as f32;
        for x in 0..=w_segs {
            let u = x as f32 / w_segs as f32;
            data.vertices.push([(u - 0.5) * width, (v - 0.5) * height, 0.0]);
            data.normals.push([0.0, 0.0, 1.0]);
            data.tex_coords.push([u, v]);
        }
    }

    let row = w_segs + 1;
    for y in 0..h_segs {
        for x in 0..w_segs {
            let i = y * row + x;
            let next_row = i + row;
            data.indices
                .extend_from_slice(&[i, next_row, i + 1, next_row, next_row + 1, i + 1]);
        }
    }

    data
}
