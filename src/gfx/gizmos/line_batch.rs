//! # Line Batch
//!
//! A [`DebugDraw`] implementation that collects submitted rays into a
//! GPU-ready line list: two [`LineVertex`] entries per ray, suitable for a
//! `LineList` topology draw. Hosts without their own debug-line facility can
//! fill a batch each frame and upload [`LineBatch::as_bytes`] directly.

use crate::gfx::gizmos::traits::DebugDraw;
use cgmath::Vector3;

/// A line-list vertex with position and color.
///
/// # Memory Layout
///
/// The `#[repr(C)]` attribute ensures the struct has a C-compatible memory
/// layout, which is required for GPU buffer operations:
///
/// - offset 0: position `[x, y, z]` (Float32x3)
/// - offset 12: color `[r, g, b]` (Float32x3)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    /// World-space position [x, y, z]
    pub position: [f32; 3],
    /// Display color [r, g, b], already clamped to [0, 1]
    pub color: [f32; 3],
}

impl LineVertex {
    /// Byte distance between consecutive vertices in the buffer
    pub const STRIDE: usize = std::mem::size_of::<LineVertex>();

    /// Byte offset of the color attribute
    pub const COLOR_OFFSET: usize = std::mem::size_of::<[f32; 3]>();
}

/// Accumulates debug rays as line-list vertices
#[derive(Debug, Clone, Default)]
pub struct LineBatch {
    vertices: Vec<LineVertex>,
}

impl LineBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate room for `lines` rays
    pub fn with_capacity(lines: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(lines * 2),
        }
    }

    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    pub fn line_count(&self) -> usize {
        self.vertices.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Raw bytes for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Drop all lines, keeping the allocation for the next frame
    pub fn clear(&mut self) {
        self.vertices.clear();
    }
}

impl DebugDraw for LineBatch {
    fn draw_ray(&mut self, origin: Vector3<f32>, direction: Vector3<f32>, color: [f32; 3]) {
        // Direction-derived colors can be negative
        let color = color.map(|c| c.clamp(0.0, 1.0));
        let end = origin + direction;

        self.vertices.push(LineVertex {
            position: origin.into(),
            color,
        });
        self.vertices.push(LineVertex {
            position: end.into(),
            color,
        });
    }
}
