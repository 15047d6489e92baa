//! Vertex data structures for terrain meshes.
//!
//! This module defines the vertex format emitted by the mesher and consumed by
//! whatever renderer draws the meshes.

use cgmath::{Point3, Vector3};

/// A vertex of a terrain mesh.
///
/// # Memory Layout
/// - Position: 3x f32 (12 bytes), chunk-local
/// - Normal: 3x f32 (12 bytes), unit outward face normal
///
/// Total size: 24 bytes, tightly packed, so a vertex slice can be uploaded as
/// raw bytes through `bytemuck`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Position relative to the owning chunk's origin
    position: [f32; 3],
    /// Outward face normal
    normal: [f32; 3],
}

impl Vertex {
    /// Byte distance between consecutive vertices in a buffer.
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
    /// Byte offset of the position attribute.
    pub const POSITION_OFFSET: usize = 0;
    /// Byte offset of the normal attribute.
    pub const NORMAL_OFFSET: usize = std::mem::size_of::<[f32; 3]>();

    /// Creates a new vertex.
    pub fn new(position: Point3<f32>, normal: Vector3<f32>) -> Self {
        Vertex {
            position: position.into(),
            normal: normal.into(),
        }
    }

    /// Chunk-local position.
    pub fn position(&self) -> Point3<f32> {
        self.position.into()
    }

    /// Outward face normal.
    pub fn normal(&self) -> Vector3<f32> {
        self.normal.into()
    }
}
