//! Mesh generation for chunk rendering.
//!
//! Meshes are built on the CPU once per chunk change and handed to the
//! renderer as plain vertex and index buffers grouped by material.

/// Core mesh generation algorithms and data structures.
mod mesh;

pub use mesh::*;
