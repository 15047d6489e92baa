//! Mesh generation for voxel terrain.
//!
//! This module converts a chunk's block grid into renderable geometry. It
//! implements greedy meshing to reduce the number of quads by combining
//! coplanar faces of the same block type.
//!
//! # Architecture
//! - [`Mesh`]: The per-chunk mesh, split into one [`MeshGroup`] per material
//! - [`Face`]: A single merged quad with its corners and block side
//! - [`GreedyMesher`]: The mask-and-sweep algorithm producing the faces
//!
//! # Usage
//! ```no_run
//! use voxel_terrain::{BlockType, Chunk, ChunkCoord, Mesh};
//!
//! let mut chunk = Chunk::empty(ChunkCoord::new(0, 0), 16);
//! chunk.set(0, 0, 0, BlockType::STONE);
//! let mesh = Mesh::greedy(&chunk);
//! assert_eq!(mesh.quad_count(), 6);
//! ```

mod face;
mod greedy;
mod mesh;

pub use face::Face;
pub use greedy::GreedyMesher;
pub use mesh::{Mesh, MeshGroup, VERTICES_PER_FACE};
