//! # Voxel Terrain Core
//!
//! This module contains the voxel data side of the engine: what a block is,
//! how blocks are grouped into chunks, how chunks are generated, and how the
//! loaded set of chunks follows the viewer.
//!
//! ## Architecture
//!
//! * **Block**: Block types, block faces and the compact per-cell record
//! * **Chunk**: Fixed-size cubes of blocks with bounds-safe accessors
//! * **Terrain**: The seeded height field and the generator that fills chunks
//! * **ChunkStore**: Owns loaded chunks and their meshes, streams them around
//!   the viewer and applies block edits
//! * **Raycast**: Cell-by-cell ray traversal used for block targeting
//!
//! ## Data Flow
//!
//! 1. The store receives the viewer position each frame
//! 2. Missing chunks in range are generated and meshed, distant ones dropped
//! 3. Edits overwrite a cell and rebuild that chunk's mesh wholesale
//! 4. The renderer reads meshes, the collision resolver reads solid cells

pub mod block;
pub mod chunk;
pub mod chunk_store;
pub mod raycast;
pub mod terrain;
