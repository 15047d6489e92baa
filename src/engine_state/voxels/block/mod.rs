//! # Block Module
//!
//! This module provides the core block-related functionality for the terrain engine.
//! It includes block type definitions, block face handling, and the compact
//! per-cell storage record.

use block_type::BlockType;

pub mod block_side;
pub mod block_type;

/// The underlying integer type used to represent block types in memory.
pub type BlockTypeSize = u8;

/// Represents a single voxel cell as it is stored inside a chunk.
///
/// # Memory Layout
/// `#[repr(C)]` with a single byte, so a chunk's cell array can be viewed as
/// raw bytes through `bytemuck`.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug, PartialEq, Eq, Default)]
pub struct Block {
    /// The type of this block, encoded as a `BlockTypeSize` for compact storage.
    pub block_type: BlockTypeSize,
}

impl Block {
    /// Creates a new block of the specified type.
    pub fn new(block_type: BlockType) -> Self {
        Block {
            block_type: block_type.id(),
        }
    }

    /// Decodes the stored id.
    pub fn get_type(&self) -> BlockType {
        BlockType::get_block_type_from_int(self.block_type)
    }
}
