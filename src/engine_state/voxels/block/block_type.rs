//! # Block Type Module
//!
//! This module defines the closed set of block types a chunk can hold and the
//! conversion to and from their compact one-byte storage form.

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use super::BlockTypeSize;

/// Enumerates all possible block types in the voxel world.
///
/// The discriminants are the stored block ids. `FromPrimitive` is derived so a
/// stored id can be decoded back into the enum.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockType {
    /// Empty space. Never meshed, never collided with.
    #[default]
    AIR = 0,

    /// Soil found in a thin band beneath the surface.
    DIRT = 1,

    /// Surface block. The top face renders as grass, the other faces as soil.
    GRASS = 2,

    /// Bedrock-like filler below the dirt band.
    STONE = 3,
}

impl BlockType {
    /// Decodes a stored block id.
    ///
    /// Unknown ids decode to `BlockType::AIR` so a corrupted cell reads as empty
    /// space instead of aborting.
    ///
    /// # Arguments
    /// * `btype` - The block type as a `BlockTypeSize`
    pub fn get_block_type_from_int(btype: BlockTypeSize) -> Self {
        BlockType::from_u8(btype).unwrap_or(BlockType::AIR)
    }

    /// The id this block type is stored as.
    pub fn id(self) -> BlockTypeSize {
        self as BlockTypeSize
    }

    /// Whether the block occupies its cell for meshing and collision.
    pub fn is_solid(self) -> bool {
        self != BlockType::AIR
    }

    /// Every solid block type, in id order.
    pub fn solid_types() -> [BlockType; 3] {
        [BlockType::DIRT, BlockType::GRASS, BlockType::STONE]
    }
}
