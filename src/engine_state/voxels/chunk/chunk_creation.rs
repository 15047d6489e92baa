//! # Chunk Creation Module
//!
//! A builder that fills a chunk in storage order, keeping the solidity bit vector
//! and the block array consistent as cells are appended.

use bitvec::vec::BitVec;
use cgmath::Point3;

use crate::engine_state::voxels::block::{block_type::BlockType, Block};

use super::{Chunk, ChunkCoord};

/// A builder for creating and populating chunks one cell at a time.
///
/// Cells are pushed in storage order: X fastest, then Y, then Z. The position
/// the next pushed cell will occupy is available through `next_position`.
pub struct ChunkCreationIterator {
    /// The coordinates of the chunk being created
    coord: ChunkCoord,
    /// Side length in cells
    dimension: usize,
    /// Bit vector where each bit represents whether a block is solid (1) or air (0)
    solid_array: BitVec,
    /// Every cell pushed so far
    blocks: Vec<Block>,
    /// Current X position within the chunk
    local_x: usize,
    /// Current Y position within the chunk
    local_y: usize,
    /// Current Z position within the chunk
    local_z: usize,
}

impl ChunkCreationIterator {
    /// Creates a new `ChunkCreationIterator` for building a chunk at the given coordinates.
    pub fn new(coord: ChunkCoord, dimension: usize) -> Self {
        let size = dimension.pow(3);
        ChunkCreationIterator {
            coord,
            dimension,
            solid_array: BitVec::with_capacity(size),
            blocks: Vec::with_capacity(size),
            local_x: 0,
            local_y: 0,
            local_z: 0,
        }
    }

    /// Local position the next pushed block will be written to, or `None`
    /// once the chunk is full.
    pub fn next_position(&self) -> Option<Point3<usize>> {
        if self.is_full() {
            return None;
        }
        Some(Point3::new(self.local_x, self.local_y, self.local_z))
    }

    /// Whether every cell has been pushed.
    pub fn is_full(&self) -> bool {
        self.blocks.len() == self.dimension.pow(3)
    }

    /// Finalizes the chunk creation and returns the constructed `Chunk`.
    ///
    /// Cells that were never pushed are filled with air.
    pub fn return_chunk(mut self) -> Chunk {
        while !self.is_full() {
            self.push_block_type(BlockType::AIR);
        }
        Chunk {
            coord: self.coord,
            dimension: self.dimension,
            solid_array: self.solid_array,
            blocks: self.blocks,
        }
    }

    /// Adds a block at the current position and advances the position.
    ///
    /// Pushing into a full chunk is ignored.
    pub fn push_block_type(&mut self, block_type: BlockType) {
        if self.is_full() {
            return;
        }
        self.solid_array.push(block_type.is_solid());
        self.blocks.push(Block::new(block_type));

        self.local_x += 1;
        if self.local_x == self.dimension {
            self.local_x = 0;
            self.local_y += 1;
            if self.local_y == self.dimension {
                self.local_y = 0;
                self.local_z += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pushes_fill_x_first_then_y_then_z() {
        let mut cci = ChunkCreationIterator::new(ChunkCoord::new(0, 0), 2);
        assert_eq!(cci.next_position(), Some(Point3::new(0, 0, 0)));
        cci.push_block_type(BlockType::STONE);
        assert_eq!(cci.next_position(), Some(Point3::new(1, 0, 0)));
        cci.push_block_type(BlockType::AIR);
        assert_eq!(cci.next_position(), Some(Point3::new(0, 1, 0)));
        cci.push_block_type(BlockType::AIR);
        cci.push_block_type(BlockType::AIR);
        assert_eq!(cci.next_position(), Some(Point3::new(0, 0, 1)));

        let chunk = cci.return_chunk();
        assert_eq!(chunk.get(0, 0, 0), BlockType::STONE);
        assert_eq!(chunk.solid_count(), 1);
    }

    #[test]
    fn unfinished_chunks_are_padded_with_air() {
        let mut cci = ChunkCreationIterator::new(ChunkCoord::new(2, -1), 3);
        cci.push_block_type(BlockType::GRASS);
        let chunk = cci.return_chunk();
        assert_eq!(chunk.coord(), ChunkCoord::new(2, -1));
        assert_eq!(chunk.get(2, 2, 2), BlockType::AIR);
        assert_eq!(chunk.solid_count(), 1);
    }
}
