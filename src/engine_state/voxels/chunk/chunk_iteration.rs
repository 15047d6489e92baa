//! # Chunk Iteration Module
//!
//! An iterator over the solid cells of a chunk that walks the solidity bit
//! vector, so air is skipped without decoding any block ids.

use bitvec::slice::IterOnes;
use cgmath::Point3;

use crate::engine_state::voxels::block::block_type::BlockType;

use super::Chunk;

/// An iterator over all non-air blocks in a chunk, in storage order.
pub struct ChunkBlockIterator<'a> {
    /// Reference to the chunk being iterated over
    chunk_ref: &'a Chunk,
    /// Remaining set bits of the solid array
    solid_offsets: IterOnes<'a, usize, bitvec::order::Lsb0>,
}

impl<'a> ChunkBlockIterator<'a> {
    /// Creates a new `ChunkBlockIterator` for the given chunk.
    pub fn new(chunk_ref: &'a Chunk) -> Self {
        ChunkBlockIterator {
            chunk_ref,
            solid_offsets: chunk_ref.solid_array.iter_ones(),
        }
    }
}

impl Iterator for ChunkBlockIterator<'_> {
    type Item = (Point3<usize>, BlockType);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.solid_offsets.next()?;
        let block_type = self.chunk_ref.blocks[index].get_type();
        Some((self.chunk_ref.position_of(index), block_type))
    }
}
