//! # Chunk Module
//!
//! This module provides the `Chunk` struct: a cube of `N`³ voxel cells that is the
//! unit of generation, meshing and streaming.
//!
//! ## Storage
//!
//! Chunks keep two views of the same cells:
//! - `blocks`: one `Block` per cell, flat, indexed by `x + N * (y + N * z)`
//! - `solid_array`: one bit per cell, set when the cell is not air
//!
//! The bit vector is kept in sync by every write so solid-cell enumeration and
//! solidity checks never have to decode block ids.
//!
//! ### Performance Characteristics
//! - **Solidity Check**: O(1) - one bit lookup
//! - **Block Lookup**: O(1) - direct index into `blocks`
//! - **Solid Enumeration**: proportional to the number of set bits

use bitvec::prelude::BitVec;
use cgmath::Point3;

use super::block::block_type::BlockType;
use super::block::Block;

pub use chunk_creation::ChunkCreationIterator;
pub use chunk_iteration::ChunkBlockIterator;

mod chunk_creation;
pub mod chunk_iteration;

/// The default dimension (width, height, depth) of a chunk in blocks.
pub const CHUNK_DIMENSION: usize = 16;

/// Largest chunk side length the engine accepts.
pub const MAX_CHUNK_DIMENSION: usize = 256;

/// Largest streaming radius, in chunks, the engine accepts.
pub const MAX_VIEW_RADIUS: i32 = 64;

/// Bound on both chunk coordinate axes.
///
/// Positions are mapped into `[-MAX_CHUNK_COORD, MAX_CHUNK_COORD]`, so the
/// streaming square around any viewer and every chunk origin stay within
/// `i32` block coordinates. Viewers beyond it see the edge chunks.
pub const MAX_CHUNK_COORD: i32 = i32::MAX / MAX_CHUNK_DIMENSION as i32 - MAX_VIEW_RADIUS - 1;

/// Integer coordinates of a chunk column on the horizontal grid.
///
/// Chunks cover the whole vertical extent of the world, so a chunk is
/// identified by `(x, z)` alone. Chunk `(cx, cz)` spans world blocks
/// `cx * N .. (cx + 1) * N` on X and likewise on Z.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ChunkCoord {
    /// Chunk index along world X.
    pub x: i32,
    /// Chunk index along world Z.
    pub z: i32,
}

impl ChunkCoord {
    /// Creates a chunk coordinate.
    pub fn new(x: i32, z: i32) -> Self {
        ChunkCoord { x, z }
    }

    /// The chunk containing a continuous world position, clamped to
    /// [`MAX_CHUNK_COORD`]. Non-finite positions map to chunk 0.
    pub fn containing(world_x: f32, world_z: f32, dimension: usize) -> Self {
        let n = dimension as f32;
        let limit = MAX_CHUNK_COORD as f32;
        let axis = |world: f32| {
            let chunk = (world / n).floor();
            if chunk.is_finite() {
                chunk.clamp(-limit, limit) as i32
            } else {
                0
            }
        };
        ChunkCoord::new(axis(world_x), axis(world_z))
    }

    /// The chunk containing an integer block position, clamped to
    /// [`MAX_CHUNK_COORD`].
    pub fn containing_block(block_x: i32, block_z: i32, dimension: usize) -> Self {
        let n = dimension.clamp(1, i32::MAX as usize) as i32;
        let axis = |block: i32| block.div_euclid(n).clamp(-MAX_CHUNK_COORD, MAX_CHUNK_COORD);
        ChunkCoord::new(axis(block_x), axis(block_z))
    }

    /// Chebyshev (chessboard) distance between two chunk coordinates.
    pub fn chebyshev_distance(&self, other: &ChunkCoord) -> i32 {
        let distance = self.x.abs_diff(other.x).max(self.z.abs_diff(other.z));
        distance.min(i32::MAX as u32) as i32
    }

    /// World block position of this chunk's `(0, 0, 0)` cell.
    pub fn origin(&self, dimension: usize) -> Point3<i32> {
        let n = dimension.min(i32::MAX as usize) as i32;
        Point3::new(self.x.saturating_mul(n), 0, self.z.saturating_mul(n))
    }
}

/// Represents an `N`x`N`x`N` collection of voxel blocks in the world.
///
/// Any coordinate outside `[0, N)` on any axis reads as air and ignores writes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk {
    /// The position of this chunk in chunk coordinates (not block coordinates).
    coord: ChunkCoord,

    /// Side length in cells.
    dimension: usize,

    /// One bit per cell, set when the cell is solid. Same indexing as `blocks`.
    solid_array: BitVec,

    /// One record per cell in `x + N * (y + N * z)` order.
    blocks: Vec<Block>,
}

impl Chunk {
    /// Creates a new, completely empty chunk (all blocks are air).
    ///
    /// # Arguments
    /// * `coord` - The chunk coordinates of the new chunk
    /// * `dimension` - Side length in cells
    pub fn empty(coord: ChunkCoord, dimension: usize) -> Self {
        Self::filled(coord, dimension, BlockType::AIR)
    }

    /// Creates a new chunk with every cell set to `block_type`.
    pub fn filled(coord: ChunkCoord, dimension: usize, block_type: BlockType) -> Self {
        let mut cci = ChunkCreationIterator::new(coord, dimension);
        for _ in 0..dimension.pow(3) {
            cci.push_block_type(block_type);
        }
        cci.return_chunk()
    }

    /// The coordinates of this chunk.
    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    /// Side length in cells.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Flat storage index of a local coordinate, or `None` when out of range.
    fn index(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        let n = self.dimension as i32;
        if x < 0 || y < 0 || z < 0 || x >= n || y >= n || z >= n {
            return None;
        }
        let n = self.dimension;
        Some(x as usize + n * (y as usize + n * z as usize))
    }

    /// Gets the block type at the specified chunk-relative coordinates.
    ///
    /// Returns `BlockType::AIR` for any coordinate outside the chunk, including
    /// negative ones.
    pub fn get(&self, x: i32, y: i32, z: i32) -> BlockType {
        match self.index(x, y, z) {
            Some(index) => self.blocks[index].get_type(),
            None => BlockType::AIR,
        }
    }

    /// Sets the block at the specified chunk-relative coordinates.
    ///
    /// Out-of-range coordinates are ignored. Returns whether the stored block
    /// changed.
    pub fn set(&mut self, x: i32, y: i32, z: i32, block_type: BlockType) -> bool {
        let Some(index) = self.index(x, y, z) else {
            return false;
        };
        let block = Block::new(block_type);
        if self.blocks[index] == block {
            return false;
        }
        self.blocks[index] = block;
        self.solid_array.set(index, block_type.is_solid());
        true
    }

    /// Checks if the block at the specified chunk-relative coordinates is solid.
    ///
    /// # Returns
    /// `true` if the block is solid, `false` if it's air or out of bounds.
    pub fn is_block_solid(&self, x: i32, y: i32, z: i32) -> bool {
        self.index(x, y, z)
            .map(|index| self.solid_array[index])
            .unwrap_or(false)
    }

    /// Number of solid cells.
    pub fn solid_count(&self) -> usize {
        self.solid_array.count_ones()
    }

    /// Whether every cell is air.
    pub fn is_empty(&self) -> bool {
        self.solid_array.not_any()
    }

    /// Iterates over every solid cell with its local position.
    pub fn iter_solid(&self) -> ChunkBlockIterator<'_> {
        ChunkBlockIterator::new(self)
    }

    /// Local cell coordinates of a flat storage index.
    pub(crate) fn position_of(&self, index: usize) -> Point3<usize> {
        let n = self.dimension;
        Point3::new(index % n, (index / n) % n, index / (n * n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_keeps_bitmap_in_sync() {
        let mut chunk = Chunk::empty(ChunkCoord::new(0, 0), 4);
        assert!(chunk.set(1, 2, 3, BlockType::STONE));
        assert!(chunk.is_block_solid(1, 2, 3));
        assert_eq!(chunk.solid_count(), 1);

        assert!(chunk.set(1, 2, 3, BlockType::AIR));
        assert!(!chunk.is_block_solid(1, 2, 3));
        assert!(chunk.is_empty());
    }

    #[test]
    fn writing_the_same_block_reports_no_change() {
        let mut chunk = Chunk::filled(ChunkCoord::new(0, 0), 2, BlockType::DIRT);
        assert!(!chunk.set(0, 0, 0, BlockType::DIRT));
    }

    #[test]
    fn position_of_inverts_flat_index() {
        let chunk = Chunk::empty(ChunkCoord::new(0, 0), 16);
        let index = 3 + 16 * (5 + 16 * 7);
        assert_eq!(chunk.position_of(index), Point3::new(3, 5, 7));
    }

    #[test]
    fn chunk_coords_floor_negative_positions() {
        assert_eq!(ChunkCoord::containing(-0.5, 15.9, 16), ChunkCoord::new(-1, 0));
        assert_eq!(ChunkCoord::containing_block(-17, 16, 16), ChunkCoord::new(-2, 1));
    }

    #[test]
    fn far_positions_clamp_to_the_world_edge() {
        let far = ChunkCoord::containing(1.0e12, -1.0e12, 16);
        assert_eq!(far, ChunkCoord::new(MAX_CHUNK_COORD, -MAX_CHUNK_COORD));
        assert_eq!(ChunkCoord::containing(f32::NAN, f32::INFINITY, 16), ChunkCoord::new(0, 0));
        assert_eq!(
            ChunkCoord::containing_block(i32::MIN, i32::MAX, 1),
            ChunkCoord::new(-MAX_CHUNK_COORD, MAX_CHUNK_COORD)
        );
    }

    #[test]
    fn edge_chunk_origins_are_representable() {
        let edge = ChunkCoord::new(MAX_CHUNK_COORD + MAX_VIEW_RADIUS, 0);
        let origin = edge.origin(MAX_CHUNK_DIMENSION);
        assert!(origin.x < i32::MAX - MAX_CHUNK_DIMENSION as i32);
        assert_eq!(
            ChunkCoord::new(i32::MIN, 0).chebyshev_distance(&ChunkCoord::new(i32::MAX, 0)),
            i32::MAX
        );
    }
}
