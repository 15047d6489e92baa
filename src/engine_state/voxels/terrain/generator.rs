use log::debug;
use web_time::Instant;

use crate::config::TerrainConfig;
use crate::engine_state::voxels::{
    block::block_type::BlockType,
    chunk::{Chunk, ChunkCoord, ChunkCreationIterator},
};

use super::noise_field::NoiseField;

/// Fills chunks from the height field.
///
/// Each column gets grass on its top cell, `dirt_depth` cells of dirt beneath
/// it and stone below that. Everything above the top is air. Generation is a
/// pure function of the seed, the terrain settings and the chunk coordinate.
#[derive(Clone, Debug)]
pub struct TerrainGenerator {
    seed: u64,
    noise: NoiseField,
    dimension: usize,
    dirt_depth: i32,
}

impl TerrainGenerator {
    /// Creates a generator for chunks of side `dimension`.
    pub fn new(seed: u64, dimension: usize, terrain: &TerrainConfig) -> Self {
        TerrainGenerator {
            seed,
            noise: NoiseField::new(seed, terrain),
            dimension,
            dirt_depth: terrain.dirt_depth.max(0),
        }
    }

    /// The seed this generator was built with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Chunk side length.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Surface height of a world column, clamped to `[0, N - 1]`.
    pub fn column_height(&self, world_x: i32, world_z: i32) -> i32 {
        let top = self.dimension as i32 - 1;
        self.noise.height(world_x, world_z).clamp(0, top)
    }

    /// Block type of cell `y` in a column whose surface is at `height`.
    pub fn block_for_column(&self, height: i32, y: i32) -> BlockType {
        if y < 0 || y > height {
            BlockType::AIR
        } else if y == height {
            BlockType::GRASS
        } else if y >= height - self.dirt_depth {
            BlockType::DIRT
        } else {
            BlockType::STONE
        }
    }

    /// The block generation would place at a world position.
    ///
    /// Evaluates a single column, so it is cheap enough to answer queries for
    /// chunks that are not loaded.
    pub fn block_at(&self, world_x: i32, y: i32, world_z: i32) -> BlockType {
        if y < 0 || y >= self.dimension as i32 {
            return BlockType::AIR;
        }
        self.block_for_column(self.column_height(world_x, world_z), y)
    }

    /// Generates the chunk at `coord`.
    pub fn generate(&self, coord: ChunkCoord) -> Chunk {
        let start = Instant::now();
        let n = self.dimension;
        let origin = coord.origin(n);

        let mut heights = Vec::with_capacity(n * n);
        for z in 0..n as i32 {
            for x in 0..n as i32 {
                heights.push(self.column_height(origin.x + x, origin.z + z));
            }
        }

        let mut cci = ChunkCreationIterator::new(coord, n);
        while let Some(position) = cci.next_position() {
            let height = heights[position.x + n * position.z];
            cci.push_block_type(self.block_for_column(height, position.y as i32));
        }
        let chunk = cci.return_chunk();

        debug!(
            "Generated chunk ({}, {}) with {} solid cells in {:?}",
            coord.x,
            coord.z,
            chunk.solid_count(),
            start.elapsed()
        );
        chunk
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_generator(base_height: f64, dirt_depth: i32) -> TerrainGenerator {
        let terrain = TerrainConfig {
            amplitude: 0.0,
            base_height,
            dirt_depth,
            ..TerrainConfig::default()
        };
        TerrainGenerator::new(1, 16, &terrain)
    }

    #[test]
    fn column_layers_are_grass_dirt_stone() {
        let generator = flat_generator(6.0, 2);
        assert_eq!(generator.block_for_column(6, 7), BlockType::AIR);
        assert_eq!(generator.block_for_column(6, 6), BlockType::GRASS);
        assert_eq!(generator.block_for_column(6, 5), BlockType::DIRT);
        assert_eq!(generator.block_for_column(6, 4), BlockType::DIRT);
        assert_eq!(generator.block_for_column(6, 3), BlockType::STONE);
        assert_eq!(generator.block_for_column(6, 0), BlockType::STONE);
    }

    #[test]
    fn heights_are_clamped_to_the_chunk() {
        assert_eq!(flat_generator(40.0, 3).column_height(0, 0), 15);
        assert_eq!(flat_generator(-5.0, 3).column_height(0, 0), 0);
    }

    #[test]
    fn block_at_matches_generated_chunk() {
        let generator = TerrainGenerator::new(99, 16, &TerrainConfig::default());
        let coord = ChunkCoord::new(-1, 2);
        let chunk = generator.generate(coord);
        let origin = coord.origin(16);
        for x in 0..16 {
            for z in 0..16 {
                for y in 0..16 {
                    assert_eq!(
                        chunk.get(x, y, z),
                        generator.block_at(origin.x + x, y, origin.z + z)
                    );
                }
            }
        }
    }
}
