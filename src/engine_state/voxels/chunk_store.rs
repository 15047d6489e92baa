//! # Chunk Store Module
//!
//! This module provides the `ChunkStore` struct which owns every loaded chunk
//! together with its cached mesh, and streams chunks in and out around the
//! viewer.
//!
//! ## Streaming
//!
//! `update` computes the square of chunk coordinates within Chebyshev radius
//! `R` of the viewer's chunk, generates and meshes every missing coordinate,
//! and evicts every loaded coordinate outside the square. Calling it again with
//! the viewer in the same chunk does no work.
//!
//! ## Views
//!
//! The store exposes two read-only views of the same chunk data: the mesh list
//! for rendering and the solid-cell centers for collision.
//!
//! ## Edits
//!
//! Block edits go through the store so the owning chunk's mesh is rebuilt in
//! the same call. Editing an unloaded chunk generates it first.

use std::collections::HashMap;

use cgmath::{Point3, Vector3};
use log::{debug, info};
use web_time::Instant;

use crate::config::EngineConfig;
use crate::engine_state::rendering::meshing::Mesh;

use super::{
    block::block_type::BlockType,
    chunk::{Chunk, ChunkCoord, MAX_VIEW_RADIUS},
    raycast::{raycast, RayHit},
    terrain::TerrainGenerator,
};

/// A loaded chunk and the mesh built from its current contents.
#[derive(Debug, Clone)]
pub struct ChunkEntry {
    /// Block data
    pub chunk: Chunk,
    /// Mesh of `chunk`, rebuilt whenever `chunk` changes
    pub mesh: Mesh,
}

impl ChunkEntry {
    fn new(chunk: Chunk) -> Self {
        let mesh = Mesh::greedy(&chunk);
        ChunkEntry { chunk, mesh }
    }

    fn remesh(&mut self) {
        self.mesh = Mesh::greedy(&self.chunk);
    }
}

/// Work performed by one `ChunkStore::update` call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StreamReport {
    /// The viewer's chunk
    pub center: ChunkCoord,
    /// Chunks generated and meshed
    pub generated: usize,
    /// Chunks dropped
    pub evicted: usize,
}

impl StreamReport {
    /// Whether the update changed nothing.
    pub fn is_idle(&self) -> bool {
        self.generated == 0 && self.evicted == 0
    }
}

/// Aggregate size of the loaded world.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct WorldStats {
    /// Loaded chunks
    pub chunks: usize,
    /// Solid cells across all loaded chunks
    pub solid_cells: usize,
    /// Quads across all loaded meshes
    pub quads: usize,
    /// Vertices across all loaded meshes
    pub vertices: usize,
}

/// Owns the loaded chunks and their meshes.
pub struct ChunkStore {
    generator: TerrainGenerator,
    view_radius: i32,
    chunks: HashMap<ChunkCoord, ChunkEntry>,
}

impl ChunkStore {
    /// Creates an empty store streaming `view_radius` chunks around the viewer.
    ///
    /// The radius is clamped to `0..=MAX_VIEW_RADIUS`.
    pub fn new(generator: TerrainGenerator, view_radius: i32) -> Self {
        ChunkStore {
            generator,
            view_radius: view_radius.clamp(0, MAX_VIEW_RADIUS),
            chunks: HashMap::new(),
        }
    }

    /// Creates an empty store from a validated configuration.
    pub fn from_config(config: &EngineConfig, seed: u64) -> Self {
        let generator = TerrainGenerator::new(seed, config.chunk_dimension(), &config.terrain);
        Self::new(generator, config.world.view_radius)
    }

    /// Chunk side length.
    pub fn dimension(&self) -> usize {
        self.generator.dimension()
    }

    /// The generator filling new chunks.
    pub fn generator(&self) -> &TerrainGenerator {
        &self.generator
    }

    /// Streaming radius in chunks.
    pub fn view_radius(&self) -> i32 {
        self.view_radius
    }

    /// Every coordinate within the streaming radius of `center`.
    pub fn required_coords(&self, center: ChunkCoord) -> Vec<ChunkCoord> {
        let r = self.view_radius;
        let side = (2 * r + 1) as usize;
        let mut coords = Vec::with_capacity(side * side);
        for dz in -r..=r {
            for dx in -r..=r {
                coords.push(ChunkCoord::new(
                    center.x.saturating_add(dx),
                    center.z.saturating_add(dz),
                ));
            }
        }
        coords
    }

    /// Streams chunks around the viewer.
    ///
    /// Afterwards the loaded set is exactly `required_coords` of the viewer's
    /// chunk.
    pub fn update(&mut self, viewer: Point3<f32>) -> StreamReport {
        let center = ChunkCoord::containing(viewer.x, viewer.z, self.dimension());
        let start = Instant::now();

        let mut generated = 0;
        for coord in self.required_coords(center) {
            if !self.chunks.contains_key(&coord) {
                self.load(coord);
                generated += 1;
            }
        }

        let before = self.chunks.len();
        self.chunks
            .retain(|coord, _| coord.chebyshev_distance(&center) <= self.view_radius);
        let evicted = before - self.chunks.len();

        let report = StreamReport {
            center,
            generated,
            evicted,
        };
        if !report.is_idle() {
            info!(
                "Streamed around chunk ({}, {}): {} generated, {} evicted, {} loaded in {:?}",
                center.x,
                center.z,
                generated,
                evicted,
                self.chunks.len(),
                start.elapsed()
            );
        }
        report
    }

    /// Returns the entry at `coord`, generating and meshing it if missing.
    fn load(&mut self, coord: ChunkCoord) -> &mut ChunkEntry {
        let generator = &self.generator;
        self.chunks
            .entry(coord)
            .or_insert_with(|| ChunkEntry::new(generator.generate(coord)))
    }

    /// Every loaded mesh, in no particular order.
    pub fn visible_meshes(&self) -> Vec<&Mesh> {
        self.chunks.values().map(|entry| &entry.mesh).collect()
    }

    /// World-space centers of every solid cell across all loaded chunks.
    pub fn collision_voxels(&self) -> Vec<Point3<f32>> {
        let n = self.dimension();
        let mut voxels = Vec::new();
        for entry in self.chunks.values() {
            let origin = entry.chunk.coord().origin(n);
            voxels.extend(entry.chunk.iter_solid().map(|(local, _)| {
                cell_center(
                    origin.x + local.x as i32,
                    local.y as i32,
                    origin.z + local.z as i32,
                )
            }));
        }
        voxels
    }

    /// Centers of loaded solid cells whose center lies within `half_extent`
    /// of `center` on every axis.
    pub fn collision_voxels_near(
        &self,
        center: Point3<f32>,
        half_extent: Vector3<f32>,
    ) -> Vec<Point3<f32>> {
        let n = self.dimension();
        let top = n as i32 - 1;
        // Cell (x, y, z) has its center at x + 0.5, so these bounds are inclusive.
        let min_x = (center.x - half_extent.x - 0.5).ceil() as i32;
        let max_x = (center.x + half_extent.x - 0.5).floor() as i32;
        let min_y = ((center.y - half_extent.y - 0.5).ceil() as i32).max(0);
        let max_y = ((center.y + half_extent.y - 0.5).floor() as i32).min(top);
        let min_z = (center.z - half_extent.z - 0.5).ceil() as i32;
        let max_z = (center.z + half_extent.z - 0.5).floor() as i32;

        let mut voxels = Vec::new();
        if min_x > max_x || min_y > max_y || min_z > max_z {
            return voxels;
        }

        for z in min_z..=max_z {
            for x in min_x..=max_x {
                let coord = ChunkCoord::containing_block(x, z, n);
                let Some(entry) = self.chunks.get(&coord) else {
                    continue;
                };
                let origin = coord.origin(n);
                for y in min_y..=max_y {
                    if entry.chunk.is_block_solid(x - origin.x, y, z - origin.z) {
                        voxels.push(cell_center(x, y, z));
                    }
                }
            }
        }
        voxels
    }

    /// The block at a world position.
    ///
    /// Unloaded chunks answer with what terrain generation would place there.
    /// Positions outside the vertical range are air.
    pub fn block_at(&self, position: Point3<i32>) -> BlockType {
        let n = self.dimension();
        let coord = ChunkCoord::containing_block(position.x, position.z, n);
        match self.chunks.get(&coord) {
            Some(entry) => {
                let origin = coord.origin(n);
                entry
                    .chunk
                    .get(position.x - origin.x, position.y, position.z - origin.z)
            }
            None => self.generator.block_at(position.x, position.y, position.z),
        }
    }

    /// Overwrites the block at a world position and rebuilds the owning mesh.
    ///
    /// Returns whether the block changed. Positions outside the vertical range
    /// are ignored.
    pub fn set_block(&mut self, position: Point3<i32>, block_type: BlockType) -> bool {
        let n = self.dimension();
        if position.y < 0 || position.y >= n as i32 {
            return false;
        }
        let coord = ChunkCoord::containing_block(position.x, position.z, n);
        let origin = coord.origin(n);
        let entry = self.load(coord);
        let changed = entry
            .chunk
            .set(position.x - origin.x, position.y, position.z - origin.z, block_type);
        if changed {
            entry.remesh();
            debug!(
                "Set block ({}, {}, {}) to {:?}",
                position.x, position.y, position.z, block_type
            );
        }
        changed
    }

    /// Clears a solid block. Returns whether a block was removed.
    pub fn remove_block(&mut self, position: Point3<i32>) -> bool {
        if !self.block_at(position).is_solid() {
            return false;
        }
        self.set_block(position, BlockType::AIR)
    }

    /// Places a solid block into an empty cell. Returns whether it was placed.
    pub fn place_block(&mut self, position: Point3<i32>, block_type: BlockType) -> bool {
        if !block_type.is_solid() || self.block_at(position).is_solid() {
            return false;
        }
        self.set_block(position, block_type)
    }

    /// The first solid block along a ray, within `max_distance`.
    pub fn raycast(
        &self,
        origin: Point3<f32>,
        direction: Vector3<f32>,
        max_distance: f32,
    ) -> Option<RayHit> {
        raycast(origin, direction, max_distance, |position| self.block_at(position))
    }

    /// Whether the chunk at `coord` is loaded.
    pub fn contains(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    /// Number of loaded chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether no chunk is loaded.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Loaded chunk coordinates, sorted.
    pub fn loaded_coords(&self) -> Vec<ChunkCoord> {
        let mut coords: Vec<ChunkCoord> = self.chunks.keys().copied().collect();
        coords.sort();
        coords
    }

    /// The loaded chunk at `coord`.
    pub fn chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord).map(|entry| &entry.chunk)
    }

    /// The mesh of the loaded chunk at `coord`.
    pub fn mesh(&self, coord: ChunkCoord) -> Option<&Mesh> {
        self.chunks.get(&coord).map(|entry| &entry.mesh)
    }

    /// Totals over everything loaded.
    pub fn stats(&self) -> WorldStats {
        self.chunks
            .values()
            .fold(WorldStats::default(), |mut stats, entry| {
                stats.chunks += 1;
                stats.solid_cells += entry.chunk.solid_count();
                stats.quads += entry.mesh.quad_count();
                stats.vertices += entry.mesh.vertex_count();
                stats
            })
    }
}

/// World-space center of the cell at integer block position `(x, y, z)`.
fn cell_center(x: i32, y: i32, z: i32) -> Point3<f32> {
    Point3::new(x as f32 + 0.5, y as f32 + 0.5, z as f32 + 0.5)
}
