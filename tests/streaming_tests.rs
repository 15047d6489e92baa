//! Tests for chunk streaming and block edits in the chunk store.

use std::collections::BTreeSet;

use cgmath::{Point3, Vector3};
use voxel_terrain::{
    BlockType, ChunkCoord, ChunkStore, EngineConfig, MaterialClass, TerrainGenerator,
    MAX_CHUNK_COORD, MAX_VIEW_RADIUS,
};

const DIMENSION: usize = 8;

fn store(view_radius: i32) -> ChunkStore {
    let mut config = EngineConfig::default();
    config.world.chunk_dimension = DIMENSION as i32;
    config.world.view_radius = view_radius;
    ChunkStore::from_config(&config, 2024)
}

fn square(center: ChunkCoord, radius: i32) -> BTreeSet<ChunkCoord> {
    let mut coords = BTreeSet::new();
    for dz in -radius..=radius {
        for dx in -radius..=radius {
            coords.insert(ChunkCoord::new(center.x + dx, center.z + dz));
        }
    }
    coords
}

#[test]
fn test_loaded_set_is_chebyshev_square() {
    let mut store = store(2);
    let report = store.update(Point3::new(3.0, 10.0, -5.0));
    let center = ChunkCoord::new(0, -1);
    assert_eq!(report.center, center);
    assert_eq!(report.generated, 25);
    assert_eq!(report.evicted, 0);

    let loaded: BTreeSet<_> = store.loaded_coords().into_iter().collect();
    assert_eq!(loaded, square(center, 2));
    assert_eq!(store.visible_meshes().len(), 25);
}

#[test]
fn test_second_update_does_no_work() {
    let mut store = store(1);
    store.update(Point3::new(1.0, 0.0, 1.0));
    let report = store.update(Point3::new(2.0, 0.0, 3.0));
    assert!(report.is_idle());
    assert_eq!(store.len(), 9);
}

#[test]
fn test_moving_evicts_and_generates() {
    let mut store = store(1);
    store.update(Point3::new(1.0, 0.0, 1.0));
    let report = store.update(Point3::new(2.0 * DIMENSION as f32 + 1.0, 0.0, 1.0));
    assert_eq!(report.center, ChunkCoord::new(2, 0));
    assert_eq!(report.generated, 6);
    assert_eq!(report.evicted, 6);
    assert!(!store.contains(ChunkCoord::new(-1, 0)));
    assert!(store.contains(ChunkCoord::new(3, 1)));
    let loaded: BTreeSet<_> = store.loaded_coords().into_iter().collect();
    assert_eq!(loaded, square(ChunkCoord::new(2, 0), 1));
}

#[test]
fn test_collision_voxels_cover_every_solid_cell() {
    let mut store = store(1);
    store.update(Point3::new(0.0, 0.0, 0.0));
    let voxels = store.collision_voxels();
    assert_eq!(voxels.len(), store.stats().solid_cells);
    for voxel in &voxels {
        let cell = Point3::new(
            voxel.x.floor() as i32,
            voxel.y.floor() as i32,
            voxel.z.floor() as i32,
        );
        assert!(store.block_at(cell).is_solid());
        assert!((voxel.x - cell.x as f32 - 0.5).abs() < 1e-6);
    }
}

#[test]
fn test_collision_voxels_near_is_a_subset() {
    let mut store = store(1);
    store.update(Point3::new(4.0, 0.0, 4.0));
    let center = Point3::new(4.0, 5.0, 4.0);
    let extent = Vector3::new(2.0, 3.0, 2.0);
    let near = store.collision_voxels_near(center, extent);
    let all = store.collision_voxels();

    let expected: Vec<_> = all
        .iter()
        .filter(|voxel| {
            (voxel.x - center.x).abs() <= extent.x
                && (voxel.y - center.y).abs() <= extent.y
                && (voxel.z - center.z).abs() <= extent.z
        })
        .collect();
    assert_eq!(near.len(), expected.len());
    for voxel in &near {
        assert!(all.contains(voxel));
    }
}

#[test]
fn test_block_at_without_loaded_chunks_uses_terrain() {
    let store = store(1);
    let generator: &TerrainGenerator = store.generator();
    for x in [-40, 0, 77] {
        for y in [-1, 0, 3, 7, 8] {
            assert_eq!(
                store.block_at(Point3::new(x, y, 12)),
                generator.block_at(x, y, 12)
            );
        }
    }
}

#[test]
fn test_edits_rebuild_the_mesh() {
    let mut store = store(1);
    store.update(Point3::new(0.0, 0.0, 0.0));
    let coord = ChunkCoord::new(0, 0);
    let height = store.generator().column_height(3, 3);

    let top = Point3::new(3, height, 3);
    assert_eq!(store.block_at(top), BlockType::GRASS);
    assert!(store.remove_block(top));
    assert_eq!(store.block_at(top), BlockType::AIR);
    assert!(!store.remove_block(top));

    if height + 1 < DIMENSION as i32 {
        let above = Point3::new(3, height + 1, 3);
        let before = store.mesh(coord).cloned();
        assert!(store.place_block(above, BlockType::STONE));
        assert!(!store.place_block(above, BlockType::DIRT));
        let after = store.mesh(coord).cloned();
        assert_ne!(before, after);
        assert!(!after
            .map(|mesh| mesh.group(MaterialClass::Stone).is_empty())
            .unwrap_or(true));
    }

    assert!(!store.set_block(Point3::new(3, -1, 3), BlockType::STONE));
    assert!(!store.set_block(Point3::new(3, DIMENSION as i32, 3), BlockType::STONE));
}

#[test]
fn test_edit_in_unloaded_chunk_loads_it() {
    let mut store = store(1);
    store.update(Point3::new(0.0, 0.0, 0.0));
    let far = Point3::new(10 * DIMENSION as i32, DIMENSION as i32 - 1, 0);
    assert!(store.set_block(far, BlockType::STONE));
    assert!(store.contains(ChunkCoord::new(10, 0)));
    assert_eq!(store.block_at(far), BlockType::STONE);

    // Streaming drops it again, edit included.
    store.update(Point3::new(0.5, 0.0, 0.5));
    assert!(!store.contains(ChunkCoord::new(10, 0)));
    assert_eq!(store.len(), 9);
}

#[test]
fn test_far_viewer_streams_edge_chunks() {
    let mut store = store(1);
    let report = store.update(Point3::new(1.0e12, 0.0, -1.0e12));
    let edge = ChunkCoord::new(MAX_CHUNK_COORD, -MAX_CHUNK_COORD);
    assert_eq!(report.center, edge);
    assert_eq!(report.generated, 9);

    let loaded: BTreeSet<_> = store.loaded_coords().into_iter().collect();
    assert_eq!(loaded, square(edge, 1));
    assert!(store.update(Point3::new(2.0e12, 0.0, -2.0e12)).is_idle());
}

#[test]
fn test_store_radius_is_clamped() {
    let generator = TerrainGenerator::new(2024, DIMENSION, &Default::default());
    let store = ChunkStore::new(generator, i32::MAX);
    assert_eq!(store.view_radius(), MAX_VIEW_RADIUS);
}
