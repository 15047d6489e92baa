//! Greedy meshing implementation for voxel terrain.
//!
//! This module implements the greedy meshing algorithm which combines adjacent
//! coplanar faces of the same block type into larger quads, reducing the number
//! of vertices needed to draw a chunk.
//!
//! ## Algorithm
//!
//! For each of the six face directions and every plane `0..=N` across its axis,
//! an `N`x`N` mask records the block type of each exposed face on that plane.
//! A face is exposed when its owning cell is solid and the cell across the
//! plane is air. Cells outside the chunk always count as air, so faces on the
//! chunk boundary are always emitted. The mask is then swept row by row: each
//! unvisited entry grows a rectangle along the row first, then down the rows
//! while every entry of the next row matches, and the rectangle becomes one quad.

use log::debug;
use web_time::Instant;

use crate::engine_state::voxels::{
    block::{block_side::BlockSide, block_type::BlockType},
    chunk::Chunk,
};

use super::{face::Face, mesh::Mesh};

/// Converts chunk block grids into merged-quad meshes.
pub struct GreedyMesher;

impl GreedyMesher {
    /// Meshes every face direction of `chunk`.
    pub fn mesh_chunk(chunk: &Chunk) -> Mesh {
        Self::mesh_chunk_sided(chunk, &BlockSide::all())
    }

    /// Meshes only the listed face directions of `chunk`.
    pub fn mesh_chunk_sided(chunk: &Chunk, sides: &[BlockSide]) -> Mesh {
        let start = Instant::now();
        let n = chunk.dimension();
        let mut mesh = Mesh::new(chunk.coord(), n);

        if !chunk.is_empty() {
            let mut mask = vec![None; n * n];
            for &side in sides {
                for plane in 0..=n {
                    if build_mask(chunk, side, plane, &mut mask) {
                        sweep_mask(&mut mask, n, |i, j, height, width, block_type| {
                            let face =
                                Face::from_mask_rect(side, plane, i, j, height, width, block_type);
                            mesh.add_face(&face);
                        });
                    }
                }
            }
        }

        debug!(
            "Meshed chunk ({}, {}) into {} quads in {:?}",
            chunk.coord().x,
            chunk.coord().z,
            mesh.quad_count(),
            start.elapsed()
        );
        mesh
    }
}

/// Fills `mask` with the exposed faces of `side` on `plane`.
///
/// Entry `i * n + j` is the cell at `i` along `(axis + 1) % 3` and `j` along
/// `(axis + 2) % 3`. Returns whether any entry was set.
fn build_mask(chunk: &Chunk, side: BlockSide, plane: usize, mask: &mut [Option<BlockType>]) -> bool {
    let n = chunk.dimension();
    let axis = side.axis();
    let i_axis = (axis + 1) % 3;
    let j_axis = (axis + 2) % 3;

    let plane = plane as i32;
    let (owner_layer, neighbour_layer) = if side.is_positive() {
        (plane - 1, plane)
    } else {
        (plane, plane - 1)
    };

    let mut any = false;
    for i in 0..n {
        for j in 0..n {
            let mut owner = [0i32; 3];
            owner[axis] = owner_layer;
            owner[i_axis] = i as i32;
            owner[j_axis] = j as i32;
            let mut neighbour = owner;
            neighbour[axis] = neighbour_layer;

            let owner_type = chunk.get(owner[0], owner[1], owner[2]);
            let exposed = owner_type.is_solid()
                && !chunk.is_block_solid(neighbour[0], neighbour[1], neighbour[2]);

            mask[i * n + j] = if exposed {
                any = true;
                Some(owner_type)
            } else {
                None
            };
        }
    }
    any
}

/// Greedily covers every set mask entry with rectangles, clearing the mask.
///
/// Calls `emit(i, j, height, width, block_type)` once per rectangle. Width grows
/// along `j` before height grows along `i`; the first entry scanned wins ties.
fn sweep_mask(
    mask: &mut [Option<BlockType>],
    n: usize,
    mut emit: impl FnMut(usize, usize, usize, usize, BlockType),
) {
    for i in 0..n {
        let mut j = 0;
        while j < n {
            let Some(block_type) = mask[i * n + j] else {
                j += 1;
                continue;
            };

            let mut width = 1;
            while j + width < n && mask[i * n + j + width] == Some(block_type) {
                width += 1;
            }

            let mut height = 1;
            'grow: while i + height < n {
                let row = (i + height) * n;
                for k in j..j + width {
                    if mask[row + k] != Some(block_type) {
                        break 'grow;
                    }
                }
                height += 1;
            }

            for di in i..i + height {
                for dj in j..j + width {
                    mask[di * n + dj] = None;
                }
            }

            emit(i, j, height, width, block_type);
            j += width;
        }
    }
}
