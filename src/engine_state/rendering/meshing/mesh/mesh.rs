//! Mesh data structures for terrain rendering.
//!
//! A chunk's mesh is split into one group per material class, each holding a
//! non-indexed triangle list (six vertices per quad) plus the sequential index
//! buffer renderers expect.

use cgmath::{Point3, Vector3};

use crate::engine_state::rendering::material::MaterialClass;
use crate::engine_state::rendering::Vertex;
use crate::engine_state::voxels::chunk::{Chunk, ChunkCoord};

use super::{face::Face, greedy::GreedyMesher};

/// Vertices contributed by one quad.
pub const VERTICES_PER_FACE: usize = 6;

/// Geometry of one material class within a chunk mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshGroup {
    /// Material every face in this group is drawn with
    pub material: MaterialClass,
    /// Triangle list vertices, chunk-local
    pub vertices: Vec<Vertex>,
    /// Indices into `vertices`
    pub indices: Vec<u32>,
}

impl MeshGroup {
    /// Creates an empty group for `material`.
    pub fn new(material: MaterialClass) -> Self {
        MeshGroup {
            material,
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Whether the group holds no geometry.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of quads in the group.
    pub fn quad_count(&self) -> usize {
        self.indices.len() / VERTICES_PER_FACE
    }

    /// Appends the two triangles of `face`.
    pub fn push_face(&mut self, face: &Face) {
        let normal: Vector3<f32> = face.block_side.normal();
        let base = self.vertices.len() as u32;
        for corner in face.triangle_corners() {
            let position = Point3::new(corner.x as f32, corner.y as f32, corner.z as f32);
            self.vertices.push(Vertex::new(position, normal));
        }
        self.indices
            .extend(base..base + VERTICES_PER_FACE as u32);
    }

    /// Vertex buffer as raw bytes.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer as raw bytes.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// The complete surface mesh of one chunk.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// The chunk this mesh was built from
    pub coord: ChunkCoord,
    /// World position of the chunk's `(0, 0, 0)` corner; add to vertex positions
    pub origin: Point3<f32>,
    /// One group per material class, indexed by `MaterialClass as usize`
    pub groups: [MeshGroup; 3],
}

impl Mesh {
    /// Creates an empty mesh for the chunk at `coord`.
    pub fn new(coord: ChunkCoord, dimension: usize) -> Self {
        let origin = coord.origin(dimension);
        Mesh {
            coord,
            origin: Point3::new(origin.x as f32, origin.y as f32, origin.z as f32),
            groups: MaterialClass::all().map(MeshGroup::new),
        }
    }

    /// Builds the greedy mesh of `chunk`.
    pub fn greedy(chunk: &Chunk) -> Self {
        GreedyMesher::mesh_chunk(chunk)
    }

    /// Routes `face` into the group of its material. Air faces are dropped.
    pub fn add_face(&mut self, face: &Face) {
        if let Some(material) = MaterialClass::for_face(face.block_type, face.block_side) {
            self.groups[material as usize].push_face(face);
        }
    }

    /// The group holding faces of `material`.
    pub fn group(&self, material: MaterialClass) -> &MeshGroup {
        &self.groups[material as usize]
    }

    /// Groups that hold geometry.
    pub fn non_empty_groups(&self) -> impl Iterator<Item = &MeshGroup> {
        self.groups.iter().filter(|group| !group.is_empty())
    }

    /// Total quads across all groups.
    pub fn quad_count(&self) -> usize {
        self.groups.iter().map(MeshGroup::quad_count).sum()
    }

    /// Total vertices across all groups.
    pub fn vertex_count(&self) -> usize {
        self.groups.iter().map(|group| group.vertices.len()).sum()
    }

    /// Whether the mesh has no geometry at all.
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(MeshGroup::is_empty)
    }
}
