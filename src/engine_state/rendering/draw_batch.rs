//! Draw batches handed to an external renderer.

use cgmath::Point3;

use super::{
    material::{MaterialClass, MaterialPalette},
    meshing::Mesh,
    Vertex,
};

/// One draw call's worth of geometry: a single material group of one chunk.
#[derive(Debug, Clone, Copy)]
pub struct DrawBatch<'a> {
    /// Material of every triangle in the batch
    pub material: MaterialClass,
    /// Diffuse colour taken from the palette
    pub color: [f32; 4],
    /// World translation to apply to the vertices
    pub origin: Point3<f32>,
    /// Triangle list vertices
    pub vertices: &'a [Vertex],
    /// Indices into `vertices`
    pub indices: &'a [u32],
    /// Whether back faces must be drawn too. Mesh winding is consistent, so
    /// batches built here never need it.
    pub double_sided: bool,
}

impl<'a> DrawBatch<'a> {
    /// Vertex data as raw bytes, ready to upload.
    pub fn vertex_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.vertices)
    }

    /// Index data as raw bytes, ready to upload.
    pub fn index_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.indices)
    }
}

/// Turns every non-empty material group of `meshes` into a draw batch.
pub fn build_draw_batches<'a>(
    meshes: impl IntoIterator<Item = &'a Mesh>,
    palette: &MaterialPalette,
) -> Vec<DrawBatch<'a>> {
    meshes
        .into_iter()
        .flat_map(|mesh| {
            mesh.non_empty_groups().map(move |group| DrawBatch {
                material: group.material,
                color: palette.color(group.material),
                origin: mesh.origin,
                vertices: &group.vertices,
                indices: &group.indices,
                double_sided: false,
            })
        })
        .collect()
}
