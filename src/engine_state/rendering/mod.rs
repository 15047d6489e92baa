//! Rendering-side data for the terrain engine.
//!
//! The engine does not draw anything itself. This module produces what a
//! renderer consumes: per-chunk meshes grouped by material, the vertex format,
//! the material palette and the draw batches tying them together.

pub mod draw_batch;
pub mod material;
pub mod meshing;
mod vertex;

// Re-export commonly used types
pub use draw_batch::{build_draw_batches, DrawBatch};
pub use material::{MaterialClass, MaterialPalette};
pub use vertex::Vertex;
