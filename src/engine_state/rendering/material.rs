//! Material classes and the palette that colours them.

use crate::engine_state::voxels::block::{block_side::BlockSide, block_type::BlockType};

/// The surface material a face is drawn with.
///
/// Every exposed face of a solid block maps to exactly one class, so a chunk
/// mesh has at most three non-empty groups.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MaterialClass {
    /// The upward face of a grass block
    GrassTop = 0,
    /// Grass sides and bottom, and every dirt face
    Soil = 1,
    /// Every stone face
    Stone = 2,
}

impl MaterialClass {
    /// All classes in group order.
    pub fn all() -> [MaterialClass; 3] {
        [MaterialClass::GrassTop, MaterialClass::Soil, MaterialClass::Stone]
    }

    /// The material of `side` of a `block_type` block, or `None` for air.
    pub fn for_face(block_type: BlockType, side: BlockSide) -> Option<MaterialClass> {
        match (block_type, side) {
            (BlockType::AIR, _) => None,
            (BlockType::GRASS, BlockSide::TOP) => Some(MaterialClass::GrassTop),
            (BlockType::GRASS, _) | (BlockType::DIRT, _) => Some(MaterialClass::Soil),
            (BlockType::STONE, _) => Some(MaterialClass::Stone),
        }
    }
}

/// Diffuse colours per material class.
///
/// Owned by the rendering side and handed to batch construction explicitly;
/// nothing in the engine holds a global palette.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialPalette {
    colors: [[f32; 4]; 3],
}

impl Default for MaterialPalette {
    fn default() -> Self {
        MaterialPalette {
            colors: [
                [0.0, 1.0, 0.0, 1.0],
                [0.6, 0.4, 0.2, 1.0],
                [0.5, 0.5, 0.5, 1.0],
            ],
        }
    }
}

impl MaterialPalette {
    /// Creates a palette from explicit RGBA colours, indexed by class.
    pub fn new(grass_top: [f32; 4], soil: [f32; 4], stone: [f32; 4]) -> Self {
        MaterialPalette {
            colors: [grass_top, soil, stone],
        }
    }

    /// RGBA colour of a material class.
    pub fn color(&self, material: MaterialClass) -> [f32; 4] {
        self.colors[material as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grass_top_is_the_only_grass_top_face() {
        for side in BlockSide::all() {
            let expected = if side == BlockSide::TOP {
                MaterialClass::GrassTop
            } else {
                MaterialClass::Soil
            };
            assert_eq!(MaterialClass::for_face(BlockType::GRASS, side), Some(expected));
        }
    }

    #[test]
    fn dirt_is_soil_and_stone_is_stone_on_every_side() {
        for side in BlockSide::all() {
            assert_eq!(MaterialClass::for_face(BlockType::DIRT, side), Some(MaterialClass::Soil));
            assert_eq!(MaterialClass::for_face(BlockType::STONE, side), Some(MaterialClass::Stone));
            assert_eq!(MaterialClass::for_face(BlockType::AIR, side), None);
        }
    }

    #[test]
    fn default_palette_matches_class_order() {
        let palette = MaterialPalette::default();
        assert_eq!(palette.color(MaterialClass::GrassTop), [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(palette.color(MaterialClass::Stone), [0.5, 0.5, 0.5, 1.0]);
    }
}
