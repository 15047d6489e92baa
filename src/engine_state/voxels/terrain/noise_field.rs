//! Deterministic 2D height field.

use noise::{NoiseFn, Perlin};

use crate::config::TerrainConfig;

/// Seeded gradient-noise height function over the world's XZ plane.
///
/// Heights are unclamped; callers restrict them to the chunk's vertical range.
#[derive(Clone, Debug)]
pub struct NoiseField {
    perlin: Perlin,
    frequency: f64,
    amplitude: f64,
    base_height: f64,
}

/// Folds a 64-bit world seed into the 32 bits the noise source accepts.
fn fold_seed(seed: u64) -> u32 {
    (seed ^ (seed >> 32)) as u32
}

impl NoiseField {
    /// Creates a height field for `seed` shaped by `terrain`.
    pub fn new(seed: u64, terrain: &TerrainConfig) -> Self {
        NoiseField {
            perlin: Perlin::new(fold_seed(seed)),
            frequency: terrain.frequency,
            amplitude: terrain.amplitude,
            base_height: terrain.base_height,
        }
    }

    /// Raw noise value at a world column, roughly in `[-1, 1]`.
    pub fn sample(&self, world_x: i32, world_z: i32) -> f64 {
        self.perlin.get([
            world_x as f64 * self.frequency,
            world_z as f64 * self.frequency,
        ])
    }

    /// Terrain height at a world column.
    pub fn height(&self, world_x: i32, world_z: i32) -> i32 {
        (self.sample(world_x, world_z) * self.amplitude + self.base_height).floor() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_gives_same_heights() {
        let terrain = TerrainConfig::default();
        let a = NoiseField::new(42, &terrain);
        let b = NoiseField::new(42, &terrain);
        for x in -20..20 {
            for z in -20..20 {
                assert_eq!(a.height(x, z), b.height(x, z));
            }
        }
    }

    #[test]
    fn zero_amplitude_is_flat_at_base_height() {
        let terrain = TerrainConfig {
            amplitude: 0.0,
            base_height: 5.0,
            ..TerrainConfig::default()
        };
        let field = NoiseField::new(7, &terrain);
        assert_eq!(field.height(3, -11), 5);
        assert_eq!(field.height(-100, 250), 5);
    }

    #[test]
    fn heights_stay_within_amplitude_of_base() {
        let terrain = TerrainConfig::default();
        let field = NoiseField::new(1234, &terrain);
        let low = (terrain.base_height - terrain.amplitude * 1.5).floor() as i32;
        let high = (terrain.base_height + terrain.amplitude * 1.5).ceil() as i32;
        for x in 0..64 {
            for z in 0..64 {
                let h = field.height(x, z);
                assert!((low..=high).contains(&h), "height {h} out of range");
            }
        }
    }
}
