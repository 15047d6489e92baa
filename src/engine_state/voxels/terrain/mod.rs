//! # Terrain Module
//!
//! Procedural terrain: a seeded 2D height field and the generator that turns
//! it into chunk contents.

pub mod generator;
pub mod noise_field;

pub use generator::TerrainGenerator;
pub use noise_field::NoiseField;
