//! # Engine Configuration
//!
//! Startup configuration for the terrain engine, deserialized from JSON with
//! `serde_json`. Every section has defaults, so an empty object is a valid
//! configuration. `EngineConfig::validate` must pass before any chunk work
//! starts; a config that fails it is rejected as a whole.

use std::{fs, path::Path};

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine_state::voxels::chunk::{CHUNK_DIMENSION, MAX_CHUNK_DIMENSION, MAX_VIEW_RADIUS};

/// Errors produced while loading or validating an [`EngineConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file \"{path}\": {source}")]
    Io {
        /// Path that was being read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid JSON for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the engine cannot run with.
    #[error("invalid config value for \"{field}\": {reason}")]
    Invalid {
        /// Dotted path of the offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// World layout: seed, chunk size and streaming radius.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Terrain seed. A random seed is drawn when absent.
    pub seed: Option<u64>,
    /// Chunk side length `N` in blocks.
    pub chunk_dimension: i32,
    /// Chebyshev radius `R`, in chunks, kept loaded around the viewer.
    pub view_radius: i32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            seed: None,
            chunk_dimension: CHUNK_DIMENSION as i32,
            view_radius: 2,
        }
    }
}

/// Height-field terrain shaping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Spatial frequency the noise is sampled at, per block.
    pub frequency: f64,
    /// Height variation produced by a full-scale noise sample.
    pub amplitude: f64,
    /// Height of a zero noise sample.
    pub base_height: f64,
    /// Number of dirt cells directly beneath the grass top.
    pub dirt_depth: i32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        TerrainConfig {
            frequency: 0.1,
            amplitude: 8.0,
            base_height: 4.0,
            dirt_depth: 3,
        }
    }
}

/// Agent movement and collision tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Vertical acceleration in blocks/s². Negative pulls down.
    pub gravity: f32,
    /// Horizontal speed in blocks/s at full input.
    pub move_speed: f32,
    /// Upward velocity set by a jump.
    pub jump_speed: f32,
    /// Agent half extent on X and Z.
    pub half_width: f32,
    /// Agent half extent on Y.
    pub half_height: f32,
    /// Extra distance added to the broad-phase prune box.
    pub prune_margin: f32,
    /// Upward nudge applied per unjam attempt.
    pub unjam_step: f32,
    /// Maximum number of unjam nudges before giving up.
    pub unjam_max_attempts: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        PhysicsConfig {
            gravity: -18.0,
            move_speed: 8.0,
            jump_speed: 11.0,
            half_width: 0.4,
            half_height: 0.9,
            prune_margin: 1.0,
            unjam_step: 0.1,
            unjam_max_attempts: 64,
        }
    }
}

/// Viewer spawn and look settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Agent center at startup.
    pub spawn: [f32; 3],
    /// Eye offset above the agent center.
    pub eye_height: f32,
    /// Degrees of rotation per unit of look delta.
    pub mouse_sensitivity: f32,
    /// Initial yaw in degrees.
    pub yaw_degrees: f32,
    /// Initial pitch in degrees.
    pub pitch_degrees: f32,
    /// Reach of block targeting in blocks.
    pub reach: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            spawn: [8.0, 20.0, 8.0],
            eye_height: 0.6,
            mouse_sensitivity: 0.2,
            yaw_degrees: -90.0,
            pitch_degrees: 0.0,
            reach: 6.0,
        }
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// World layout
    pub world: WorldConfig,
    /// Terrain shaping
    pub terrain: TerrainConfig,
    /// Agent physics
    pub physics: PhysicsConfig,
    /// Viewer settings
    pub player: PlayerConfig,
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn require_finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, format!("must be finite, got {value}")))
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    require_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be positive, got {value}")))
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    require_finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must not be negative, got {value}")))
    }
}

impl EngineConfig {
    /// Parses a configuration from JSON text and validates it.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Checks every value the engine depends on.
    ///
    /// Rejects a chunk dimension or view radius outside its supported range, non-finite
    /// numbers, and physics values that would make the agent degenerate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dimension = self.world.chunk_dimension;
        if dimension <= 0 || dimension > MAX_CHUNK_DIMENSION as i32 {
            return Err(invalid(
                "world.chunk_dimension",
                format!("must be in 1..={MAX_CHUNK_DIMENSION}, got {dimension}"),
            ));
        }
        let radius = self.world.view_radius;
        if radius <= 0 || radius > MAX_VIEW_RADIUS {
            return Err(invalid(
                "world.view_radius",
                format!("must be in 1..={MAX_VIEW_RADIUS}, got {radius}"),
            ));
        }

        require_positive("terrain.frequency", self.terrain.frequency)?;
        require_non_negative("terrain.amplitude", self.terrain.amplitude)?;
        require_finite("terrain.base_height", self.terrain.base_height)?;
        if self.terrain.dirt_depth < 0 {
            return Err(invalid(
                "terrain.dirt_depth",
                format!("must not be negative, got {}", self.terrain.dirt_depth),
            ));
        }

        let physics = &self.physics;
        require_finite("physics.gravity", physics.gravity as f64)?;
        require_non_negative("physics.move_speed", physics.move_speed as f64)?;
        require_non_negative("physics.jump_speed", physics.jump_speed as f64)?;
        require_positive("physics.half_width", physics.half_width as f64)?;
        require_positive("physics.half_height", physics.half_height as f64)?;
        require_non_negative("physics.prune_margin", physics.prune_margin as f64)?;
        require_positive("physics.unjam_step", physics.unjam_step as f64)?;

        let player = &self.player;
        for (field, value) in [
            ("player.spawn", player.spawn[0]),
            ("player.spawn", player.spawn[1]),
            ("player.spawn", player.spawn[2]),
        ] {
            require_finite(field, value as f64)?;
        }
        require_finite("player.eye_height", player.eye_height as f64)?;
        require_finite("player.mouse_sensitivity", player.mouse_sensitivity as f64)?;
        require_finite("player.yaw_degrees", player.yaw_degrees as f64)?;
        require_finite("player.pitch_degrees", player.pitch_degrees as f64)?;
        require_non_negative("player.reach", player.reach as f64)?;

        Ok(())
    }

    /// Chunk side length as a `usize`. Only meaningful after `validate`.
    pub fn chunk_dimension(&self) -> usize {
        self.world.chunk_dimension.max(1) as usize
    }

    /// The configured seed, or a freshly drawn random one.
    pub fn resolve_seed(&self) -> u64 {
        match self.world.seed {
            Some(seed) => seed,
            None => {
                let seed = fastrand::u64(..);
                info!("No seed configured, using random seed {seed}");
                seed
            }
        }
    }
}
