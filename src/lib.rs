#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Terrain
//!
//! A chunked voxel terrain engine: seeded height-field generation, greedy
//! meshing and first-person collision against the generated blocks.
//!
//! The world is an unbounded plane of fixed-height chunks streamed in and out
//! around the viewer. Every loaded chunk carries a greedy mesh split into
//! material groups, ready to be handed to any renderer, and its solid cells
//! double as the collision set for an axis-aligned agent.
//!
//! ## Key Modules
//!
//! * `application_state` - Input handling and the frame clock
//! * `config` - JSON configuration and its validation
//! * `engine_state` - Terrain, meshing, physics and the per-frame driver
//!
//! ## Architecture
//!
//! The engine is single-threaded and synchronous. Each frame:
//! * Look input rotates the camera
//! * Chunks within the view radius are generated and meshed, others evicted
//! * The agent moves under gravity and collides one axis at a time
//! * Block edits at the crosshair rebuild the owning chunk's mesh
//!
//! ## Usage
//!
//! ```rust
//! use voxel_terrain::{ApplicationState, EngineConfig, InputEvent, InputKey};
//!
//! let mut config = EngineConfig::default();
//! config.world.seed = Some(42);
//! let mut app = ApplicationState::new(&config).unwrap();
//!
//! app.intake_input(&InputEvent::Key { key: InputKey::MoveForward, pressed: true });
//! for _ in 0..10 {
//!     app.frame_with_dt(1.0 / 60.0);
//! }
//! assert_eq!(app.engine_state.store().len(), 25);
//! ```

use std::path::PathBuf;

use log::info;

pub mod application_state;
pub mod config;
pub mod engine_state;

pub use application_state::{
    input_manager::InputManager,
    input_state::{InputEvent, InputKey, ProcessedInputState, RawInputState},
    ApplicationState,
};
pub use config::{ConfigError, EngineConfig, PhysicsConfig, PlayerConfig, TerrainConfig, WorldConfig};
pub use engine_state::{
    camera_state::camera::{Camera, CameraController},
    physics::{AgentState, CollisionResolver, GroundState, StepInput, StepReport, UnjamOutcome},
    rendering::{
        build_draw_batches,
        meshing::{GreedyMesher, Mesh, MeshGroup},
        DrawBatch, MaterialClass, MaterialPalette, Vertex,
    },
    voxels::{
        block::{block_side::BlockSide, block_type::BlockType},
        chunk::{
            Chunk, ChunkCoord, CHUNK_DIMENSION, MAX_CHUNK_COORD, MAX_CHUNK_DIMENSION,
            MAX_VIEW_RADIUS,
        },
        chunk_store::{ChunkStore, StreamReport, WorldStats},
        raycast::{raycast, RayHit},
        terrain::{NoiseField, TerrainGenerator},
    },
    BlockEdit, EngineState, FrameReport, PlayerAction,
};

/// Frames between scripted jumps in the headless walk.
const JUMP_INTERVAL: u32 = 90;
/// Frames between progress log lines in the headless walk.
const REPORT_INTERVAL: u32 = 60;

/// Settings for a headless run.
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// JSON configuration file; defaults are used when absent
    pub config_path: Option<PathBuf>,
    /// Seed overriding the configured one
    pub seed: Option<u64>,
    /// Number of frames to simulate
    pub frames: u32,
    /// Fixed frame time in seconds; wall-clock time is used when absent
    pub dt_seconds: Option<f32>,
}

/// Initialises logging and runs a scripted walk through the world.
///
/// The walker holds forward, turns slowly and jumps at a fixed interval, so a
/// run exercises streaming, meshing and collision together.
pub fn run(options: RunOptions) -> Result<(), ConfigError> {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let mut config = match &options.config_path {
        Some(path) => EngineConfig::from_path(path)?,
        None => EngineConfig::default(),
    };
    if options.seed.is_some() {
        config.world.seed = options.seed;
    }

    let mut state = ApplicationState::new(&config)?;
    state.intake_input(&InputEvent::Key {
        key: InputKey::MoveForward,
        pressed: true,
    });

    for frame in 0..options.frames {
        state.intake_input(&InputEvent::Key {
            key: InputKey::Jump,
            pressed: frame % JUMP_INTERVAL == 0,
        });
        state.intake_input(&InputEvent::Look {
            delta_x: 1.0,
            delta_y: 0.0,
        });

        let report = match options.dt_seconds {
            Some(dt) => state.frame_with_dt(dt),
            None => state.frame(),
        };

        if frame % REPORT_INTERVAL == 0 {
            let agent = &report.agent;
            info!(
                "Frame {}: agent ({:.2}, {:.2}, {:.2}) {:?}, {} meshes",
                frame,
                agent.position.x,
                agent.position.y,
                agent.position.z,
                agent.ground,
                report.visible_meshes
            );
        }
    }

    let stats = state.engine_state.store().stats();
    info!(
        "Finished after {} frames: {} chunks, {} solid cells, {} quads, {} vertices",
        options.frames, stats.chunks, stats.solid_cells, stats.quads, stats.vertices
    );
    Ok(())
}
