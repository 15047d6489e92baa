//! # Engine State Module
//!
//! The core engine module that manages the state and functionality of the voxel engine.
//!
//! ## Key Components
//!
//! * `EngineState` - The main state container for the engine
//! * `camera_state` - Handles camera orientation and the movement frame
//! * `physics` - Gravity, jumping and collision of the agent
//! * `rendering` - Greedy meshing, materials and draw batches
//! * `voxels` - Handles voxel data, chunks, and world generation
//!
//! ## Architecture
//!
//! The engine state module follows a component-based architecture where each subsystem
//! is responsible for a specific aspect of the engine's functionality. The `EngineState`
//! struct serves as the central coordinator, owning every subsystem and passing data
//! between them once per frame.
//!
//! ## Frame Order
//!
//! 1. Look input rotates the camera
//! 2. Chunks stream around the agent
//! 3. The agent is moved and collided against nearby solid cells
//! 4. The eye follows the agent
//! 5. Requested block edits are applied at the targeted cell

use cgmath::{Point3, Vector3};
use log::{debug, info, warn};

use camera_state::{camera::Camera, CameraState, CameraUpdates};
use physics::{Aabb, AgentState, CollisionResolver, StepInput, StepReport, UnjamOutcome};
use rendering::{build_draw_batches, meshing::Mesh, DrawBatch, MaterialPalette};
use voxels::{
    block::block_type::BlockType,
    chunk_store::{ChunkStore, StreamReport},
    raycast::RayHit,
};

use crate::{
    application_state::input_state::{InputKey, ProcessedInputState},
    config::{ConfigError, EngineConfig},
};

pub mod camera_state;
pub mod physics;
pub mod rendering;
pub mod voxels;

/// Block type laid down by the place control.
pub const PLACED_BLOCK_TYPE: BlockType = BlockType::GRASS;

/// A block edit applied during a frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlockEdit {
    /// A solid block was cleared
    Removed {
        /// World cell that was cleared
        position: Point3<i32>,
        /// Block type that was there
        block_type: BlockType,
    },
    /// A block was placed into an empty cell
    Placed {
        /// World cell that was filled
        position: Point3<i32>,
        /// Block type placed
        block_type: BlockType,
    },
}

/// Summary of one engine step.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameReport {
    /// Chunk streaming work done this frame
    pub stream: StreamReport,
    /// Collision outcome of the agent step
    pub step: StepReport,
    /// Agent state after the step
    pub agent: AgentState,
    /// Number of meshes handed to the renderer
    pub visible_meshes: usize,
    /// Block edit applied this frame, if any
    pub edit: Option<BlockEdit>,
}

/// The main state container for the voxel engine
///
/// This struct owns the chunk store, the agent and its collision resolver,
/// and the camera. It translates processed input into player actions and
/// advances everything by one frame in `step`.
///
/// # Examples
///
/// ```
/// use voxel_terrain::{EngineConfig, EngineState, ProcessedInputState};
///
/// let mut config = EngineConfig::default();
/// config.world.seed = Some(7);
/// let mut engine_state = EngineState::new(&config).unwrap();
///
/// let report = engine_state.step(&ProcessedInputState::default(), 1.0 / 60.0);
/// assert_eq!(report.visible_meshes, 25);
/// ```
pub struct EngineState {
    /// Camera state managing orientation and the eye position
    pub camera_state: CameraState,
    /// Current player actions derived from input
    pub player_actions: PlayerAction,
    /// Loaded chunks and their meshes
    store: ChunkStore,
    /// Agent collision and movement rules
    resolver: CollisionResolver,
    /// The collision-resolved agent
    agent: AgentState,
    /// Maximum block targeting distance
    reach: f32,
}

impl EngineState {
    /// Creates a new engine state with all subsystems initialized
    ///
    /// Validates the configuration, streams in the chunks around the spawn
    /// point and pushes the agent clear of any terrain it spawned inside.
    ///
    /// # Errors
    ///
    /// Returns the validation error for a configuration the engine cannot run with.
    pub fn new(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.resolve_seed();

        let mut store = ChunkStore::from_config(config, seed);
        let resolver = CollisionResolver::new(&config.physics);
        let spawn = Point3::from(config.player.spawn);
        let mut agent = AgentState::new(spawn);

        store.update(spawn);
        let voxels =
            store.collision_voxels_near(spawn, resolver.query_extent(agent.velocity, 0.0));
        if let UnjamOutcome::Clear { nudges } = resolver.unjam(&mut agent, &voxels) {
            if nudges > 0 {
                info!("Moved spawn up by {} nudges to clear terrain", nudges);
            }
        }

        let camera_state = CameraState::new(config, agent.position);
        info!(
            "Engine initialized: seed {}, {} chunks loaded around ({:.1}, {:.1}, {:.1})",
            seed,
            store.len(),
            agent.position.x,
            agent.position.y,
            agent.position.z
        );

        Ok(Self {
            camera_state,
            player_actions: PlayerAction::default(),
            store,
            resolver,
            agent,
            reach: config.player.reach,
        })
    }

    /// Advances the engine by `dt` seconds using one frame of processed input.
    ///
    /// Negative or non-finite `dt` is treated as zero.
    pub fn step(&mut self, input: &ProcessedInputState, dt: f32) -> FrameReport {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.set_input_commands(input);

        self.camera_state.intake_actions(&self.player_actions);
        let stream = self.store.update(self.agent.position);

        let desired = self.camera_state.desired_velocity();
        let planned = Vector3::new(desired.x, self.agent.velocity.y, desired.y);
        let voxels = self.store.collision_voxels_near(
            self.agent.position,
            self.resolver.query_extent(planned, dt),
        );
        let step = self.resolver.step(
            &mut self.agent,
            StepInput {
                horizontal_velocity: desired,
                jump: self.player_actions.jump,
            },
            dt,
            &voxels,
        );

        if let Some(CameraUpdates {
            previous_chunk_position,
            new_chunk_position,
        }) = self.camera_state.update(self.agent.position)
        {
            debug!(
                "Viewer moved from chunk ({}, {}) to ({}, {})",
                previous_chunk_position.x,
                previous_chunk_position.z,
                new_chunk_position.x,
                new_chunk_position.z
            );
        }

        let edit = if self.player_actions.remove_block {
            self.remove_targeted_block()
        } else if self.player_actions.place_block {
            self.place_block_at_target(PLACED_BLOCK_TYPE)
        } else {
            None
        };

        FrameReport {
            stream,
            step,
            agent: self.agent.clone(),
            visible_meshes: self.store.len(),
            edit,
        }
    }

    /// Sets the input commands for the engine state.
    ///
    /// # Arguments
    /// * `input` - The processed input state to use for setting commands
    pub fn set_input_commands(&mut self, input: &ProcessedInputState) {
        self.player_actions = Self::translate_processed_input(input);
    }

    /// Translates the processed input state into player actions.
    ///
    /// # Arguments
    /// * `input` - The processed input state to translate
    ///
    /// # Returns
    /// A PlayerAction struct with the appropriate actions set
    fn translate_processed_input(input: &ProcessedInputState) -> PlayerAction {
        PlayerAction {
            // Movement actions - active if key is pressed or held
            move_forward: input.get_key_state(InputKey::MoveForward).is_active(),
            move_backward: input.get_key_state(InputKey::MoveBackward).is_active(),
            move_left: input.get_key_state(InputKey::MoveLeft).is_active(),
            move_right: input.get_key_state(InputKey::MoveRight).is_active(),
            rotate_view: input.get_look_delta(),
            // Only trigger on press, not hold
            jump: input.get_key_state(InputKey::Jump).is_just_pressed(),
            remove_block: input.get_key_state(InputKey::RemoveBlock).is_just_pressed(),
            place_block: input.get_key_state(InputKey::PlaceBlock).is_just_pressed(),
        }
    }

    /// The solid block under the crosshair, within reach.
    pub fn target(&self) -> Option<RayHit> {
        let camera = &self.camera_state.camera;
        self.store
            .raycast(camera.position, camera.look_direction(), self.reach)
    }

    /// Clears the targeted block.
    pub fn remove_targeted_block(&mut self) -> Option<BlockEdit> {
        let hit = self.target()?;
        if !self.store.remove_block(hit.block_position) {
            return None;
        }
        debug!(
            "Removed {:?} at ({}, {}, {})",
            hit.block_type, hit.block_position.x, hit.block_position.y, hit.block_position.z
        );
        Some(BlockEdit::Removed {
            position: hit.block_position,
            block_type: hit.block_type,
        })
    }

    /// Places a block against the targeted face.
    ///
    /// Refused when nothing is targeted, when the cell is outside the world's
    /// vertical range, or when the block would overlap the agent.
    pub fn place_block_at_target(&mut self, block_type: BlockType) -> Option<BlockEdit> {
        let hit = self.target()?;
        let position = hit.place_position;
        let cell = Aabb::voxel(Point3::new(
            position.x as f32 + 0.5,
            position.y as f32 + 0.5,
            position.z as f32 + 0.5,
        ));
        let agent_box = Aabb::from_center(self.agent.position, self.resolver.half_extents());
        if agent_box.intersects(&cell) {
            warn!(
                "Refused to place {:?} at ({}, {}, {}): cell overlaps the agent",
                block_type, position.x, position.y, position.z
            );
            return None;
        }
        if !self.store.place_block(position, block_type) {
            return None;
        }
        debug!(
            "Placed {:?} at ({}, {}, {})",
            block_type, position.x, position.y, position.z
        );
        Some(BlockEdit::Placed {
            position,
            block_type,
        })
    }

    /// The collision-resolved agent.
    pub fn agent(&self) -> &AgentState {
        &self.agent
    }

    /// The first-person camera.
    pub fn camera(&self) -> &Camera {
        &self.camera_state.camera
    }

    /// The chunk store.
    pub fn store(&self) -> &ChunkStore {
        &self.store
    }

    /// Every loaded mesh.
    pub fn visible_meshes(&self) -> Vec<&Mesh> {
        self.store.visible_meshes()
    }

    /// Centers of every loaded solid cell.
    pub fn collision_voxels(&self) -> Vec<Point3<f32>> {
        self.store.collision_voxels()
    }

    /// Draw batches for every loaded mesh, coloured by `palette`.
    pub fn draw_batches<'a>(&'a self, palette: &MaterialPalette) -> Vec<DrawBatch<'a>> {
        build_draw_batches(self.store.visible_meshes(), palette)
    }
}

/// Represents player actions derived from input
///
/// This struct contains flags for the actions that can be triggered by
/// input, such as movement, camera control, jumping and block edits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerAction {
    /// Walk forward - true if key is pressed or held
    pub move_forward: bool,
    /// Walk backward - true if key is pressed or held
    pub move_backward: bool,
    /// Strafe left - true if key is pressed or held
    pub move_left: bool,
    /// Strafe right - true if key is pressed or held
    pub move_right: bool,

    /// View rotation - Some if the pointer moved this frame
    pub rotate_view: Option<(f64, f64)>,

    /// Jump - only on the frame the key goes down
    pub jump: bool,
    /// Break the targeted block - only on the frame the key goes down
    pub remove_block: bool,
    /// Place a block at the target - only on the frame the key goes down
    pub place_block: bool,
}
