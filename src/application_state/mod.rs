//! # Application State Management
//!
//! This module drives the engine from the outside, including:
//! - Input handling
//! - Frame timing
//! - The per-frame hand-off of processed input to the engine

pub mod input_manager;
pub mod input_state;

use input_manager::InputManager;
use input_state::InputEvent;

use crate::{
    config::{ConfigError, EngineConfig},
    engine_state::{EngineState, FrameReport},
};

/// Longest frame the physics step will be asked to simulate, in seconds.
///
/// Stalls (debugger pauses, a slow first frame) are clamped to this so the
/// agent cannot skip through terrain.
pub const MAX_FRAME_SECONDS: f32 = 0.1;

/// The running application: engine, input and frame clock.
pub struct ApplicationState {
    /// The core engine state and logic
    pub engine_state: EngineState,

    /// Manages input state and event processing
    pub input_manager: InputManager,

    /// Timestamp of the last frame for delta time calculations
    pub last_wait_time: web_time::Instant,
}

impl ApplicationState {
    /// Builds the engine from `config` and starts the frame clock.
    pub fn new(config: &EngineConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            engine_state: EngineState::new(config)?,
            input_manager: InputManager::new(),
            last_wait_time: web_time::Instant::now(),
        })
    }

    /// Feeds one input event to the input manager.
    pub fn intake_input(&mut self, event: &InputEvent) {
        self.input_manager.intake_input(event);
    }

    /// Runs a frame using the wall-clock time since the previous one.
    pub fn frame(&mut self) -> FrameReport {
        let now = web_time::Instant::now();
        let wait_dt = now - self.last_wait_time;
        self.last_wait_time = now;
        self.frame_with_dt(wait_dt.as_secs_f32().min(MAX_FRAME_SECONDS))
    }

    /// Runs a frame with a fixed time step of `dt` seconds.
    pub fn frame_with_dt(&mut self, dt: f32) -> FrameReport {
        let processed_input = self.input_manager.get_and_reset_processed_input();
        self.engine_state.step(&processed_input, dt)
    }
}
