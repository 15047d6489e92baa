//! # Camera State Management
//!
//! This module handles all camera-related functionality including:
//! - Camera orientation driven by look input
//! - Desired movement derived from the camera's horizontal facing
//! - Keeping the eye attached to the agent
//! - Chunk tracking of the viewer position
//!
//! ## Core Components
//! - `Camera`: Represents the camera's position and orientation in 3D space
//! - `CameraController`: Handles player input and updates camera state

use camera::{Camera, CameraController};
use cgmath::{Deg, Point3, Vector2, Vector3};

use crate::config::{EngineConfig, PlayerConfig};

use super::{voxels::chunk::ChunkCoord, PlayerAction};

pub mod camera;

/// Manages the camera and its controller.
///
/// # Fields
/// - `camera`: The current camera state (position, orientation)
/// - `camera_controller`: Handles player input and camera movement
#[derive(Debug, Clone)]
pub struct CameraState {
    /// The current camera position and orientation
    pub camera: Camera,
    /// Handles player input and camera movement
    pub camera_controller: CameraController,
    /// Height of the eye above the agent's center
    eye_height: f32,
    /// Chunk the eye was in after the last update
    current_chunk: ChunkCoord,
    /// Edge length of a chunk, used for chunk tracking
    chunk_dimension: usize,
}

impl CameraState {
    /// Creates a camera looking out from `agent_position` with the configured
    /// initial orientation and controls.
    pub fn new(config: &EngineConfig, agent_position: Point3<f32>) -> Self {
        let PlayerConfig {
            eye_height,
            mouse_sensitivity,
            yaw_degrees,
            pitch_degrees,
            ..
        } = config.player;
        let eye = agent_position + Vector3::new(0.0, eye_height, 0.0);
        let chunk_dimension = config.chunk_dimension();
        CameraState {
            camera: Camera::new(eye, Deg(yaw_degrees), Deg(pitch_degrees)),
            camera_controller: CameraController::new(config.physics.move_speed, mouse_sensitivity),
            eye_height,
            current_chunk: ChunkCoord::containing(eye.x, eye.z, chunk_dimension),
            chunk_dimension,
        }
    }

    /// Processes player input actions, applying any look rotation immediately.
    ///
    /// # Arguments
    /// * `actions` - The player's input actions to process
    pub fn intake_actions(&mut self, actions: &PlayerAction) {
        self.camera_controller.intake_actions(actions);
        self.camera_controller.apply_rotation(&mut self.camera);
    }

    /// Horizontal velocity `(x, z)` requested by the current movement input.
    pub fn desired_velocity(&self) -> Vector2<f32> {
        self.camera_controller.desired_velocity(&self.camera)
    }

    /// Moves the eye to follow the agent.
    ///
    /// # Returns
    /// - `Some(CameraUpdates)` if the eye crossed into another chunk
    /// - `None` otherwise
    pub fn update(&mut self, agent_position: Point3<f32>) -> Option<CameraUpdates> {
        self.camera.position = agent_position + Vector3::new(0.0, self.eye_height, 0.0);
        let new_chunk_position = ChunkCoord::containing(
            self.camera.position.x,
            self.camera.position.z,
            self.chunk_dimension,
        );
        if new_chunk_position == self.current_chunk {
            return None;
        }
        let previous_chunk_position = self.current_chunk;
        self.current_chunk = new_chunk_position;
        Some(CameraUpdates {
            previous_chunk_position,
            new_chunk_position,
        })
    }

    /// The chunk the eye is currently in.
    pub fn current_chunk(&self) -> ChunkCoord {
        self.current_chunk
    }
}

/// Returned by `CameraState::update()` when the viewer changes chunk.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CameraUpdates {
    /// The chunk the eye left
    pub previous_chunk_position: ChunkCoord,
    /// The chunk the eye is now in
    pub new_chunk_position: ChunkCoord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eye_follows_agent_and_reports_chunk_changes() {
        let config = EngineConfig::default();
        let mut state = CameraState::new(&config, Point3::new(8.0, 20.0, 8.0));
        assert!((state.camera.position.y - 20.6).abs() < 1e-4);

        assert_eq!(state.update(Point3::new(9.0, 19.0, 8.0)), None);
        let updates = state.update(Point3::new(17.0, 19.0, 8.0));
        assert_eq!(
            updates,
            Some(CameraUpdates {
                previous_chunk_position: ChunkCoord::new(0, 0),
                new_chunk_position: ChunkCoord::new(1, 0),
            })
        );
    }
}
