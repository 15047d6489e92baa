//! # Camera Implementation
//!
//! This module contains the first-person camera and the controller that feeds
//! it player actions:
//! - `Camera`: eye position and yaw/pitch orientation
//! - `CameraController`: accumulates movement and look input for a frame and
//!   turns it into rotation and a desired horizontal velocity

use cgmath::*;

use crate::engine_state::PlayerAction;

/// Pitch limit in degrees, keeping the view away from straight up or down.
pub const MAX_PITCH_DEGREES: f32 = 89.0;

/// Represents a first-person camera in 3D space.
///
/// Yaw is measured from +X towards +Z, pitch upward from the horizon. A yaw of
/// -90° looks along -Z.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// The eye position in world space
    pub position: Point3<f32>,
    /// Horizontal rotation (around Y axis) in radians
    pub yaw: Rad<f32>,
    /// Vertical rotation in radians
    pub pitch: Rad<f32>,
}

impl Camera {
    /// Creates a new camera with the specified position and orientation.
    ///
    /// # Example
    /// ```rust
    /// use cgmath::{Deg, Point3};
    /// use voxel_terrain::Camera;
    ///
    /// let camera = Camera::new(Point3::new(0.0, 0.0, 0.0), Deg(-90.0), Deg(0.0));
    /// assert!((camera.look_direction().z + 1.0).abs() < 1e-5);
    /// ```
    pub fn new<V: Into<Point3<f32>>, Y: Into<Rad<f32>>, P: Into<Rad<f32>>>(
        position: V,
        yaw: Y,
        pitch: P,
    ) -> Self {
        let mut camera = Self {
            position: position.into(),
            yaw: yaw.into(),
            pitch: pitch.into(),
        };
        camera.clamp_pitch();
        camera
    }

    /// Unit vector the camera looks along.
    pub fn look_direction(&self) -> Vector3<f32> {
        let (yaw_sin, yaw_cos) = self.yaw.0.sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.0.sin_cos();
        Vector3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize()
    }

    /// Unit horizontal vector the camera faces, ignoring pitch.
    pub fn forward(&self) -> Vector3<f32> {
        let (yaw_sin, yaw_cos) = self.yaw.0.sin_cos();
        Vector3::new(yaw_cos, 0.0, yaw_sin).normalize()
    }

    /// Unit horizontal vector to the camera's right.
    pub fn right(&self) -> Vector3<f32> {
        self.forward().cross(Vector3::unit_y()).normalize()
    }

    /// Turns the camera, clamping pitch to `±MAX_PITCH_DEGREES`.
    pub fn rotate(&mut self, yaw_delta: Deg<f32>, pitch_delta: Deg<f32>) {
        self.yaw += Rad::from(yaw_delta);
        self.pitch += Rad::from(pitch_delta);
        self.clamp_pitch();
    }

    fn clamp_pitch(&mut self) {
        let limit: Rad<f32> = Deg(MAX_PITCH_DEGREES).into();
        if self.pitch < -limit {
            self.pitch = -limit;
        } else if self.pitch > limit {
            self.pitch = limit;
        }
    }
}

/// Handles camera movement and rotation based on user input.
///
/// Input is accumulated with `intake_actions` and consumed once per frame.
#[derive(Debug, Clone)]
pub struct CameraController {
    // Movement amounts (0 or 1 per direction)
    amount_left: f32,
    amount_right: f32,
    amount_forward: f32,
    amount_backward: f32,

    // Rotation amounts (raw look delta)
    rotate_horizontal: f32,
    rotate_vertical: f32,

    // Configuration
    speed: f32,
    sensitivity: f32,
}

impl CameraController {
    /// Creates a new camera controller.
    ///
    /// # Arguments
    /// * `speed` - Horizontal movement speed in blocks per second
    /// * `sensitivity` - Degrees of rotation per unit of look delta
    pub fn new(speed: f32, sensitivity: f32) -> Self {
        Self {
            amount_left: 0.0,
            amount_right: 0.0,
            amount_forward: 0.0,
            amount_backward: 0.0,
            rotate_horizontal: 0.0,
            rotate_vertical: 0.0,
            speed,
            sensitivity,
        }
    }

    /// Processes player actions and updates controller state accordingly.
    pub fn intake_actions(&mut self, actions: &PlayerAction) {
        self.amount_forward = if actions.move_forward { 1.0 } else { 0.0 };
        self.amount_backward = if actions.move_backward { 1.0 } else { 0.0 };
        self.amount_left = if actions.move_left { 1.0 } else { 0.0 };
        self.amount_right = if actions.move_right { 1.0 } else { 0.0 };
        if let Some((delta_x, delta_y)) = actions.rotate_view {
            self.rotate_horizontal += delta_x as f32;
            self.rotate_vertical += delta_y as f32;
        }
    }

    /// Applies and clears the accumulated look input.
    ///
    /// Positive horizontal delta turns right, positive vertical delta looks down.
    pub fn apply_rotation(&mut self, camera: &mut Camera) {
        if self.rotate_horizontal != 0.0 || self.rotate_vertical != 0.0 {
            camera.rotate(
                Deg(self.rotate_horizontal * self.sensitivity),
                Deg(-self.rotate_vertical * self.sensitivity),
            );
        }
        self.rotate_horizontal = 0.0;
        self.rotate_vertical = 0.0;
    }

    /// Horizontal velocity `(x, z)` the movement input asks for.
    ///
    /// Diagonal input is normalised so it is no faster than straight input.
    pub fn desired_velocity(&self, camera: &Camera) -> Vector2<f32> {
        let direction = camera.forward() * (self.amount_forward - self.amount_backward)
            + camera.right() * (self.amount_right - self.amount_left);
        let horizontal = Vector2::new(direction.x, direction.z);
        if horizontal.magnitude2() < 1e-8 {
            return Vector2::zero();
        }
        horizontal.normalize() * self.speed
    }
}
