//! # Input State
//!
//! This module defines the input state types used by the input manager.
//! It provides enums and structs for representing the state of input devices.

use std::collections::HashMap;

/// A logical control the engine responds to.
///
/// Platform key codes and mouse buttons are mapped onto these by whatever
/// front end feeds the [`InputManager`](super::input_manager::InputManager).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    /// Walk along the facing direction
    MoveForward,
    /// Walk against the facing direction
    MoveBackward,
    /// Strafe left
    MoveLeft,
    /// Strafe right
    MoveRight,
    /// Jump when grounded
    Jump,
    /// Break the targeted block
    RemoveBlock,
    /// Place a block against the targeted face
    PlaceBlock,
}

impl InputKey {
    /// Every tracked control.
    pub fn all() -> [InputKey; 7] {
        [
            InputKey::MoveForward,
            InputKey::MoveBackward,
            InputKey::MoveLeft,
            InputKey::MoveRight,
            InputKey::Jump,
            InputKey::RemoveBlock,
            InputKey::PlaceBlock,
        ]
    }
}

/// A single raw input event from the front end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A control went down (`pressed == true`) or up
    Key {
        /// The control
        key: InputKey,
        /// New down state
        pressed: bool,
    },
    /// Relative pointer motion; positive x turns right, positive y looks down
    Look {
        /// Horizontal delta
        delta_x: f64,
        /// Vertical delta
        delta_y: f64,
    },
    /// The input source lost focus; every control is released
    FocusLost,
}

/// Represents the state of a key or button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RawInputState {
    /// Key/button is not pressed
    #[default]
    NotPressed,
    /// Key/button was just pressed this frame
    Pressed,
    /// Key/button has been held down for multiple frames
    Held,
    /// Key/button was just released this frame
    Released,
}

impl RawInputState {
    /// Determines if the input is actively down (either pressed or held)
    pub fn is_active(&self) -> bool {
        matches!(self, RawInputState::Pressed | RawInputState::Held)
    }

    /// Determines if the input was just pressed this frame
    pub fn is_just_pressed(&self) -> bool {
        matches!(self, RawInputState::Pressed)
    }

    /// Determines if the input was just released this frame
    pub fn is_just_released(&self) -> bool {
        matches!(self, RawInputState::Released)
    }

    /// Updates the input state based on the previous and current raw states
    pub fn from_raw_states(previous: bool, current: bool) -> Self {
        match (previous, current) {
            (false, true) => RawInputState::Pressed,
            (true, true) => RawInputState::Held,
            (true, false) => RawInputState::Released,
            (false, false) => RawInputState::NotPressed,
        }
    }
}

/// A snapshot of the processed input states with state transitions.
///
/// This struct provides access to the processed state of all controls,
/// with key states translated into RawInputState enum values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessedInputState {
    /// Current state of all tracked controls
    pub key_states: HashMap<InputKey, RawInputState>,

    /// Accumulated look delta since the last frame (x, y)
    pub look_delta: Option<(f64, f64)>,
}

impl ProcessedInputState {
    /// Gets the state of a control
    pub fn get_key_state(&self, key: InputKey) -> RawInputState {
        self.key_states.get(&key).copied().unwrap_or_default()
    }

    /// Gets the look delta since the last frame
    pub fn get_look_delta(&self) -> Option<(f64, f64)> {
        self.look_delta
    }
}
