//! # Input Manager
//!
//! This module handles input processing for the application, including:
//! - Control state tracking across frames
//! - Look delta accumulation
//! - Per-frame snapshots with press/hold/release transitions

use std::collections::HashMap;

use super::input_state::{InputEvent, InputKey, ProcessedInputState, RawInputState};

/// Manages the state of all controls and processes input events.
///
/// Key states are kept as two maps: the state at the end of the previous
/// frame and the current state. Their comparison yields the transitions.
#[derive(Debug, Clone)]
pub struct InputManager {
    /// Previous state of all tracked controls
    pub key_inputs_old: HashMap<InputKey, bool>,
    /// Current state of all tracked controls
    pub key_inputs_new: HashMap<InputKey, bool>,

    /// Look delta accumulated since the last snapshot
    pub look_delta: Option<(f64, f64)>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    /// Creates a new InputManager with every control released.
    pub fn new() -> Self {
        let mut key_inputs_old = HashMap::new();
        let mut key_inputs_new = HashMap::new();
        for key in InputKey::all() {
            key_inputs_old.insert(key, false);
            key_inputs_new.insert(key, false);
        }

        Self {
            key_inputs_old,
            key_inputs_new,
            look_delta: None,
        }
    }

    /// Updates the old state with the current state to prepare for the next frame.
    pub fn move_old_states(&mut self) {
        for (key, new_state) in self.key_inputs_new.iter() {
            if let Some(old_state) = self.key_inputs_old.get_mut(key) {
                *old_state = *new_state;
            }
        }
    }

    /// Processes an input event and updates internal input state.
    ///
    /// Look deltas within a frame are summed.
    pub fn intake_input(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::Key { key, pressed } => {
                if let Some(key_state) = self.key_inputs_new.get_mut(&key) {
                    *key_state = pressed;
                }
            }
            InputEvent::Look { delta_x, delta_y } => {
                let (x, y) = self.look_delta.unwrap_or((0.0, 0.0));
                self.look_delta = Some((x + delta_x, y + delta_y));
            }
            InputEvent::FocusLost => {
                for state in self.key_inputs_new.values_mut() {
                    *state = false;
                }
                self.look_delta = None;
            }
        }
    }

    /// Creates a processed input state from the current raw boolean states.
    ///
    /// # Returns
    /// A new `ProcessedInputState` with processed input states.
    pub fn create_processed_input_state(&self) -> ProcessedInputState {
        let key_states = self
            .key_inputs_new
            .iter()
            .map(|(key, &new_state)| {
                let old_state = self.key_inputs_old.get(key).copied().unwrap_or(false);
                (*key, RawInputState::from_raw_states(old_state, new_state))
            })
            .collect();

        ProcessedInputState {
            key_states,
            look_delta: self.look_delta,
        }
    }

    /// Returns the processed input state and resets internal state.
    ///
    /// Call once per frame; the next snapshot reports transitions relative to
    /// this one.
    pub fn get_and_reset_processed_input(&mut self) -> ProcessedInputState {
        let processed_input = self.create_processed_input_state();
        self.reset_inputs();
        processed_input
    }

    /// Rolls key states forward and clears the look delta.
    pub fn reset_inputs(&mut self) {
        self.move_old_states();
        self.look_delta = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: InputKey, pressed: bool) -> InputEvent {
        InputEvent::Key { key, pressed }
    }

    #[test]
    fn press_then_hold_then_release() {
        let mut manager = InputManager::new();
        manager.intake_input(&key(InputKey::Jump, true));
        let first = manager.get_and_reset_processed_input();
        assert_eq!(first.get_key_state(InputKey::Jump), RawInputState::Pressed);

        let second = manager.get_and_reset_processed_input();
        assert_eq!(second.get_key_state(InputKey::Jump), RawInputState::Held);

        manager.intake_input(&key(InputKey::Jump, false));
        let third = manager.get_and_reset_processed_input();
        assert_eq!(third.get_key_state(InputKey::Jump), RawInputState::Released);

        let fourth = manager.get_and_reset_processed_input();
        assert_eq!(fourth.get_key_state(InputKey::Jump), RawInputState::NotPressed);
    }

    #[test]
    fn look_deltas_accumulate_until_reset() {
        let mut manager = InputManager::new();
        manager.intake_input(&InputEvent::Look { delta_x: 2.0, delta_y: -1.0 });
        manager.intake_input(&InputEvent::Look { delta_x: 3.0, delta_y: 0.5 });
        let snapshot = manager.get_and_reset_processed_input();
        assert_eq!(snapshot.get_look_delta(), Some((5.0, -0.5)));
        assert_eq!(manager.get_and_reset_processed_input().get_look_delta(), None);
    }

    #[test]
    fn focus_loss_releases_held_keys() {
        let mut manager = InputManager::new();
        manager.intake_input(&key(InputKey::MoveForward, true));
        manager.get_and_reset_processed_input();
        manager.intake_input(&InputEvent::FocusLost);
        let snapshot = manager.get_and_reset_processed_input();
        assert_eq!(snapshot.get_key_state(InputKey::MoveForward), RawInputState::Released);
    }
}
