use cgmath::{Point3, Vector3};

/// Whether the agent is standing on something.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum GroundState {
    /// Falling or rising; jumping is not possible
    #[default]
    Airborne,
    /// Supported from below; the next jump trigger launches the agent
    Grounded,
}

/// Kinematic state of the collision-resolved agent.
///
/// `position` is the center of the agent's box.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentState {
    /// Center of the agent's bounding box
    pub position: Point3<f32>,
    /// Velocity in blocks per second
    pub velocity: Vector3<f32>,
    /// Current grounding state
    pub ground: GroundState,
}

impl AgentState {
    /// An airborne agent at rest at `position`.
    pub fn new(position: Point3<f32>) -> Self {
        AgentState {
            position,
            velocity: Vector3::new(0.0, 0.0, 0.0),
            ground: GroundState::Airborne,
        }
    }

    /// Whether the agent is grounded.
    pub fn is_grounded(&self) -> bool {
        self.ground == GroundState::Grounded
    }
}

/// Result of trying to push an overlapping agent free.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UnjamOutcome {
    /// The agent is free after this many upward nudges (zero if it was never stuck)
    Clear {
        /// Nudges applied
        nudges: u32,
    },
    /// The attempt limit was reached and the agent still overlaps terrain
    Stuck {
        /// Nudges applied before giving up
        attempts: u32,
    },
}

impl UnjamOutcome {
    /// Whether the agent ended up free.
    pub fn is_clear(&self) -> bool {
        matches!(self, UnjamOutcome::Clear { .. })
    }
}
