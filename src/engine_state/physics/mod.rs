//! # Agent Physics
//!
//! Gravity, jumping and axis-separated collision of a box-shaped agent against
//! solid voxel cells.

pub mod agent;
pub mod collision;

pub use agent::{AgentState, GroundState, UnjamOutcome};
pub use collision::{Aabb, CollisionResolver, StepInput, StepReport, VOXEL_HALF_EXTENT};
