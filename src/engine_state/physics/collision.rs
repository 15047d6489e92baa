//! Per-axis AABB collision between the agent and voxel cells.
//!
//! Each step moves the agent one axis at a time (X, then Z, then Y). A move
//! that would overlap any voxel is cancelled and zeroes that velocity
//! component, so an agent sliding into a wall keeps its motion along the wall.

use cgmath::{Point3, Vector2, Vector3};
use log::{debug, trace, warn};

use crate::config::PhysicsConfig;

use super::agent::{AgentState, GroundState, UnjamOutcome};

/// Half extent of a voxel cell.
pub const VOXEL_HALF_EXTENT: f32 = 0.5;

/// Penetration depth below which two boxes are treated as touching.
const CONTACT_SKIN: f32 = 1e-4;

/// Axis resolution order: X, Z, then Y.
const AXIS_ORDER: [usize; 3] = [0, 2, 1];

/// An axis-aligned box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Point3<f32>,
    /// Maximum corner
    pub max: Point3<f32>,
}

impl Aabb {
    /// The box centered at `center` with the given half extents.
    pub fn from_center(center: Point3<f32>, half_extents: Vector3<f32>) -> Self {
        Aabb {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// The box of the voxel cell centered at `center`.
    pub fn voxel(center: Point3<f32>) -> Self {
        Self::from_center(center, Vector3::new(VOXEL_HALF_EXTENT, VOXEL_HALF_EXTENT, VOXEL_HALF_EXTENT))
    }

    /// Whether the boxes overlap by more than the contact skin on every axis.
    ///
    /// Boxes that merely touch do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        (0..3).all(|axis| {
            self.max[axis] - other.min[axis] > CONTACT_SKIN
                && other.max[axis] - self.min[axis] > CONTACT_SKIN
        })
    }
}

/// Per-step input to the resolver.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepInput {
    /// Desired horizontal velocity `(x, z)`; replaces the current one outright
    pub horizontal_velocity: Vector2<f32>,
    /// Jump trigger for this step
    pub jump: bool,
}

impl Default for StepInput {
    fn default() -> Self {
        StepInput {
            horizontal_velocity: Vector2::new(0.0, 0.0),
            jump: false,
        }
    }
}

/// What happened during one resolver step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Axes whose move was cancelled, indexed X, Y, Z
    pub blocked: [bool; 3],
    /// Whether a jump was started at the end of the step
    pub jumped: bool,
}

/// Moves the agent through the voxel field.
#[derive(Clone, Debug, PartialEq)]
pub struct CollisionResolver {
    gravity: f32,
    jump_speed: f32,
    half_extents: Vector3<f32>,
    prune_margin: f32,
    unjam_step: f32,
    unjam_max_attempts: u32,
}

impl CollisionResolver {
    /// Creates a resolver from validated physics settings.
    pub fn new(physics: &PhysicsConfig) -> Self {
        CollisionResolver {
            gravity: physics.gravity,
            jump_speed: physics.jump_speed,
            half_extents: Vector3::new(physics.half_width, physics.half_height, physics.half_width),
            prune_margin: physics.prune_margin,
            unjam_step: physics.unjam_step,
            unjam_max_attempts: physics.unjam_max_attempts,
        }
    }

    /// Half extents of the agent's box.
    pub fn half_extents(&self) -> Vector3<f32> {
        self.half_extents
    }

    /// Half extents of the region around the agent whose voxels can affect a
    /// step of length `dt` at `velocity`, including room for unjamming.
    pub fn query_extent(&self, velocity: Vector3<f32>, dt: f32) -> Vector3<f32> {
        let reach = VOXEL_HALF_EXTENT + self.prune_margin;
        let vertical_gain = (velocity.y.abs() + self.gravity.abs() * dt) * dt;
        let unjam_reach = self.unjam_step * self.unjam_max_attempts as f32;
        Vector3::new(
            self.half_extents.x + reach + velocity.x.abs() * dt,
            self.half_extents.y + reach + vertical_gain + unjam_reach,
            self.half_extents.z + reach + velocity.z.abs() * dt,
        )
    }

    /// Whether the agent's box at `position` overlaps any voxel.
    ///
    /// Voxels farther than the prune distance on any axis are skipped before
    /// the box test.
    pub fn overlaps_any(&self, position: Point3<f32>, voxels: &[Point3<f32>]) -> bool {
        let agent = Aabb::from_center(position, self.half_extents);
        let prune = self.half_extents + Vector3::new(1.0, 1.0, 1.0) * (VOXEL_HALF_EXTENT + self.prune_margin);
        voxels.iter().any(|voxel| {
            (voxel.x - position.x).abs() <= prune.x
                && (voxel.y - position.y).abs() <= prune.y
                && (voxel.z - position.z).abs() <= prune.z
                && agent.intersects(&Aabb::voxel(*voxel))
        })
    }

    /// Advances the agent by `dt` seconds.
    ///
    /// 1. Horizontal velocity is replaced by the input.
    /// 2. Gravity is integrated into the vertical velocity.
    /// 3. X, Z and Y are resolved in that order; a blocked axis keeps its
    ///    position and has its velocity zeroed.
    /// 4. A blocked downward move grounds the agent, a completed vertical move
    ///    makes it airborne.
    /// 5. A grounded agent with the jump trigger set launches upward.
    pub fn step(
        &self,
        agent: &mut AgentState,
        input: StepInput,
        dt: f32,
        voxels: &[Point3<f32>],
    ) -> StepReport {
        let mut report = StepReport::default();

        agent.velocity.x = input.horizontal_velocity.x;
        agent.velocity.z = input.horizontal_velocity.y;
        agent.velocity.y += self.gravity * dt;

        let falling = agent.velocity.y < 0.0;
        let mut moved_vertically = false;

        for axis in AXIS_ORDER {
            let delta = agent.velocity[axis] * dt;
            if delta == 0.0 {
                continue;
            }
            let mut candidate = agent.position;
            candidate[axis] += delta;
            if self.overlaps_any(candidate, voxels) {
                agent.velocity[axis] = 0.0;
                report.blocked[axis] = true;
            } else {
                agent.position = candidate;
                if axis == 1 {
                    moved_vertically = true;
                }
            }
        }

        if report.blocked[1] && falling {
            agent.ground = GroundState::Grounded;
        } else if moved_vertically {
            agent.ground = GroundState::Airborne;
        }

        if input.jump && agent.ground == GroundState::Grounded {
            agent.velocity.y = self.jump_speed;
            agent.ground = GroundState::Airborne;
            report.jumped = true;
        }

        trace!(
            "Agent at ({:.3}, {:.3}, {:.3}) velocity ({:.3}, {:.3}, {:.3}) {:?}",
            agent.position.x,
            agent.position.y,
            agent.position.z,
            agent.velocity.x,
            agent.velocity.y,
            agent.velocity.z,
            agent.ground
        );
        report
    }

    /// Nudges an agent that overlaps terrain upward until it is free.
    ///
    /// Gives up after the configured number of attempts and reports the agent
    /// as stuck, leaving it at the last tried position.
    pub fn unjam(&self, agent: &mut AgentState, voxels: &[Point3<f32>]) -> UnjamOutcome {
        let mut nudges = 0;
        while self.overlaps_any(agent.position, voxels) {
            if nudges >= self.unjam_max_attempts {
                warn!(
                    "Agent still stuck at ({:.2}, {:.2}, {:.2}) after {} nudges",
                    agent.position.x, agent.position.y, agent.position.z, nudges
                );
                return UnjamOutcome::Stuck { attempts: nudges };
            }
            agent.position.y += self.unjam_step;
            nudges += 1;
        }
        if nudges > 0 {
            agent.velocity.y = 0.0;
            debug!("Unjammed agent with {} nudges", nudges);
        }
        UnjamOutcome::Clear { nudges }
    }
}
