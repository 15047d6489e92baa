//! Tests for agent movement and voxel collision.

use cgmath::{Point3, Vector2};
use voxel_terrain::{AgentState, CollisionResolver, GroundState, PhysicsConfig, StepInput};

const DT: f32 = 1.0 / 60.0;

fn resolver() -> CollisionResolver {
    CollisionResolver::new(&PhysicsConfig::default())
}

fn settle(
    resolver: &CollisionResolver,
    agent: &mut AgentState,
    voxels: &[Point3<f32>],
    steps: usize,
) {
    for _ in 0..steps {
        resolver.step(agent, StepInput::default(), DT, voxels);
    }
}

#[test]
fn test_agent_settles_on_single_voxel() {
    let resolver = resolver();
    let height = 3.0;
    let voxels = [Point3::new(0.5, height + 0.5, 0.5)];
    let mut agent = AgentState::new(Point3::new(0.5, height + 6.0, 0.5));

    settle(&resolver, &mut agent, &voxels, 300);

    let rest = height + 1.0 + PhysicsConfig::default().half_height;
    assert!(
        (agent.position.y - rest).abs() < 0.01,
        "agent rests at {} instead of {}",
        agent.position.y,
        rest
    );
    assert_eq!(agent.ground, GroundState::Grounded);
    assert!(agent.velocity.y.abs() < 1e-6);
}

#[test]
fn test_jump_launches_grounded_agent() {
    let resolver = resolver();
    let voxels = [Point3::new(0.5, 0.5, 0.5)];
    let mut agent = AgentState::new(Point3::new(0.5, 4.0, 0.5));
    settle(&resolver, &mut agent, &voxels, 300);
    assert!(agent.is_grounded());

    let report = resolver.step(
        &mut agent,
        StepInput {
            horizontal_velocity: Vector2::new(0.0, 0.0),
            jump: true,
        },
        DT,
        &voxels,
    );
    assert!(report.jumped);
    assert_eq!(agent.velocity.y, PhysicsConfig::default().jump_speed);
    assert_eq!(agent.ground, GroundState::Airborne);

    // Rises on the next step.
    let before = agent.position.y;
    resolver.step(&mut agent, StepInput::default(), DT, &voxels);
    assert!(agent.position.y > before);
}

#[test]
fn test_airborne_agent_cannot_jump() {
    let resolver = resolver();
    let mut agent = AgentState::new(Point3::new(0.5, 50.0, 0.5));
    let report = resolver.step(
        &mut agent,
        StepInput {
            horizontal_velocity: Vector2::new(0.0, 0.0),
            jump: true,
        },
        DT,
        &[],
    );
    assert!(!report.jumped);
    assert!(agent.velocity.y < 0.0);
}

#[test]
fn test_agent_without_voxels_falls_forever() {
    let resolver = resolver();
    let mut agent = AgentState::new(Point3::new(0.0, 0.0, 0.0));
    settle(&resolver, &mut agent, &[], 120);
    assert!(agent.position.y < -10.0);
    assert_eq!(agent.ground, GroundState::Airborne);
}

#[test]
fn test_diagonal_move_slides_along_wall() {
    let resolver = resolver();
    let mut voxels = Vec::new();
    for z in -10..10 {
        for y in 0..6 {
            voxels.push(Point3::new(2.5, y as f32 + 0.5, z as f32 + 0.5));
        }
    }
    let mut agent = AgentState::new(Point3::new(1.0, 3.0, 0.5));
    let input = StepInput {
        horizontal_velocity: Vector2::new(8.0, 8.0),
        jump: false,
    };

    let mut last = None;
    for _ in 0..10 {
        last = Some(resolver.step(&mut agent, input, DT, &voxels));
    }
    let report = last.expect("ran at least one step");

    let max_x = 2.0 - PhysicsConfig::default().half_width;
    assert!(agent.position.x <= max_x + 1e-3, "agent entered the wall at x = {}", agent.position.x);
    assert!(report.blocked[0]);
    assert!(!report.blocked[2]);
    assert!((agent.position.z - (0.5 + 10.0 * 8.0 * DT)).abs() < 1e-3);
    assert_eq!(agent.velocity.x, 0.0);
}

#[test]
fn test_ceiling_stops_upward_motion() {
    let resolver = resolver();
    let voxels = [
        Point3::new(0.5, 0.5, 0.5),
        Point3::new(0.5, 4.5, 0.5),
    ];
    // Floor top at 1, ceiling bottom at 4: 3 blocks of head room for a 1.8 tall agent.
    let mut agent = AgentState::new(Point3::new(0.5, 2.0, 0.5));
    settle(&resolver, &mut agent, &voxels, 120);
    assert!(agent.is_grounded());

    resolver.step(
        &mut agent,
        StepInput {
            horizontal_velocity: Vector2::new(0.0, 0.0),
            jump: true,
        },
        DT,
        &voxels,
    );
    for _ in 0..30 {
        resolver.step(&mut agent, StepInput::default(), DT, &voxels);
        assert!(agent.position.y + 0.9 <= 4.0 + 1e-3);
    }
}
