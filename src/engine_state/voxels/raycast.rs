//! Voxel ray traversal for block targeting.

use cgmath::{InnerSpace, Point3, Vector3};

use super::block::{block_side::BlockSide, block_type::BlockType};

/// The first solid cell along a ray.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit {
    /// The solid cell that was hit
    pub block_position: Point3<i32>,
    /// The last empty cell before the hit, where a new block would go
    pub place_position: Point3<i32>,
    /// Type of the hit block
    pub block_type: BlockType,
    /// Face of the hit block the ray entered through
    pub face: BlockSide,
    /// Ray length to the entry point
    pub distance: f32,
}

/// Walks the cells a ray passes through, in order, until one is solid or the
/// ray is longer than `max_distance`.
///
/// `block_at` answers the block type of a world cell. A zero direction never
/// hits anything.
pub fn raycast(
    origin: Point3<f32>,
    direction: Vector3<f32>,
    max_distance: f32,
    block_at: impl Fn(Point3<i32>) -> BlockType,
) -> Option<RayHit> {
    if direction.magnitude2() == 0.0 {
        return None;
    }
    let direction = direction.normalize();

    let mut cell = Point3::new(
        origin.x.floor() as i32,
        origin.y.floor() as i32,
        origin.z.floor() as i32,
    );
    let mut step = [0i32; 3];
    let mut t_delta = [f32::MAX; 3];
    let mut t_max = [f32::MAX; 3];
    for axis in 0..3 {
        let d = direction[axis];
        if d > 0.0 {
            step[axis] = 1;
            t_delta[axis] = 1.0 / d;
            t_max[axis] = ((cell[axis] + 1) as f32 - origin[axis]) * t_delta[axis];
        } else if d < 0.0 {
            step[axis] = -1;
            t_delta[axis] = -1.0 / d;
            t_max[axis] = (origin[axis] - cell[axis] as f32) * t_delta[axis];
        }
    }

    // Starting inside a solid cell counts as a hit on the face facing back
    // along the dominant ray axis.
    let start_type = block_at(cell);
    if start_type.is_solid() {
        let axis = dominant_axis(direction);
        return Some(RayHit {
            block_position: cell,
            place_position: cell,
            block_type: start_type,
            face: BlockSide::from_axis(axis, direction[axis] < 0.0),
            distance: 0.0,
        });
    }

    loop {
        let axis = if t_max[0] < t_max[1] {
            if t_max[0] < t_max[2] {
                0
            } else {
                2
            }
        } else if t_max[1] < t_max[2] {
            1
        } else {
            2
        };

        let distance = t_max[axis];
        if distance > max_distance || step[axis] == 0 {
            return None;
        }

        let previous = cell;
        cell[axis] += step[axis];
        t_max[axis] += t_delta[axis];

        let block_type = block_at(cell);
        if block_type.is_solid() {
            return Some(RayHit {
                block_position: cell,
                place_position: previous,
                block_type,
                face: BlockSide::from_axis(axis, step[axis] < 0),
                distance,
            });
        }
    }
}

fn dominant_axis(direction: Vector3<f32>) -> usize {
    let abs = [direction.x.abs(), direction.y.abs(), direction.z.abs()];
    if abs[0] >= abs[1] && abs[0] >= abs[2] {
        0
    } else if abs[1] >= abs[2] {
        1
    } else {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor_at(height: i32) -> impl Fn(Point3<i32>) -> BlockType {
        move |p: Point3<i32>| {
            if p.y <= height {
                BlockType::STONE
            } else {
                BlockType::AIR
            }
        }
    }

    #[test]
    fn looking_down_hits_the_floor_top_face() {
        let hit = raycast(
            Point3::new(0.5, 5.5, 0.5),
            Vector3::new(0.0, -1.0, 0.0),
            6.0,
            floor_at(2),
        )
        .expect("floor within reach");
        assert_eq!(hit.block_position, Point3::new(0, 2, 0));
        assert_eq!(hit.place_position, Point3::new(0, 3, 0));
        assert_eq!(hit.face, BlockSide::TOP);
        assert!((hit.distance - 2.5).abs() < 1e-4);
    }

    #[test]
    fn targets_beyond_reach_are_missed() {
        let hit = raycast(
            Point3::new(0.5, 10.5, 0.5),
            Vector3::new(0.0, -1.0, 0.0),
            6.0,
            floor_at(2),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn horizontal_rays_enter_through_side_faces() {
        let wall = |p: Point3<i32>| {
            if p.x >= 3 {
                BlockType::DIRT
            } else {
                BlockType::AIR
            }
        };
        let hit = raycast(Point3::new(0.5, 0.5, 0.5), Vector3::new(1.0, 0.0, 0.0), 6.0, wall)
            .expect("wall within reach");
        assert_eq!(hit.block_position, Point3::new(3, 0, 0));
        assert_eq!(hit.place_position, Point3::new(2, 0, 0));
        assert_eq!(hit.face, BlockSide::LEFT);
    }

    #[test]
    fn zero_direction_hits_nothing() {
        assert!(raycast(Point3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 0.0), 6.0, floor_at(5)).is_none());
    }
}
