use cgmath::Point3;

use crate::engine_state::voxels::block::{block_side::BlockSide, block_type::BlockType};

/// A single merged quad produced by the greedy mesher.
///
/// A face lies in the plane `coordinate[side.axis()] == plane` and spans a
/// rectangle on the other two axes. With `i = (axis + 1) % 3` and
/// `j = (axis + 2) % 3`, the corners are:
/// - `ll`: the base corner
/// - `lr`: `ll` moved `height` cells along `i`
/// - `ur`: `ll` moved `height` along `i` and `width` along `j`
/// - `ul`: `ll` moved `width` cells along `j`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Base corner in chunk coordinates
    pub ll: Point3<usize>,
    /// Corner at the end of the height edge
    pub lr: Point3<usize>,
    /// Corner opposite the base
    pub ur: Point3<usize>,
    /// Corner at the end of the width edge
    pub ul: Point3<usize>,
    /// The block type this face was cut from
    pub block_type: BlockType,
    /// Which side of the block this face represents
    pub block_side: BlockSide,
}

impl Face {
    /// Builds the face covering mask rectangle `(i, j)` of size `height`x`width`
    /// on the given plane.
    pub fn from_mask_rect(
        block_side: BlockSide,
        plane: usize,
        i: usize,
        j: usize,
        height: usize,
        width: usize,
        block_type: BlockType,
    ) -> Self {
        let axis = block_side.axis();
        let i_axis = (axis + 1) % 3;
        let j_axis = (axis + 2) % 3;

        let mut ll = Point3::new(0, 0, 0);
        ll[axis] = plane;
        ll[i_axis] = i;
        ll[j_axis] = j;

        let mut lr = ll;
        lr[i_axis] += height;
        let mut ul = ll;
        ul[j_axis] += width;
        let mut ur = lr;
        ur[j_axis] += width;

        Face {
            ll,
            lr,
            ur,
            ul,
            block_type,
            block_side,
        }
    }

    /// The six corners of the face's two triangles, counter-clockwise when
    /// seen from the side the normal points to.
    pub fn triangle_corners(&self) -> [Point3<usize>; 6] {
        if self.block_side.is_positive() {
            [self.ll, self.lr, self.ur, self.ur, self.ul, self.ll]
        } else {
            [self.ll, self.ul, self.ur, self.ur, self.lr, self.ll]
        }
    }
}
