use mason_geom::{Aabb, IVec3};
use serde::{Deserialize, Serialize};

use crate::types::Block;

/// Cell counts along x, y and z. Wider than a coordinate: blocks at both
/// ends of the `i32` range are 2³² cells apart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: i64,
    pub height: i64,
    pub depth: i64,
}

/// Summary of a block sequence's extents.
///
/// An empty sequence has no extent; its min, max and dimensions all read
/// as zero and it occupies nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    extent: Option<Aabb>,
}

impl BoundingBox {
    pub const EMPTY: BoundingBox = BoundingBox { extent: None };

    pub fn of(blocks: &[Block]) -> Self {
        Self {
            extent: Aabb::from_points(blocks.iter().map(Block::pos)),
        }
    }

    #[inline]
    pub fn from_aabb(aabb: Aabb) -> Self {
        Self { extent: Some(aabb) }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.extent.is_none()
    }

    #[inline]
    pub fn aabb(&self) -> Option<Aabb> {
        self.extent
    }

    #[inline]
    pub fn min(&self) -> IVec3 {
        self.extent.map_or(IVec3::ZERO, |a| a.min)
    }

    #[inline]
    pub fn max(&self) -> IVec3 {
        self.extent.map_or(IVec3::ZERO, |a| a.max)
    }

    pub fn dimensions(&self) -> Dimensions {
        match self.extent {
            Some(a) => {
                let (width, height, depth) = a.extent();
                Dimensions {
                    width,
                    height,
                    depth,
                }
            }
            None => Dimensions::default(),
        }
    }
}

/// Reduces a block sequence to its bounding box. Never fails.
#[inline]
pub fn bounding_box(blocks: &[Block]) -> BoundingBox {
    BoundingBox::of(blocks)
}
