use mason_blocks::{Block, BlockType};
use mason_geom::IVec3;

use super::push_cell;
use crate::config::ShapeDefaults;

/// Stepped pyramid whose base's minimum corner sits at `corner`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pyramid {
    pub corner: IVec3,
    pub base_size: i32,
    pub block_type: BlockType,
}

impl Default for Pyramid {
    fn default() -> Self {
        ShapeDefaults::default().pyramid()
    }
}

impl Pyramid {
    /// Number of layers: `(base_size + 1) div 2`, floored.
    pub fn height(&self) -> i32 {
        ((i64::from(self.base_size) + 1).div_euclid(2)) as i32
    }

    /// Layer `j` is a solid `base_size - 2j` square raised by `j` and inset
    /// by `j` on both horizontal axes.
    pub fn rasterize(&self) -> Vec<Block> {
        let mut out = Vec::new();
        for j in 0..self.height() {
            let layer = self.base_size - 2 * j;
            if layer <= 0 {
                break;
            }
            for i in 0..layer {
                for k in 0..layer {
                    push_cell(&mut out, self.corner, IVec3::new(i + j, j, k + j), &self.block_type);
                }
            }
        }
        out
    }
}
