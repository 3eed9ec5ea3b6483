use mason_blocks::{Block, BlockType};
use mason_geom::IVec3;

use super::push_cell;
use crate::config::ShapeDefaults;

/// Axis-aligned box anchored at its minimum corner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cube {
    pub origin: IVec3,
    pub size: IVec3,
    pub block_type: BlockType,
    pub hollow: bool,
}

impl Default for Cube {
    fn default() -> Self {
        ShapeDefaults::default().cube()
    }
}

impl Cube {
    /// Visits `[0,sx) × [0,sy) × [0,sz)` in x, y, z order. Hollow cubes keep
    /// only offsets touching a face; a dimension below 3 has no interior so
    /// the hollow and solid results coincide. Cells past the `i32` edge are
    /// dropped.
    pub fn rasterize(&self) -> Vec<Block> {
        let IVec3 {
            x: sx,
            y: sy,
            z: sz,
        } = self.size;
        if sx <= 0 || sy <= 0 || sz <= 0 {
            return Vec::new();
        }
        let cap = if self.hollow {
            None
        } else {
            (sx as usize)
                .checked_mul(sy as usize)
                .and_then(|n| n.checked_mul(sz as usize))
        };
        let mut out = Vec::with_capacity(cap.unwrap_or(0));
        for i in 0..sx {
            for j in 0..sy {
                for k in 0..sz {
                    let shell = i == 0
                        || i == sx - 1
                        || j == 0
                        || j == sy - 1
                        || k == 0
                        || k == sz - 1;
                    if !self.hollow || shell {
                        push_cell(&mut out, self.origin, IVec3::new(i, j, k), &self.block_type);
                    }
                }
            }
        }
        out
    }
}
