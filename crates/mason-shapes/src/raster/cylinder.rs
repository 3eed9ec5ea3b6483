use mason_blocks::{Block, BlockType};
use mason_geom::IVec3;

use super::circle::disc_layer;
use crate::config::ShapeDefaults;

/// Vertical stack of discs rising along +y from `base`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cylinder {
    pub base: IVec3,
    pub radius: i32,
    pub height: i32,
    pub block_type: BlockType,
    pub hollow: bool,
}

impl Default for Cylinder {
    fn default() -> Self {
        ShapeDefaults::default().cylinder()
    }
}

impl Cylinder {
    pub fn rasterize(&self) -> Vec<Block> {
        let mut out = Vec::new();
        for j in 0..self.height.max(0) {
            let Some(center) = self.base.checked_add(IVec3::new(0, j, 0)) else {
                break;
            };
            disc_layer(
                center,
                self.radius,
                self.hollow,
                &self.block_type,
                &mut out,
            );
        }
        out
    }
}
