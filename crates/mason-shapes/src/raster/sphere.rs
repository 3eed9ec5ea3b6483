use mason_blocks::{Block, BlockType};
use mason_geom::IVec3;

use super::{in_radius_band, push_cell};
use crate::config::ShapeDefaults;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sphere {
    pub center: IVec3,
    pub radius: i32,
    pub block_type: BlockType,
    pub hollow: bool,
}

impl Default for Sphere {
    fn default() -> Self {
        ShapeDefaults::default().sphere()
    }
}

impl Sphere {
    /// Scans the cube `[-r, r]³` around the centre. A negative radius scans
    /// nothing.
    pub fn rasterize(&self) -> Vec<Block> {
        let r = self.radius;
        if r < 0 {
            return Vec::new();
        }
        let mut out = Vec::new();
        for i in -r..=r {
            for j in -r..=r {
                for k in -r..=r {
                    let offset = IVec3::new(i, j, k);
                    if in_radius_band(offset.length_sq(), r, self.hollow) {
                        push_cell(&mut out, self.center, offset, &self.block_type);
                    }
                }
            }
        }
        out
    }
}
