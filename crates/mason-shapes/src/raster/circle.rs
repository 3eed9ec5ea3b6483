use mason_blocks::{Block, BlockType};
use mason_geom::IVec3;

use super::{in_radius_band, push_cell};
use crate::config::ShapeDefaults;

/// Flat disc (or ring, when hollow) in the x/z plane at the centre's y.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Circle {
    pub center: IVec3,
    pub radius: i32,
    pub block_type: BlockType,
    pub hollow: bool,
}

impl Default for Circle {
    fn default() -> Self {
        ShapeDefaults::default().circle()
    }
}

impl Circle {
    pub fn rasterize(&self) -> Vec<Block> {
        let mut out = Vec::new();
        disc_layer(self.center, self.radius, self.hollow, &self.block_type, &mut out);
        out
    }
}

/// Appends one x/z disc layer centred on `center`, scanning i then k.
pub(super) fn disc_layer(
    center: IVec3,
    radius: i32,
    hollow: bool,
    block_type: &BlockType,
    out: &mut Vec<Block>,
) {
    if radius < 0 {
        return;
    }
    for i in -radius..=radius {
        for k in -radius..=radius {
            let dist_sq = i64::from(i) * i64::from(i) + i64::from(k) * i64::from(k);
            if in_radius_band(dist_sq, radius, hollow) {
                push_cell(out, center, IVec3::new(i, 0, k), block_type);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_stays_on_its_plane() {
        let c = Circle {
            center: IVec3::new(10, 64, -3),
            ..Circle::default()
        };
        let blocks = c.rasterize();
        assert!(blocks.iter().all(|b| b.y == 64));
        // Lattice points with i²+k² <= 25.
        assert_eq!(blocks.len(), 81);
    }

    #[test]
    fn hollow_ring_counts() {
        let ring = Circle {
            radius: 2,
            hollow: true,
            ..Circle::default()
        };
        // d <= 4 gives 13 points, d <= 1 gives 5.
        assert_eq!(ring.rasterize().len(), 8);
    }
}
