use mason_blocks::{Block, BlockType};
use mason_geom::IVec3;

use super::push_cell;
use crate::config::ShapeDefaults;

/// Semicircular arch in the x/y plane, extruded `width` cells along +z.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arch {
    pub origin: IVec3,
    pub radius: i32,
    pub width: i32,
    pub block_type: BlockType,
}

impl Default for Arch {
    fn default() -> Self {
        ShapeDefaults::default().arch()
    }
}

impl Arch {
    /// Keeps `(i, j)` with `|i² + j² - r²| < r` for `i ∈ [-r, r]`,
    /// `j ∈ [0, r]`. The band gets thicker as `r` grows.
    // TODO: offer a fixed one-cell band variant alongside this one once callers can choose it.
    pub fn rasterize(&self) -> Vec<Block> {
        let r = self.radius;
        if r < 0 {
            return Vec::new();
        }
        let r64 = i64::from(r);
        let mut out = Vec::new();
        for k in 0..self.width.max(0) {
            for i in -r..=r {
                for j in 0..=r {
                    let d = i64::from(i) * i64::from(i) + i64::from(j) * i64::from(j);
                    if (d - r64 * r64).abs() < r64 {
                        push_cell(&mut out, self.origin, IVec3::new(i, j, k), &self.block_type);
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_two_profile() {
        let arch = Arch {
            radius: 2,
            width: 1,
            ..Arch::default()
        };
        let mut cells: Vec<(i32, i32, i32)> = arch.rasterize().iter().map(|b| b.pos().into()).collect();
        cells.sort();
        // |i²+j²-4| < 2  =>  i²+j² in {3, 4, 5}
        assert_eq!(
            cells,
            vec![(-2, 0, 0), (-2, 1, 0), (-1, 2, 0), (0, 2, 0), (1, 2, 0), (2, 0, 0), (2, 1, 0)]
        );
    }

    #[test]
    fn width_repeats_profile_along_z() {
        let arch = Arch::default();
        let blocks = arch.rasterize();
        assert_eq!(arch.block_type, "stone_bricks");
        assert_eq!(blocks.len() % 3, 0);
        let per_slice = blocks.len() / 3;
        for k in 0..3 {
            assert!(
                blocks[k * per_slice..(k + 1) * per_slice]
                    .iter()
                    .all(|b| b.z == k as i32)
            );
        }
    }

    #[test]
    fn degenerate_arches_are_empty() {
        assert!(Arch { radius: 0, ..Arch::default() }.rasterize().is_empty());
        assert!(Arch { width: 0, ..Arch::default() }.rasterize().is_empty());
    }
}
