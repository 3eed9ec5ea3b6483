use mason_blocks::{Block, BlockType};
use mason_geom::IVec3;

use crate::config::ShapeDefaults;

/// Straight segment between two inclusive endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub from: IVec3,
    pub to: IVec3,
    pub block_type: BlockType,
}

impl Default for Line {
    fn default() -> Self {
        ShapeDefaults::default().line()
    }
}

impl Line {
    /// Walks `steps + 1` samples where `steps` is the largest axis delta.
    ///
    /// Samples are accumulated in `f64` from the start point and rounded
    /// half-to-even. Consecutive samples may round to the same cell; such
    /// duplicates are kept.
    pub fn rasterize(&self) -> Vec<Block> {
        let dx = i64::from(self.to.x) - i64::from(self.from.x);
        let dy = i64::from(self.to.y) - i64::from(self.from.y);
        let dz = i64::from(self.to.z) - i64::from(self.from.z);
        let steps = dx.abs().max(dy.abs()).max(dz.abs());
        if steps == 0 {
            return vec![Block::new(self.from, self.block_type.clone())];
        }

        let n = steps as f64;
        let (x_inc, y_inc, z_inc) = (dx as f64 / n, dy as f64 / n, dz as f64 / n);
        let (mut x, mut y, mut z) = (
            f64::from(self.from.x),
            f64::from(self.from.y),
            f64::from(self.from.z),
        );
        let mut out = Vec::with_capacity(steps as usize + 1);
        for _ in 0..=steps {
            let p = IVec3::new(round_cell(x), round_cell(y), round_cell(z));
            out.push(Block::new(p, self.block_type.clone()));
            x += x_inc;
            y += y_inc;
            z += z_inc;
        }
        out
    }
}

#[inline]
fn round_cell(v: f64) -> i32 {
    v.round_ties_even() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(from: (i32, i32, i32), to: (i32, i32, i32)) -> Line {
        Line {
            from: from.into(),
            to: to.into(),
            block_type: "cobblestone".into(),
        }
    }

    fn cells(blocks: &[Block]) -> Vec<(i32, i32, i32)> {
        blocks.iter().map(|b| b.pos().into()).collect()
    }

    #[test]
    fn axis_aligned_line() {
        let blocks = line((0, 0, 0), (4, 0, 0)).rasterize();
        assert_eq!(
            cells(&blocks),
            vec![(0, 0, 0), (1, 0, 0), (2, 0, 0), (3, 0, 0), (4, 0, 0)]
        );
        assert!(blocks.iter().all(|b| b.block_type == "cobblestone"));
    }

    #[test]
    fn zero_length_is_one_block() {
        let blocks = line((3, -2, 7), (3, -2, 7)).rasterize();
        assert_eq!(cells(&blocks), vec![(3, -2, 7)]);
    }

    #[test]
    fn half_steps_round_to_even() {
        // z advances 0.5 per step: 0, 0.5, 1.0, 1.5, 2.0
        let blocks = line((0, 0, 0), (4, 0, 2)).rasterize();
        assert_eq!(
            cells(&blocks),
            vec![(0, 0, 0), (1, 0, 0), (2, 0, 1), (3, 0, 2), (4, 0, 2)]
        );
    }

    #[test]
    fn reversed_and_negative_direction() {
        let blocks = line((2, 5, 0), (-2, 1, 0)).rasterize();
        assert_eq!(
            cells(&blocks),
            vec![(2, 5, 0), (1, 4, 0), (0, 3, 0), (-1, 2, 0), (-2, 1, 0)]
        );
    }

    #[test]
    fn endpoints_are_hit() {
        let l = line((0, 0, 0), (7, 3, -5));
        let blocks = l.rasterize();
        assert_eq!(blocks.len(), 8);
        assert_eq!(blocks.first().map(Block::pos), Some(l.from));
        assert_eq!(blocks.last().map(Block::pos), Some(l.to));
    }
}
