//! One pure rasterizer per primitive.
//!
//! Curved shapes only compare integer squared distances, so a given set of
//! parameters always yields the same blocks in the same order.

use mason_blocks::{Block, BlockType};
use mason_geom::IVec3;

mod arch;
mod circle;
mod cube;
mod cylinder;
mod line;
mod pyramid;
mod sphere;

pub use arch::Arch;
pub use circle::Circle;
pub use cube::Cube;
pub use cylinder::Cylinder;
pub use line::Line;
pub use pyramid::Pyramid;
pub use sphere::Sphere;

/// Radius test shared by sphere, circle and cylinder.
///
/// Solid shapes keep `dist_sq <= r²`. Hollow shapes additionally require
/// `dist_sq > (r-1)²`, which leaves a one-cell band rather than an exact
/// surface.
#[inline]
pub(crate) fn in_radius_band(dist_sq: i64, radius: i32, hollow: bool) -> bool {
    let r = i64::from(radius);
    if dist_sq > r * r {
        return false;
    }
    !hollow || dist_sq > (r - 1) * (r - 1)
}

/// Pushes the cell at `origin + offset`. Cells past the edge of the `i32`
/// lattice are dropped.
#[inline]
pub(crate) fn push_cell(out: &mut Vec<Block>, origin: IVec3, offset: IVec3, block_type: &BlockType) {
    if let Some(p) = origin.checked_add(offset) {
        out.push(Block::new(p, block_type.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges() {
        assert!(in_radius_band(25, 5, false));
        assert!(!in_radius_band(26, 5, false));
        assert!(in_radius_band(0, 5, false));
        // hollow: (r-1)² = 16 excluded, 17 kept
        assert!(!in_radius_band(16, 5, true));
        assert!(in_radius_band(17, 5, true));
        // r = 0 solid keeps only the centre; hollow keeps nothing
        assert!(in_radius_band(0, 0, false));
        assert!(!in_radius_band(0, 0, true));
    }

    #[test]
    fn push_cell_drops_off_lattice() {
        let stone = BlockType::from("stone");
        let mut out = Vec::new();
        let edge = IVec3::new(i32::MAX, 0, i32::MIN);
        push_cell(&mut out, edge, IVec3::new(1, 0, 0), &stone);
        push_cell(&mut out, edge, IVec3::new(0, 0, -1), &stone);
        push_cell(&mut out, edge, IVec3::new(-1, 0, 1), &stone);
        assert_eq!(out, vec![Block::new(IVec3::new(i32::MAX - 1, 0, i32::MIN + 1), stone)]);
    }
}
