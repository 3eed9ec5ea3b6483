use std::collections::HashSet;

use mason_blocks::{Block, BlockType};
use mason_geom::{Aabb, IVec3};
use mason_shapes::{Arch, Circle, Cube, Cylinder, Line, Pyramid, Sphere};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = i32> {
    -1_000i32..=1_000
}

fn arb_pos() -> impl Strategy<Value = IVec3> {
    (coord(), coord(), coord()).prop_map(|(x, y, z)| IVec3::new(x, y, z))
}

fn stone() -> BlockType {
    BlockType::from("stone")
}

fn cells(blocks: &[Block]) -> Vec<IVec3> {
    blocks.iter().map(Block::pos).collect()
}

fn all_within(blocks: &[Block], region: Aabb) -> bool {
    blocks.iter().all(|b| region.contains(b.pos()))
}

proptest! {
    // Solid cube visits each of a·b·c cells exactly once
    #[test]
    fn solid_cube_cardinality(origin in arb_pos(), a in 1i32..10, b in 1i32..10, c in 1i32..10) {
        let cube = Cube { origin, size: IVec3::new(a, b, c), block_type: stone(), hollow: false };
        let blocks = cube.rasterize();
        prop_assert_eq!(blocks.len() as i32, a * b * c);
        let unique: HashSet<IVec3> = cells(&blocks).into_iter().collect();
        prop_assert_eq!(unique.len(), blocks.len());
        let region = Aabb::from_corners(origin, origin + IVec3::new(a - 1, b - 1, c - 1));
        prop_assert!(all_within(&blocks, region));
    }

    // Hollow cube keeps a·b·c − (a−2)(b−2)(c−2) shell cells
    #[test]
    fn hollow_cube_shell_cardinality(a in 3i32..12, b in 3i32..12, c in 3i32..12) {
        let cube = Cube { origin: IVec3::ZERO, size: IVec3::new(a, b, c), block_type: stone(), hollow: true };
        let blocks = cube.rasterize();
        prop_assert_eq!(blocks.len() as i32, a * b * c - (a - 2) * (b - 2) * (c - 2));
    }

    // With any dimension below 3 there is no interior to remove
    #[test]
    fn thin_hollow_cube_is_solid(a in 1i32..=2, b in 1i32..8, c in 1i32..8, rot in 0usize..3) {
        let size = match rot {
            0 => IVec3::new(a, b, c),
            1 => IVec3::new(b, a, c),
            _ => IVec3::new(b, c, a),
        };
        let solid = Cube { origin: IVec3::ZERO, size, block_type: stone(), hollow: false };
        let hollow = Cube { hollow: true, ..solid.clone() };
        prop_assert_eq!(hollow.rasterize(), solid.rasterize());
    }

    // Sphere cells are symmetric under axis permutation and reflection about the centre
    #[test]
    fn sphere_symmetry(center in arb_pos(), radius in 0i32..7, hollow: bool) {
        let sphere = Sphere { center, radius, block_type: stone(), hollow };
        let offsets: HashSet<IVec3> = sphere.rasterize().iter().map(|b| b.pos() - center).collect();
        for o in &offsets {
            let IVec3 { x, y, z } = *o;
            for p in [
                IVec3::new(x, z, y), IVec3::new(y, x, z), IVec3::new(y, z, x),
                IVec3::new(z, x, y), IVec3::new(z, y, x),
                IVec3::new(-x, y, z), IVec3::new(x, -y, z), IVec3::new(x, y, -z),
            ] {
                prop_assert!(offsets.contains(&p), "missing {:?} mirror of {:?}", p, o);
            }
        }
        let region = Aabb::from_corners(center - IVec3::splat(radius), center + IVec3::splat(radius));
        prop_assert!(offsets.iter().all(|o| region.contains(*o + center)));
    }

    // Hollow sphere is the solid sphere minus the solid sphere of radius r−1
    #[test]
    fn hollow_sphere_is_band(radius in 1i32..8) {
        let solid = Sphere { center: IVec3::ZERO, radius, block_type: stone(), hollow: false };
        let inner = Sphere { radius: radius - 1, ..solid.clone() };
        let hollow = Sphere { hollow: true, ..solid.clone() };
        prop_assert_eq!(
            hollow.rasterize().len(),
            solid.rasterize().len() - inner.rasterize().len()
        );
    }

    // The top layer is a single apex for odd bases and 2×2 for even bases
    #[test]
    fn pyramid_apex(corner in arb_pos(), base_size in 1i32..24) {
        let p = Pyramid { corner, base_size, block_type: stone() };
        let h = p.height();
        let blocks = p.rasterize();
        let top_y = blocks.iter().map(|b| b.y).max().unwrap();
        prop_assert_eq!(top_y, corner.y + h - 1);
        let top: Vec<IVec3> = blocks.iter().filter(|b| b.y == top_y).map(Block::pos).collect();
        if base_size % 2 == 1 {
            prop_assert_eq!(top, vec![corner + IVec3::splat(h - 1)]);
        } else {
            prop_assert_eq!(top.len(), 4);
        }
        let region = Aabb::from_corners(corner, corner + IVec3::new(base_size - 1, h - 1, base_size - 1));
        prop_assert!(all_within(&blocks, region));
    }

    // Line hits both endpoints with steps+1 samples, each a king's move from the last
    #[test]
    fn line_walk(from in arb_pos(), d in (-40i32..40, -40i32..40, -40i32..40)) {
        let to = from + IVec3::from(d);
        let line = Line { from, to, block_type: stone() };
        let pts = cells(&line.rasterize());
        let steps = (to - from).max_abs() as usize;
        prop_assert_eq!(pts.len(), steps + 1);
        prop_assert_eq!(pts[0], from);
        prop_assert_eq!(*pts.last().unwrap(), to);
        for w in pts.windows(2) {
            prop_assert!((w[1] - w[0]).max_abs() <= 1);
        }
        prop_assert!(pts.iter().all(|p| Aabb::from_corners(from, to).contains(*p)));
    }

    // Curved primitives stay inside the extent their parameters imply
    #[test]
    fn curved_shapes_stay_in_extent(
        origin in arb_pos(),
        radius in 0i32..8,
        height in 0i32..6,
        width in 0i32..4,
        hollow: bool,
    ) {
        let cyl = Cylinder { base: origin, radius, height, block_type: stone(), hollow };
        let blocks = cyl.rasterize();
        if height > 0 {
            let region = Aabb::from_corners(
                origin - IVec3::new(radius, 0, radius),
                origin + IVec3::new(radius, height - 1, radius),
            );
            prop_assert!(all_within(&blocks, region));
        } else {
            prop_assert!(blocks.is_empty());
        }

        let circle = Circle { center: origin, radius, block_type: stone(), hollow };
        let region = Aabb::from_corners(
            origin - IVec3::new(radius, 0, radius),
            origin + IVec3::new(radius, 0, radius),
        );
        prop_assert!(all_within(&circle.rasterize(), region));

        let arch = Arch { origin, radius, width, block_type: stone() };
        let blocks = arch.rasterize();
        if width > 0 {
            let region = Aabb::from_corners(
                origin - IVec3::new(radius, 0, 0),
                origin + IVec3::new(radius, radius, width - 1),
            );
            prop_assert!(all_within(&blocks, region));
        } else {
            prop_assert!(blocks.is_empty());
        }
    }

    // Identical parameters always yield identical sequences
    #[test]
    fn rasterizers_are_deterministic(origin in arb_pos(), radius in 0i32..6, hollow: bool) {
        let s = Sphere { center: origin, radius, block_type: stone(), hollow };
        prop_assert_eq!(s.rasterize(), s.clone().rasterize());
        let a = Arch { origin, radius, width: 2, block_type: stone() };
        prop_assert_eq!(a.rasterize(), a.clone().rasterize());
    }
}
