use mason_blocks::{Block, BoundingBox};
use mason_geom::{Aabb, IVec3};

use crate::compose::{compose, place};

/// A named, already rasterized block sequence and where to put it.
///
/// `blocks` are in component-local coordinates. `offset` comes from an
/// external layout policy and is added on top of the plan's world base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Component {
    pub name: String,
    pub blocks: Vec<Block>,
    pub bounds: BoundingBox,
    pub offset: IVec3,
}

impl Component {
    pub fn new(name: impl Into<String>, blocks: Vec<Block>) -> Self {
        let bounds = BoundingBox::of(&blocks);
        Self {
            name: name.into(),
            blocks,
            bounds,
            offset: IVec3::ZERO,
        }
    }

    pub fn with_offset(mut self, offset: IVec3) -> Self {
        self.offset = offset;
        self
    }

    /// Bounds of the blocks [`compose`] keeps for this component once moved
    /// by `world_base + offset`.
    pub fn placed_bounds(&self, world_base: IVec3) -> BoundingBox {
        let Some(local) = self.bounds.aabb() else {
            return BoundingBox::EMPTY;
        };
        if let (Some(min), Some(max)) = (
            place(local.min, world_base, self.offset),
            place(local.max, world_base, self.offset),
        ) {
            return BoundingBox::from_aabb(Aabb { min, max });
        }
        // Part of the component is dropped, so rescan the survivors.
        Aabb::from_points(
            self.blocks
                .iter()
                .filter_map(|b| place(b.pos(), world_base, self.offset)),
        )
        .map_or(BoundingBox::EMPTY, BoundingBox::from_aabb)
    }
}

/// One build request: components in paint order plus a world base.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildPlan {
    pub components: Vec<Component>,
    pub world_base: IVec3,
}

impl BuildPlan {
    pub fn new(world_base: IVec3) -> Self {
        Self {
            components: Vec::new(),
            world_base,
        }
    }

    pub fn push(&mut self, component: Component) {
        self.components.push(component);
    }

    pub fn block_count(&self) -> usize {
        self.components.iter().map(|c| c.blocks.len()).sum()
    }

    pub fn compose(&self) -> Vec<Block> {
        compose(
            self.components
                .iter()
                .map(|c| (c.blocks.as_slice(), c.offset)),
            self.world_base,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(xs: &[i32]) -> Vec<Block> {
        xs.iter()
            .map(|&x| Block::new(IVec3::new(x, 0, 0), "stone".into()))
            .collect()
    }

    #[test]
    fn placed_bounds_follow_offset_and_base() {
        let c = Component::new("wall", row(&[0, 1, 2])).with_offset(IVec3::new(0, 5, 0));
        let bb = c.placed_bounds(IVec3::new(10, 0, -3));
        assert_eq!(bb.min(), IVec3::new(10, 5, -3));
        assert_eq!(bb.max(), IVec3::new(12, 5, -3));
        assert!(Component::new("none", Vec::new()).placed_bounds(IVec3::ONE).is_empty());
    }

    #[test]
    fn placed_bounds_match_what_compose_keeps() {
        let c = Component::new("edge", row(&[-2, 0, 1, 2])).with_offset(IVec3::new(1, 0, 0));
        let base = IVec3::new(i32::MAX - 2, 0, 0);
        let mut plan = BuildPlan::new(base);
        plan.push(c.clone());
        let kept = plan.compose();
        assert_eq!(kept.len(), 3);
        assert_eq!(c.placed_bounds(base), BoundingBox::of(&kept));
        assert_eq!(c.placed_bounds(base).max().x, i32::MAX);

        let gone = Component::new("gone", row(&[5])).placed_bounds(base);
        assert!(gone.is_empty());
    }
}
