use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use mason_blocks::Block;
use mason_geom::{Aabb, IVec3};

use crate::component::BuildPlan;

/// Translates each component by `world_base + offset` and concatenates them.
///
/// Component order and the order within each component are preserved.
/// Nothing is deduplicated: when two entries share a final coordinate both
/// are kept, and a sequential executor ends up with the later one. A block
/// whose final coordinate falls outside the `i32` range is dropped with a
/// warning; the sum itself is taken wide so only the final position counts.
pub fn compose<'a, I>(components: I, world_base: IVec3) -> Vec<Block>
where
    I: IntoIterator<Item = (&'a [Block], IVec3)>,
{
    let mut out = Vec::new();
    let mut count = 0usize;
    let mut dropped = 0usize;
    for (blocks, offset) in components {
        for b in blocks {
            match place(b.pos(), world_base, offset) {
                Some(p) => out.push(Block::new(p, b.block_type.clone())),
                None => dropped += 1,
            }
        }
        count += 1;
    }
    if dropped > 0 {
        log::warn!(target: "structures", "{} block(s) fell outside the coordinate range and were dropped", dropped);
    }
    log::debug!(target: "structures", "composed {} component(s) into {} block(s)", count, out.len());
    out
}

/// World position of a component-local point.
#[inline]
pub(crate) fn place(local: IVec3, world_base: IVec3, offset: IVec3) -> Option<IVec3> {
    IVec3::checked_sum([local, world_base, offset])
}

/// The world an executor leaves behind after applying `blocks` one by one.
///
/// Yields one block per distinct coordinate, ordered by first placement,
/// carrying the type of the last write to that coordinate.
pub fn apply_sequential(blocks: &[Block]) -> Vec<Block> {
    let mut slot: HashMap<IVec3, usize> = HashMap::with_capacity(blocks.len());
    let mut out: Vec<Block> = Vec::new();
    for b in blocks {
        match slot.entry(b.pos()) {
            Entry::Occupied(e) => out[*e.get()].block_type = b.block_type.clone(),
            Entry::Vacant(e) => {
                e.insert(out.len());
                out.push(b.clone());
            }
        }
    }
    out
}

/// Two placed components whose bounding boxes share cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Overlap {
    /// Index of the earlier component in plan order.
    pub first: usize,
    pub second: usize,
    pub region: Aabb,
}

/// Pairs of components whose world-space bounds intersect, in plan order.
///
/// Purely diagnostic; composition never rejects overlaps. Empty components
/// occupy nothing and never overlap.
pub fn find_overlaps(plan: &BuildPlan) -> Vec<Overlap> {
    let placed: Vec<Option<Aabb>> = plan
        .components
        .iter()
        .map(|c| c.placed_bounds(plan.world_base).aabb())
        .collect();
    let mut out = Vec::new();
    for (i, a) in placed.iter().enumerate() {
        let Some(a) = a else { continue };
        for (j, b) in placed.iter().enumerate().skip(i + 1) {
            let Some(b) = b else { continue };
            if let Some(region) = a.intersection(*b) {
                out.push(Overlap {
                    first: i,
                    second: j,
                    region,
                });
            }
        }
    }
    out
}
