use std::fmt;

use mason_blocks::Block;

/// Renders a block as the server command that places it.
pub struct SetBlock<'a>(pub &'a Block);

impl fmt::Display for SetBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.0;
        write!(f, "setblock {} {} {} {}", b.x, b.y, b.z, b.block_type)
    }
}

/// One command per block, in sequence order. Applying them in this order
/// gives the last write at each coordinate the final say.
pub fn setblock_script(blocks: &[Block]) -> Vec<String> {
    blocks.iter().map(|b| SetBlock(b).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mason_geom::IVec3;

    #[test]
    fn renders_in_order() {
        let blocks = vec![
            Block::new(IVec3::new(-3, 64, 12), "minecraft:oak_planks".into()),
            Block::new(IVec3::new(-3, 64, 12), "glass".into()),
        ];
        assert_eq!(
            setblock_script(&blocks),
            vec![
                "setblock -3 64 12 minecraft:oak_planks".to_string(),
                "setblock -3 64 12 glass".to_string(),
            ]
        );
    }
}
