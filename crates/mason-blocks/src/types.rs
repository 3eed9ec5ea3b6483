use std::fmt;
use std::sync::Arc;

use mason_geom::IVec3;
use serde::{Deserialize, Serialize};

/// Opaque material identifier, e.g. `stone` or `minecraft:oak_planks`.
///
/// Every block emitted by one rasterizer call shares the same type, so the
/// name is reference counted rather than copied per block.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockType(Arc<str>);

impl BlockType {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BlockType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for BlockType {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl PartialEq<str> for BlockType {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for BlockType {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One unit-cube placement. A value: two blocks at the same coordinate with
/// the same type are indistinguishable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub block_type: BlockType,
}

impl Block {
    #[inline]
    pub fn new(pos: IVec3, block_type: BlockType) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            block_type,
        }
    }

    #[inline]
    pub fn pos(&self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z)
    }

    /// `None` when the moved block would leave the `i32` lattice.
    #[inline]
    pub fn translated(&self, by: IVec3) -> Option<Block> {
        Some(Block::new(self.pos().checked_add(by)?, self.block_type.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_json_shape_is_flat() {
        let b = Block::new(IVec3::new(1, -2, 3), BlockType::from("minecraft:glass"));
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, r#"{"x":1,"y":-2,"z":3,"block_type":"minecraft:glass"}"#);
        let back: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
    }

    #[test]
    fn translated_keeps_type() {
        let b = Block::new(IVec3::ZERO, "stone".into());
        let t = b.translated(IVec3::new(4, 5, 6)).unwrap();
        assert_eq!(t.pos(), IVec3::new(4, 5, 6));
        assert_eq!(t.block_type, "stone");
    }

    #[test]
    fn translated_off_the_lattice_is_none() {
        let b = Block::new(IVec3::new(i32::MAX, 0, 0), "stone".into());
        assert_eq!(b.translated(IVec3::new(1, 0, 0)), None);
        assert!(b.translated(IVec3::new(-1, 0, 0)).is_some());
    }
}
