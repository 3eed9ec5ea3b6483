use std::error::Error;

use mason_blocks::BlockType;
use mason_geom::IVec3;
use serde::Deserialize;

use crate::raster::{Arch, Circle, Cube, Cylinder, Line, Pyramid, Sphere};

/// Values substituted for parameters a shape task leaves out.
///
/// Every field is optional in TOML:
///
/// ```toml
/// radius = 8
///
/// [block_types]
/// pyramid = "red_sandstone"
/// ```
#[derive(Clone, Debug, Deserialize)]
pub struct ShapeDefaults {
    /// Cube edge length on each axis.
    #[serde(default = "default_size")]
    pub size: i32,
    #[serde(default = "default_radius")]
    pub radius: i32,
    /// Cylinder height.
    #[serde(default = "default_height")]
    pub height: i32,
    #[serde(default = "default_base_size")]
    pub base_size: i32,
    /// Arch thickness along z.
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default)]
    pub block_types: BlockTypeDefaults,
}

fn default_size() -> i32 {
    1
}
fn default_radius() -> i32 {
    5
}
fn default_height() -> i32 {
    10
}
fn default_base_size() -> i32 {
    10
}
fn default_width() -> i32 {
    3
}

impl Default for ShapeDefaults {
    fn default() -> Self {
        Self {
            size: default_size(),
            radius: default_radius(),
            height: default_height(),
            base_size: default_base_size(),
            width: default_width(),
            block_types: BlockTypeDefaults::default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct BlockTypeDefaults {
    /// Cube, line, sphere, cylinder and circle.
    #[serde(default = "default_block_type")]
    pub default: BlockType,
    #[serde(default = "default_pyramid_block_type")]
    pub pyramid: BlockType,
    #[serde(default = "default_arch_block_type")]
    pub arch: BlockType,
}

fn default_block_type() -> BlockType {
    BlockType::from("stone")
}
fn default_pyramid_block_type() -> BlockType {
    BlockType::from("sandstone")
}
fn default_arch_block_type() -> BlockType {
    BlockType::from("stone_bricks")
}

impl Default for BlockTypeDefaults {
    fn default() -> Self {
        Self {
            default: default_block_type(),
            pyramid: default_pyramid_block_type(),
            arch: default_arch_block_type(),
        }
    }
}

impl ShapeDefaults {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: ShapeDefaults = toml::from_str(toml_str)?;
        Ok(cfg)
    }

    pub fn cube(&self) -> Cube {
        Cube {
            origin: IVec3::ZERO,
            size: IVec3::splat(self.size),
            block_type: self.block_types.default.clone(),
            hollow: false,
        }
    }

    pub fn line(&self) -> Line {
        Line {
            from: IVec3::ZERO,
            to: IVec3::ZERO,
            block_type: self.block_types.default.clone(),
        }
    }

    pub fn sphere(&self) -> Sphere {
        Sphere {
            center: IVec3::ZERO,
            radius: self.radius,
            block_type: self.block_types.default.clone(),
            hollow: false,
        }
    }

    pub fn cylinder(&self) -> Cylinder {
        Cylinder {
            base: IVec3::ZERO,
            radius: self.radius,
            height: self.height,
            block_type: self.block_types.default.clone(),
            hollow: false,
        }
    }

    pub fn circle(&self) -> Circle {
        Circle {
            center: IVec3::ZERO,
            radius: self.radius,
            block_type: self.block_types.default.clone(),
            hollow: false,
        }
    }

    pub fn pyramid(&self) -> Pyramid {
        Pyramid {
            corner: IVec3::ZERO,
            base_size: self.base_size,
            block_type: self.block_types.pyramid.clone(),
        }
    }

    pub fn arch(&self) -> Arch {
        Arch {
            origin: IVec3::ZERO,
            radius: self.radius,
            width: self.width,
            block_type: self.block_types.arch.clone(),
        }
    }
}
