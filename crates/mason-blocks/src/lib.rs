//! Block placements and the bounding-box reduction over block sequences.
#![forbid(unsafe_code)]

pub mod bounds;
pub mod types;

pub use bounds::{BoundingBox, Dimensions, bounding_box};
pub use types::{Block, BlockType};
