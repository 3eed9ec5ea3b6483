//! Components, build plans, and composition into one world-space sequence.
#![forbid(unsafe_code)]

pub mod commands;
pub mod component;
pub mod compose;
pub mod plan;

pub use commands::{SetBlock, setblock_script};
pub use component::{BuildPlan, Component};
pub use compose::{Overlap, apply_sequential, compose, find_overlaps};
pub use plan::{
    BoundsRecord, ComponentPlan, ComponentSummary, GeneratedStructure, LayoutEntry, Offset,
    SpatialMetadata,
};
