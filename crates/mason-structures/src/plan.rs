//! Documents exchanged with the layout policy and the executor.
//!
//! A generator run produces a [`ComponentPlan`]; the layout policy reads
//! [`ComponentSummary`] records and answers with [`LayoutEntry`] offsets.

use mason_blocks::{Block, BoundingBox, Dimensions};
use mason_geom::IVec3;
use mason_shapes::{Dispatcher, SkipReason, SkipSink};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::component::Component;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundsRecord {
    pub min_x: i32,
    pub min_y: i32,
    pub min_z: i32,
    pub max_x: i32,
    pub max_y: i32,
    pub max_z: i32,
}

/// Serialized form of a [`BoundingBox`]; all zero for an empty sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpatialMetadata {
    pub bounding_box: BoundsRecord,
    pub dimensions: Dimensions,
}

impl SpatialMetadata {
    pub fn of(blocks: &[Block]) -> Self {
        BoundingBox::of(blocks).into()
    }
}

impl From<BoundingBox> for SpatialMetadata {
    fn from(bb: BoundingBox) -> Self {
        let (min, max) = (bb.min(), bb.max());
        Self {
            bounding_box: BoundsRecord {
                min_x: min.x,
                min_y: min.y,
                min_z: min.z,
                max_x: max.x,
                max_y: max.y,
                max_z: max.z,
            },
            dimensions: bb.dimensions(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedStructure {
    /// The well-formed `{tool, args}` records the blocks were built from.
    #[serde(default)]
    pub design_components: Vec<Value>,
    #[serde(default)]
    pub spatial_metadata: SpatialMetadata,
}

/// Output of one generator: its shape tasks, their blocks and metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentPlan {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub generated_structure: GeneratedStructure,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl ComponentPlan {
    /// Rasterizes `tasks` in order.
    ///
    /// Records that are not objects carrying both `tool` and `args` are
    /// reported to `sink` and left out of `design_components`; records that
    /// pass that check but still fail conversion stay listed and contribute
    /// no blocks.
    pub fn generate(
        description: impl Into<String>,
        tasks: &[Value],
        dispatcher: &Dispatcher,
        sink: &dyn SkipSink,
    ) -> Self {
        let mut design_components = Vec::with_capacity(tasks.len());
        let mut blocks = Vec::new();
        for (i, task) in tasks.iter().enumerate() {
            if let Some(reason) = record_shape_error(task) {
                sink.skipped(i, &reason);
                continue;
            }
            blocks.extend(dispatcher.rasterize_value(i, task, sink));
            design_components.push(task.clone());
        }
        let spatial_metadata = SpatialMetadata::of(&blocks);
        Self {
            description: description.into(),
            generated_structure: GeneratedStructure {
                design_components,
                spatial_metadata,
            },
            blocks,
        }
    }

    pub fn summary(&self, file_name: impl Into<String>) -> ComponentSummary {
        ComponentSummary {
            file_name: file_name.into(),
            description: Some(self.description.clone()).filter(|d| !d.is_empty()),
            blocks_count: self.blocks.len(),
            spatial_metadata: SpatialMetadata::of(&self.blocks),
        }
    }

    pub fn into_component(self, name: impl Into<String>, offset: IVec3) -> Component {
        Component::new(name, self.blocks).with_offset(offset)
    }
}

fn record_shape_error(task: &Value) -> Option<SkipReason> {
    let Some(obj) = task.as_object() else {
        return Some(SkipReason::NotAnObject);
    };
    if !obj.contains_key("tool") {
        return Some(SkipReason::MissingTool);
    }
    if !obj.contains_key("args") {
        return Some(SkipReason::MissingArgs);
    }
    None
}

/// What the layout policy sees of each component.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSummary {
    pub file_name: String,
    pub description: Option<String>,
    pub blocks_count: usize,
    pub spatial_metadata: SpatialMetadata,
}

/// Offset with every axis optional, defaulting to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offset {
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    #[serde(default)]
    pub z: i32,
}

impl From<Offset> for IVec3 {
    fn from(o: Offset) -> Self {
        IVec3::new(o.x, o.y, o.z)
    }
}

impl From<IVec3> for Offset {
    fn from(v: IVec3) -> Self {
        Offset {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

/// One line of the layout policy's answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutEntry {
    pub file_name: String,
    #[serde(default)]
    pub offset: Offset,
}
