use mason_blocks::{Block, BlockType};
use mason_geom::IVec3;
use serde_json::{Map, Value};

use crate::config::ShapeDefaults;
use crate::kind::ShapeKind;
use crate::raster::{Arch, Circle, Cube, Cylinder, Line, Pyramid, Sphere};
use crate::skip::SkipReason;

/// A shape request with every parameter resolved.
///
/// Aliases do not appear here: `hollow_cube` and `single_block` arrive as
/// [`ShapeTask::Cube`], `hollow_sphere` as [`ShapeTask::Sphere`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeTask {
    Cube(Cube),
    Line(Line),
    Sphere(Sphere),
    Cylinder(Cylinder),
    Pyramid(Pyramid),
    Circle(Circle),
    Arch(Arch),
}

impl ShapeTask {
    pub fn rasterize(&self) -> Vec<Block> {
        match self {
            ShapeTask::Cube(p) => p.rasterize(),
            ShapeTask::Line(p) => p.rasterize(),
            ShapeTask::Sphere(p) => p.rasterize(),
            ShapeTask::Cylinder(p) => p.rasterize(),
            ShapeTask::Pyramid(p) => p.rasterize(),
            ShapeTask::Circle(p) => p.rasterize(),
            ShapeTask::Arch(p) => p.rasterize(),
        }
    }

    /// The rasterizer this task runs (never an alias).
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeTask::Cube(_) => ShapeKind::Cube,
            ShapeTask::Line(_) => ShapeKind::Line,
            ShapeTask::Sphere(_) => ShapeKind::Sphere,
            ShapeTask::Cylinder(_) => ShapeKind::Cylinder,
            ShapeTask::Pyramid(_) => ShapeKind::Pyramid,
            ShapeTask::Circle(_) => ShapeKind::Circle,
            ShapeTask::Arch(_) => ShapeKind::Arch,
        }
    }

    /// Reads a `{"tool": ..., "args": {...}}` record.
    ///
    /// A missing `args` means every parameter takes its default. Keys that
    /// the tool does not use are ignored. A parameter pre-bound by an alias
    /// wins over the same key in `args`.
    pub fn from_json(task: &Value, defaults: &ShapeDefaults) -> Result<ShapeTask, SkipReason> {
        let obj = task.as_object().ok_or(SkipReason::NotAnObject)?;
        let tool = obj
            .get("tool")
            .and_then(Value::as_str)
            .ok_or(SkipReason::MissingTool)?;
        let kind =
            ShapeKind::from_tool(tool).ok_or_else(|| SkipReason::UnknownTool(tool.to_string()))?;
        let args = match obj.get("args") {
            None => Args(None),
            Some(Value::Object(map)) => Args(Some(map)),
            Some(_) => return Err(SkipReason::BadArgs),
        };
        Self::from_args(kind, &args, defaults)
    }

    fn from_args(
        kind: ShapeKind,
        args: &Args<'_>,
        defaults: &ShapeDefaults,
    ) -> Result<ShapeTask, SkipReason> {
        let task = match kind {
            ShapeKind::Cube | ShapeKind::HollowCube | ShapeKind::SingleBlock => {
                let d = defaults.cube();
                let size = if kind == ShapeKind::SingleBlock {
                    IVec3::ONE
                } else {
                    args.point(["size_x", "size_y", "size_z"], d.size)?
                };
                let hollow = args.flag("hollow", d.hollow)?;
                ShapeTask::Cube(Cube {
                    origin: args.point(["x", "y", "z"], d.origin)?,
                    size,
                    block_type: args.block_type(&d.block_type)?,
                    hollow: kind == ShapeKind::HollowCube || hollow,
                })
            }
            ShapeKind::Line => {
                let d = defaults.line();
                ShapeTask::Line(Line {
                    from: args.point(["x1", "y1", "z1"], d.from)?,
                    to: args.point(["x2", "y2", "z2"], d.to)?,
                    block_type: args.block_type(&d.block_type)?,
                })
            }
            ShapeKind::Sphere | ShapeKind::HollowSphere => {
                let d = defaults.sphere();
                let hollow = args.flag("hollow", d.hollow)?;
                ShapeTask::Sphere(Sphere {
                    center: args.point(["x", "y", "z"], d.center)?,
                    radius: args.int("radius", d.radius)?,
                    block_type: args.block_type(&d.block_type)?,
                    hollow: kind == ShapeKind::HollowSphere || hollow,
                })
            }
            ShapeKind::Cylinder => {
                let d = defaults.cylinder();
                ShapeTask::Cylinder(Cylinder {
                    base: args.point(["x", "y", "z"], d.base)?,
                    radius: args.int("radius", d.radius)?,
                    height: args.int("height", d.height)?,
                    block_type: args.block_type(&d.block_type)?,
                    hollow: args.flag("hollow", d.hollow)?,
                })
            }
            ShapeKind::Circle => {
                let d = defaults.circle();
                ShapeTask::Circle(Circle {
                    center: args.point(["x", "y", "z"], d.center)?,
                    radius: args.int("radius", d.radius)?,
                    block_type: args.block_type(&d.block_type)?,
                    hollow: args.flag("hollow", d.hollow)?,
                })
            }
            ShapeKind::Pyramid => {
                let d = defaults.pyramid();
                ShapeTask::Pyramid(Pyramid {
                    corner: args.point(["x", "y", "z"], d.corner)?,
                    base_size: args.int("base_size", d.base_size)?,
                    block_type: args.block_type(&d.block_type)?,
                })
            }
            ShapeKind::Arch => {
                let d = defaults.arch();
                ShapeTask::Arch(Arch {
                    origin: args.point(["x", "y", "z"], d.origin)?,
                    radius: args.int("radius", d.radius)?,
                    width: args.int("width", d.width)?,
                    block_type: args.block_type(&d.block_type)?,
                })
            }
        };
        Ok(task)
    }
}

/// Typed view over an optional `args` object.
struct Args<'a>(Option<&'a Map<String, Value>>);

impl<'a> Args<'a> {
    #[inline]
    fn get(&self, name: &str) -> Option<&'a Value> {
        self.0.and_then(|m| m.get(name))
    }

    fn int(&self, name: &'static str, default: i32) -> Result<i32, SkipReason> {
        match self.get(name) {
            None => Ok(default),
            Some(v) => as_int(v).ok_or_else(|| bad_parameter(name, v)),
        }
    }

    fn point(&self, names: [&'static str; 3], default: IVec3) -> Result<IVec3, SkipReason> {
        Ok(IVec3::new(
            self.int(names[0], default.x)?,
            self.int(names[1], default.y)?,
            self.int(names[2], default.z)?,
        ))
    }

    /// JSON booleans only; `1` or `"true"` are bad parameters.
    fn flag(&self, name: &'static str, default: bool) -> Result<bool, SkipReason> {
        match self.get(name) {
            None => Ok(default),
            Some(Value::Bool(b)) => Ok(*b),
            Some(v) => Err(bad_parameter(name, v)),
        }
    }

    fn block_type(&self, default: &BlockType) -> Result<BlockType, SkipReason> {
        match self.get("block_type") {
            None => Ok(default.clone()),
            Some(Value::String(s)) => Ok(BlockType::from(s.as_str())),
            Some(v) => Err(bad_parameter("block_type", v)),
        }
    }
}

/// Integers, or floats with no fractional part, that fit in `i32`.
fn as_int(v: &Value) -> Option<i32> {
    let Value::Number(n) = v else {
        return None;
    };
    if let Some(i) = n.as_i64() {
        return i32::try_from(i).ok();
    }
    let f = n.as_f64()?;
    if f.fract() == 0.0 && f >= f64::from(i32::MIN) && f <= f64::from(i32::MAX) {
        Some(f as i32)
    } else {
        None
    }
}

fn bad_parameter(name: &'static str, found: &Value) -> SkipReason {
    SkipReason::BadParameter {
        name,
        found: found.to_string(),
    }
}
