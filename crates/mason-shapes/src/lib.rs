//! Parametric solid-primitive rasterizers and the shape task dispatcher.
#![forbid(unsafe_code)]

pub mod config;
pub mod dispatch;
pub mod kind;
pub mod raster;
pub mod skip;
pub mod task;

pub use config::{BlockTypeDefaults, ShapeDefaults};
pub use dispatch::{Dispatcher, rasterize};
pub use kind::ShapeKind;
pub use raster::{Arch, Circle, Cube, Cylinder, Line, Pyramid, Sphere};
pub use skip::{SkipCounter, SkipLog, SkipReason, SkipRecorder, SkipSink};
pub use task::ShapeTask;
