use std::error::Error;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use mason_blocks::Block;
use mason_geom::IVec3;
use mason_shapes::{Dispatcher, ShapeDefaults, SkipCounter, SkipLog};
use mason_structures::{
    BuildPlan, ComponentPlan, LayoutEntry, SpatialMetadata, SetBlock, find_overlaps,
};
use serde::Deserialize;
use serde_json::Value;

use crate::cli::{Cli, Command, Format};

/// Either a bare block array or a whole component plan.
#[derive(Deserialize)]
#[serde(untagged)]
enum BlocksInput {
    Blocks(Vec<Block>),
    Plan(ComponentPlan),
}

pub fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let defaults = match &cli.config {
        Some(path) => {
            let s = fs::read_to_string(path)?;
            log::info!("shape defaults loaded from {}", path.display());
            ShapeDefaults::from_toml_str(&s)?
        }
        None => ShapeDefaults::default(),
    };
    let dispatcher = Dispatcher::new(defaults);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match cli.command {
        Command::Rasterize { tasks, description } => {
            let tasks: Vec<Value> = read_json(&tasks)?;
            let sink = (SkipCounter::new(), SkipLog);
            let plan = ComponentPlan::generate(description, &tasks, &dispatcher, &sink);
            log::info!(
                "{} task(s) -> {} block(s), {} skipped",
                tasks.len(),
                plan.blocks.len(),
                sink.0.count()
            );
            serde_json::to_writer_pretty(&mut out, &plan)?;
            writeln!(out)?;
        }
        Command::Bounds { input } => {
            let blocks = match read_json::<BlocksInput>(&input)? {
                BlocksInput::Blocks(b) => b,
                BlocksInput::Plan(p) => p.blocks,
            };
            serde_json::to_writer_pretty(&mut out, &SpatialMetadata::of(&blocks))?;
            writeln!(out)?;
        }
        Command::Compose {
            layout,
            components_dir,
            base,
            format,
        } => {
            let plan = load_build_plan(&layout, &components_dir, base)?;
            for o in find_overlaps(&plan) {
                log::warn!(
                    "components {} and {} overlap in {:?}..={:?}; {} is applied later",
                    plan.components[o.first].name,
                    plan.components[o.second].name,
                    o.region.min,
                    o.region.max,
                    plan.components[o.second].name
                );
            }
            let blocks = plan.compose();
            log::info!(
                "composed {} component(s), {} block(s) total",
                plan.components.len(),
                blocks.len()
            );
            match format {
                Format::Json => {
                    serde_json::to_writer(&mut out, &blocks)?;
                    writeln!(out)?;
                }
                Format::Setblock => {
                    for b in &blocks {
                        writeln!(out, "{}", SetBlock(b))?;
                    }
                }
            }
        }
    }
    out.flush()?;
    Ok(())
}

/// Missing component files are skipped with a warning; unreadable ones are
/// errors.
fn load_build_plan(
    layout: &Path,
    components_dir: &Path,
    base: IVec3,
) -> Result<BuildPlan, Box<dyn Error>> {
    let entries: Vec<LayoutEntry> = read_json(layout)?;
    let mut plan = BuildPlan::new(base);
    for entry in entries {
        let path = components_dir.join(&entry.file_name);
        if !path.exists() {
            log::warn!("component file {} not found; skipping", path.display());
            continue;
        }
        let component: ComponentPlan = read_json(&path)?;
        plan.push(component.into_component(entry.file_name, entry.offset.into()));
    }
    Ok(plan)
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, Box<dyn Error>> {
    let s = fs::read_to_string(path)
        .map_err(|e| format!("failed reading {}: {}", path.display(), e))?;
    let v = serde_json::from_str(&s)
        .map_err(|e| format!("failed parsing {}: {}", path.display(), e))?;
    Ok(v)
}
