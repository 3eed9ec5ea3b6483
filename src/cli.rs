use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use mason_geom::IVec3;

#[derive(Parser, Debug)]
#[command(name = "mason", about = "Rasterize shape tasks and compose voxel structures")]
pub struct Cli {
    /// TOML file overriding shape parameter defaults.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Turn a JSON array of shape tasks into a component plan.
    Rasterize {
        tasks: PathBuf,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Print spatial metadata for a block array or a component plan.
    Bounds { input: PathBuf },
    /// Place component plans by a layout file and emit the final sequence.
    Compose {
        layout: PathBuf,
        #[arg(long)]
        components_dir: PathBuf,
        #[arg(long, value_parser = parse_ivec3, default_value = "0,0,0", allow_hyphen_values = true)]
        base: IVec3,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Setblock,
}

/// Parses `x,y,z`.
pub fn parse_ivec3(s: &str) -> Result<IVec3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!("expected x,y,z but got {s:?}"));
    };
    let num = |v: &str| {
        v.parse::<i32>()
            .map_err(|e| format!("bad coordinate {v:?}: {e}"))
    };
    Ok(IVec3::new(num(*x)?, num(*y)?, num(*z)?))
}
