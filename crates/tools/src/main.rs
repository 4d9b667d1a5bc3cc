use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect GPX tracks and replay flythroughs headlessly")]
struct Args {
    /// Viewer configuration JSON (defaults apply to anything it omits)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print name, point count, distance, bounds and elevation stats
    Inspect { file: PathBuf },

    /// Elevation chart dataset as JSON
    Profile {
        file: PathBuf,

        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Map scene description for the loaded route
    Scene {
        file: PathBuf,

        #[arg(long)]
        satellite: bool,
    },

    /// Load, fly and tick at a fixed frame rate until the flight ends
    Simulate {
        file: PathBuf,

        #[arg(long, default_value_t = 60.0)]
        fps: f64,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run(Args::parse()) {
        error!("{e:#}");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = tools::load_config(args.config.as_deref())?;
    match args.command {
        Command::Inspect { file } => tools::write_json(&tools::inspect(&file)?, None),
        Command::Profile { file, out } => {
            tools::write_json(&tools::profile(&file)?, out.as_deref())
        }
        Command::Scene { file, satellite } => {
            tools::write_json(&tools::map_scene(&file, config, satellite)?, None)
        }
        Command::Simulate { file, fps } => {
            let report = tools::simulate(&file, config, fps)?;
            tools::write_json(&report, None)
        }
    }
}
