//! Lattix command-line interface.
//!
//! Generate voxelised targets from TOML job files:
//! ```sh
//! lattix run job.toml
//! lattix validate job.toml
//! lattix inspect cylinder_R3_H5.tgt
//! ```

mod config;
mod runner;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lattix")]
#[command(about = "Lattix: voxelised particle targets for discrete dipole solvers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate every shape in a TOML job file.
    Run {
        /// Path to the job configuration file.
        config: PathBuf,
        /// Output directory (overrides config file setting).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a job file's shape parameters without generating anything.
    Validate {
        /// Path to the job configuration file.
        config: PathBuf,
    },
    /// Summarise an existing .xyz or .tgt target file.
    Inspect {
        /// Path to the target file.
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, output } => {
            println!("Lattix target generator");
            println!("=======================");
            let job = config::load_config(&config)?;
            println!("Configuration: {}", config.display());

            let out_dir = output.unwrap_or_else(|| PathBuf::from(&job.output.directory));
            let targets = runner::run_job(&job, &out_dir)?;

            println!("Generated {} target(s) in {}", targets.len(), out_dir.display());
            Ok(())
        }
        Commands::Validate { config } => {
            let job = config::load_config(&config)?;
            let shapes = runner::build_shapes(&job)?;
            for shape in &shapes {
                println!("  {}", shape.file_stem());
            }
            println!("Configuration is valid: {}", config.display());
            Ok(())
        }
        Commands::Inspect { file } => {
            let inspection = runner::inspect_file(&file)?;
            println!("Target: {}", file.display());
            for line in &inspection.header {
                println!("  # {}", line);
            }
            println!("Dipoles:        {}", inspection.dipoles);
            println!("Unique voxels:  {}", inspection.unique);
            if inspection.unique != inspection.dipoles {
                println!(
                    "Warning: {} duplicate dipole(s)",
                    inspection.dipoles - inspection.unique
                );
            }
            if let Some((min, max)) = inspection.bounds {
                println!("Bounding box:   {:?} .. {:?}", min, max);
                if min.contains(&0) {
                    println!("Warning: target touches the zero plane");
                }
            }
            Ok(())
        }
    }
}
