//! btgen CLI — project scaffolder for embedded Bluetooth examples on the
//! ESP32 port.
//!
//! Provides three commands: `create` (generate one buildable project
//! directory per example), `list` (discovery-only dry run), and `clean`
//! (remove generated projects). All filesystem locations come from an
//! explicit [`btgen_core::config::ScaffoldConfig`], loaded from
//! `btgen.config.json` when present and overridable per flag.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "btgen",
    about = "Generate buildable ESP32 project directories for embedded Bluetooth examples",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to btgen.config.json (default: ./btgen.config.json)
    #[arg(long, global = true, default_value = "btgen.config.json")]
    config: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a project directory for every eligible example
    Create {
        /// Directory holding the example sources and .gatt files
        #[arg(long)]
        examples_dir: Option<PathBuf>,

        /// Template directory copied into each project
        #[arg(long)]
        template_dir: Option<PathBuf>,

        /// Directory the project directories are created under
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// List eligible examples without generating anything
    List {
        /// Directory holding the example sources and .gatt files
        #[arg(long)]
        examples_dir: Option<PathBuf>,
    },

    /// Remove previously generated project directories
    Clean {
        /// Directory holding the example sources and .gatt files
        #[arg(long)]
        examples_dir: Option<PathBuf>,

        /// Directory the project directories were created under
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Create {
            examples_dir,
            template_dir,
            output_dir,
        } => {
            commands::create::run(&cli.config, examples_dir, template_dir, output_dir)?;
        }
        Commands::List { examples_dir } => {
            commands::list::run(&cli.config, examples_dir)?;
        }
        Commands::Clean {
            examples_dir,
            output_dir,
        } => {
            commands::clean::run(&cli.config, examples_dir, output_dir)?;
        }
    }

    Ok(())
}
