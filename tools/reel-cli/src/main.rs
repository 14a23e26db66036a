//! Reel CLI: command-line interface for storyboard inspection and export.
//!
//! Usage:
//!   reel info                 Show scenes and shots
//!   reel validate             Run authoring checks
//!   reel timeline             Show mount windows and coverage
//!   reel frame <FRAME>        Print one frame's composition as JSON
//!   reel export -o FILE       Write a JSONL frame plan
//!   reel init <PATH>          Write a storyboard file to start from
//!
//! Every command except `init` reads the built-in promo storyboard unless
//! `--storyboard` points at a JSON file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use reel_common::config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "reel",
    about = "Declarative shot-list video compositions",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Storyboard JSON file (defaults to the built-in promo)
    #[arg(short, long, global = true)]
    storyboard: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show scenes, shots, and timing
    Info,

    /// Run authoring-time checks
    Validate {
        /// Also check that referenced assets exist
        #[arg(long)]
        assets: bool,

        /// Asset directory (defaults to the configured asset root)
        #[arg(long, requires = "assets")]
        asset_root: Option<PathBuf>,

        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },

    /// Show mount windows and timeline coverage
    Timeline,

    /// Print the composition at a global frame
    Frame {
        /// Global frame number
        frame: u64,

        /// Emit compact single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Export a frame plan (JSONL) and manifest
    Export {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// First frame (inclusive)
        #[arg(long, default_value = "0")]
        start: u64,

        /// Last frame (exclusive)
        #[arg(long)]
        end: Option<u64>,
    },

    /// Write a storyboard file
    Init {
        /// Destination path
        path: PathBuf,

        /// Start from an empty storyboard instead of the promo
        #[arg(long)]
        blank: bool,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load();

    reel_common::logging::init_logging(&config.logging, cli.verbose);

    let storyboard = cli.storyboard;
    match cli.command {
        Commands::Info => commands::info::run(storyboard),
        Commands::Validate {
            assets,
            asset_root,
            strict,
        } => {
            let asset_root = assets.then(|| asset_root.unwrap_or_else(|| config.asset_root.clone()));
            commands::validate::run(storyboard, asset_root, strict)
        }
        Commands::Timeline => commands::timeline::run(storyboard),
        Commands::Frame { frame, compact } => commands::frame::run(storyboard, frame, compact),
        Commands::Export { output, start, end } => {
            let output = output.unwrap_or_else(|| config.output_dir.join("frames.jsonl"));
            commands::export::run(storyboard, output, start, end).await
        }
        Commands::Init { path, blank, force } => commands::init::run(path, blank, force, &config),
    }
}
