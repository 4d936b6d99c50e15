use clap::Parser;
use std::path::PathBuf;

/// Operational flags only; what gets compiled comes from the config file.
#[derive(Debug, Clone, Parser)]
#[command(name = "txt-compiler")]
#[command(about = "Compile all .txt files in a folder into one file, in alphabetical order")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct CliArgs {
    /// Path to TOML configuration file (defaults to ./txt-compiler.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log CPU and memory usage per phase
    #[arg(long)]
    pub monitor: bool,

    /// Dry run - list the files that would be compiled without writing anything
    #[arg(long)]
    pub dry_run: bool,
}
