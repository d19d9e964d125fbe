use clap::Parser;
use std::path::PathBuf;

/// CLI tool that reports which pubspec dependencies ship Swift Package Manager support
#[derive(Parser, Debug)]
#[command(name = "spmcheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the pubspec.yaml to inspect
    #[arg(value_name = "PUBSPEC")]
    pub pubspec: Option<PathBuf>,

    /// Pub cache root (defaults to $PUB_CACHE, then ~/.pub-cache)
    #[arg(long, value_name = "DIR")]
    pub pub_cache: Option<PathBuf>,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
