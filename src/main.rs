mod cache;
mod cli;
mod dependency;
mod manifest;
mod output;
mod report;
mod spm;

use clap::Parser;
use cli::Cli;
use output::ReportOutput;
use report::Report;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(pubspec) = cli.pubspec.as_deref() else {
        eprintln!("pubspec path is missing");
        std::process::exit(1);
    };

    if let Err(e) = run(pubspec, cli.pub_cache.as_deref(), cli.json) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr so stdout only ever carries the report.
/// `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(
    pubspec: &Path,
    pub_cache: Option<&Path>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let deps = manifest::load(pubspec)?.hosted_dependencies();
    tracing::debug!(path = %pubspec.display(), count = deps.len(), "loaded pubspec");

    let root = cache::root_dir(pub_cache)?;
    let hosted = cache::hosted_dir(&root);
    tracing::debug!(path = %hosted.display(), "using pub cache");

    // Nothing is printed until every dependency is classified
    let classified = spm::classify_all(deps, &hosted)?;
    let report = Report::new(classified);

    if json_output {
        output::print_json(&ReportOutput::new(&report));
    } else {
        print!("{}", report.render_text());
    }

    Ok(())
}
