//! CLI for the filter catalog generator.
//!
//! Discovers community filters on GitHub and writes the community filters
//! page of the documentation.

use clap::Parser;
use filter_catalog::{CatalogConfig, RunSummary, Runner, RunnerConfig, RunnerError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter Catalog - Publish a table of community filters found by GitHub topic.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a catalog.toml with default settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// GitHub topic that marks filter repositories.
    #[arg(long)]
    topic: Option<String>,

    /// Owner whose repositories are skipped. Repeat for several owners.
    #[arg(long = "exclude-owner", value_name = "OWNER")]
    exclude_owners: Vec<String>,

    /// Markdown placed above the table.
    #[arg(long)]
    template: Option<PathBuf>,

    /// Document to overwrite.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Directory under which repositories are cloned.
    #[arg(long)]
    scratch_dir: Option<PathBuf>,

    /// Give up on a clone after this many seconds.
    #[arg(long)]
    clone_timeout_secs: Option<u64>,

    /// GitHub API base URL.
    #[arg(long, env = "GITHUB_API_URL")]
    api_url: Option<String>,

    /// Print the document instead of writing it.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Pick the rustls provider before octocrab builds its client
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse arguments
    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let config = resolve_config(&args)?;
    let runner = Runner::new(RunnerConfig::from(config).with_dry_run(args.dry_run))?;
    runner.run().await
}

/// Loads the config file (if any) and applies command line overrides.
fn resolve_config(args: &Args) -> Result<CatalogConfig, RunnerError> {
    let mut config = match &args.config {
        Some(path) => CatalogConfig::load(path)?,
        None => CatalogConfig::default(),
    };

    if let Some(topic) = &args.topic {
        config.topic = topic.clone();
    }
    if !args.exclude_owners.is_empty() {
        config.excluded_owners = args.exclude_owners.clone();
    }
    if let Some(template) = &args.template {
        config.template = template.clone();
    }
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    if let Some(scratch_dir) = &args.scratch_dir {
        config.scratch_dir = Some(scratch_dir.clone());
    }
    if let Some(secs) = args.clone_timeout_secs {
        config.clone_timeout_secs = Some(secs);
    }
    if let Some(api_url) = &args.api_url {
        config.api_url = Some(api_url.clone());
    }

    config.validate()?;
    Ok(config)
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!(
        "  Repositories discovered: {}",
        summary.repositories_discovered
    );
    println!("  Repositories scanned: {}", summary.repositories_scanned);
    println!("  Repositories failed: {}", summary.repositories_failed);
    println!("  Filters added: {}", summary.filters_added);
    println!("  Filters skipped: {}", summary.filters_skipped);
    if summary.name_collisions > 0 {
        println!("  Name collisions: {}", summary.name_collisions);
    }

    if !summary.failures.is_empty() {
        println!("\nFailed repositories:");
        for failure in &summary.failures {
            println!("  {}: {}", failure.repository, failure.error);
        }
    }
}
