//! mergelog: changelog extractor for squash-merge git workflows
//!
//! This binary reads a range of commits from a git repository and prints
//! one of several derived views (changes, commit hashes, ticket numbers,
//! ticket URLs, merge-request URLs) to stdout, one line per item.

use clap::Parser;

use mergelog_cli::app;
use mergelog_cli::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Diagnostics go to stderr; stdout carries only changelog data
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    app::run(&config, &mut std::io::stdout().lock())
}
