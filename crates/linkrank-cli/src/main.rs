//! Linkrank CLI
//!
//! Estimate the PageRank of every page in a directory of HTML files.

use clap::Parser;
use linkrank_core::error::exit_codes;
use linkrank_core::LinkRankError;
use tracing_subscriber::EnvFilter;

mod app;
mod commands;
mod output;

use app::Cli;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so reports on stdout stay machine-readable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(cli.verbose))
        .init();

    if let Err(err) = commands::rank::run(&cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(exit_code(&err));
    }
}

/// `RUST_LOG` when set, `warn` otherwise; `--verbose` raises the level to debug
fn log_filter(verbose: bool) -> EnvFilter {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if verbose {
        filter.add_directive(tracing::Level::DEBUG.into())
    } else {
        filter
    }
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<LinkRankError>()
        .map(LinkRankError::exit_code)
        .unwrap_or(exit_codes::GENERAL_ERROR)
}
