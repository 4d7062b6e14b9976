//! splay-harness - end-to-end differential tester for splay trees
//!
//! Generates a random workload of keys and range queries, replays it against
//! the trusted reference implementation (`std::set`) and the selected
//! candidate splay-tree variant, and compares the two result traces byte for
//! byte.
//!
//! Exit status: 0 on PASS, 1 on FAIL, 2 on any fatal error (bad
//! configuration, missing tools, subprocess failure).

mod cli;
mod config;
mod error;
mod executor;
mod verdict;
mod workload;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Args;
use crate::config::Config;
use crate::verdict::Verdict;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "splay_harness=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let code = match run().await {
        Ok(verdict) => {
            verdict::report(&verdict);
            if verdict.is_pass() {
                0
            } else {
                1
            }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            2
        }
    };

    std::process::exit(code);
}

/// Run the full pipeline: validate, generate, execute twice, compare.
///
/// Stages are strictly sequential; each awaits its child process before the
/// next one starts.
async fn run() -> Result<Verdict> {
    let args = Args::parse();
    let config = Config::validate(&args)?;
    config.workspace.ensure().await?;

    let workload = workload::generate(&config).await?;
    let traces = executor::run_both(&config, &workload).await?;
    let verdict = verdict::judge(&traces).await?;

    Ok(verdict)
}
