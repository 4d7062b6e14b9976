//! Workload generation.

use std::path::PathBuf;

use tokio::fs;
use tokio::process::Command;

use crate::config::Config;
use crate::error::HarnessError;
use crate::executor::run_tool;

/// Invoke the generator and capture its output into the workload artifact.
///
/// The artifact is written with truncate-or-create semantics, so a stale
/// workload from an earlier run with the same counts is replaced. Both
/// driver runs of this invocation then read this one file.
pub async fn generate(config: &Config) -> Result<PathBuf, HarnessError> {
    tracing::info!(keys = config.keys, queries = config.queries, "generating workload");

    let mut cmd = Command::new(&config.generator);
    cmd.arg("--n-keys")
        .arg(config.keys.to_string())
        .arg("--n-queries")
        .arg(config.queries.to_string());

    let output = run_tool(cmd, "generator", config.time_limit).await?;

    let path = config.workspace.workload_path();
    fs::write(&path, &output.stdout)
        .await
        .map_err(|source| HarnessError::Artifact {
            path: path.clone(),
            source,
        })?;

    Ok(path)
}
