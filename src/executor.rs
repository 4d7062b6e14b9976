//! Driver execution: one reference run, one candidate run.
//!
//! Both invocations replay the same workload artifact. The driver is invoked
//! in answer mode (`driver -a --tree <token>`), reads the workload on stdin
//! and writes its result trace on stdout, which we capture into the trace
//! artifact for that run.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::fs;
use tokio::process::Command;
use tokio::time::timeout;

use crate::config::{Config, REFERENCE_TOKEN};
use crate::error::HarnessError;

/// Paths of the two trace artifacts produced by a dual execution.
#[derive(Debug)]
pub struct TracePair {
    pub reference: PathBuf,
    pub candidate: PathBuf,
}

/// Run the driver against the workload twice: reference first, candidate
/// second. A failure in either run aborts before the comparison stage.
pub async fn run_both(config: &Config, workload: &Path) -> Result<TracePair, HarnessError> {
    let reference = config.workspace.reference_path();
    run_driver(config, workload, REFERENCE_TOKEN, &reference).await?;

    let candidate = config.workspace.candidate_path();
    run_driver(config, workload, config.tree.driver_token(), &candidate).await?;

    Ok(TracePair {
        reference,
        candidate,
    })
}

/// Replay the workload against one implementation and capture its trace.
async fn run_driver(
    config: &Config,
    workload: &Path,
    token: &str,
    trace_path: &Path,
) -> Result<(), HarnessError> {
    tracing::info!(tree = token, "running driver");

    let workload_file =
        std::fs::File::open(workload).map_err(|source| HarnessError::Artifact {
            path: workload.to_path_buf(),
            source,
        })?;

    let mut cmd = Command::new(&config.driver);
    cmd.arg("-a")
        .arg("--tree")
        .arg(token)
        .stdin(Stdio::from(workload_file));

    let output = run_tool(cmd, "driver", config.time_limit).await?;

    fs::write(trace_path, &output.stdout)
        .await
        .map_err(|source| HarnessError::Artifact {
            path: trace_path.to_path_buf(),
            source,
        })
}

/// Run a child process to completion, capturing stdout and stderr.
///
/// Non-zero exit is fatal; signal termination is reported as code -1. The
/// child is killed if the wall-clock limit expires.
pub(crate) async fn run_tool(
    mut cmd: Command,
    tool: &'static str,
    limit: Duration,
) -> Result<std::process::Output, HarnessError> {
    cmd.stdout(Stdio::piped()).stderr(Stdio::piped()).kill_on_drop(true);

    let output = timeout(limit, cmd.output())
        .await
        .map_err(|_| HarnessError::ToolTimeout {
            tool,
            limit_secs: limit.as_secs(),
        })?
        .map_err(|source| HarnessError::ToolSpawn { tool, source })?;

    if !output.status.success() {
        return Err(HarnessError::ToolFailed {
            tool,
            code: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
        });
    }

    Ok(output)
}
