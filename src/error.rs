//! Error types for the harness.
//!
//! Every precondition from argument validation and every way a child
//! process can fail gets its own variant, so the message printed at the
//! top level names exactly what went wrong.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("\"{}\" does not exist", .0.display())]
    InstallDirMissing(PathBuf),

    #[error("\"{}\" does not refer to a directory", .0.display())]
    InstallDirNotADirectory(PathBuf),

    #[error("the number of keys is expected to be a positive number (got {0})")]
    NonPositiveKeys(i64),

    #[error("the number of queries is expected to be a positive number (got {0})")]
    NonPositiveQueries(i64),

    #[error("no test generator found at \"{}\"", .0.display())]
    GeneratorNotFound(PathBuf),

    #[error("no driver found at \"{}\"", .0.display())]
    DriverNotFound(PathBuf),

    #[error("failed to run {tool}: {source}")]
    ToolSpawn {
        tool: &'static str,
        source: std::io::Error,
    },

    #[error("{tool} exited with code {code}: {stderr}")]
    ToolFailed {
        tool: &'static str,
        code: i32,
        stderr: String,
    },

    #[error("{tool} did not finish within {limit_secs} seconds")]
    ToolTimeout {
        tool: &'static str,
        limit_secs: u64,
    },

    #[error("i/o error on \"{}\": {source}", .path.display())]
    Artifact {
        path: PathBuf,
        source: std::io::Error,
    },
}
