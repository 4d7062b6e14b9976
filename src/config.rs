//! Run configuration and validation.
//!
//! All preconditions are checked here, before any subprocess is spawned or
//! any file is written to the scratch directory. Validation failures map
//! one-to-one onto [`HarnessError`] variants.

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::{Args, TreeVariant};
use crate::error::HarnessError;

/// Name of the workload generator executable inside the install directory.
pub const GENERATOR_BIN: &str = "generator";

/// Name of the driver executable inside the install directory.
pub const DRIVER_BIN: &str = "driver";

/// Driver token that always selects the trusted reference implementation,
/// regardless of which candidate variant is under test.
pub const REFERENCE_TOKEN: &str = "std::set";

/// Validated, immutable configuration for one harness run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Resolved path to the generator executable.
    pub generator: PathBuf,

    /// Resolved path to the driver executable.
    pub driver: PathBuf,

    /// Candidate tree implementation under test.
    pub tree: TreeVariant,

    /// Number of random keys in the workload.
    pub keys: u64,

    /// Number of random range queries in the workload.
    pub queries: u64,

    /// Scratch workspace holding all artifacts for this run.
    pub workspace: Workspace,

    /// Wall-clock limit applied to each child process.
    pub time_limit: Duration,
}

impl Config {
    /// Validate command-line arguments into a run configuration.
    ///
    /// Checks run in a fixed order and stop at the first violation, so the
    /// reported error names exactly one precondition.
    pub fn validate(args: &Args) -> Result<Self, HarnessError> {
        let dir = &args.install_dir;
        if !dir.exists() {
            return Err(HarnessError::InstallDirMissing(dir.clone()));
        }
        if !dir.is_dir() {
            return Err(HarnessError::InstallDirNotADirectory(dir.clone()));
        }

        if args.keys <= 0 {
            return Err(HarnessError::NonPositiveKeys(args.keys));
        }
        if args.queries <= 0 {
            return Err(HarnessError::NonPositiveQueries(args.queries));
        }

        let generator = dir.join(GENERATOR_BIN);
        if !generator.exists() {
            return Err(HarnessError::GeneratorNotFound(generator));
        }
        let driver = dir.join(DRIVER_BIN);
        if !driver.exists() {
            return Err(HarnessError::DriverNotFound(driver));
        }

        let keys = args.keys as u64;
        let queries = args.queries as u64;

        Ok(Self {
            generator,
            driver,
            tree: args.tree,
            keys,
            queries,
            workspace: Workspace::new(args.data_dir.clone(), keys, queries, args.tree),
            time_limit: Duration::from_secs(args.time_limit_secs),
        })
    }
}

/// Scratch directory plus the artifact naming rule.
///
/// The workload name depends only on the key/query counts because the
/// workload is variant-independent by construction. The candidate trace name
/// additionally carries the variant tag, so the reference and candidate
/// artifacts can never resolve to the same path and the comparison can never
/// silently degrade into comparing a trace against itself.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    keys: u64,
    queries: u64,
    tree: TreeVariant,
}

impl Workspace {
    fn new(root: PathBuf, keys: u64, queries: u64, tree: TreeVariant) -> Self {
        Self {
            root,
            keys,
            queries,
            tree,
        }
    }

    /// Create the scratch directory if it does not exist yet.
    ///
    /// Artifacts from earlier runs are kept; the workspace is an append-only
    /// cache shared by runs with the same counts.
    pub async fn ensure(&self) -> Result<(), HarnessError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|source| HarnessError::Artifact {
                path: self.root.clone(),
                source,
            })
    }

    /// Path of the generated workload artifact.
    pub fn workload_path(&self) -> PathBuf {
        self.root.join(format!("{}_{}.test", self.keys, self.queries))
    }

    /// Path of the reference implementation's trace.
    pub fn reference_path(&self) -> PathBuf {
        self.root.join(format!("{}_{}.ans", self.keys, self.queries))
    }

    /// Path of the candidate implementation's trace.
    pub fn candidate_path(&self) -> PathBuf {
        self.root.join(format!(
            "{}_{}_{}.res",
            self.keys,
            self.queries,
            self.tree.file_tag()
        ))
    }
}
