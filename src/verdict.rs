//! Verdict computation and reporting.

use std::path::Path;

use tokio::fs;

use crate::error::HarnessError;
use crate::executor::TracePair;

/// Outcome of comparing the candidate trace against the reference trace.
///
/// A mismatch is a legitimate FAIL verdict, not an error: the run still
/// completes normally and both full traces are kept for inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail {
        /// Full trace produced by the candidate implementation.
        candidate: String,
        /// Full trace produced by the reference implementation.
        reference: String,
    },
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

/// Read both traces and compare them byte for byte.
///
/// No normalization of any kind: trailing whitespace and newlines count.
pub async fn judge(traces: &TracePair) -> Result<Verdict, HarnessError> {
    let reference = read_trace(&traces.reference).await?;
    let candidate = read_trace(&traces.candidate).await?;

    if reference == candidate {
        Ok(Verdict::Pass)
    } else {
        Ok(Verdict::Fail {
            candidate: String::from_utf8_lossy(&candidate).into_owned(),
            reference: String::from_utf8_lossy(&reference).into_owned(),
        })
    }
}

async fn read_trace(path: &Path) -> Result<Vec<u8>, HarnessError> {
    fs::read(path).await.map_err(|source| HarnessError::Artifact {
        path: path.to_path_buf(),
        source,
    })
}

/// Print the verdict; on FAIL, dump both full traces for manual inspection.
pub fn report(verdict: &Verdict) {
    match verdict {
        Verdict::Pass => println!("Test passed!"),
        Verdict::Fail {
            candidate,
            reference,
        } => {
            println!("Test failed...");
            println!("Result: {candidate}");
            println!("Correct result: {reference}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn trace_pair(dir: &Path, reference: &str, candidate: &str) -> TracePair {
        let reference_path = dir.join("10_20.ans");
        let candidate_path = dir.join("10_20_splay.res");
        std::fs::write(&reference_path, reference).unwrap();
        std::fs::write(&candidate_path, candidate).unwrap();
        TracePair {
            reference: reference_path,
            candidate: candidate_path,
        }
    }

    #[tokio::test]
    async fn test_identical_traces_pass() {
        let dir = tempfile::tempdir().unwrap();
        let traces = trace_pair(dir.path(), "1 2 3 \n", "1 2 3 \n");
        assert_eq!(judge(&traces).await.unwrap(), Verdict::Pass);
    }

    #[tokio::test]
    async fn test_differing_traces_fail_with_both_contents() {
        let dir = tempfile::tempdir().unwrap();
        let traces = trace_pair(dir.path(), "1 2 3 \n", "1 2 4 \n");

        match judge(&traces).await.unwrap() {
            Verdict::Fail {
                candidate,
                reference,
            } => {
                assert_eq!(candidate, "1 2 4 \n");
                assert_eq!(reference, "1 2 3 \n");
            }
            Verdict::Pass => panic!("expected FAIL"),
        }
    }

    #[tokio::test]
    async fn test_trailing_newline_difference_fails() {
        let dir = tempfile::tempdir().unwrap();
        let traces = trace_pair(dir.path(), "1 2 3 \n", "1 2 3 ");
        assert!(!judge(&traces).await.unwrap().is_pass());
    }

    #[tokio::test]
    async fn test_missing_trace_is_an_artifact_error() {
        let traces = TracePair {
            reference: PathBuf::from("/definitely/not/here.ans"),
            candidate: PathBuf::from("/definitely/not/here.res"),
        };
        assert!(matches!(
            judge(&traces).await,
            Err(HarnessError::Artifact { .. })
        ));
    }

    #[tokio::test]
    async fn test_comparison_does_not_touch_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let traces = trace_pair(dir.path(), "a\n", "b\n");
        judge(&traces).await.unwrap();

        assert_eq!(std::fs::read_to_string(&traces.reference).unwrap(), "a\n");
        assert_eq!(std::fs::read_to_string(&traces.candidate).unwrap(), "b\n");
    }
}
