//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// End-to-end differential testing of splay tree implementations.
///
/// Generates a random workload, replays it against the trusted reference
/// implementation and the selected candidate tree, and compares the two
/// result traces byte for byte.
#[derive(Debug, Parser)]
#[command(name = "splay-harness", version, about)]
pub struct Args {
    /// Directory containing the installed generator and driver executables
    #[arg(long, value_name = "PATH")]
    pub install_dir: PathBuf,

    /// The candidate tree implementation to test
    #[arg(long)]
    pub tree: TreeVariant,

    /// Number of random keys in the workload
    #[arg(short = 'k', long = "keys", value_name = "N")]
    pub keys: i64,

    /// Number of random range queries in the workload
    #[arg(short = 'q', long = "queries", value_name = "N")]
    pub queries: i64,

    /// Scratch directory for workload and trace artifacts
    #[arg(long, value_name = "PATH", default_value = "data")]
    pub data_dir: PathBuf,

    /// Wall-clock limit for each generator/driver invocation, in seconds
    #[arg(long, value_name = "SECS", default_value_t = 300)]
    pub time_limit_secs: u64,
}

/// The closed set of candidate tree implementations the driver knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TreeVariant {
    /// Plain splay tree
    Splay,
    /// Splay tree augmented with subtree sizes
    #[value(name = "splay+")]
    SplayPlus,
}

impl TreeVariant {
    /// Token passed to the driver's `--tree` option.
    pub fn driver_token(self) -> &'static str {
        match self {
            TreeVariant::Splay => "splay",
            TreeVariant::SplayPlus => "splay+",
        }
    }

    /// Filesystem-safe tag used in result artifact names.
    pub fn file_tag(self) -> &'static str {
        match self {
            TreeVariant::Splay => "splay",
            TreeVariant::SplayPlus => "splay-plus",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_tokens() {
        assert_eq!(TreeVariant::Splay.driver_token(), "splay");
        assert_eq!(TreeVariant::SplayPlus.driver_token(), "splay+");
        // The file tag never contains characters that need escaping.
        assert_eq!(TreeVariant::SplayPlus.file_tag(), "splay-plus");
    }

    #[test]
    fn test_parse_full_invocation() {
        let args = Args::try_parse_from([
            "splay-harness",
            "--install-dir",
            "/opt/trees",
            "--tree",
            "splay+",
            "-k",
            "10",
            "-q",
            "20",
        ])
        .unwrap();

        assert_eq!(args.install_dir, PathBuf::from("/opt/trees"));
        assert_eq!(args.tree, TreeVariant::SplayPlus);
        assert_eq!(args.keys, 10);
        assert_eq!(args.queries, 20);
        assert_eq!(args.data_dir, PathBuf::from("data"));
        assert_eq!(args.time_limit_secs, 300);
    }

    #[test]
    fn test_unknown_variant_rejected() {
        let result = Args::try_parse_from([
            "splay-harness",
            "--install-dir",
            "/opt/trees",
            "--tree",
            "avl",
            "-k",
            "10",
            "-q",
            "20",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_required_option_rejected() {
        let result =
            Args::try_parse_from(["splay-harness", "--tree", "splay", "-k", "10", "-q", "20"]);
        assert!(result.is_err());
    }
}
