/// Auto Review - a lightweight automated review of test source files
///
/// This library scans test files for simple lexical signals (empty files,
/// TODO/FIXME markers, missing assertions, print statements, skipped tests)
/// and renders the findings as a Markdown report.

pub mod core;
pub mod utils;

// Re-export main types for convenience
pub use crate::core::analyzer::{analyze_content, ReviewAnalyzer};
pub use crate::core::findings::{ReviewFinding, ReviewReport};
pub use crate::utils::file_utils::ReviewError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Path reviewed when no path is given on the command line
pub const DEFAULT_PATH: &str = "test file";

/// Review a single file and return its report
///
/// This is a convenience function for simple use cases.
pub fn review_file<P: AsRef<std::path::Path>>(file_path: P) -> ReviewReport {
    ReviewAnalyzer::new().review_file(file_path.as_ref())
}

/// Configuration file support
pub mod config {
    use std::path::{Path, PathBuf};

    use anyhow::{Context, Result};
    use log::{error, info};
    use serde::Deserialize;

    /// Options that can be supplied through a JSON configuration file
    #[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
    #[serde(default)]
    pub struct ReviewConfig {
        /// Export reports as JSON to this path
        pub json: Option<PathBuf>,
        /// Print a findings summary to stderr
        pub summary: bool,
    }

    /// Load configuration from file if provided
    ///
    /// A missing file or invalid JSON is logged and the defaults are used.
    /// Failing to read an existing file is an error.
    pub fn load_config(config_path: Option<&Path>) -> Result<ReviewConfig> {
        let path = match config_path {
            Some(path) => path,
            None => return Ok(ReviewConfig::default()),
        };

        if !path.exists() {
            error!("Configuration file not found: {}", path.display());
            return Ok(ReviewConfig::default());
        }

        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        match serde_json::from_str(&config_str) {
            Ok(config) => {
                info!("Loaded configuration from {}", path.display());
                Ok(config)
            }
            Err(e) => {
                error!("Invalid JSON in configuration file: {}", e);
                Ok(ReviewConfig::default())
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_no_config() {
            assert_eq!(load_config(None).unwrap(), ReviewConfig::default());
        }

        #[test]
        fn test_missing_config_uses_defaults() {
            let dir = tempfile::tempdir().unwrap();
            let config = load_config(Some(dir.path().join("nope.json").as_path())).unwrap();
            assert_eq!(config, ReviewConfig::default());
        }

        #[test]
        fn test_config_values() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("review.json");
            std::fs::write(&path, r#"{"json": "out.json", "summary": true}"#).unwrap();

            let config = load_config(Some(path.as_path())).unwrap();
            assert_eq!(config.json, Some(PathBuf::from("out.json")));
            assert!(config.summary);
        }

        #[test]
        fn test_partial_and_invalid_config() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("review.json");

            std::fs::write(&path, r#"{"summary": true}"#).unwrap();
            let config = load_config(Some(path.as_path())).unwrap();
            assert_eq!(config.json, None);
            assert!(config.summary);

            std::fs::write(&path, "{not json").unwrap();
            assert_eq!(load_config(Some(path.as_path())).unwrap(), ReviewConfig::default());
        }
    }
}

/// Command-line application functionality
pub mod app {
    use crate::core::analyzer::ReviewAnalyzer;
    use crate::core::findings::ReviewReport;
    use std::path::Path;

    /// Review every path in order
    ///
    /// # Arguments
    ///
    /// * `file_paths` - Paths to review
    ///
    /// # Returns
    ///
    /// One report per path, in input order
    pub fn collect_reports<P: AsRef<Path>>(file_paths: &[P]) -> Vec<ReviewReport> {
        let analyzer = ReviewAnalyzer::new();

        file_paths
            .iter()
            .map(|file_path| analyzer.review_file(file_path.as_ref()))
            .collect()
    }
}
