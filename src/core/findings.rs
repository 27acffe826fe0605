/// Finding and report model
///
/// A `ReviewFinding` is one detected issue; a `ReviewReport` collects the
/// findings for a single input file in detection order.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::utils::file_utils::display_path;

/// A single detected issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewFinding {
    /// Short label such as "Notes" or "Coverage"
    pub category: String,
    /// Human readable description
    pub message: String,
}

impl ReviewFinding {
    pub fn new(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            message: message.into(),
        }
    }
}

/// Review results for one input path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewReport {
    /// Path of the reviewed file, as given on the command line
    #[serde(serialize_with = "serialize_path")]
    pub file_path: PathBuf,
    /// Findings in detection order
    pub findings: Vec<ReviewFinding>,
}

impl ReviewReport {
    pub fn new(file_path: impl Into<PathBuf>, findings: Vec<ReviewFinding>) -> Self {
        Self {
            file_path: file_path.into(),
            findings,
        }
    }

    /// Report holding exactly one finding
    pub fn single(file_path: impl Into<PathBuf>, finding: ReviewFinding) -> Self {
        Self::new(file_path, vec![finding])
    }

    /// True when no issue was detected
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Render the report as a Markdown section
    ///
    /// A clean report renders as a fixed "No issues detected." line, otherwise
    /// one bullet per finding is emitted in detection order.
    pub fn to_markdown(&self) -> String {
        let heading = format!("## {}", display_path(&self.file_path));

        if self.is_clean() {
            return format!("{}\nNo issues detected.", heading);
        }

        let mut lines = vec![heading];
        for finding in &self.findings {
            lines.push(format!("- **{}:** {}", finding.category, finding.message));
        }
        lines.join("\n")
    }
}

fn serialize_path<S>(path: &Path, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&display_path(path))
}
