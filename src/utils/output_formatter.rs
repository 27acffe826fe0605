/// Output formatter for review reports
///
/// This module assembles the Markdown document printed to stdout and handles
/// the optional JSON export and stderr summary.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::findings::ReviewReport;

/// Heading of the generated document
pub const DOCUMENT_TITLE: &str = "# Automated Review Report";

/// Format all reports into a single Markdown document
///
/// Reports are separated by a blank line and trailing whitespace is removed
/// from the result.
///
/// # Arguments
///
/// * `reports` - Reports in input order
///
/// # Returns
///
/// The document text, without a trailing newline
pub fn format_document(reports: &[ReviewReport]) -> String {
    let mut output = vec![DOCUMENT_TITLE.to_string(), String::new()];

    for report in reports {
        output.push(report.to_markdown());
        output.push(String::new());
    }

    output.join("\n").trim().to_string()
}

/// Export reports to a JSON file
///
/// # Arguments
///
/// * `reports` - Reports to serialize
/// * `output_path` - Path where the JSON file will be written
///
/// # Returns
///
/// Result indicating success or failure
pub fn export_reports_json(reports: &[ReviewReport], output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create JSON output file: {}", output_path.display()))?;

    serde_json::to_writer_pretty(BufWriter::new(file), reports)
        .context("Failed to write JSON data")?;

    Ok(())
}

/// Count findings per category, in first-seen order
pub fn count_by_category(reports: &[ReviewReport]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for finding in reports.iter().flat_map(|report| &report.findings) {
        match counts.iter_mut().find(|(category, _)| *category == finding.category) {
            Some((_, count)) => *count += 1,
            None => counts.push((finding.category.clone(), 1)),
        }
    }

    counts
}

/// Create a summary of findings for multiple files
///
/// # Arguments
///
/// * `reports` - Reports for all reviewed files
///
/// # Returns
///
/// Summary string
pub fn create_summary(reports: &[ReviewReport]) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", "Review Summary".yellow().bold()));
    output.push_str(&format!("{} {}\n", "Files reviewed:".green(), reports.len()));

    let total_findings: usize = reports.iter().map(|report| report.findings.len()).sum();
    output.push_str(&format!("{} {}\n", "Total findings:".green(), total_findings));

    let clean = reports.iter().filter(|report| report.is_clean()).count();
    output.push_str(&format!("{} {}\n", "Clean files:".green(), clean));

    for (category, count) in count_by_category(reports) {
        output.push_str(&format!("  {}: {}\n", category.cyan().bold(), count));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::findings::ReviewFinding;

    fn sample_reports() -> Vec<ReviewReport> {
        vec![
            ReviewReport::single(
                "empty.py",
                ReviewFinding::new("Content", "File is empty or contains only whitespace."),
            ),
            ReviewReport::new("clean.py", Vec::new()),
            ReviewReport::new(
                "noisy.py",
                vec![
                    ReviewFinding::new("Notes", "n"),
                    ReviewFinding::new("Coverage", "c"),
                ],
            ),
            ReviewReport::single("todo.py", ReviewFinding::new("Notes", "n")),
        ]
    }

    #[test]
    fn test_format_document() {
        let document = format_document(&sample_reports());
        let expected = "# Automated Review Report\n\
                        \n\
                        ## empty.py\n\
                        - **Content:** File is empty or contains only whitespace.\n\
                        \n\
                        ## clean.py\n\
                        No issues detected.\n\
                        \n\
                        ## noisy.py\n\
                        - **Notes:** n\n\
                        - **Coverage:** c\n\
                        \n\
                        ## todo.py\n\
                        - **Notes:** n";
        assert_eq!(document, expected);
    }

    #[test]
    fn test_format_document_without_reports() {
        assert_eq!(format_document(&[]), "# Automated Review Report");
    }

    #[test]
    fn test_count_by_category() {
        let counts = count_by_category(&sample_reports());
        assert_eq!(
            counts,
            vec![
                ("Content".to_string(), 1),
                ("Notes".to_string(), 2),
                ("Coverage".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_create_summary() {
        colored::control::set_override(false);
        let summary = create_summary(&sample_reports());
        assert!(summary.contains("Files reviewed: 4"));
        assert!(summary.contains("Total findings: 4"));
        assert!(summary.contains("Clean files: 1"));
        assert!(summary.contains("  Notes: 2"));
    }

    #[test]
    fn test_export_reports_json() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("report.json");

        export_reports_json(&sample_reports(), &output_path).unwrap();

        let written = std::fs::read_to_string(&output_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 4);
        assert_eq!(value[1]["file_path"], "clean.py");
        assert!(value[1]["findings"].as_array().unwrap().is_empty());
        assert_eq!(value[2]["findings"][1]["category"], "Coverage");
    }

    #[test]
    fn test_export_reports_json_bad_path() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("missing_dir").join("report.json");
        assert!(export_reports_json(&sample_reports(), &output_path).is_err());
    }
}
