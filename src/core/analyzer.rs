/// Core review analyzer implementation
///
/// This file contains the `ReviewAnalyzer`, which applies the rule table to
/// file contents and turns each input path into a `ReviewReport`.

use std::path::Path;

use log::{debug, error, info, warn};

use crate::core::findings::{ReviewFinding, ReviewReport};
use crate::core::patterns::{self, ReviewRule};
use crate::utils::file_utils::{self, load_file};

/// Applies an ordered rule table to review targets
#[derive(Debug, Clone, Copy)]
pub struct ReviewAnalyzer {
    /// Rules in detection order
    rules: &'static [ReviewRule],
}

impl Default for ReviewAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewAnalyzer {
    /// Create an analyzer using the default rule table
    pub fn new() -> Self {
        Self::with_rules(patterns::load_rules())
    }

    /// Create an analyzer over a custom rule table
    pub fn with_rules(rules: &'static [ReviewRule]) -> Self {
        Self { rules }
    }

    /// Analyze already loaded content
    ///
    /// Empty or whitespace-only content short-circuits with a single
    /// "Content" finding. Otherwise every rule is evaluated and each matching
    /// rule contributes one finding.
    ///
    /// # Arguments
    ///
    /// * `file_path` - Identifier of the reviewed file
    /// * `content` - Decoded file content
    ///
    /// # Returns
    ///
    /// Report holding the findings in detection order
    pub fn analyze_content(&self, file_path: &Path, content: &str) -> ReviewReport {
        if is_blank(content) {
            debug!("{} is empty", file_path.display());
            return ReviewReport::single(file_path, patterns::empty_content_finding());
        }

        let findings: Vec<ReviewFinding> = self
            .rules
            .iter()
            .filter(|rule| rule.matches(content))
            .inspect(|rule| debug!("{}: rule {} matched", file_path.display(), rule.category))
            .map(ReviewRule::to_finding)
            .collect();

        ReviewReport::new(file_path, findings)
    }

    /// Load and analyze a single path
    ///
    /// A missing path yields a "Missing" finding without running any rule. A
    /// path that exists but cannot be read yields an "Error" finding.
    pub fn review_file(&self, file_path: &Path) -> ReviewReport {
        info!("Reviewing file: {}", file_path.display());

        match file_utils::path_exists(file_path) {
            Ok(true) => {}
            Ok(false) => {
                warn!("File not found: {}", file_path.display());
                return ReviewReport::single(file_path, patterns::missing_file_finding());
            }
            Err(e) => {
                error!("{}", e);
                return ReviewReport::single(file_path, patterns::read_error_finding(e.io_error()));
            }
        }

        match load_file(file_path) {
            Ok(content) => self.analyze_content(file_path, &content),
            Err(e) => {
                error!("{}", e);
                ReviewReport::single(file_path, patterns::read_error_finding(e.io_error()))
            }
        }
    }
}

/// True when `content` holds nothing but whitespace.
///
/// The information separators U+001C..U+001F count as whitespace here, on top
/// of the Unicode `White_Space` set.
fn is_blank(content: &str) -> bool {
    content
        .trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
        .is_empty()
}

/// Analyze content with the default rule table
pub fn analyze_content(file_path: &Path, content: &str) -> ReviewReport {
    ReviewAnalyzer::new().analyze_content(file_path, content)
}
