/// Review rule definitions
///
/// The checks applied to every non-empty file are kept here as a static,
/// ordered table. The analyzer walks the table front to back, so the order of
/// `REVIEW_RULES` is the detection order of the report.

use crate::core::findings::ReviewFinding;

pub const CONTENT_CATEGORY: &str = "Content";
pub const EMPTY_CONTENT_MESSAGE: &str = "File is empty or contains only whitespace.";

pub const MISSING_CATEGORY: &str = "Missing";
pub const MISSING_FILE_MESSAGE: &str = "File does not exist.";

pub const ERROR_CATEGORY: &str = "Error";

/// When a rule fires relative to its trigger substrings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Fires when any trigger occurs in the content
    Present,
    /// Fires when none of the triggers occur in the content
    Absent,
}

/// One row of the rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewRule {
    pub category: &'static str,
    pub message: &'static str,
    /// Case-sensitive literal substrings, no word boundaries
    pub needles: &'static [&'static str],
    pub trigger: Trigger,
}

impl ReviewRule {
    /// Check the rule against `content`
    pub fn matches(&self, content: &str) -> bool {
        let found = self.needles.iter().any(|needle| content.contains(needle));
        match self.trigger {
            Trigger::Present => found,
            Trigger::Absent => !found,
        }
    }

    pub fn to_finding(&self) -> ReviewFinding {
        ReviewFinding::new(self.category, self.message)
    }
}

pub const REVIEW_RULES: &[ReviewRule] = &[
    ReviewRule {
        category: "Notes",
        message: "Contains TODO/FIXME markers to review.",
        needles: &["TODO", "FIXME"],
        trigger: Trigger::Present,
    },
    ReviewRule {
        category: "Coverage",
        message: "No assertions found; consider adding assertions to validate behavior.",
        needles: &["assert"],
        trigger: Trigger::Absent,
    },
    ReviewRule {
        category: "Signal",
        message: "Print statements detected; they can mask failures in automated runs.",
        needles: &["print("],
        trigger: Trigger::Present,
    },
    ReviewRule {
        category: "Skip",
        message: "Skipped tests detected; ensure skips are justified and documented.",
        needles: &["@pytest.mark.skip", "skip("],
        trigger: Trigger::Present,
    },
];

/// Load the default rule table
pub fn load_rules() -> &'static [ReviewRule] {
    REVIEW_RULES
}

pub fn missing_file_finding() -> ReviewFinding {
    ReviewFinding::new(MISSING_CATEGORY, MISSING_FILE_MESSAGE)
}

pub fn empty_content_finding() -> ReviewFinding {
    ReviewFinding::new(CONTENT_CATEGORY, EMPTY_CONTENT_MESSAGE)
}

pub fn read_error_finding(reason: impl std::fmt::Display) -> ReviewFinding {
    ReviewFinding::new(ERROR_CATEGORY, format!("Unable to read file: {}", reason))
}
