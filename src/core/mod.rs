/// Core module for test file review
///
/// This module contains the finding model, the rule table and the analyzer
/// that applies it.

pub mod analyzer;
pub mod findings;
pub mod patterns;
