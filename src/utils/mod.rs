/// Utility functions for file loading and output formatting

pub mod file_utils;
pub mod output_formatter;
