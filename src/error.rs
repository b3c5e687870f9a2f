//! Error taxonomy for the line tools
//!
//! Usage errors are raised from clap value parsers before any input is read;
//! data errors abort a run before anything is written.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ToolError {
    /// `cut` was given an empty delimiter
    #[error("delimiter must not be empty")]
    EmptyDelimiter,

    /// `cut` was given a field list with no entries
    #[error("field list must name at least one field")]
    EmptyFieldList,

    /// An entry of the `cut` field list is not a non-negative integer
    #[error("invalid field index: '{item}' (expected a non-negative integer)")]
    InvalidField { item: String },

    /// A line could not be parsed as a number under `sort --numeric`
    #[error("line {line_number}: '{line}' is not a number")]
    NotANumber { line_number: usize, line: String },
}
