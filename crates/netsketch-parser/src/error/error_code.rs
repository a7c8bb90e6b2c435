//! Error codes for import diagnostics.
//!
//! - `E1xx` - Structural errors in a relation line
//! - `W1xx` - Warnings about relation lines that are accepted

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Missing source label.
    ///
    /// A line contains `->` but nothing except whitespace before it.
    E100,

    /// Missing target label.
    ///
    /// A line contains `->` but nothing except whitespace after it.
    E101,

    /// Malformed relation line.
    ///
    /// A line contains `->` but could not be split into two labels.
    E102,

    /// Extra delimiter.
    ///
    /// A line contains more than one `->`; everything after the second
    /// delimiter is ignored.
    W100,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::W100 => "W100",
        }
    }

    /// Returns a short description of what this code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "missing source label",
            ErrorCode::E101 => "missing target label",
            ErrorCode::E102 => "malformed relation line",
            ErrorCode::W100 => "text after second delimiter ignored",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
