//! Error handling for table rendering
//!
//! This module provides a unified error type and result type for the
//! resolver, the renderer and the configuration layer.

use std::fmt;

/// Render error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A data row has a different column count from the header row
    InvalidGridShape {
        /// Zero-based data row index
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Header label count differs from the width list
    HeaderWidthMismatch { headers: usize, widths: usize },
    /// No width profile is registered for the dataset name
    UnknownDatasetProfile { name: String },
    /// Version string is not of the form `X.Y`
    InvalidVersionFormat { input: String },
    /// Delimited input could not be read
    CsvError {
        message: String,
        line: Option<u64>,
    },
    /// A link rule table could not be built or loaded
    InvalidLinkRules { message: String },
    /// IO error (for file operations)
    IoError { message: String },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidGridShape {
                row,
                expected,
                found,
            } => write!(
                f,
                "Invalid grid shape: row {} has {} column(s), expected {}",
                row, found, expected
            ),
            RenderError::HeaderWidthMismatch { headers, widths } => write!(
                f,
                "Header/width mismatch: {} header label(s) but {} width(s)",
                headers, widths
            ),
            RenderError::UnknownDatasetProfile { name } => {
                write!(f, "Unknown dataset profile: '{}'", name)
            }
            RenderError::InvalidVersionFormat { input } => write!(
                f,
                "'{}' is not a valid version number (expected X.Y with integer X and Y)",
                input
            ),
            RenderError::CsvError { message, line } => {
                if let Some(l) = line {
                    write!(f, "CSV error at line {}: {}", l, message)
                } else {
                    write!(f, "CSV error: {}", message)
                }
            }
            RenderError::InvalidLinkRules { message } => {
                write!(f, "Invalid link rules: {}", message)
            }
            RenderError::IoError { message } => write!(f, "IO error: {}", message),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<csv::Error> for RenderError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line());
        RenderError::CsvError {
            message: err.to_string(),
            line,
        }
    }
}

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;

// Convenience constructors for errors
impl RenderError {
    pub fn grid_shape(row: usize, expected: usize, found: usize) -> Self {
        RenderError::InvalidGridShape {
            row,
            expected,
            found,
        }
    }

    pub fn header_width(headers: usize, widths: usize) -> Self {
        RenderError::HeaderWidthMismatch { headers, widths }
    }

    pub fn unknown_profile(name: impl Into<String>) -> Self {
        RenderError::UnknownDatasetProfile { name: name.into() }
    }

    pub fn invalid_version(input: impl Into<String>) -> Self {
        RenderError::InvalidVersionFormat {
            input: input.into(),
        }
    }

    pub fn link_rules(message: impl Into<String>) -> Self {
        RenderError::InvalidLinkRules {
            message: message.into(),
        }
    }

    /// Whether the error comes from the configuration surface rather than the data
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            RenderError::UnknownDatasetProfile { .. }
                | RenderError::InvalidVersionFormat { .. }
                | RenderError::InvalidLinkRules { .. }
        )
    }
}
