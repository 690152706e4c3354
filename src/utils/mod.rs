//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Diagnostics for tables about to be rendered
//! - Error types and result types

pub mod diagnostics;
pub mod error;

// Re-export commonly used items
pub use diagnostics::{
    check_table, format_diagnostics, CheckResult, Diagnostic, DiagnosticLevel, Location,
};
pub use error::{RenderError, RenderResult};
