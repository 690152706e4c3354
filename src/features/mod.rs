//! Feature modules - input and text annotation
//!
//! - CSV input (header + data rows)
//! - Link rules applied to rendered cell text

pub mod csv_input;
pub mod links;

// Re-export commonly used types
pub use csv_input::{read_table, CsvTable};
pub use links::{annotate, create_link, CitationRule, LinkRuleTable, Occurrence};
