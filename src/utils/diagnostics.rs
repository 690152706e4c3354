//! Table diagnostics
//!
//! Checks a table before rendering and reports problems that would make the
//! render fail (errors) or produce a page that probably needs a second look
//! (warnings):
//!
//! - Rows whose length differs from the header
//! - Header labels without a width, or the other way round
//! - Widths that are not percentages or do not add up to 100%
//! - Empty category cells
//! - Citation keywords without an id
//! - URLs that no prefix rule turns into a link
//!
//! ## Example
//!
//! ```rust
//! use srctable::diagnostics::{check_table, DiagnosticLevel};
//! use srctable::features::csv_input::read_table;
//! use srctable::features::links::LinkRuleTable;
//!
//! let table = read_table("Category,Source\nGenes,NCBI\n").unwrap();
//! let result = check_table(&table, &["50%", "40%"], &LinkRuleTable::builtin());
//! assert!(!result.has_errors());
//! assert_eq!(result.count(DiagnosticLevel::Warning), 1);
//! ```

use std::fmt::{self, Write};

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::grid::ESCAPE_MARKER;
use crate::features::csv_input::CsvTable;
use crate::features::links::LinkRuleTable;

lazy_static! {
    /// `12%`, `12.5%`
    static ref PERCENT: Regex = Regex::new(r"^\s*([0-9]+(?:\.[0-9]+)?)\s*%\s*$").unwrap();
    /// Text that is nothing but a URL
    static ref BARE_URL: Regex = Regex::new(r"^(?:https?|ftp)://\S+$").unwrap();
}

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// The page renders, but something could be linked or laid out better
    Info,
    /// The page renders but may look wrong
    Warning,
    /// Rendering will fail
    Error,
}

impl DiagnosticLevel {
    const ALL: [DiagnosticLevel; 3] = [
        DiagnosticLevel::Error,
        DiagnosticLevel::Warning,
        DiagnosticLevel::Info,
    ];

    fn label(self) -> &'static str {
        match self {
            DiagnosticLevel::Info => "info",
            DiagnosticLevel::Warning => "warning",
            DiagnosticLevel::Error => "error",
        }
    }

    /// Noun used in the summary line
    fn noun(self) -> &'static str {
        match self {
            DiagnosticLevel::Info => "note",
            DiagnosticLevel::Warning => "warning",
            DiagnosticLevel::Error => "error",
        }
    }

    fn ansi(self) -> &'static str {
        match self {
            DiagnosticLevel::Info => "\x1b[34m",
            DiagnosticLevel::Warning => "\x1b[33m",
            DiagnosticLevel::Error => "\x1b[31m",
        }
    }
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where in the table a problem sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Location {
    /// Header or widths, no particular data row
    #[default]
    Table,
    /// Whole data row (0-indexed, header excluded)
    Row(usize),
    /// Single cell of a data row
    Cell { row: usize, column: usize },
}

/// One finding of [`check_table`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
    pub location: Location,
    /// Offending text, shown under the message
    pub source_text: Option<String>,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            location: Location::Table,
            source_text: None,
            help: None,
        }
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn with_source(mut self, text: impl Into<String>) -> Self {
        self.source_text = Some(text.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Data row the finding refers to, if any
    pub fn row(&self) -> Option<usize> {
        match self.location {
            Location::Table => None,
            Location::Row(row) | Location::Cell { row, .. } => Some(row),
        }
    }

    pub fn column(&self) -> Option<usize> {
        match self.location {
            Location::Cell { column, .. } => Some(column),
            _ => None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)?;
        match self.location {
            Location::Table => {}
            Location::Row(row) => write!(f, "\n  --> row {}", row)?,
            Location::Cell { row, column } => write!(f, "\n  --> row {}, column {}", row, column)?,
        }
        if let Some(ref source) = self.source_text {
            write!(f, "\n  |\n  | {}", source)?;
        }
        if let Some(ref help) = self.help {
            write!(f, "\n  = help: {}", help)?;
        }
        Ok(())
    }
}

/// Findings of one check, in the order they were found
#[derive(Debug, Default)]
pub struct CheckResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diag: Diagnostic) {
        self.diagnostics.push(diag);
    }

    /// Number of findings at `level`
    pub fn count(&self, level: DiagnosticLevel) -> usize {
        self.diagnostics.iter().filter(|d| d.level == level).count()
    }

    pub fn has_errors(&self) -> bool {
        self.count(DiagnosticLevel::Error) > 0
    }

    /// Errors or warnings; informational notes alone do not count
    pub fn has_problems(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.level >= DiagnosticLevel::Warning)
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Highest level found
    pub fn worst(&self) -> Option<DiagnosticLevel> {
        self.diagnostics.iter().map(|d| d.level).max()
    }

    /// `1 error, 2 warnings`, or `no issues found`
    pub fn summary(&self) -> String {
        let parts: Vec<String> = DiagnosticLevel::ALL
            .iter()
            .filter_map(|&level| match self.count(level) {
                0 => None,
                1 => Some(format!("1 {}", level.noun())),
                n => Some(format!("{} {}s", n, level.noun())),
            })
            .collect();
        if parts.is_empty() {
            "no issues found".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Check a table, its header widths and the link rules it will be rendered with
pub fn check_table<W: AsRef<str>>(
    table: &CsvTable,
    widths: &[W],
    links: &LinkRuleTable,
) -> CheckResult {
    let mut result = CheckResult::new();

    check_shape(table, &mut result);
    check_widths(table.header.len(), widths, &mut result);
    check_cells(table, links, &mut result);

    result
}

fn check_shape(table: &CsvTable, result: &mut CheckResult) {
    let expected = table.header.len();
    for (row_idx, row) in table.rows.iter().enumerate() {
        if row.len() != expected {
            result.add(
                Diagnostic::new(
                    DiagnosticLevel::Error,
                    format!("row has {} column(s), header has {}", row.len(), expected),
                )
                .at(Location::Row(row_idx))
                .with_source(row.join(",")),
            );
        }
    }
}

fn check_widths<W: AsRef<str>>(columns: usize, widths: &[W], result: &mut CheckResult) {
    if widths.len() != columns {
        result.add(
            Diagnostic::new(
                DiagnosticLevel::Error,
                format!(
                    "{} header label(s) but {} width(s)",
                    columns,
                    widths.len()
                ),
            )
            .with_help("give one width per header column"),
        );
    }

    let mut total = 0.0_f64;
    let mut all_percent = true;
    for (col, width) in widths.iter().enumerate() {
        let width = width.as_ref();
        match PERCENT
            .captures(width)
            .and_then(|c| c[1].parse::<f64>().ok())
        {
            Some(value) => total += value,
            None => {
                all_percent = false;
                result.add(
                    Diagnostic::new(
                        DiagnosticLevel::Warning,
                        format!("width of column {} is not a percentage", col),
                    )
                    .with_source(width),
                );
            }
        }
    }

    if all_percent && !widths.is_empty() && (total - 100.0).abs() > 0.01 {
        result.add(
            Diagnostic::new(
                DiagnosticLevel::Warning,
                format!("header widths add up to {}%, not 100%", total),
            )
            .with_help("adjust the widths so the table fills the page"),
        );
    }
}

fn check_cells(table: &CsvTable, links: &LinkRuleTable, result: &mut CheckResult) {
    for (row_idx, row) in table.rows.iter().enumerate() {
        if row.first().map(|c| c.trim().is_empty()).unwrap_or(false) {
            result.add(
                Diagnostic::new(DiagnosticLevel::Warning, "empty category cell")
                    .at(Location::Cell { row: row_idx, column: 0 })
                    .with_help("blank categories merge with each other"),
            );
        }

        for (col_idx, text) in row.iter().enumerate() {
            let text = text.strip_prefix(ESCAPE_MARKER).unwrap_or(text);

            if let Some(rule) = links.citation() {
                if text.contains(rule.keyword()) && rule.ids(text).is_empty() {
                    result.add(
                        Diagnostic::new(
                            DiagnosticLevel::Warning,
                            format!("'{}' without an id", rule.keyword()),
                        )
                        .at(Location::Cell { row: row_idx, column: col_idx })
                        .with_source(text)
                        .with_help(format!("write it as '{}: <id>'", rule.keyword())),
                    );
                }
            }

            if BARE_URL.is_match(text)
                && links.matching_prefix(text).is_none()
                && links.exact_url(text).is_none()
            {
                result.add(
                    Diagnostic::new(DiagnosticLevel::Info, "URL is rendered as plain text")
                        .at(Location::Cell { row: row_idx, column: col_idx })
                        .with_source(text)
                        .with_help("add a prefix rule to turn it into a link"),
                );
            }
        }
    }
}

/// Render a check report for the terminal, one block per finding plus a summary line
pub fn format_diagnostics(result: &CheckResult, use_color: bool) -> String {
    const RESET: &str = "\x1b[0m";
    const GREEN: &str = "\x1b[32m";

    let mut output = String::new();
    for diag in &result.diagnostics {
        if use_color {
            let _ = write!(output, "{}{}{}\n\n", diag.level.ansi(), diag, RESET);
        } else {
            let _ = write!(output, "{}\n\n", diag);
        }
    }

    let summary = format!("Summary: {}", result.summary());
    if use_color {
        let color = result.worst().map_or(GREEN, DiagnosticLevel::ansi);
        let _ = write!(output, "{}{}{}", color, summary, RESET);
    } else {
        output.push_str(&summary);
    }
    output
}
