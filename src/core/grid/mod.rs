//! Span resolution for flat CSV grids
//!
//! Turns a rectangular grid of raw cell strings into resolved cells that know
//! whether they anchor or belong to a row span and/or a column span.
//!
//! # Architecture
//!
//! ```text
//! raw rows -> shape check -> single row-major pass (look-back only) -> Grid
//! ```
//!
//! Span origins are stored as plain indices into the grid, so a member cell
//! always points at the top-left-most cell of its run.
//!
//! # Example
//!
//! ```
//! use srctable::core::grid::{resolve, ResolveOptions};
//!
//! let raw = vec![
//!     vec!["Genes".to_string(), "NCBI".to_string()],
//!     vec!["Genes".to_string(), "Ensembl".to_string()],
//! ];
//! let grid = resolve(&raw, &ResolveOptions::default()).unwrap();
//! assert_eq!(grid.cell(0, 0).row_span.length, 2);
//! assert!(grid.cell(1, 0).row_span.is_member());
//! ```

mod cell;
mod resolver;


// Re-export public API
pub use cell::{Cell, Grid, Span, ESCAPE_MARKER};
pub use resolver::{resolve, ColumnMerge, ResolveOptions, SpanResolver};
