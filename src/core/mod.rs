//! Core rendering modules
//!
//! This module contains the two stages of a render plus their configuration:
//! - `grid`: span resolution over the raw cell grid
//! - `render`: HTML emission of a resolved grid
//! - `config`: dataset name, version and header widths

pub mod config;
pub mod grid;
pub mod render;

// Re-export main types and functions
pub use config::{width_profile, DatasetConfig, MineVersion, WidthSource};
pub use grid::{resolve, Cell, ColumnMerge, Grid, ResolveOptions, Span, SpanResolver};
pub use render::{render, DocumentTemplate, RenderOutput, RenderStats, TableRenderer};
