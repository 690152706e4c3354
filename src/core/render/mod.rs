//! HTML rendering of resolved grids
//!
//! A single sequential pass over a [`Grid`](crate::core::grid::Grid) that
//! emits the header row, marks category boundaries, skips span members and
//! runs every visible cell through link annotation.
//!
//! # Architecture
//!
//! ```text
//! Grid + header + widths + LinkRuleTable -> TableRenderer -> HTML document
//! ```

mod renderer;
mod template;

#[cfg(test)]
mod tests;

// Re-export public API
pub use renderer::{render, CategoryTracker, RenderOutput, RenderStats, TableRenderer};
pub use template::{DocumentTemplate, DEFAULT_STYLE, TABLE_OPEN_TAG};
