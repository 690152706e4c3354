//! Single-pass span resolver

use tracing::{debug, trace};

use super::cell::{Cell, Grid, Span, ESCAPE_MARKER};
use crate::utils::error::{RenderError, RenderResult};

/// Which columns may continue a horizontal merge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnMerge {
    /// Only vertical merging
    Off,
    /// Columns at or after this index may continue a span started to their
    /// left. Column 0 never can.
    From(usize),
}

impl ColumnMerge {
    /// Column 0 and 1 never continue a span, so the category column stays whole
    pub const SKIP_CATEGORY: ColumnMerge = ColumnMerge::From(2);
    /// Every column after the first may continue a span
    pub const ALL: ColumnMerge = ColumnMerge::From(1);

    /// Whether column `col` may join the span of column `col - 1`
    pub fn allows(&self, col: usize) -> bool {
        match *self {
            ColumnMerge::Off => false,
            ColumnMerge::From(min) => col > 0 && col >= min,
        }
    }
}

impl Default for ColumnMerge {
    fn default() -> Self {
        ColumnMerge::SKIP_CATEGORY
    }
}

/// Resolver behaviour switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Horizontal merge capability
    pub column_merge: ColumnMerge,
    /// Whether runs of empty cells collapse like any other equal text
    pub merge_blank_cells: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            column_merge: ColumnMerge::default(),
            merge_blank_cells: true,
        }
    }
}

impl ResolveOptions {
    /// Vertical merging only
    pub fn rows_only() -> Self {
        Self {
            column_merge: ColumnMerge::Off,
            ..Default::default()
        }
    }
}

/// Computes row and column spans for a raw grid
#[derive(Debug, Clone, Default)]
pub struct SpanResolver {
    options: ResolveOptions,
    /// Required column count; the first row decides when unset
    columns: Option<usize>,
}

impl SpanResolver {
    pub fn new(options: ResolveOptions) -> Self {
        Self {
            options,
            columns: None,
        }
    }

    /// Require every row to have exactly `columns` cells (the header width)
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = Some(columns);
        self
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// Resolve a rectangular grid of raw cell text.
    ///
    /// The shape is checked for every row before any span is computed, so a
    /// malformed grid never yields partial output.
    pub fn resolve<R, S>(&self, raw: &[R]) -> RenderResult<Grid>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let expected = self
            .columns
            .or_else(|| raw.first().map(|r| r.as_ref().len()))
            .unwrap_or(0);

        for (row_idx, row) in raw.iter().enumerate() {
            let found = row.as_ref().len();
            if found != expected {
                return Err(RenderError::grid_shape(row_idx, expected, found));
            }
        }

        let mut grid = Grid::with_columns(expected);

        for (row_idx, row) in raw.iter().enumerate() {
            grid.begin_row();
            for (col_idx, text) in row.as_ref().iter().enumerate() {
                let cell = self.resolve_cell(&mut grid, row_idx, col_idx, text.as_ref());
                grid.push_cell(cell);
            }
        }

        debug!(
            rows = grid.row_count(),
            cols = grid.col_count(),
            row_spans = grid.row_span_count(),
            col_spans = grid.col_span_count(),
            "resolved grid"
        );

        Ok(grid)
    }

    /// Build the cell at `(row, col)`, extending the span origins it joins.
    /// Only the preceding cell in the row and the cell above are consulted.
    fn resolve_cell(&self, grid: &mut Grid, row: usize, col: usize, raw: &str) -> Cell {
        let mut cell = Cell::new(raw);
        let mergeable = !cell.is_escaped() && (self.options.merge_blank_cells || !raw.is_empty());

        if mergeable && self.options.column_merge.allows(col) {
            let left = grid.cell(row, col - 1);
            if left.raw == raw {
                let origin = left.col_span.origin.unwrap_or(col - 1);
                grid.cell_mut(row, origin).col_span.length += 1;
                cell.col_span = Span::member_of(origin);
                trace!(row, col, origin, "column span continues");
            }
        }

        if mergeable && row > 0 {
            let above = grid.cell(row - 1, col);
            if above.raw == raw {
                let origin = above.row_span.origin.unwrap_or(row - 1);
                grid.cell_mut(origin, col).row_span.length += 1;
                cell.row_span = Span::member_of(origin);
                trace!(row, col, origin, "row span continues");
            }
        }

        if cell.is_escaped() {
            cell.text = raw[ESCAPE_MARKER.len_utf8()..].to_string();
        }

        cell
    }
}

/// Resolve `raw` with the column count taken from its first row
pub fn resolve<R, S>(raw: &[R], options: &ResolveOptions) -> RenderResult<Grid>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    SpanResolver::new(*options).resolve(raw)
}
