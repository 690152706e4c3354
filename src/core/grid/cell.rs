//! Cell, span and grid types

/// Leading character that keeps a cell out of every merge
pub const ESCAPE_MARKER: char = '*';

/// Span bookkeeping for one dimension of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// False when the cell continues a span started further up (or left)
    pub starts_here: bool,
    /// Number of physical cells covered; only meaningful on the origin
    pub length: usize,
    /// Row (or column) index of the span origin, set on members only
    pub origin: Option<usize>,
}

impl Span {
    /// A cell that is not merged with anything
    pub fn single() -> Self {
        Span {
            starts_here: true,
            length: 1,
            origin: None,
        }
    }

    /// A member of a span whose origin sits at `origin`
    pub fn member_of(origin: usize) -> Self {
        Span {
            starts_here: false,
            length: 1,
            origin: Some(origin),
        }
    }

    /// Origin cell of a span covering more than one physical cell
    pub fn is_anchor(&self) -> bool {
        self.starts_here && self.length > 1
    }

    /// Absorbed into a span anchored elsewhere; never rendered on its own
    pub fn is_member(&self) -> bool {
        !self.starts_here
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::single()
    }
}

/// A resolved grid position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Text exactly as it appeared in the input
    pub raw: String,
    /// Display text (escape marker removed)
    pub text: String,
    /// Vertical merge state
    pub row_span: Span,
    /// Horizontal merge state
    pub col_span: Span,
}

impl Cell {
    /// Create an unmerged cell from raw input text
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Cell {
            text: raw.clone(),
            raw,
            row_span: Span::single(),
            col_span: Span::single(),
        }
    }

    /// Whether the raw text opts out of merging
    pub fn is_escaped(&self) -> bool {
        self.raw.starts_with(ESCAPE_MARKER)
    }

    /// Whether the renderer should skip this cell entirely
    pub fn is_hidden(&self) -> bool {
        self.row_span.is_member() || self.col_span.is_member()
    }
}

/// Row-major arena of resolved cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Create an empty grid with a fixed column count
    pub fn with_columns(cols: usize) -> Self {
        Grid {
            cells: Vec::new(),
            rows: 0,
            cols,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn col_count(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Cell at `(row, col)`
    ///
    /// # Panics
    /// Panics if the position is outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[self.index(row, col)]
    }

    /// Cell at `(row, col)`, if inside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// All cells of one row
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Number of vertical merge regions
    pub fn row_span_count(&self) -> usize {
        self.cells.iter().filter(|c| c.row_span.is_anchor()).count()
    }

    /// Number of horizontal merge regions
    pub fn col_span_count(&self) -> usize {
        self.cells.iter().filter(|c| c.col_span.is_anchor()).count()
    }

    pub(super) fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        let idx = self.index(row, col);
        &mut self.cells[idx]
    }

    /// Open a new row; cells are appended with `push_cell`
    pub(super) fn begin_row(&mut self) {
        self.rows += 1;
    }

    pub(super) fn push_cell(&mut self, cell: Cell) {
        debug_assert!(self.cells.len() < self.rows * self.cols);
        self.cells.push(cell);
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({}, {}) outside {}x{} grid",
            row,
            col,
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}
