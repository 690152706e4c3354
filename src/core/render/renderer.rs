//! Sequential HTML table renderer

use std::fmt::Write;

use tracing::debug;

use super::template::{DocumentTemplate, TABLE_OPEN_TAG};
use crate::core::grid::{Cell, Grid};
use crate::features::links::LinkRuleTable;
use crate::utils::error::{RenderError, RenderResult};

/// Row class marking the first row of a new category
const NEW_CATEGORY_CLASS: &str = "new-category-row";
/// Cell class of the category column
const LEFT_COLUMN_CLASS: &str = "leftcol";

/// Rolling "previous category" state for one render pass
#[derive(Debug, Clone, Default)]
pub struct CategoryTracker {
    previous: Option<String>,
}

impl CategoryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the category of the next row; true when it differs from the row before.
    /// The first row seeds the state and is never a boundary.
    pub fn observe(&mut self, category: &str) -> bool {
        match self.previous {
            Some(ref prev) if prev == category => false,
            Some(_) => {
                self.previous = Some(category.to_string());
                true
            }
            None => {
                self.previous = Some(category.to_string());
                false
            }
        }
    }
}

/// Counters gathered while rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub rows: usize,
    pub category_boundaries: usize,
    /// Cells that produced a `<td>`
    pub visible_cells: usize,
    /// Span members replaced by a placeholder comment
    pub hidden_cells: usize,
}

/// Rendered document plus counters
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub html: String,
    pub stats: RenderStats,
}

/// Renders a resolved grid into an HTML document
pub struct TableRenderer<'a> {
    links: &'a LinkRuleTable,
    template: DocumentTemplate,
}

impl<'a> TableRenderer<'a> {
    /// Create a renderer producing a standalone page
    pub fn new(links: &'a LinkRuleTable) -> Self {
        TableRenderer {
            links,
            template: DocumentTemplate::default(),
        }
    }

    /// Replace the document boilerplate
    pub fn with_template(mut self, template: DocumentTemplate) -> Self {
        self.template = template;
        self
    }

    /// Render the complete document
    pub fn render<H, W>(&self, grid: &Grid, header: &[H], widths: &[W]) -> RenderResult<String>
    where
        H: AsRef<str>,
        W: AsRef<str>,
    {
        self.render_with_stats(grid, header, widths).map(|out| out.html)
    }

    /// Render the complete document and report what was emitted
    pub fn render_with_stats<H, W>(
        &self,
        grid: &Grid,
        header: &[H],
        widths: &[W],
    ) -> RenderResult<RenderOutput>
    where
        H: AsRef<str>,
        W: AsRef<str>,
    {
        if header.len() != widths.len() {
            return Err(RenderError::header_width(header.len(), widths.len()));
        }
        if !grid.is_empty() && grid.col_count() != header.len() {
            return Err(RenderError::grid_shape(0, header.len(), grid.col_count()));
        }

        let mut output = String::new();
        let mut stats = RenderStats::default();

        output.push_str(&self.template.top);
        output.push_str(TABLE_OPEN_TAG);

        output.push_str("<tr>");
        for (label, width) in header.iter().zip(widths) {
            let _ = write!(
                output,
                "<th width=\"{}\">{}</th>",
                width.as_ref(),
                label.as_ref()
            );
        }
        output.push_str("</tr>");

        let mut categories = CategoryTracker::new();
        for row in grid.rows() {
            let category = row.first().map(|c| c.text.as_str()).unwrap_or("");
            if categories.observe(category) {
                stats.category_boundaries += 1;
                let _ = writeln!(output, "<tr class=\"{}\">", NEW_CATEGORY_CLASS);
            } else {
                output.push_str("<tr>\n");
            }

            for (col_idx, cell) in row.iter().enumerate() {
                if cell.row_span.is_member() {
                    output.push_str("<!-- part of rowspan -->");
                    stats.hidden_cells += 1;
                } else if cell.col_span.is_member() {
                    output.push_str("<!-- part of colspan -->");
                    stats.hidden_cells += 1;
                } else {
                    self.write_cell(&mut output, cell, col_idx);
                    stats.visible_cells += 1;
                }
                output.push('\n');
            }

            output.push_str("</tr>\n");
            stats.rows += 1;
        }

        output.push_str("</table>\n\n");
        output.push_str(&self.template.bottom);

        debug!(
            rows = stats.rows,
            boundaries = stats.category_boundaries,
            visible = stats.visible_cells,
            hidden = stats.hidden_cells,
            "rendered table"
        );

        Ok(RenderOutput {
            html: output,
            stats,
        })
    }

    fn write_cell(&self, output: &mut String, cell: &Cell, col_idx: usize) {
        output.push_str("<td");
        if col_idx == 0 {
            let _ = write!(output, " class=\"{}\"", LEFT_COLUMN_CLASS);
        }
        if cell.row_span.length > 1 {
            let _ = write!(output, " rowspan=\"{}\"", cell.row_span.length);
        }
        if cell.col_span.length > 1 {
            let _ = write!(output, " colspan=\"{}\"", cell.col_span.length);
        }
        output.push('>');

        let text = self.links.annotate(&cell.text);
        if col_idx == 0 {
            let _ = write!(output, "<h2><p>{}</p></h2>", text);
        } else {
            output.push_str(&text);
        }

        output.push_str("</td>");
    }
}

/// Render `grid` as a standalone page
pub fn render<H, W>(
    grid: &Grid,
    header: &[H],
    widths: &[W],
    links: &LinkRuleTable,
) -> RenderResult<String>
where
    H: AsRef<str>,
    W: AsRef<str>,
{
    TableRenderer::new(links).render(grid, header, widths)
}
