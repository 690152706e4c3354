//! # srctable
//!
//! Renders a data sources table kept as CSV into a standalone HTML page.
//!
//! ## Features
//!
//! - **Automatic merging**: vertically (and optionally horizontally) adjacent
//!   cells with identical text become one `rowspan`/`colspan` cell
//! - **Escape marker**: a leading `*` keeps a cell out of every merge and is
//!   removed from the output
//! - **Category boundaries**: a row whose first column differs from the row
//!   above is marked with `class="new-category-row"`
//! - **Link rules**: citation ids, known source names and download URLs are
//!   rewritten into hyperlinks
//!
//! ## Usage Example
//!
//! ```rust
//! use srctable::{render_csv, LinkRuleTable, ResolveOptions};
//!
//! let csv = "Category,Source\nGenes,NCBI\nGenes,Ensembl\nProteins,UniProt\n";
//! let html = render_csv(
//!     csv,
//!     &["30%", "70%"],
//!     &LinkRuleTable::new(),
//!     &ResolveOptions::default(),
//! )
//! .unwrap();
//!
//! assert!(html.contains(r#"<td class="leftcol" rowspan="2"><h2><p>Genes</p></h2></td>"#));
//! assert!(html.contains(r#"<tr class="new-category-row">"#));
//! ```

/// Core rendering modules
pub mod core;

/// Data layer - static tables
pub mod data;

/// Feature modules - input and link annotation
pub mod features;

/// Utility modules
pub mod utils;

// Re-export core types and functions
pub use self::core::{
    render, resolve, width_profile, Cell, ColumnMerge, DatasetConfig, DocumentTemplate, Grid,
    MineVersion, RenderOutput, RenderStats, ResolveOptions, Span, SpanResolver, TableRenderer,
};

// Re-export feature modules
pub use features::csv_input;
pub use features::links;
pub use features::{annotate, read_table, CsvTable, LinkRuleTable};

// Re-export utilities
pub use utils::diagnostics;
pub use utils::error::{RenderError, RenderResult};

/// Resolve and render an already-read table.
///
/// Every data row must have as many cells as the header.
pub fn render_table<W: AsRef<str>>(
    table: &CsvTable,
    widths: &[W],
    links: &LinkRuleTable,
    options: &ResolveOptions,
) -> RenderResult<RenderOutput> {
    render_table_with_template(table, widths, links, options, DocumentTemplate::default())
}

/// Like [`render_table`], with custom document boilerplate
pub fn render_table_with_template<W: AsRef<str>>(
    table: &CsvTable,
    widths: &[W],
    links: &LinkRuleTable,
    options: &ResolveOptions,
    template: DocumentTemplate,
) -> RenderResult<RenderOutput> {
    let grid = SpanResolver::new(*options)
        .with_columns(table.column_count())
        .resolve(&table.rows)?;

    TableRenderer::new(links)
        .with_template(template)
        .render_with_stats(&grid, &table.header, widths)
}

/// Read CSV text and render it as a standalone page
pub fn render_csv<W: AsRef<str>>(
    csv: &str,
    widths: &[W],
    links: &LinkRuleTable,
    options: &ResolveOptions,
) -> RenderResult<String> {
    let table = read_table(csv)?;
    render_table(&table, widths, links, options).map(|out| out.html)
}

/// Render the table of a configured dataset with its width profile
pub fn render_dataset(
    csv: &str,
    config: &DatasetConfig,
    links: &LinkRuleTable,
    options: &ResolveOptions,
) -> RenderResult<String> {
    render_csv(csv, &config.widths(), links, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "Category,Source,Notes\n\
                       Genes,NCBI,PubMed: 12345\n\
                       Genes,Ensembl,N/A\n\
                       Proteins,UniProt,N/A\n";

    #[test]
    fn test_render_csv_basic() {
        let html = render_csv(
            CSV,
            &["20%", "40%", "40%"],
            &LinkRuleTable::builtin(),
            &ResolveOptions::default(),
        )
        .unwrap();
        assert!(html.starts_with("<html><head>"));
        assert!(html.ends_with("</body>\n</html>"));
        assert!(html.contains(r#"<th width="20%">Category</th>"#));
        assert!(html.contains("https://www.ncbi.nlm.nih.gov/pubmed/12345"));
        assert!(html.contains(r#"<td rowspan="2">N/A</td>"#));
        assert_eq!(html.matches("<!-- part of rowspan -->").count(), 2);
    }

    #[test]
    fn test_render_table_stats() {
        let table = read_table(CSV).unwrap();
        let out = render_table(
            &table,
            &["20%", "40%", "40%"],
            &LinkRuleTable::new(),
            &ResolveOptions::default(),
        )
        .unwrap();
        assert_eq!(out.stats.rows, 3);
        assert_eq!(out.stats.category_boundaries, 1);
        assert_eq!(out.stats.hidden_cells, 2);
        assert_eq!(out.stats.visible_cells, 7);
    }

    #[test]
    fn test_render_fragment() {
        let table = read_table(CSV).unwrap();
        let out = render_table_with_template(
            &table,
            &["20%", "40%", "40%"],
            &LinkRuleTable::new(),
            &ResolveOptions::default(),
            DocumentTemplate::fragment(),
        )
        .unwrap();
        assert!(out.html.starts_with("<table "));
        assert!(out.html.ends_with("</table>\n\n"));
    }

    #[test]
    fn test_ragged_csv_rejected() {
        let err = render_csv(
            "A,B\nx,y\nz\n",
            &["50%", "50%"],
            &LinkRuleTable::new(),
            &ResolveOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err, RenderError::grid_shape(1, 2, 1));
    }

    #[test]
    fn test_render_dataset() {
        let config = DatasetConfig::new("AquaMine", "2.0").unwrap();
        let csv = "A,B,C,D,E,F\n1,2,3,4,5,6\n";
        let html = render_dataset(
            csv,
            &config,
            &LinkRuleTable::new(),
            &ResolveOptions::default(),
        )
        .unwrap();
        assert!(html.contains(r#"<th width="22%">C</th>"#));
    }
}
