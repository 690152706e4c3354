//! Tests for HTML table rendering

use pretty_assertions::assert_eq;

use super::renderer::{render, CategoryTracker, TableRenderer};
use super::template::{DocumentTemplate, TABLE_OPEN_TAG};
use crate::core::grid::{resolve, Grid, ResolveOptions};
use crate::features::links::LinkRuleTable;
use crate::utils::error::RenderError;

fn grid(rows: &[&[&str]]) -> Grid {
    resolve(rows, &ResolveOptions::default()).unwrap()
}

fn fragment(grid: &Grid, header: &[&str], widths: &[&str]) -> String {
    let links = LinkRuleTable::new();
    TableRenderer::new(&links)
        .with_template(DocumentTemplate::fragment())
        .render(grid, header, widths)
        .unwrap()
}

#[test]
fn test_full_fragment_markup() {
    let g = grid(&[&["Cat1", "x"], &["Cat1", "y"], &["Cat2", "z"]]);
    let html = fragment(&g, &["Category", "Source"], &["30%", "70%"]);

    let expected = format!(
        "{}<tr><th width=\"30%\">Category</th><th width=\"70%\">Source</th></tr>\
<tr>\n\
<td class=\"leftcol\" rowspan=\"2\"><h2><p>Cat1</p></h2></td>\n\
<td>x</td>\n\
</tr>\n\
<tr>\n\
<!-- part of rowspan -->\n\
<td>y</td>\n\
</tr>\n\
<tr class=\"new-category-row\">\n\
<td class=\"leftcol\"><h2><p>Cat2</p></h2></td>\n\
<td>z</td>\n\
</tr>\n\
</table>\n\n",
        TABLE_OPEN_TAG
    );
    assert_eq!(html, expected);
}

#[test]
fn test_escaped_category_is_not_a_boundary() {
    let g = grid(&[&["Cat1", "a"], &["*Cat1", "b"]]);
    let html = fragment(&g, &["C", "S"], &["50%", "50%"]);

    assert!(!html.contains("new-category-row"));
    assert!(!html.contains("rowspan"));
    assert_eq!(html.matches("<h2><p>Cat1</p></h2>").count(), 2);
}

#[test]
fn test_colspan_markup() {
    let g = grid(&[&["Genes", "NCBI", "N/A", "N/A"]]);
    let html = fragment(&g, &["A", "B", "C", "D"], &["25%", "25%", "25%", "25%"]);
    assert!(html.contains("<td colspan=\"2\">N/A</td>\n<!-- part of colspan -->\n"));
}

#[test]
fn test_block_span_attributes() {
    let g = grid(&[&["A", "B", "N/A", "N/A"], &["A", "C", "N/A", "N/A"]]);
    let html = fragment(&g, &["1", "2", "3", "4"], &["25%", "25%", "25%", "25%"]);
    // Origin carries both spans; every other cell of the block is hidden
    assert!(html.contains("<td rowspan=\"2\" colspan=\"2\">N/A</td>"));
    assert_eq!(html.matches("<!-- part of rowspan -->").count(), 3);
    assert_eq!(html.matches("<!-- part of colspan -->").count(), 1);
}

#[test]
fn test_header_width_mismatch() {
    let g = grid(&[&["x", "y", "z"]]);
    let links = LinkRuleTable::new();
    let err = render(&g, &["A", "B", "C"], &["50%", "50%"], &links).unwrap_err();
    assert_eq!(err, RenderError::header_width(3, 2));
}

#[test]
fn test_grid_wider_than_header() {
    let g = grid(&[&["x", "y", "z"]]);
    let links = LinkRuleTable::new();
    let err = render(&g, &["A", "B"], &["50%", "50%"], &links).unwrap_err();
    assert!(matches!(err, RenderError::InvalidGridShape { .. }));
}

#[test]
fn test_empty_grid_renders_header_only() {
    let raw: &[&[&str]] = &[];
    let g = resolve(raw, &ResolveOptions::default()).unwrap();
    let html = fragment(&g, &["A"], &["100%"]);
    assert!(html.ends_with("<tr><th width=\"100%\">A</th></tr></table>\n\n"));
}

#[test]
fn test_links_applied_to_visible_cells() {
    let g = grid(&[&["Ontologies", "GO"], &["Ontologies", "SO"]]);
    let links = LinkRuleTable::new()
        .with_exact("GO", "https://go.example")
        .with_exact("Ontologies", "https://never.example");
    let html = TableRenderer::new(&links)
        .with_template(DocumentTemplate::fragment())
        .render(&g, &["A", "B"], &["50%", "50%"])
        .unwrap();
    assert!(html.contains(r#"<td><a href="https://go.example" target="_blank">GO</a></td>"#));
    // Category text is annotated too, inside the heading wrapper
    assert!(html.contains(
        r#"<h2><p><a href="https://never.example" target="_blank">Ontologies</a></p></h2>"#
    ));
    assert_eq!(html.matches("https://never.example").count(), 1);
}

#[test]
fn test_standalone_document() {
    let g = grid(&[&["A"]]);
    let links = LinkRuleTable::new();
    let html = render(&g, &["H"], &["100%"], &links).unwrap();
    assert!(html.starts_with("<html><head>\n<title>Data Categories Table</title>\n<style>\nbody {"));
    assert!(html.contains("</style></head>\n<body>\n\n<table "));
    assert!(html.ends_with("</table>\n\n</body>\n</html>"));
}

#[test]
fn test_stats() {
    let g = grid(&[&["A", "1"], &["A", "2"], &["B", "2"], &["C", "3"]]);
    let links = LinkRuleTable::new();
    let out = TableRenderer::new(&links)
        .render_with_stats(&g, &["X", "Y"], &["50%", "50%"])
        .unwrap();
    assert_eq!(out.stats.rows, 4);
    assert_eq!(out.stats.category_boundaries, 2);
    assert_eq!(out.stats.hidden_cells, 2);
    assert_eq!(out.stats.visible_cells, 6);
}

#[test]
fn test_category_tracker() {
    let mut tracker = CategoryTracker::new();
    assert!(!tracker.observe("Genes"));
    assert!(!tracker.observe("Genes"));
    assert!(tracker.observe("Proteins"));
    assert!(!tracker.observe("Proteins"));
    assert!(tracker.observe("Genes"));
}
