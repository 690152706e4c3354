//! CSV input
//!
//! The first record holds the column labels, every further record is a data
//! row. Cells may carry inline markup (`<br>`, `<b>`), quoted commas and line
//! breaks. Row lengths are not checked here; the resolver rejects a ragged
//! table before any span is computed.

use std::io::Read;

use tracing::debug;

use crate::utils::error::RenderResult;

/// Header labels plus raw data rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read a table from CSV text
pub fn read_table(text: &str) -> RenderResult<CsvTable> {
    read_table_from(text.as_bytes())
}

/// Read a table from any CSV source
pub fn read_table_from<R: Read>(source: R) -> RenderResult<CsvTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    let mut table = CsvTable::default();
    let mut records = reader.records();

    if let Some(first) = records.next() {
        table.header = first?.iter().map(|label| label.trim().to_string()).collect();
    }

    for record in records {
        let record = record?;
        table.rows.push(
            record
                .iter()
                .map(|field| field.trim_end_matches('\n').to_string())
                .collect(),
        );
    }

    debug!(
        columns = table.header.len(),
        rows = table.rows.len(),
        "read csv table"
    );

    Ok(table)
}
