//! Pairing parsed rows with normalized headers.

use roster_model::{RawRow, Record};

use crate::csv::normalize_header;

/// A parsed sheet: the header row and one record per data row.
#[derive(Debug, Clone, Default)]
pub struct RecordTable {
    /// Headers as written in the sheet.
    pub raw_headers: Vec<String>,
    /// Normalized keys, positionally aligned with `raw_headers`.
    pub headers: Vec<String>,
    /// Data rows in sheet order.
    pub records: Vec<Record>,
}

impl RecordTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Zips the header row (row 0) against every later row.
///
/// Missing trailing cells map to `""` and cells beyond the header count are
/// ignored. Columns whose header normalizes to an empty key cannot be looked
/// up and are left out of the records.
pub fn map_records(rows: &[RawRow]) -> RecordTable {
    let Some((header_row, data_rows)) = rows.split_first() else {
        return RecordTable::default();
    };
    let headers: Vec<String> = header_row.iter().map(|h| normalize_header(h)).collect();
    let records = data_rows
        .iter()
        .map(|row| zip_row(&headers, row))
        .collect();
    RecordTable {
        raw_headers: header_row.iter().map(|h| h.trim().to_string()).collect(),
        headers,
        records,
    }
}

fn zip_row(headers: &[String], row: &RawRow) -> Record {
    let mut record = Record::new();
    for (idx, key) in headers.iter().enumerate() {
        let value = row.get(idx).map(String::as_str).unwrap_or("");
        record.insert(key.as_str(), value);
    }
    record
}
