//! Member sheet ingestion.
//!
//! This crate turns the CSV export of the member spreadsheet into generic
//! [`Record`](roster_model::Record) values.
//!
//! # Features
//!
//! - **CSV Parsing**: quote-aware, never fails, drops blank rows
//! - **Header Normalization**: `"Téléphone / WhatsApp"` → `telephone_whatsapp`
//! - **Record Mapping**: positional zip of the header row against data rows
//! - **Field Resolution**: first non-blank value among candidate keys
//! - **Sources**: HTTP export, local file, or inline text
//!
//! # Example
//!
//! ```
//! use roster_ingest::{map_records, parse_csv, resolve};
//!
//! let rows = parse_csv("Nom,Role\n\"Doe, Jane\",Coordinator\n");
//! let table = map_records(&rows);
//! assert_eq!(resolve(&table.records[0], &["nom", "name"]), "Doe, Jane");
//! ```

mod csv;
mod error;
mod records;
mod resolve;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Parsing ===
pub use csv::{
    ParseReport, fold_diacritics, fold_key, normalize_header, parse_csv, parse_csv_with_report,
};

// === Record Mapping ===
pub use records::{RecordTable, map_records};

// === Field Resolution ===
pub use resolve::{resolve, resolve_opt};

// === Sources ===
pub use source::{
    CsvSource, DEFAULT_SOURCE_URL, DEFAULT_TIMEOUT, FileSource, HttpSource, TextSource,
};
