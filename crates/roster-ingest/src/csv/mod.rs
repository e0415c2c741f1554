//! CSV parsing and header normalization.

mod header;
mod parser;

pub use header::{fold_diacritics, fold_key, normalize_header};
pub use parser::{ParseReport, parse_csv, parse_csv_with_report};
