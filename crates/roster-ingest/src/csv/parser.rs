//! Quote-aware CSV text parser.
//!
//! Published spreadsheet exports are small and loosely formed, so the parser
//! never fails: it reads RFC 4180 quoting where it finds it and does its best
//! with everything else.

use std::mem;

use tracing::warn;

use roster_model::RawRow;

/// Summary of a parse, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Rows kept in the output.
    pub rows: usize,
    /// Rows dropped because every cell was blank.
    pub blank_rows: usize,
    /// The input ended inside a quoted span.
    pub unterminated_quote: bool,
}

/// Parses CSV text into rows of raw cells.
///
/// See [`parse_csv_with_report`] for the rules.
pub fn parse_csv(text: &str) -> Vec<RawRow> {
    parse_csv_with_report(text).0
}

/// Parses CSV text and reports what was skipped.
///
/// - Commas outside quotes separate fields.
/// - A double quote toggles quoting; `""` inside quotes is one literal quote.
/// - `\n`, `\r\n` or `\r` outside quotes ends a row; inside quotes it is content.
/// - The last row is kept even without a trailing line break.
/// - Rows made only of blank cells are dropped.
/// - An unterminated quote is closed by the end of input.
pub fn parse_csv_with_report(text: &str) -> (Vec<RawRow>, ParseReport) {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut report = ParseReport::default();
    let mut rows = Vec::new();
    let mut row: RawRow = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                // Check for escaped quote ("")
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => row.push(mem::take(&mut field)),
            '\r' | '\n' if !in_quotes => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(mem::take(&mut field));
                push_row(&mut rows, mem::take(&mut row), &mut report);
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        report.unterminated_quote = true;
        warn!(
            rows = rows.len(),
            "CSV input ended inside a quoted field; closing it at end of input"
        );
    }
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        push_row(&mut rows, row, &mut report);
    }

    report.rows = rows.len();
    (rows, report)
}

fn push_row(rows: &mut Vec<RawRow>, row: RawRow, report: &mut ParseReport) {
    if row.iter().all(|cell| cell.trim().is_empty()) {
        report.blank_rows += 1;
        return;
    }
    rows.push(row);
}
