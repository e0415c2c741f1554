//! Looking up a field under any of several header spellings.

use roster_model::Record;

/// Returns the first non-blank value among `candidates`, trimmed.
///
/// Candidates are tried in priority order. Returns `""` when every candidate
/// is absent or blank.
pub fn resolve<'a>(record: &'a Record, candidates: &[&str]) -> &'a str {
    candidates
        .iter()
        .filter_map(|key| record.get(key))
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or("")
}

/// Like [`resolve`], with `None` in place of the empty string.
pub fn resolve_opt(record: &Record, candidates: &[&str]) -> Option<String> {
    let value = resolve(record, candidates);
    (!value.is_empty()).then(|| value.to_string())
}
