//! Multi-value splitting and badge tags.

use std::collections::HashSet;

use roster_ingest::fold_key;
use roster_model::MAX_TAGS;

/// Maximum number of tokens kept from one multi-value cell.
pub const MAX_TOKENS: usize = 8;

const TOKEN_SEPARATORS: [char; 4] = [',', ';', '/', '|'];

/// Splits a cell such as `"Santé; Éducation / Droits"` into tokens.
pub fn split_tokens(raw: &str) -> Vec<String> {
    raw.split(TOKEN_SEPARATORS)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .take(MAX_TOKENS)
        .map(str::to_string)
        .collect()
}

/// Collects labels in encounter order, dropping repeats and blanks.
///
/// Repeats are detected ignoring case and accents; the first spelling is
/// kept. At most [`MAX_TAGS`] labels are returned.
pub fn build_tags<'a, I>(labels: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut tags = Vec::new();
    for label in labels {
        if tags.len() == MAX_TAGS {
            break;
        }
        let label = label.trim();
        if label.is_empty() {
            continue;
        }
        if seen.insert(fold_key(label)) {
            tags.push(label.to_string());
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_every_separator() {
        assert_eq!(
            split_tokens("Santé, Éducation; Droits / Genre | Climat"),
            vec!["Santé", "Éducation", "Droits", "Genre", "Climat"]
        );
    }

    #[test]
    fn test_split_drops_empties() {
        assert_eq!(split_tokens(" ,; a ||  b ,"), vec!["a", "b"]);
        assert!(split_tokens("").is_empty());
    }

    #[test]
    fn test_split_caps_tokens() {
        let tokens = split_tokens("1,2,3,4,5,6,7,8,9,10");
        assert_eq!(tokens.len(), MAX_TOKENS);
        assert_eq!(tokens.last().map(String::as_str), Some("8"));
    }

    #[test]
    fn test_tags_dedupe_keeps_first_spelling() {
        let tags = build_tags(["Santé", "Abidjan", "sante", "SANTÉ", "Abidjan"]);
        assert_eq!(tags, vec!["Santé", "Abidjan"]);
    }

    #[test]
    fn test_tags_capped() {
        let labels: Vec<String> = (0..20).map(|i| format!("tag{i}")).collect();
        let tags = build_tags(labels.iter().map(String::as_str));
        assert_eq!(tags.len(), MAX_TAGS);
        assert_eq!(tags[0], "tag0");
        assert_eq!(tags[9], "tag9");
    }
}
