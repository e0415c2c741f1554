//! CSV header normalization.
//!
//! Spreadsheet authors write headers like `"Nom "`, `"Téléphone / WhatsApp"`
//! or `"E-mail"`. Those are folded into canonical keys such as `nom`,
//! `telephone_whatsapp` and `e_mail` so fields can be looked up by name.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Strips diacritics by decomposing and dropping combining marks.
pub fn fold_diacritics(value: &str) -> String {
    value.nfd().filter(|ch| !is_combining_mark(*ch)).collect()
}

/// Lowercased, accent-free form used for comparisons and de-duplication.
pub fn fold_key(value: &str) -> String {
    fold_diacritics(value.trim()).to_lowercase()
}

/// Normalizes a raw header into a lowercase, underscore-separated key.
///
/// Every run of characters outside `[a-z0-9]` becomes a single separator.
/// Blank input yields an empty key.
pub fn normalize_header(raw: &str) -> String {
    let folded = fold_diacritics(&raw.trim().to_lowercase());
    let mut key = String::with_capacity(folded.len());
    let mut pending_separator = false;
    for ch in folded.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !key.is_empty() {
                key.push('_');
            }
            pending_separator = false;
            key.push(ch);
        } else {
            pending_separator = true;
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header_case_and_whitespace() {
        assert_eq!(normalize_header("Nom "), "nom");
        assert_eq!(normalize_header("NOM"), "nom");
        assert_eq!(normalize_header("nom"), "nom");
    }

    #[test]
    fn test_normalize_header_diacritics() {
        assert_eq!(normalize_header("Téléphone"), "telephone");
        assert_eq!(normalize_header("Compétences"), "competences");
        assert_eq!(normalize_header("Prénom & Nom"), "prenom_nom");
    }

    #[test]
    fn test_normalize_header_separators() {
        assert_eq!(normalize_header("Full Name"), "full_name");
        assert_eq!(normalize_header("  E-mail  "), "e_mail");
        assert_eq!(normalize_header("Photo (URL)"), "photo_url");
        assert_eq!(normalize_header("site--web__"), "site_web");
        assert_eq!(normalize_header("\u{feff}Nom"), "nom");
    }

    #[test]
    fn test_normalize_header_empty() {
        assert_eq!(normalize_header(""), "");
        assert_eq!(normalize_header("   "), "");
        assert_eq!(normalize_header("---"), "");
    }

    #[test]
    fn test_fold_key() {
        assert_eq!(fold_key(" Santé "), "sante");
        assert_eq!(fold_key("ÉDUCATION"), "education");
    }
}
