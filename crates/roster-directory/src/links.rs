//! URL normalization and contact hrefs.

use roster_model::ContactLinks;

/// Greeting prefilled in WhatsApp conversations started from a card.
pub const DEFAULT_WHATSAPP_GREETING: &str =
    "Bonjour, je vous contacte depuis l'annuaire des membres de FEJEB ONG.";

/// Makes URL-like values absolute.
///
/// Schemed `http(s)://` values pass through. Protocol-relative `//host` and
/// bare domains such as `facebook.com/fejeb` get `https://`. Anything else
/// (handles, free text) is returned unchanged.
pub fn normalize_url(raw: &str) -> String {
    let value = raw.trim();
    let lower = value.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return value.to_string();
    }
    if let Some(rest) = value.strip_prefix("//")
        && looks_like_domain(rest)
    {
        return format!("https://{rest}");
    }
    if looks_like_domain(value) {
        return format!("https://{value}");
    }
    value.to_string()
}

fn looks_like_domain(value: &str) -> bool {
    if value.is_empty()
        || value.chars().any(char::is_whitespace)
        || value.contains('@')
        || value.contains("://")
    {
        return false;
    }
    let host = value.split(['/', '?', '#']).next().unwrap_or_default();
    let host = host.split(':').next().unwrap_or_default();
    if !host
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '.' || ch == '-')
    {
        return false;
    }
    match host.rsplit_once('.') {
        Some((name, tld)) => {
            !name.is_empty()
                && !name.ends_with('.')
                && tld.len() >= 2
                && tld.chars().all(|ch| ch.is_ascii_alphabetic())
        }
        None => false,
    }
}

/// Digits plus an optional leading `+`, as dialed from a `tel:` link.
pub fn dialable_number(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut number = String::with_capacity(trimmed.len());
    if trimmed.starts_with('+') {
        number.push('+');
    }
    number.extend(trimmed.chars().filter(char::is_ascii_digit));
    number
}

pub fn tel_href(phone: &str) -> Option<String> {
    let number = dialable_number(phone);
    number
        .chars()
        .any(|ch| ch.is_ascii_digit())
        .then(|| format!("tel:{number}"))
}

/// `wa.me` deep link; the number keeps digits only.
pub fn whatsapp_href(number: &str, greeting: &str) -> Option<String> {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    if greeting.trim().is_empty() {
        return Some(format!("https://wa.me/{digits}"));
    }
    Some(format!(
        "https://wa.me/{digits}?text={}",
        urlencoding::encode(greeting)
    ))
}

pub fn mailto_href(email: &str) -> Option<String> {
    let email = email.trim();
    (!email.is_empty()).then(|| format!("mailto:{email}"))
}

/// Builds every contact href available for a member.
pub fn contact_links(
    email: Option<&str>,
    phone: Option<&str>,
    whatsapp: Option<&str>,
    greeting: &str,
) -> ContactLinks {
    ContactLinks {
        email: email.and_then(mailto_href),
        phone: phone.and_then(tel_href),
        whatsapp: whatsapp.and_then(|number| whatsapp_href(number, greeting)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schemed_urls_pass_through() {
        assert_eq!(
            normalize_url("https://fejeb.org/equipe"),
            "https://fejeb.org/equipe"
        );
        assert_eq!(normalize_url("HTTP://Example.org"), "HTTP://Example.org");
    }

    #[test]
    fn test_bare_domains_get_https() {
        assert_eq!(
            normalize_url("facebook.com/fejeb"),
            "https://facebook.com/fejeb"
        );
        assert_eq!(normalize_url(" www.fejeb.org "), "https://www.fejeb.org");
        assert_eq!(
            normalize_url("//cdn.example.org/a.jpg"),
            "https://cdn.example.org/a.jpg"
        );
        assert_eq!(
            normalize_url("linkedin.com/in/awa-kone?lang=fr"),
            "https://linkedin.com/in/awa-kone?lang=fr"
        );
    }

    #[test]
    fn test_free_text_unchanged() {
        assert_eq!(normalize_url("@fejeb_ong"), "@fejeb_ong");
        assert_eq!(normalize_url("voir la page"), "voir la page");
        assert_eq!(normalize_url("fejeb"), "fejeb");
        assert_eq!(normalize_url("contact@fejeb.org"), "contact@fejeb.org");
        assert_eq!(normalize_url("v1.2"), "v1.2");
    }

    #[test]
    fn test_tel_href_keeps_leading_plus() {
        assert_eq!(
            tel_href("+225 07 12 34 56").as_deref(),
            Some("tel:+22507123456")
        );
        assert_eq!(tel_href("(07) 12-34").as_deref(), Some("tel:071234"));
        assert_eq!(tel_href("n/a"), None);
        assert_eq!(tel_href("+"), None);
    }

    #[test]
    fn test_whatsapp_href_digits_only() {
        let href = whatsapp_href("+225 07 12 34 56", "Bonjour !").unwrap();
        assert_eq!(href, "https://wa.me/22507123456?text=Bonjour%20%21");
        assert_eq!(
            whatsapp_href("22507123456", "").as_deref(),
            Some("https://wa.me/22507123456")
        );
        assert_eq!(whatsapp_href("none", "hi"), None);
    }

    #[test]
    fn test_default_greeting_is_percent_encoded() {
        let href = whatsapp_href("225", DEFAULT_WHATSAPP_GREETING).unwrap();
        let query = href.split_once("?text=").unwrap().1;
        assert!(!query.contains(' '));
        assert!(!query.contains('\''));
    }

    #[test]
    fn test_mailto_unmodified() {
        assert_eq!(
            mailto_href("Awa.Kone@Fejeb.org").as_deref(),
            Some("mailto:Awa.Kone@Fejeb.org")
        );
        assert_eq!(mailto_href(" "), None);
    }

    #[test]
    fn test_contact_links() {
        let links = contact_links(Some("a@b.org"), None, Some("+225 01"), "");
        assert_eq!(links.email.as_deref(), Some("mailto:a@b.org"));
        assert!(links.phone.is_none());
        assert_eq!(links.whatsapp.as_deref(), Some("https://wa.me/22501"));
    }
}
