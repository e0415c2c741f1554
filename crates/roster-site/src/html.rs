//! HTML fragments for the directory grid, the modal, and the KPI block.

use std::fmt::Write;

use crate::view::{CardView, LinkView, ModalView};

/// Escapes text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Schemes allowed in `href` and `src` attributes.
const SAFE_SCHEMES: [&str; 4] = ["http", "https", "mailto", "tel"];

/// Returns `url` when it is safe to put in a link or image attribute.
///
/// Values with an explicit scheme must use one of [`SAFE_SCHEMES`];
/// scheme-less and relative values pass. Control characters are refused
/// since browsers strip them before reading the scheme.
pub fn safe_url(url: &str) -> Option<&str> {
    let url = url.trim();
    if url.is_empty() || url.chars().any(char::is_control) {
        return None;
    }
    let scheme_end = url.find(|c: char| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(idx) if url[idx..].starts_with(':') => {
            let scheme = &url[..idx];
            let allowed = SAFE_SCHEMES
                .iter()
                .any(|safe| safe.eq_ignore_ascii_case(scheme));
            allowed.then_some(url)
        }
        _ => Some(url),
    }
}

fn avatar(out: &mut String, card: &CardView) {
    match card.photo_url.as_deref().and_then(safe_url) {
        Some(url) => {
            let _ = write!(
                out,
                r#"<img class="member-photo" src="{}" alt="{}" loading="lazy">"#,
                escape(url),
                escape(&card.name)
            );
        }
        None => {
            let _ = write!(
                out,
                r#"<span class="member-initials" aria-hidden="true">{}</span>"#,
                escape(&card.initials)
            );
        }
    }
}

fn tag_list(out: &mut String, tags: &[String]) {
    if tags.is_empty() {
        return;
    }
    out.push_str(r#"<ul class="member-tags">"#);
    for tag in tags {
        let _ = write!(out, "<li>{}</li>", escape(tag));
    }
    out.push_str("</ul>");
}

/// Links with an unsafe target are listed as plain labels.
fn link_list(out: &mut String, class: &str, links: &[LinkView]) {
    if links.is_empty() {
        return;
    }
    let _ = write!(out, r#"<ul class="{class}">"#);
    for link in links {
        let label = escape(&link.label);
        match safe_url(&link.href) {
            Some(href) => {
                let external = href.starts_with("http");
                let _ = write!(
                    out,
                    r#"<li><a href="{}"{}>{label}</a></li>"#,
                    escape(href),
                    if external {
                        r#" target="_blank" rel="noopener""#
                    } else {
                        ""
                    },
                );
            }
            None => {
                let _ = write!(out, "<li>{label}</li>");
            }
        }
    }
    out.push_str("</ul>");
}

pub fn render_card(card: &CardView) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<button type="button" class="member-card" data-id="{}">"#,
        escape(&card.id)
    );
    avatar(&mut out, card);
    let _ = write!(
        out,
        r#"<h3 class="member-name">{}</h3><p class="member-role">{}</p><p class="member-location">{}</p>"#,
        escape(&card.name),
        escape(&card.role),
        escape(&card.location)
    );
    tag_list(&mut out, &card.tags);
    out.push_str("</button>");
    out
}

/// The status line followed by one card per member.
pub fn render_grid(status: &str, cards: &[CardView]) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<p class="directory-status" role="status">{}</p><div class="directory-grid">"#,
        escape(status)
    );
    for card in cards {
        out.push_str(&render_card(card));
    }
    out.push_str("</div>");
    out
}

pub fn render_modal(modal: &ModalView) -> String {
    let mut out = String::new();
    out.push_str(
        r#"<div class="member-modal" role="dialog" aria-modal="true"><button type="button" class="modal-close" aria-label="Fermer">×</button>"#,
    );
    avatar(&mut out, &modal.card);
    let _ = write!(
        out,
        r#"<h2>{}</h2><p class="member-role">{}</p><p class="member-location">{}</p><p class="member-bio">{}</p>"#,
        escape(&modal.card.name),
        escape(&modal.card.role),
        escape(&modal.card.location),
        escape(&modal.bio)
    );
    tag_list(&mut out, &modal.tags);
    link_list(&mut out, "member-contacts", &modal.contacts);
    link_list(&mut out, "member-socials", &modal.socials);
    out.push_str("</div>");
    out
}

/// A standalone document around `body`, with the footer year.
pub fn render_page(title: &str, body: &str, year: &str) -> String {
    let mut out =
        String::from("<!doctype html>\n<html lang=\"fr\">\n<head><meta charset=\"utf-8\">");
    let _ = write!(out, "<title>{}</title></head>\n<body>\n<main>", escape(title));
    out.push_str(body);
    let _ = write!(
        out,
        "</main>\n<footer><p>&copy; <span id=\"year\">{}</span> {}</p></footer>\n</body>\n</html>\n",
        escape(year),
        escape(title)
    );
    out
}

/// KPI markup; `texts` holds each counter's current display value.
pub fn render_counters(labels: &[&str], texts: &[String]) -> String {
    let mut out = String::from(r#"<dl class="kpis">"#);
    for (label, text) in labels.iter().zip(texts) {
        let _ = write!(
            out,
            "<div><dt>{}</dt><dd>{}</dd></div>",
            escape(label),
            escape(text)
        );
    }
    out.push_str("</dl>");
    out
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    fn card() -> CardView {
        CardView {
            id: "m1".to_string(),
            name: "Awa <Koné>".to_string(),
            role: "Présidente".to_string(),
            location: "Abidjan".to_string(),
            photo_url: None,
            initials: "AK".to_string(),
            tags: vec!["Jeunesse".to_string()],
        }
    }

    #[test]
    fn test_escape() {
        assert_snapshot!(escape(r#"<a href="x">Tom & Jerry's</a>"#), @"&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;");
    }

    #[test]
    fn test_card_markup() {
        assert_snapshot!(render_card(&card()), @r#"<button type="button" class="member-card" data-id="m1"><span class="member-initials" aria-hidden="true">AK</span><h3 class="member-name">Awa &lt;Koné&gt;</h3><p class="member-role">Présidente</p><p class="member-location">Abidjan</p><ul class="member-tags"><li>Jeunesse</li></ul></button>"#);
    }

    #[test]
    fn test_grid_contains_status() {
        let html = render_grid("1 membre", &[card()]);
        assert!(html.starts_with(r#"<p class="directory-status" role="status">1 membre</p>"#));
        assert_eq!(html.matches("member-card").count(), 1);
    }

    #[test]
    fn test_modal_links_open_externally_only_for_web() {
        let modal = ModalView {
            card: card(),
            bio: "Bio".to_string(),
            skills: Vec::new(),
            programs: Vec::new(),
            tags: Vec::new(),
            contacts: vec![LinkView {
                label: "Appeler".to_string(),
                href: "tel:+2250700".to_string(),
            }],
            socials: vec![LinkView {
                label: "Facebook".to_string(),
                href: "https://facebook.com/fejeb".to_string(),
            }],
        };
        let html = render_modal(&modal);
        assert!(html.contains(r#"<a href="tel:+2250700">Appeler</a>"#));
        assert!(html.contains(
            r#"<a href="https://facebook.com/fejeb" target="_blank" rel="noopener">Facebook</a>"#
        ));
    }

    fn modal_with(socials: Vec<LinkView>, photo_url: Option<&str>) -> ModalView {
        ModalView {
            card: CardView {
                photo_url: photo_url.map(str::to_string),
                ..card()
            },
            bio: "Bio".to_string(),
            skills: Vec::new(),
            programs: Vec::new(),
            tags: Vec::new(),
            contacts: Vec::new(),
            socials,
        }
    }

    #[test]
    fn test_safe_url() {
        assert_eq!(safe_url("https://fejeb.org"), Some("https://fejeb.org"));
        assert_eq!(safe_url("HTTP://fejeb.org"), Some("HTTP://fejeb.org"));
        assert_eq!(safe_url("mailto:awa@fejeb.org"), Some("mailto:awa@fejeb.org"));
        assert_eq!(safe_url("tel:+22507123456"), Some("tel:+22507123456"));
        assert_eq!(safe_url("/photos/awa.jpg"), Some("/photos/awa.jpg"));
        assert_eq!(safe_url("photos/awa.jpg?v=1:2"), Some("photos/awa.jpg?v=1:2"));
        assert_eq!(safe_url("javascript:alert(1)"), None);
        assert_eq!(safe_url(" JavaScript:alert(1)"), None);
        assert_eq!(safe_url("java\tscript:alert(1)"), None);
        assert_eq!(safe_url("data:text/html,<b>x</b>"), None);
        assert_eq!(safe_url("vbscript:msgbox"), None);
    }

    #[test]
    fn test_modal_drops_script_links() {
        let modal = modal_with(
            vec![LinkView {
                label: "Site web".to_string(),
                href: "javascript:alert(document.cookie)".to_string(),
            }],
            Some("javascript:alert(1)"),
        );
        let html = render_modal(&modal);
        assert!(!html.contains("javascript:"));
        assert!(html.contains("<li>Site web</li>"));
        assert!(html.contains(r#"<span class="member-initials" aria-hidden="true">AK</span>"#));
    }

    #[test]
    fn test_modal_from_sheet_cell_with_script_url() {
        use roster_model::{Member, MemberId};

        let mut member = Member::new(MemberId::positional(0), "Awa").unwrap();
        member.website = Some("javascript:alert(document.cookie)".to_string());
        let html = render_modal(&ModalView::from_member(&member));
        assert!(!html.contains("href=\"javascript:"));
    }

    #[test]
    fn test_photo_with_safe_url_is_rendered() {
        let html = render_modal(&modal_with(Vec::new(), Some("https://fejeb.org/awa.jpg")));
        assert!(html.contains(r#"src="https://fejeb.org/awa.jpg""#));
    }

    #[test]
    fn test_page_has_footer_year() {
        let html = render_page("FEJEB ONG", &render_grid("1 membre", &[card()]), "2026");
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>FEJEB ONG</title>"));
        assert!(html.contains(r#"<span id="year">2026</span>"#));
    }

    #[test]
    fn test_counters_markup() {
        let html = render_counters(&["Membres"], &["1\u{202f}250".to_string()]);
        assert_eq!(
            html,
            "<dl class=\"kpis\"><div><dt>Membres</dt><dd>1\u{202f}250</dd></div></dl>"
        );
    }
}
