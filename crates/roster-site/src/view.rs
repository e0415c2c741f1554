//! Display models for directory cards and the member detail modal.

use roster_directory::split_tokens;
use roster_model::Member;

pub const ROLE_FALLBACK: &str = "Rôle non précisé";
pub const LOCATION_FALLBACK: &str = "Localisation non précisée";
pub const BIO_FALLBACK: &str = "Bio en cours de rédaction.";

/// Tags shown on a card; the modal lists all of them.
pub const CARD_TAGS: usize = 4;

/// Up to two uppercase initials for the avatar placeholder.
pub fn initials(name: &str) -> String {
    name.split(|c: char| c.is_whitespace() || c == ',' || c == '-')
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

fn role_label(member: &Member) -> String {
    let role = member.role.trim();
    if role.is_empty() {
        ROLE_FALLBACK.to_string()
    } else {
        role.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: String,
    pub name: String,
    pub role: String,
    pub location: String,
    pub photo_url: Option<String>,
    pub initials: String,
    pub tags: Vec<String>,
}

impl CardView {
    pub fn from_member(member: &Member) -> Self {
        Self {
            id: member.id.as_str().to_string(),
            name: member.name.clone(),
            role: role_label(member),
            location: member
                .location()
                .unwrap_or_else(|| LOCATION_FALLBACK.to_string()),
            photo_url: member.photo_url.clone(),
            initials: initials(&member.name),
            tags: member.tags.iter().take(CARD_TAGS).cloned().collect(),
        }
    }
}

/// A labelled link in the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub label: String,
    pub href: String,
}

impl LinkView {
    fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub card: CardView,
    pub bio: String,
    pub skills: Vec<String>,
    pub programs: Vec<String>,
    pub tags: Vec<String>,
    pub contacts: Vec<LinkView>,
    pub socials: Vec<LinkView>,
}

impl ModalView {
    pub fn from_member(member: &Member) -> Self {
        let bio = member
            .bio
            .as_deref()
            .map(str::trim)
            .filter(|bio| !bio.is_empty())
            .unwrap_or(BIO_FALLBACK)
            .to_string();

        let mut contacts = Vec::new();
        if let Some(href) = &member.contact.email {
            contacts.push(LinkView::new("E-mail", href));
        }
        if let Some(href) = &member.contact.phone {
            contacts.push(LinkView::new("Appeler", href));
        }
        if let Some(href) = &member.contact.whatsapp {
            contacts.push(LinkView::new("WhatsApp", href));
        }

        Self {
            card: CardView::from_member(member),
            bio,
            skills: member.skills.as_deref().map(split_tokens).unwrap_or_default(),
            programs: member
                .programs
                .as_deref()
                .map(split_tokens)
                .unwrap_or_default(),
            tags: member.tags.clone(),
            contacts,
            socials: member
                .social_links()
                .into_iter()
                .map(|(label, href)| LinkView::new(label, href))
                .collect(),
        }
    }
}
