//! Canonical directory entries.

use std::fmt;

use serde::Serialize;

use crate::error::{ModelError, Result};
use crate::record::Record;

/// Maximum number of tags carried by a member.
pub const MAX_TAGS: usize = 10;

/// Role label used when the sheet has no role for a member.
pub const DEFAULT_ROLE: &str = "Membre";

/// Stable member identifier, unique within one directory load.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidMemberId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Synthesized identifier for the row at `index` (zero-based).
    pub fn positional(index: usize) -> Self {
        Self(format!("m{}", index + 1))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pre-built hrefs for the contact buttons of a member card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
}

impl ContactLinks {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.phone.is_none() && self.whatsapp.is_none()
    }
}

/// One directory entry built from a spreadsheet row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub role: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub photo_url: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<String>,
    pub programs: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
    /// Badge labels, at most [`MAX_TAGS`]. Repeats are dropped ignoring case
    /// and accents, keeping the first spelling.
    pub tags: Vec<String>,
    pub contact: ContactLinks,
    /// The row this member was built from.
    #[serde(skip)]
    pub source_record: Record,
}

impl Member {
    /// Creates a member with only the required fields set.
    pub fn new(id: MemberId, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ModelError::EmptyName);
        }
        Ok(Self {
            id,
            name,
            role: DEFAULT_ROLE.to_string(),
            city: None,
            country: None,
            photo_url: None,
            bio: None,
            skills: None,
            programs: None,
            email: None,
            phone: None,
            whatsapp: None,
            facebook: None,
            instagram: None,
            linkedin: None,
            website: None,
            tags: Vec::new(),
            contact: ContactLinks::default(),
            source_record: Record::default(),
        })
    }

    /// "City, Country", either part, or `None` when both are missing.
    pub fn location(&self) -> Option<String> {
        match (self.city.as_deref(), self.country.as_deref()) {
            (Some(city), Some(country)) => Some(format!("{city}, {country}")),
            (Some(city), None) => Some(city.to_string()),
            (None, Some(country)) => Some(country.to_string()),
            (None, None) => None,
        }
    }

    /// Social and web links that are present, labelled for display.
    pub fn social_links(&self) -> Vec<(&'static str, &str)> {
        [
            ("Facebook", self.facebook.as_deref()),
            ("Instagram", self.instagram.as_deref()),
            ("LinkedIn", self.linkedin.as_deref()),
            ("Site web", self.website.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.map(|url| (label, url)))
        .collect()
    }

    /// Text that directory search matches against.
    pub fn search_haystack(&self) -> String {
        let mut parts: Vec<&str> = vec![self.name.as_str(), self.role.as_str()];
        for value in [
            &self.city,
            &self.country,
            &self.bio,
            &self.skills,
            &self.programs,
        ]
        .into_iter()
        .flatten()
        {
            parts.push(value.as_str());
        }
        parts.extend(self.tags.iter().map(String::as_str));
        parts.join(" ").to_lowercase()
    }
}
