//! Turning spreadsheet records into members.

use std::collections::HashSet;

use tracing::{debug, warn};

use roster_ingest::{resolve, resolve_opt};
use roster_model::{Member, MemberId, ModelError, Record};

use crate::fields::{FIELD_KEYS, FieldKeys};
use crate::links::{DEFAULT_WHATSAPP_GREETING, contact_links, normalize_url};
use crate::tags::{build_tags, split_tokens};

/// Builds [`Member`] values from records using a candidate-key table.
#[derive(Debug, Clone)]
pub struct MemberBuilder {
    keys: FieldKeys,
    greeting: String,
}

impl Default for MemberBuilder {
    fn default() -> Self {
        Self {
            keys: FIELD_KEYS,
            greeting: DEFAULT_WHATSAPP_GREETING.to_string(),
        }
    }
}

impl MemberBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the message prefilled in WhatsApp links.
    #[must_use]
    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    /// Builds the member for the record at `index` (zero-based, sheet order).
    ///
    /// Fails with [`ModelError::EmptyName`] when no name column is filled.
    pub fn build(&self, record: &Record, index: usize) -> Result<Member, ModelError> {
        let keys = &self.keys;
        let id = match resolve(record, keys.id) {
            "" => MemberId::positional(index),
            explicit => MemberId::new(explicit)?,
        };
        let mut member = Member::new(id, resolve(record, keys.name))?;

        if let Some(role) = resolve_opt(record, keys.role) {
            member.role = role;
        }
        member.city = resolve_opt(record, keys.city);
        member.country = resolve_opt(record, keys.country);
        member.photo_url = url_field(record, keys.photo);
        member.bio = resolve_opt(record, keys.bio);
        member.skills = resolve_opt(record, keys.skills);
        member.programs = resolve_opt(record, keys.programs);
        member.email = resolve_opt(record, keys.email);
        member.phone = resolve_opt(record, keys.phone);
        member.whatsapp = resolve_opt(record, keys.whatsapp);
        member.facebook = url_field(record, keys.facebook);
        member.instagram = url_field(record, keys.instagram);
        member.linkedin = url_field(record, keys.linkedin);
        member.website = url_field(record, keys.website);

        let skill_tokens = member.skills.as_deref().map(split_tokens).unwrap_or_default();
        let program_tokens = member
            .programs
            .as_deref()
            .map(split_tokens)
            .unwrap_or_default();
        member.tags = build_tags(
            [
                Some(member.role.as_str()),
                member.city.as_deref(),
                member.country.as_deref(),
            ]
            .into_iter()
            .flatten()
            .chain(skill_tokens.iter().map(String::as_str))
            .chain(program_tokens.iter().map(String::as_str)),
        );

        member.contact = contact_links(
            member.email.as_deref(),
            member.phone.as_deref(),
            member.whatsapp.as_deref(),
            &self.greeting,
        );
        member.source_record = record.clone();
        Ok(member)
    }

    /// Builds every record that has a name, with ids unique across the batch.
    ///
    /// A repeated id is suffixed `-2`, `-3`, ... in sheet order.
    pub fn build_all(&self, records: &[Record]) -> Vec<Member> {
        let mut used: HashSet<String> = HashSet::new();
        let mut members = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let mut member = match self.build(record, index) {
                Ok(member) => member,
                Err(err) => {
                    debug!(row = index + 2, %err, "skipping sheet row");
                    continue;
                }
            };
            if !used.insert(member.id.as_str().to_string()) {
                let unique = unique_id(&member.id, &used);
                warn!(
                    row = index + 2,
                    duplicate = %member.id,
                    assigned = %unique,
                    "duplicate member id"
                );
                used.insert(unique.as_str().to_string());
                member.id = unique;
            }
            members.push(member);
        }
        members
    }
}

fn url_field(record: &Record, candidates: &[&str]) -> Option<String> {
    resolve_opt(record, candidates).map(|value| normalize_url(&value))
}

fn unique_id(id: &MemberId, used: &HashSet<String>) -> MemberId {
    let mut suffix = 2usize;
    loop {
        let candidate = format!("{id}-{suffix}");
        if !used.contains(&candidate) {
            return MemberId::new(candidate).unwrap_or_else(|_| id.clone());
        }
        suffix += 1;
    }
}
