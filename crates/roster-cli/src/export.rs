//! CSV export of the directory.
//!
//! Columns use the sheet's own French headers so an export can be loaded
//! back as a source.

use std::io;

use roster_model::Member;

pub const EXPORT_HEADERS: [&str; 17] = [
    "ID",
    "Nom",
    "Rôle",
    "Ville",
    "Pays",
    "Photo",
    "Bio",
    "Compétences",
    "Programmes",
    "Email",
    "Téléphone",
    "WhatsApp",
    "Facebook",
    "Instagram",
    "LinkedIn",
    "Site web",
    "Tags",
];

fn export_row(member: &Member) -> Vec<String> {
    let optional = |value: &Option<String>| value.clone().unwrap_or_default();
    vec![
        member.id.to_string(),
        member.name.clone(),
        member.role.clone(),
        optional(&member.city),
        optional(&member.country),
        optional(&member.photo_url),
        optional(&member.bio),
        optional(&member.skills),
        optional(&member.programs),
        optional(&member.email),
        optional(&member.phone),
        optional(&member.whatsapp),
        optional(&member.facebook),
        optional(&member.instagram),
        optional(&member.linkedin),
        optional(&member.website),
        member.tags.join("; "),
    ]
}

/// Writes `members` as RFC 4180 CSV with a header row.
pub fn write_members_csv<W: io::Write>(members: &[&Member], writer: W) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(EXPORT_HEADERS)?;
    for member in members {
        csv_writer.write_record(export_row(member))?;
    }
    csv_writer.flush()?;
    Ok(())
}
