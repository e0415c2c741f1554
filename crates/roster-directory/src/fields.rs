//! Candidate header keys for each member field.
//!
//! Keys are in normalized form (see [`roster_ingest::normalize_header`]) and
//! listed in priority order. French spellings come first because the sheet
//! is maintained in French.

/// Ordered candidate keys for every field the builder resolves.
#[derive(Debug, Clone, Copy)]
pub struct FieldKeys {
    pub id: &'static [&'static str],
    pub name: &'static [&'static str],
    pub role: &'static [&'static str],
    pub city: &'static [&'static str],
    pub country: &'static [&'static str],
    pub photo: &'static [&'static str],
    pub bio: &'static [&'static str],
    pub skills: &'static [&'static str],
    pub programs: &'static [&'static str],
    pub email: &'static [&'static str],
    pub phone: &'static [&'static str],
    pub whatsapp: &'static [&'static str],
    pub facebook: &'static [&'static str],
    pub instagram: &'static [&'static str],
    pub linkedin: &'static [&'static str],
    pub website: &'static [&'static str],
}

pub const FIELD_KEYS: FieldKeys = FieldKeys {
    id: &["id", "uuid", "slug", "identifiant", "member_id"],
    name: &[
        "nom",
        "name",
        "full_name",
        "nom_complet",
        "nom_et_prenoms",
        "nom_prenoms",
        "prenom_nom",
        "nom_prenom",
        "membre",
    ],
    role: &["role", "fonction", "poste", "titre", "title", "position"],
    city: &["ville", "city", "localite", "commune"],
    country: &["pays", "country", "nationalite"],
    photo: &[
        "photo",
        "photo_url",
        "lien_photo",
        "image",
        "image_url",
        "avatar",
        "picture",
    ],
    bio: &["bio", "biographie", "description", "presentation", "about"],
    skills: &[
        "competences",
        "skills",
        "expertise",
        "domaines",
        "domaines_de_competence",
    ],
    programs: &["programmes", "programs", "programme", "projets", "projects"],
    email: &["email", "e_mail", "mail", "courriel", "adresse_email"],
    phone: &["telephone", "phone", "tel", "numero", "contact"],
    whatsapp: &["whatsapp", "whats_app", "numero_whatsapp", "wa"],
    facebook: &["facebook", "fb", "lien_facebook"],
    instagram: &["instagram", "insta", "ig"],
    linkedin: &["linkedin", "linked_in"],
    website: &["site_web", "site", "website", "web", "url"],
};
