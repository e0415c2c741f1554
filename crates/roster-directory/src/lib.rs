//! Member directory construction.
//!
//! Records produced by `roster-ingest` are resolved into [`Member`] values,
//! sorted into a [`DirectoryIndex`], and filtered for display.
//!
//! [`Member`]: roster_model::Member

pub mod builder;
pub mod error;
pub mod fields;
pub mod index;
pub mod links;
pub mod load;
pub mod tags;

pub use builder::MemberBuilder;
pub use error::{DirectoryError, EMPTY_DIRECTORY_MESSAGE, Result};
pub use fields::{FIELD_KEYS, FieldKeys};
pub use index::DirectoryIndex;
pub use links::{
    DEFAULT_WHATSAPP_GREETING, contact_links, dialable_number, mailto_href, normalize_url,
    tel_href, whatsapp_href,
};
pub use load::{DirectoryLoader, LoadStatus, LoadSummary, build_directory, load_directory};
pub use tags::{MAX_TOKENS, build_tags, split_tokens};
