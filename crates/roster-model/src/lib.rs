//! Data model for the member directory.
//!
//! Spreadsheet rows enter as [`RawRow`] and [`Record`] values and leave as
//! strongly-typed [`Member`] entries.

pub mod error;
pub mod filter;
pub mod member;
pub mod record;

pub use error::{ModelError, Result};
pub use filter::FilterState;
pub use member::{ContactLinks, DEFAULT_ROLE, MAX_TAGS, Member, MemberId};
pub use record::{RawRow, Record};
