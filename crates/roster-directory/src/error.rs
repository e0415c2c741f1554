//! Error types for directory loading.

use thiserror::Error;

use roster_ingest::IngestError;

/// Errors that end a directory load without a usable member list.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The sheet could not be fetched.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// The sheet was fetched but no row had a name.
    #[error("no members found in {rows} data rows")]
    Empty { rows: usize },
}

impl DirectoryError {
    /// Message shown in place of the grid.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Ingest(err) => err.user_message(),
            Self::Empty { .. } => EMPTY_DIRECTORY_MESSAGE,
        }
    }
}

/// Shown when the export loads but lists nobody, which usually means the
/// sheet is not published or the name column was renamed.
pub const EMPTY_DIRECTORY_MESSAGE: &str = "Aucun membre à afficher pour le moment. Vérifiez que la feuille est publiée au format CSV et qu'elle contient une colonne « Nom ».";

/// Result type for directory operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;
