//! Error types for spreadsheet ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while fetching a spreadsheet export.
///
/// Parsing never fails: malformed CSV is read best-effort, so every variant
/// here is about getting the text in the first place.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Network Errors ===
    /// The request could not be sent or the body could not be read.
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    /// The server answered with a non-success status.
    #[error("request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IngestError {
    /// Short message safe to show to visitors; details stay in the log.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Network { .. } | Self::Client(_) => {
                "Impossible de charger l'annuaire pour le moment. Vérifiez votre connexion."
            }
            Self::HttpStatus { .. } => {
                "L'annuaire est momentanément indisponible. Réessayez plus tard."
            }
            Self::FileNotFound { .. } | Self::FileRead { .. } => {
                "Le fichier de l'annuaire est introuvable ou illisible."
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
