//! Where the spreadsheet export comes from.
//!
//! The directory is published as a CSV export of a public spreadsheet. The
//! [`CsvSource`] trait hides whether the text arrives over HTTP, from a local
//! file, or from memory in tests.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CACHE_CONTROL, PRAGMA, USER_AGENT};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Published CSV export of the member sheet.
pub const DEFAULT_SOURCE_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vT-fejeb-ong-membres/pub?gid=0&single=true&output=csv";

/// HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Something that can produce the raw CSV text of the member sheet.
pub trait CsvSource {
    /// Human-readable origin for logs.
    fn describe(&self) -> String;

    /// Fetches the full CSV text.
    fn fetch_text(&self) -> Result<String>;
}

/// Fetches the export with a single uncached HTTP GET.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| IngestError::Client(err.to_string()))?;
        Ok(Self::with_client(url, client))
    }

    /// Uses a caller-configured client, e.g. one that bypasses proxies.
    pub fn with_client(url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CsvSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch_text(&self) -> Result<String> {
        debug!(url = %self.url, "fetching member sheet");
        let network = |err: reqwest::Error| IngestError::Network {
            url: self.url.clone(),
            message: err.to_string(),
        };
        let response = self
            .client
            .get(&self.url)
            .header(USER_AGENT, concat!("roster/", env!("CARGO_PKG_VERSION")))
            .header(ACCEPT, "text/csv, text/plain;q=0.9, */*;q=0.1")
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .map_err(network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }
        let text = response.text().map_err(network)?;
        debug!(bytes = text.len(), "member sheet downloaded");
        Ok(text)
    }
}

/// Reads a previously downloaded export from disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CsvSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch_text(&self) -> Result<String> {
        std::fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                IngestError::FileNotFound {
                    path: self.path.clone(),
                }
            } else {
                IngestError::FileRead {
                    path: self.path.clone(),
                    source,
                }
            }
        })
    }
}

/// CSV text already in memory.
#[derive(Debug, Clone)]
pub struct TextSource {
    text: String,
}

impl TextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl CsvSource for TextSource {
    fn describe(&self) -> String {
        "inline text".to_string()
    }

    fn fetch_text(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_source_returns_text() {
        let source = TextSource::new("nom\nAwa\n");
        assert_eq!(source.fetch_text().unwrap(), "nom\nAwa\n");
    }

    #[test]
    fn test_file_source_missing_file() {
        let source = FileSource::new("/definitely/not/here/members.csv");
        let err = source.fetch_text().unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }

    #[test]
    fn test_http_source_creation() {
        let source = HttpSource::new(DEFAULT_SOURCE_URL, DEFAULT_TIMEOUT);
        assert!(source.is_ok());
        assert_eq!(source.unwrap().describe(), DEFAULT_SOURCE_URL);
    }
}
