//! Fetch-and-parse cycle and its lifecycle state.

use tracing::{error, info, info_span, warn};

use roster_ingest::{CsvSource, map_records, parse_csv_with_report};

use crate::builder::MemberBuilder;
use crate::error::{DirectoryError, Result};
use crate::index::DirectoryIndex;

/// Counts from one pass over the sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Data rows after the header, blank rows excluded.
    pub rows: usize,
    /// Rows skipped for lack of a name.
    pub skipped: usize,
    /// Members in the resulting directory.
    pub members: usize,
    pub unterminated_quote: bool,
}

/// Parses CSV text into a sorted directory.
pub fn build_directory(text: &str, builder: &MemberBuilder) -> (DirectoryIndex, LoadSummary) {
    let (rows, report) = parse_csv_with_report(text);
    let table = map_records(&rows);
    let members = builder.build_all(&table.records);
    let summary = LoadSummary {
        rows: table.len(),
        skipped: table.len() - members.len(),
        members: members.len(),
        unterminated_quote: report.unterminated_quote,
    };
    (DirectoryIndex::new(members), summary)
}

/// Fetches the sheet from `source` and builds the directory.
///
/// A sheet without any named row is an error so callers can tell a
/// publishing problem apart from a real, empty team.
pub fn load_directory(source: &dyn CsvSource, builder: &MemberBuilder) -> Result<DirectoryIndex> {
    let span = info_span!("load_directory", source = %source.describe());
    let _guard = span.enter();

    let text = source.fetch_text()?;
    let (index, summary) = build_directory(&text, builder);
    if summary.skipped > 0 {
        warn!(skipped = summary.skipped, "rows without a name were skipped");
    }
    if index.is_empty() {
        return Err(DirectoryError::Empty { rows: summary.rows });
    }
    info!(
        rows = summary.rows,
        members = summary.members,
        "directory loaded"
    );
    Ok(index)
}

/// Where the directory load stands, for the status line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Waiting for the sheet.
    Loading,
    /// The directory is populated.
    Ready { members: usize },
    /// The sheet loaded but listed nobody.
    Empty,
    /// The sheet could not be fetched.
    Failed { message: String },
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Member count shown in the KPI, zero unless ready.
    pub fn member_count(&self) -> usize {
        match self {
            Self::Ready { members } => *members,
            _ => 0,
        }
    }
}

/// Owns the current directory and the state of the single page load.
///
/// Requests made while a load is in flight are ignored. A load that fails
/// after an earlier success keeps the earlier directory.
#[derive(Debug, Default)]
pub struct DirectoryLoader {
    builder: MemberBuilder,
    status: LoadStatus,
    index: Option<DirectoryIndex>,
}

impl DirectoryLoader {
    pub fn new(builder: MemberBuilder) -> Self {
        Self {
            builder,
            status: LoadStatus::Idle,
            index: None,
        }
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn index(&self) -> Option<&DirectoryIndex> {
        self.index.as_ref()
    }

    pub fn builder(&self) -> &MemberBuilder {
        &self.builder
    }

    /// Marks a load as started. Returns `false` if one is already running.
    pub fn begin(&mut self) -> bool {
        if self.status.is_loading() {
            warn!("directory load already in progress; ignoring request");
            return false;
        }
        self.status = LoadStatus::Loading;
        true
    }

    /// Applies the outcome of the fetch started by [`Self::begin`].
    pub fn finish(&mut self, fetched: roster_ingest::Result<String>) -> &LoadStatus {
        self.status = match fetched {
            Ok(text) => {
                let (index, summary) = build_directory(&text, &self.builder);
                if index.is_empty() {
                    warn!(rows = summary.rows, "member sheet has no named rows");
                    self.index = Some(index);
                    LoadStatus::Empty
                } else {
                    info!(members = summary.members, "directory ready");
                    let members = index.len();
                    self.index = Some(index);
                    LoadStatus::Ready { members }
                }
            }
            Err(err) => {
                error!(error = %err, "directory load failed");
                let message = err.user_message().to_string();
                match self.index.as_ref().map(DirectoryIndex::len) {
                    Some(members) if members > 0 => {
                        warn!(members, "keeping previously loaded directory");
                        LoadStatus::Ready { members }
                    }
                    _ => LoadStatus::Failed { message },
                }
            }
        };
        &self.status
    }

    /// Runs a complete load against `source`.
    pub fn load(&mut self, source: &dyn CsvSource) -> &LoadStatus {
        if !self.begin() {
            return &self.status;
        }
        let span = info_span!("load_directory", source = %source.describe());
        let _guard = span.enter();
        let fetched = source.fetch_text();
        self.finish(fetched)
    }
}
