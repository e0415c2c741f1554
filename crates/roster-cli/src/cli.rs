//! CLI argument definitions for the member directory.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use roster_cli::logging::LogFormat;
use roster_model::FilterState;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "FEJEB member directory - list, search and export the published member sheet",
    long_about = "Load the association's member sheet from its published CSV export\n\
                  (or a local file) and query it like the website directory does."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Config file (default: roster.toml in the platform config folder).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow member contact details in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

/// Where the member sheet comes from. Flags override the config file.
#[derive(Args)]
pub struct SourceArgs {
    /// CSV export URL of the member sheet.
    #[arg(long = "source", value_name = "URL", global = true, conflicts_with = "file")]
    pub url: Option<String>,

    /// Read the sheet from a local CSV file instead.
    #[arg(long = "file", value_name = "PATH", global = true)]
    pub file: Option<PathBuf>,

    /// HTTP timeout in seconds.
    #[arg(long = "timeout", value_name = "SECS", global = true)]
    pub timeout: Option<u64>,

    /// Message prefilled in WhatsApp links.
    #[arg(long = "greeting", value_name = "TEXT", global = true)]
    pub greeting: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List members, optionally filtered.
    List(FilterArgs),

    /// Show one member's full profile.
    Show(ShowArgs),

    /// List the roles present in the directory.
    Roles,

    /// Write the (filtered) directory as CSV.
    Export(ExportArgs),

    /// Render the directory page as HTML.
    Page(PageArgs),
}

#[derive(Args, Default)]
pub struct FilterArgs {
    /// Case-insensitive text to look for.
    #[arg(long = "search", short = 's', value_name = "TEXT")]
    pub search: Option<String>,

    /// Exact role to keep.
    #[arg(long = "role", short = 'r', value_name = "ROLE")]
    pub role: Option<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> FilterState {
        FilterState::new(
            self.search.clone().unwrap_or_default(),
            self.role.clone().unwrap_or_default(),
        )
    }
}

#[derive(Args)]
pub struct ShowArgs {
    /// Member id as shown by `roster list`.
    #[arg(value_name = "ID")]
    pub id: String,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output file (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct PageArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Render the page with this member's modal open.
    #[arg(long = "member", value_name = "ID")]
    pub member: Option<String>,

    /// Output file (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}
