use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, trace};

use roster_cli::config::RosterConfig;
use roster_cli::export::write_members_csv;
use roster_cli::logging::redact_value;
use roster_directory::{DirectoryIndex, LoadStatus, MemberBuilder, load_directory};
use roster_ingest::{CsvSource, FileSource, HttpSource};
use roster_site::html::render_page;
use roster_site::page::NO_MATCH_MESSAGE;
use roster_site::{DirectoryPage, ModalView, current_footer_year};

use crate::cli::{ExportArgs, FilterArgs, PageArgs, ShowArgs, SourceArgs};
use crate::summary::{print_member, print_members, print_roles};

const PAGE_TITLE: &str = "FEJEB ONG";

/// The sheet source and member builder selected by flags and config.
pub struct RunContext {
    source: Box<dyn CsvSource>,
    builder: MemberBuilder,
}

impl RunContext {
    pub fn new(args: &SourceArgs, config: &RosterConfig) -> Result<Self> {
        let source: Box<dyn CsvSource> = match &args.file {
            Some(path) => Box::new(FileSource::new(path)),
            None => {
                let url = args.url.as_deref().unwrap_or(&config.source.url);
                let timeout = args
                    .timeout
                    .map(Duration::from_secs)
                    .unwrap_or_else(|| config.timeout());
                Box::new(HttpSource::new(url, timeout).context("create http client")?)
            }
        };
        let greeting = args
            .greeting
            .clone()
            .unwrap_or_else(|| config.contact.whatsapp_greeting.clone());
        Ok(Self {
            source,
            builder: MemberBuilder::new().with_greeting(greeting),
        })
    }

    pub fn load(&self) -> Result<DirectoryIndex> {
        load_directory(self.source.as_ref(), &self.builder).map_err(|err| {
            let message = err.user_message();
            anyhow::Error::new(err).context(message)
        })
    }
}

pub fn run_list(context: &RunContext, args: &FilterArgs) -> Result<()> {
    let index = context.load()?;
    let members = index.filtered(&args.to_filter());
    if members.is_empty() {
        println!("{NO_MATCH_MESSAGE}");
        return Ok(());
    }
    print_members(&members, index.len());
    Ok(())
}

pub fn run_show(context: &RunContext, args: &ShowArgs) -> Result<()> {
    let index = context.load()?;
    let Some(member) = index.get_str(args.id.trim()) else {
        bail!("no member with id {:?}", args.id);
    };
    trace!(
        email = redact_value(member.email.as_deref().unwrap_or_default()),
        phone = redact_value(member.phone.as_deref().unwrap_or_default()),
        "member contact"
    );
    print_member(&ModalView::from_member(member));
    Ok(())
}

pub fn run_roles(context: &RunContext) -> Result<()> {
    let index = context.load()?;
    print_roles(&index);
    Ok(())
}

pub fn run_export(context: &RunContext, args: &ExportArgs) -> Result<()> {
    let index = context.load()?;
    let members = index.filtered(&args.filter.to_filter());
    let span = info_span!("export", members = members.len());
    let _guard = span.enter();
    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create {}", path.display()))?;
            write_members_csv(&members, BufWriter::new(file))
                .with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), "directory exported");
        }
        None => {
            write_members_csv(&members, io::stdout().lock()).context("write csv to stdout")?;
        }
    }
    Ok(())
}

/// Renders the page the same way the site does, status line included.
///
/// The HTML is written even when the load fails so the failure copy can be
/// previewed; the command still reports the failure.
pub fn run_page(context: &RunContext, args: &PageArgs) -> Result<()> {
    let mut page = DirectoryPage::new(context.builder.clone());
    let status = page.load(context.source.as_ref()).clone();
    page.set_search(args.filter.search.clone().unwrap_or_default());
    page.set_role(args.filter.role.clone().unwrap_or_default());
    if let Some(id) = &args.member {
        let found = page.open_member(id);
        if !found && matches!(status, LoadStatus::Ready { .. }) {
            bail!("no member with id {id}");
        }
    }

    let html = render_page(PAGE_TITLE, &page.render_body(), &current_footer_year());
    write_output(args.output.as_deref(), &html)?;

    match status {
        LoadStatus::Ready { .. } => Ok(()),
        LoadStatus::Empty => bail!("{}", page.status_text()),
        LoadStatus::Failed { message } => bail!(message),
        LoadStatus::Idle | LoadStatus::Loading => bail!("directory load did not complete"),
    }
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), "page written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes()).context("write page to stdout")?;
            stdout.flush().context("flush stdout")?;
        }
    }
    Ok(())
}
