//! FEJEB member directory CLI.

use clap::{ColorChoice, Parser};
use roster_cli::config::load_config;
use roster_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command};
use crate::commands::{RunContext, run_export, run_list, run_page, run_roles, run_show};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref());
    let context = RunContext::new(&cli.source, &config)?;
    match &cli.command {
        Command::List(args) => run_list(&context, args),
        Command::Show(args) => run_show(&context, args),
        Command::Roles => run_roles(&context),
        Command::Export(args) => run_export(&context, args),
        Command::Page(args) => run_page(&context, args),
    }
}

/// Logging settings from flags: `--log-level` beats `-v`/`-q`, and
/// `RUST_LOG` only applies when neither is given.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let explicit_level = cli.log_level.map(LevelFilter::from);
    LogConfig {
        level_filter: explicit_level.unwrap_or_else(|| cli.verbosity.tracing_level_filter()),
        use_env_filter: explicit_level.is_none() && !cli.verbosity.is_present(),
        format: LogFormat::from(cli.log_format),
        log_file: cli.log_file.clone(),
        log_data: cli.log_data,
        with_ansi: match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
        },
        ..LogConfig::default()
    }
}
