use crate::cli::commands::{record, report, status};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Non-interactive mode. Fixed order: every `--log` entry, then
/// `--status`, then `--report`, so both reflect the hours just logged.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if !cli.log.is_empty() {
        record::handle_entries(cfg, &cli.log)?;
    }

    if cli.status {
        status::handle(cfg)?;
    }

    if cli.report {
        report::handle(cfg)?;
    }

    Ok(())
}
