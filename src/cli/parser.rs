use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for rServiceLog
/// CLI application to track community-service hours with SQLite
#[derive(Parser)]
#[command(
    name = "rservicelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track community-service hours against a deadline, show the burn rate and print a compliance timesheet",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the directory timesheets are written to
    #[arg(global = true, long = "report-dir")]
    pub report_dir: Option<String>,

    /// Log hours (repeatable)
    #[arg(
        long = "log",
        value_name = "ENTRY",
        action = ArgAction::Append,
        help = "Log hours: agency_id|hours|description|date(optional YYYY-MM-DD)"
    )]
    pub log: Vec<String>,

    /// Show burn rate status
    #[arg(long = "status", help = "Show burn rate status")]
    pub status: bool,

    /// Generate compliance report
    #[arg(long = "report", help = "Generate and save the compliance report")]
    pub report: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// True when any of `--log`, `--status`, `--report` was given:
    /// process them and skip the interactive menu.
    pub fn is_batch(&self) -> bool {
        !self.log.is_empty() || self.status || self.report
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the configuration file (view, edit or create)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,

        #[arg(long = "init", help = "Write a default configuration file if none exists")]
        init: bool,
    },

    /// Manage the database (integrity checks, info, vacuum)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// List partner agencies
    Agencies,

    /// Print the internal audit log
    Audit,
}
