//! rServiceLog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use db::initialize::{SeedReport, ensure_ready};
use db::log::ttlog_quiet;
use db::pool::DbPool;
use errors::{AppError, AppResult};
use std::fs;
use std::io;
use std::path::Path;
use ui::messages::info;

/// Create the database directory and make sure schema and seed data exist.
pub fn prepare_storage(cfg: &Config) -> AppResult<SeedReport> {
    if let Some(parent) = Path::new(&cfg.database).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let seed = cfg.profile_seed()?;
    let pool = DbPool::new(&cfg.database)?;
    let report = ensure_ready(&pool.conn, &seed)?;

    if report.profile_seeded {
        info("Initializing System... Creating User Profile.");
        ttlog_quiet(&pool.conn, "init", "User_Profile", &seed.full_name);
    }
    if report.agencies_seeded > 0 {
        info("Initializing System... Adding Agencies.");
        ttlog_quiet(
            &pool.conn,
            "init",
            "Agencies",
            &format!("{} agencies seeded", report.agencies_seeded),
        );
    }

    Ok(report)
}

/// Central command dispatcher.
/// Everything except `config` works on a ready database.
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if cli.command.is_some() && cli.is_batch() {
        return Err(AppError::InputFormat(
            "--log, --status and --report cannot be combined with a subcommand".into(),
        ));
    }

    if let Some(cmd @ Commands::Config { .. }) = &cli.command {
        return cli::commands::config::handle(cmd, cfg);
    }

    prepare_storage(cfg)?;

    match &cli.command {
        Some(cmd @ Commands::Db { .. }) => cli::commands::db::handle(cmd, cfg),
        Some(Commands::Agencies) => cli::commands::agencies::handle(cfg),
        Some(Commands::Audit) => cli::commands::audit::handle(cfg),
        Some(Commands::Config { .. }) => Ok(()),
        None if cli.is_batch() => cli::commands::batch::handle(cli, cfg),
        None => cli::commands::menu::run(cfg, &mut io::stdin().lock()),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(dir) = &cli.report_dir {
        cfg.report_dir = dir.clone();
    }

    dispatch(&cli, &cfg)
}
