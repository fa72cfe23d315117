use crate::config::Config;
use crate::core::record::RecordLogic;
use crate::db::pool::DbPool;
use crate::db::queries::load_agencies;
use crate::errors::{AppError, AppResult};
use crate::models::service_log::LogEntry;
use crate::ui::messages::{error, header, success};
use crate::ui::prompt::ask;
use std::io::BufRead;

/// Record every `--log` entry. All entries are parsed first: one bad
/// entry aborts the whole invocation and nothing is written.
pub fn handle_entries(cfg: &Config, entries: &[String]) -> AppResult<()> {
    let parsed = entries
        .iter()
        .map(|e| RecordLogic::parse_entry(e))
        .collect::<AppResult<Vec<LogEntry>>>()?;

    for entry in &parsed {
        let pool = DbPool::new(&cfg.database)?;
        let id = RecordLogic::record(&pool, cfg.user_id, entry)?;
        success(format!("Hours logged successfully! (log #{id})"));
    }

    Ok(())
}

/// Interactive form: list agencies, then prompt for the four fields.
/// Invalid input aborts this attempt only; there is no re-prompt.
pub fn handle_interactive<R: BufRead>(cfg: &Config, input: &mut R) -> AppResult<()> {
    header("📝 LOG HOURS");

    let agencies = {
        let pool = DbPool::new(&cfg.database)?;
        load_agencies(&pool)?
    };
    for a in &agencies {
        println!("[{}] {}", a.agency_id, a.agency_name);
    }

    let mut fields = Vec::with_capacity(4);
    for label in [
        "Enter Agency ID: ",
        "Hours Worked: ",
        "Task Description: ",
        "Date (YYYY-MM-DD) [Press Enter for Today]: ",
    ] {
        match ask(input, label)? {
            Some(v) => fields.push(v),
            None => {
                println!();
                return Ok(());
            }
        }
    }

    let entry = match RecordLogic::parse_fields(&fields[0], &fields[1], &fields[2], &fields[3]) {
        Ok(e) => e,
        Err(AppError::InputFormat(msg)) => {
            error(format!("Invalid input: {msg}"));
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let pool = DbPool::new(&cfg.database)?;
    RecordLogic::record(&pool, cfg.user_id, &entry)?;
    success("Hours logged successfully!");
    Ok(())
}
