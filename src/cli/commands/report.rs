use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, success};
use std::path::Path;

/// Generate the compliance timesheet, show it and save it to disk.
pub fn handle(cfg: &Config) -> AppResult<()> {
    header("🖨️ GENERATING COMPLIANCE REPORT");

    let sheet = {
        let pool = DbPool::new(&cfg.database)?;
        ReportLogic::generate(&pool, cfg.user_id, Path::new(&cfg.report_dir))?
    };

    println!("{}", sheet.text);
    println!();
    success(format!("💾 Saved to {}", sheet.path.display()));
    Ok(())
}
