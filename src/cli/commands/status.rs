use crate::config::Config;
use crate::core::status::StatusLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Print the burn-rate status block.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let status = {
        let pool = DbPool::new(&cfg.database)?;
        StatusLogic::compute(&pool, cfg.user_id)?
    };

    println!("\n{}\n", StatusLogic::render(&status));
    Ok(())
}
