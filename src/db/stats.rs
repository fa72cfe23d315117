use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::date::parse_date;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) ROW COUNTS
    //
    for (label, table) in [
        ("User profiles", "User_Profile"),
        ("Agencies", "Agencies"),
        ("Service logs", "Service_Logs"),
    ] {
        let count: i64 =
            pool.conn
                .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
        println!("{}• {}:{} {}{}{}", CYAN, label, RESET, GREEN, count, RESET);
    }

    //
    // 3) SERVICE DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT service_date FROM Service_Logs ORDER BY service_date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT service_date FROM Service_Logs ORDER BY service_date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_date
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Service dates:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) SPAN IN DAYS
    //
    if let (Some(d1), Some(d2)) = (
        first_date.as_deref().and_then(parse_date),
        last_date.as_deref().and_then(parse_date),
    ) {
        println!("{}• Span:{} {} days", CYAN, RESET, (d2 - d1).num_days() + 1);
    }

    println!();
    Ok(())
}
