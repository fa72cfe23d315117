#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rservicelog::config::ProfileSeed;
use rservicelog::db::initialize::ensure_ready;
use rservicelog::db::pool::DbPool;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a scratch dir so no real
/// configuration file is ever read.
pub fn rsl(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rservicelog");
    cmd.env("HOME", temp_dir(&format!("{name}_home")));
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rservicelog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh, empty directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rservicelog", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

pub fn seed(deadline: NaiveDate) -> ProfileSeed {
    ProfileSeed {
        full_name: "Test Volunteer".to_string(),
        total_hours_required: 40.0,
        deadline_date: deadline,
    }
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

/// Open a new test DB and run the initializer on it
pub fn ready_pool(name: &str, deadline: NaiveDate) -> DbPool {
    let db_path = setup_test_db(name);
    let pool = DbPool::new(&db_path).expect("open db");
    ensure_ready(&pool.conn, &seed(deadline)).expect("init db");
    pool
}

pub fn count_logs(pool: &DbPool) -> i64 {
    pool.conn
        .query_row("SELECT COUNT(*) FROM Service_Logs", [], |row| row.get(0))
        .expect("count logs")
}
