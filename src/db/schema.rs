use rusqlite::{Connection, Result};

pub const CREATE_USER_PROFILE: &str = r#"
CREATE TABLE IF NOT EXISTS User_Profile (
    user_id              INTEGER PRIMARY KEY AUTOINCREMENT,
    full_name            TEXT NOT NULL,
    total_hours_required REAL NOT NULL CHECK(total_hours_required > 0),
    deadline_date        DATE NOT NULL,
    created_at           DATETIME DEFAULT CURRENT_TIMESTAMP
);
"#;

pub const CREATE_AGENCIES: &str = r#"
CREATE TABLE IF NOT EXISTS Agencies (
    agency_id        INTEGER PRIMARY KEY AUTOINCREMENT,
    agency_name      TEXT NOT NULL,
    category         TEXT,
    location_address TEXT,
    contact_name     TEXT,
    contact_phone    TEXT,
    website_url      TEXT
);
"#;

pub const CREATE_SERVICE_LOGS: &str = r#"
CREATE TABLE IF NOT EXISTS Service_Logs (
    log_id           INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id          INTEGER,
    agency_id        INTEGER,
    service_date     DATE NOT NULL,
    hours_worked     REAL NOT NULL,
    task_description TEXT,
    supervisor_name  TEXT,
    is_verified      BOOLEAN DEFAULT 0,
    FOREIGN KEY (user_id) REFERENCES User_Profile(user_id),
    FOREIGN KEY (agency_id) REFERENCES Agencies(agency_id)
);
"#;

/// Internal audit trail written by `db::log::ttlog`.
pub const CREATE_LOG: &str = r#"
CREATE TABLE IF NOT EXISTS log (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    date      TEXT NOT NULL,
    operation TEXT NOT NULL,
    target    TEXT DEFAULT '',
    message   TEXT NOT NULL
);
"#;

pub const INDEX_SERVICE_LOGS_USER_DATE: &str = "CREATE INDEX IF NOT EXISTS idx_service_logs_user_date \
     ON Service_Logs(user_id, service_date);";

pub fn schema_statements() -> Vec<&'static str> {
    vec![
        CREATE_USER_PROFILE,
        CREATE_AGENCIES,
        CREATE_SERVICE_LOGS,
        CREATE_LOG,
        INDEX_SERVICE_LOGS_USER_DATE,
    ]
}

/// Create every table and index if missing. Safe to run on every start.
pub fn create_tables(conn: &Connection) -> Result<()> {
    for stmt in schema_statements() {
        conn.execute_batch(stmt)?;
    }
    Ok(())
}
