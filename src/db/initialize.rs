use crate::config::ProfileSeed;
use crate::db::schema::create_tables;
use crate::errors::AppResult;
use crate::utils::date::format_date;
use rusqlite::{Connection, params};

/// Agencies inserted when the `Agencies` table is empty:
/// (name, category, address, contact).
pub const SEED_AGENCIES: &[(&str, &str, &str, &str)] = &[
    (
        "Atlanta Community Food Bank",
        "Food Service",
        "732 Joseph E. Lowery Blvd",
        "Sarah J.",
    ),
    (
        "DeKalb County Library",
        "Education",
        "215 Sycamore St",
        "Mr. Henderson",
    ),
    ("Trees Atlanta", "Environment", "225 Chester Ave", "Marcus G."),
];

/// What `ensure_ready` had to create on this run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub profile_seeded: bool,
    pub agencies_seeded: usize,
}

impl SeedReport {
    pub fn is_first_run(&self) -> bool {
        self.profile_seeded || self.agencies_seeded > 0
    }
}

fn count(conn: &Connection, table: &str) -> AppResult<i64> {
    let n = conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })?;
    Ok(n)
}

/// Make the store usable: create missing tables, then seed the profile
/// and the agencies only when their tables are empty.
/// Running it again on an initialized database changes nothing.
pub fn ensure_ready(conn: &Connection, seed: &ProfileSeed) -> AppResult<SeedReport> {
    create_tables(conn)?;

    let mut report = SeedReport::default();

    if count(conn, "User_Profile")? == 0 {
        conn.execute(
            "INSERT INTO User_Profile (full_name, total_hours_required, deadline_date)
             VALUES (?1, ?2, ?3)",
            params![
                seed.full_name,
                seed.total_hours_required,
                format_date(&seed.deadline_date)
            ],
        )?;
        report.profile_seeded = true;
    }

    if count(conn, "Agencies")? == 0 {
        let mut stmt = conn.prepare(
            "INSERT INTO Agencies (agency_name, category, location_address, contact_name)
             VALUES (?1, ?2, ?3, ?4)",
        )?;
        for (name, category, address, contact) in SEED_AGENCIES {
            stmt.execute(params![name, category, address, contact])?;
        }
        report.agencies_seeded = SEED_AGENCIES.len();
    }

    Ok(report)
}
