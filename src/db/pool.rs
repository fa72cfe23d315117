//! Scoped SQLite connection wrapper (one per operation for CLI usage).

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database file.
    ///
    /// Foreign keys are declared in the schema but never enforced: a
    /// service log may point at an agency id that does not exist.
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        conn.pragma_update(None, "foreign_keys", false)?;
        Ok(Self { conn })
    }
}
