//! Service session records: the parsed input form and the stored row.

use chrono::NaiveDate;

/// A validated log entry, as produced by the interactive form or by
/// parsing an `agency_id|hours|description|date` string.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub agency_id: i64,
    pub hours: f64,
    pub description: String,
    /// `None` means "use today's date" at record time.
    pub date: Option<NaiveDate>,
}

/// A stored `Service_Logs` row joined with its agency name.
///
/// `agency_name` is `None` when the log points at an agency id that does
/// not exist; references are a lookup, not an integrity constraint.
#[derive(Debug, Clone)]
pub struct ServiceLogRow {
    pub log_id: i64,
    pub user_id: i64,
    pub agency_id: i64,
    pub agency_name: Option<String>,
    pub service_date: String,
    pub hours_worked: f64,
    pub task_description: String,
    pub supervisor_name: Option<String>,
    pub is_verified: bool,
}
