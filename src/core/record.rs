use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::insert_service_log;
use crate::errors::{AppError, AppResult};
use crate::models::service_log::LogEntry;
use crate::utils::date::{self, format_date};
use crate::utils::hours2readable;
use chrono::NaiveDate;

pub const LOG_ENTRY_FORMAT: &str = "agency_id|hours|description|date(optional YYYY-MM-DD)";

/// Validation and insertion of service sessions. The interactive form
/// and the `--log` flag both end up in [`RecordLogic::record`].
pub struct RecordLogic;

impl RecordLogic {
    /// Parse `agency_id|hours|description|date`. The date is optional:
    /// a missing or empty fourth field means "today".
    pub fn parse_entry(entry: &str) -> AppResult<LogEntry> {
        let parts: Vec<&str> = entry.split('|').map(str::trim).collect();
        if parts.len() < 3 || parts.len() > 4 {
            return Err(AppError::InputFormat(format!(
                "Log entry must be: {LOG_ENTRY_FORMAT} (got '{entry}')"
            )));
        }

        let date = parts.get(3).copied().unwrap_or("");
        Self::parse_fields(parts[0], parts[1], parts[2], date)
    }

    /// Turn the raw text fields into a [`LogEntry`].
    ///
    /// Zero or negative hours are accepted once they parse; the agency id
    /// is not checked against the `Agencies` table. The description is
    /// kept verbatim.
    pub fn parse_fields(
        agency_id: &str,
        hours: &str,
        description: &str,
        date: &str,
    ) -> AppResult<LogEntry> {
        let agency_id = agency_id.trim().parse::<i64>().map_err(|_| {
            AppError::InputFormat(format!("agency id must be a whole number (got '{agency_id}')"))
        })?;

        let hours = hours
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|h| h.is_finite())
            .ok_or_else(|| {
                AppError::InputFormat(format!("hours must be a number (got '{hours}')"))
            })?;

        let date = match date.trim() {
            "" => None,
            d => Some(date::parse_date(d).ok_or_else(|| {
                AppError::InputFormat(format!("date must be YYYY-MM-DD (got '{d}')"))
            })?),
        };

        Ok(LogEntry {
            agency_id,
            hours,
            description: description.to_string(),
            date,
        })
    }

    /// Insert `entry` for `user_id`, dating it today when no date was given.
    pub fn record(pool: &DbPool, user_id: i64, entry: &LogEntry) -> AppResult<i64> {
        Self::record_on(pool, user_id, entry, &date::today())
    }

    /// Same as [`RecordLogic::record`] with an explicit "today".
    pub fn record_on(
        pool: &DbPool,
        user_id: i64,
        entry: &LogEntry,
        today: &NaiveDate,
    ) -> AppResult<i64> {
        let service_date = entry.date.unwrap_or(*today);

        let log_id = insert_service_log(
            pool,
            user_id,
            entry.agency_id,
            &service_date,
            entry.hours,
            &entry.description,
        )?;

        ttlog_quiet(
            &pool.conn,
            "log",
            &format!("agency {}", entry.agency_id),
            &format!(
                "{} hrs on {} (log #{})",
                hours2readable(entry.hours),
                format_date(&service_date),
                log_id
            ),
        );

        Ok(log_id)
    }

    /// Validate raw text fields and insert them. Nothing is written when
    /// validation fails.
    pub fn record_raw(
        pool: &DbPool,
        user_id: i64,
        agency_id: &str,
        hours: &str,
        description: &str,
        date: &str,
    ) -> AppResult<i64> {
        let entry = Self::parse_fields(agency_id, hours, description, date)?;
        Self::record(pool, user_id, &entry)
    }
}
