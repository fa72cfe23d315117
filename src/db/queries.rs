use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::agency::Agency;
use crate::models::profile::UserProfile;
use crate::models::service_log::ServiceLogRow;
use crate::utils::date::{format_date, parse_date};
use chrono::NaiveDate;
use rusqlite::{OptionalExtension, Result, Row, params};

fn map_profile(row: &Row) -> Result<UserProfile> {
    let deadline_str: String = row.get("deadline_date")?;
    let deadline_date = parse_date(&deadline_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(deadline_str.clone())),
        )
    })?;

    Ok(UserProfile {
        user_id: row.get("user_id")?,
        full_name: row.get("full_name")?,
        total_hours_required: row.get("total_hours_required")?,
        deadline_date,
        created_at: row
            .get::<_, Option<String>>("created_at")?
            .unwrap_or_default(),
    })
}

/// Load the profile `user_id`; `NotFound` when the row is missing.
pub fn load_profile(pool: &DbPool, user_id: i64) -> AppResult<UserProfile> {
    pool.conn
        .query_row(
            "SELECT user_id, full_name, total_hours_required, deadline_date, created_at
             FROM User_Profile
             WHERE user_id = ?1",
            [user_id],
            map_profile,
        )
        .optional()?
        .ok_or_else(|| AppError::NotFound(format!("no user profile with id {user_id}")))
}

pub fn load_agencies(pool: &DbPool) -> AppResult<Vec<Agency>> {
    let mut stmt = pool.conn.prepare(
        "SELECT agency_id, agency_name, category, location_address,
                contact_name, contact_phone, website_url
         FROM Agencies
         ORDER BY agency_id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(Agency {
            agency_id: row.get(0)?,
            agency_name: row.get(1)?,
            category: row.get(2)?,
            location_address: row.get(3)?,
            contact_name: row.get(4)?,
            contact_phone: row.get(5)?,
            website_url: row.get(6)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Sum of `hours_worked` over every log of the user (0 when none).
pub fn total_hours(pool: &DbPool, user_id: i64) -> AppResult<f64> {
    let total = pool.conn.query_row(
        "SELECT IFNULL(SUM(hours_worked), 0.0) FROM Service_Logs WHERE user_id = ?1",
        [user_id],
        |row| row.get(0),
    )?;
    Ok(total)
}

/// Insert one unverified service log and return its id.
/// `agency_id` is stored as given, even if no such agency exists.
pub fn insert_service_log(
    pool: &DbPool,
    user_id: i64,
    agency_id: i64,
    service_date: &NaiveDate,
    hours_worked: f64,
    task_description: &str,
) -> AppResult<i64> {
    pool.conn.execute(
        "INSERT INTO Service_Logs
            (user_id, agency_id, service_date, hours_worked, task_description, is_verified)
         VALUES (?1, ?2, ?3, ?4, ?5, 0)",
        params![
            user_id,
            agency_id,
            format_date(service_date),
            hours_worked,
            task_description
        ],
    )?;
    Ok(pool.conn.last_insert_rowid())
}

/// Every log of the user with its agency name, oldest service date first.
/// Logs sharing a date keep their insertion order.
pub fn load_service_logs(pool: &DbPool, user_id: i64) -> AppResult<Vec<ServiceLogRow>> {
    let mut stmt = pool.conn.prepare(
        "SELECT s.log_id, s.user_id, s.agency_id, a.agency_name, s.service_date,
                s.hours_worked, s.task_description, s.supervisor_name, s.is_verified
         FROM Service_Logs s
         LEFT JOIN Agencies a ON s.agency_id = a.agency_id
         WHERE s.user_id = ?1
         ORDER BY s.service_date ASC, s.log_id ASC",
    )?;

    let rows = stmt.query_map([user_id], |row| {
        Ok(ServiceLogRow {
            log_id: row.get(0)?,
            user_id: row.get(1)?,
            agency_id: row.get(2)?,
            agency_name: row.get(3)?,
            service_date: row.get(4)?,
            hours_worked: row.get(5)?,
            task_description: row.get::<_, Option<String>>(6)?.unwrap_or_default(),
            supervisor_name: row.get(7)?,
            is_verified: row.get::<_, Option<bool>>(8)?.unwrap_or(false),
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
