use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{load_profile, load_service_logs};
use crate::errors::AppResult;
use crate::models::profile::UserProfile;
use crate::models::service_log::ServiceLogRow;
use crate::utils::date::{self, format_date};
use crate::utils::formatting::{fit_width, pad_right};
use crate::utils::hours2readable;
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};

const RULE_WIDTH: usize = 60;
const DATE_W: usize = 12;
const AGENCY_W: usize = 20;
/// Hours are padded to this width but never cut.
const HOURS_W: usize = 7;

pub const GLYPH_VERIFIED: &str = "✅";
pub const GLYPH_UNVERIFIED: &str = "⚠️";

/// A rendered timesheet and where it was saved.
#[derive(Debug, Clone)]
pub struct Timesheet {
    pub text: String,
    pub path: PathBuf,
    pub rows: Vec<ServiceLogRow>,
    pub total_hours_completed: f64,
    pub hours_remaining: f64,
}

pub struct ReportLogic;

impl ReportLogic {
    /// `Timesheet_<YYYYMMDD>.txt`
    pub fn file_name(now: &NaiveDateTime) -> String {
        format!("Timesheet_{}.txt", now.format("%Y%m%d"))
    }

    pub fn generate(pool: &DbPool, user_id: i64, out_dir: &Path) -> AppResult<Timesheet> {
        Self::generate_at(pool, user_id, out_dir, &date::now())
    }

    /// Build the compliance timesheet for `user_id` and write it to
    /// `out_dir`. Re-running on the same day overwrites that day's file.
    pub fn generate_at(
        pool: &DbPool,
        user_id: i64,
        out_dir: &Path,
        now: &NaiveDateTime,
    ) -> AppResult<Timesheet> {
        let profile = load_profile(pool, user_id)?;
        let rows = load_service_logs(pool, user_id)?;

        let total: f64 = rows.iter().map(|r| r.hours_worked).sum();
        let remaining = profile.total_hours_required - total;
        let text = Self::render(&profile, &rows, now);

        if !out_dir.as_os_str().is_empty() {
            fs::create_dir_all(out_dir)?;
        }
        let path = out_dir.join(Self::file_name(now));
        fs::write(&path, &text)?;

        ttlog_quiet(
            &pool.conn,
            "report",
            &path.display().to_string(),
            &format!(
                "{} logs, {} hrs completed",
                rows.len(),
                hours2readable(total)
            ),
        );

        Ok(Timesheet {
            text,
            path,
            rows,
            total_hours_completed: total,
            hours_remaining: remaining,
        })
    }

    fn render_row(row: &ServiceLogRow) -> String {
        let agency = match &row.agency_name {
            Some(name) => name.clone(),
            None => format!("<unknown #{}>", row.agency_id),
        };
        let glyph = if row.is_verified {
            GLYPH_VERIFIED
        } else {
            GLYPH_UNVERIFIED
        };

        format!(
            "{} | {} | {} | {} {}",
            fit_width(&row.service_date, DATE_W),
            fit_width(&agency, AGENCY_W),
            pad_right(&hours2readable(row.hours_worked), HOURS_W),
            row.task_description,
            glyph
        )
    }

    pub fn render(profile: &UserProfile, rows: &[ServiceLogRow], now: &NaiveDateTime) -> String {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);
        let total: f64 = rows.iter().map(|r| r.hours_worked).sum();

        let mut lines = vec![
            heavy.clone(),
            format!("COMMUNITY SERVICE TIMESHEET: {}", profile.full_name),
            format!("DEADLINE: {}", format_date(&profile.deadline_date)),
            format!("GENERATED: {}", now.format("%Y-%m-%d %H:%M")),
            heavy.clone(),
            format!(
                "{} | {} | {} | TASK",
                fit_width("DATE", DATE_W),
                fit_width("AGENCY", AGENCY_W),
                pad_right("HRS", HOURS_W)
            ),
            light.clone(),
        ];

        lines.extend(rows.iter().map(Self::render_row));

        lines.push(light);
        lines.push(format!("TOTAL HOURS COMPLETED: {}", hours2readable(total)));
        lines.push(format!(
            "HOURS REMAINING:       {}",
            hours2readable(profile.total_hours_required - total)
        ));
        lines.push(heavy);
        lines.push(String::new());
        lines.push(String::new());
        lines.push(format!("{}          {}", "_".repeat(30), "_".repeat(30)));
        lines.push(format!("{:<40}{}", "Supervisor Signature", "Date"));

        lines.join("\n")
    }
}
