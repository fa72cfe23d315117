use crate::db::pool::DbPool;
use crate::db::queries::{load_profile, total_hours};
use crate::errors::AppResult;
use crate::models::status::{BurnRate, Status};
use crate::utils::colors::{RED, RESET, color_for_remaining};
use crate::utils::date::{self, days_until, round_to};
use crate::utils::hours2readable;
use chrono::NaiveDateTime;

/// Burn-rate computation for the `--status` flag and menu option 1.
pub struct StatusLogic;

impl StatusLogic {
    pub fn compute(pool: &DbPool, user_id: i64) -> AppResult<Status> {
        Self::compute_at(pool, user_id, &date::now())
    }

    /// Same as [`StatusLogic::compute`] with an explicit "now".
    pub fn compute_at(pool: &DbPool, user_id: i64, now: &NaiveDateTime) -> AppResult<Status> {
        let profile = load_profile(pool, user_id)?;
        let completed = total_hours(pool, user_id)?;

        let goal = profile.total_hours_required;
        let remaining = goal - completed;
        let days_left = days_until(&profile.deadline_date, now);

        let burn_rate = if days_left > 0.0 {
            BurnRate::PerDay(round_to(remaining / days_left, 1))
        } else {
            BurnRate::DeadlinePassed
        };

        Ok(Status {
            goal,
            completed,
            remaining,
            days_left,
            burn_rate,
        })
    }

    pub fn render(status: &Status) -> String {
        let rate = match status.burn_rate {
            BurnRate::PerDay(_) => status.burn_rate.to_string(),
            BurnRate::DeadlinePassed => format!("{RED}{}{RESET}", status.burn_rate),
        };

        let lines = [
            "--- 🚨 STATUS REPORT ---".to_string(),
            format!("Goal:      {} hrs", hours2readable(status.goal)),
            format!("Completed: {} hrs", hours2readable(status.completed)),
            format!(
                "Remaining: {}{} hrs{}",
                color_for_remaining(status.remaining),
                hours2readable(status.remaining),
                RESET
            ),
            format!("Days Left: {:.2}", status.days_left),
            format!("BURN RATE: {}", rate),
            "------------------------".to_string(),
        ];
        lines.join("\n")
    }
}
