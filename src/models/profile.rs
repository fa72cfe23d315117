use chrono::NaiveDate;

/// The (single) person whose service hours are tracked.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub user_id: i64,
    pub full_name: String,
    pub total_hours_required: f64,
    pub deadline_date: NaiveDate,
    pub created_at: String,
}
