use chrono::{Local, NaiveDate, NaiveDateTime};

pub const DATE_FMT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FMT).ok()
}

pub fn format_date(d: &NaiveDate) -> String {
    d.format(DATE_FMT).to_string()
}

/// Round to `places` decimal digits.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Days (with fraction) from `now` until the start of `deadline`.
/// Negative once the deadline has passed.
pub fn days_until(deadline: &NaiveDate, now: &NaiveDateTime) -> f64 {
    let secs = (deadline.and_time(chrono::NaiveTime::MIN) - *now).num_seconds();
    round_to(secs as f64 / 86_400.0, 2)
}
