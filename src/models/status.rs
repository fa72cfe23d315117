use std::fmt;

/// Hours per day needed to hit the goal exactly by the deadline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BurnRate {
    /// Hours per remaining day, rounded to one decimal.
    PerDay(f64),
    /// No days left: a rate cannot be computed.
    DeadlinePassed,
}

impl BurnRate {
    pub fn hours_per_day(&self) -> Option<f64> {
        match self {
            BurnRate::PerDay(r) => Some(*r),
            BurnRate::DeadlinePassed => None,
        }
    }
}

impl fmt::Display for BurnRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BurnRate::PerDay(r) => write!(f, "{:.1} hrs/day needed", r),
            BurnRate::DeadlinePassed => write!(f, "CRITICAL (Deadline Passed)"),
        }
    }
}

/// Snapshot of progress towards the goal. `remaining` and `days_left`
/// are signed: over-logging and missed deadlines stay visible.
#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub goal: f64,
    pub completed: f64,
    pub remaining: f64,
    pub days_left: f64,
    pub burn_rate: BurnRate,
}
