use chrono::{DateTime, Months, NaiveDate, Utc};

/// Source of "now" for record timestamps, seed dates and goal math.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Shifts `instant` by a signed number of calendar months.
///
/// Days past the end of the target month are clamped to its last day.
pub fn shift_months(instant: DateTime<Utc>, months: i32) -> DateTime<Utc> {
    let magnitude = Months::new(months.unsigned_abs());
    let shifted = if months >= 0 {
        instant.checked_add_months(magnitude)
    } else {
        instant.checked_sub_months(magnitude)
    };
    shifted.unwrap_or(instant)
}
