use chrono::{DateTime, Utc};

const DAYS_PER_WEEK: i64 = 7;
const DAYS_PER_MONTH: i64 = 30;
const DAYS_PER_YEAR: i64 = 365;

/// Day-granularity relative date, matching the dashboard's labels.
///
/// The unit boundaries sit exactly at 7, 30 and 365 days: the 7th day
/// renders as "1 weeks ago", never "7 days ago". Future timestamps
/// clamp to "today".
pub fn relative_date(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - then).num_days().max(0);
    match days {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        d if d < DAYS_PER_WEEK => format!("{d} days ago"),
        d if d < DAYS_PER_MONTH => format!("{} weeks ago", d / DAYS_PER_WEEK),
        d if d < DAYS_PER_YEAR => format!("{} months ago", d / DAYS_PER_MONTH),
        d => format!("{} years ago", d / DAYS_PER_YEAR),
    }
}
