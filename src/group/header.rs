use serde::Serialize;

use super::parse_due_date;

/// Display pieces for a bucket header, e.g. `Jan 5` / `Fri`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateHeader {
    pub label: String,
    pub weekday: String,
}

/// `None` when `date` is not a valid `YYYY-MM-DD`; callers show the raw string.
pub fn header_label(date: &str) -> Option<DateHeader> {
    let day = parse_due_date(date)?;
    Some(DateHeader {
        label: day.format("%b %-d").to_string(),
        weekday: day.format("%a").to_string(),
    })
}
