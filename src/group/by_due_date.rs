use chrono::NaiveDate;

use crate::models::{Bucket, Task};

pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Only the canonical zero-padded form parses; `2024-1-5`, ` 2024-01-05`
/// and `+2024-01-05` are rejected so one day never spans two buckets.
pub fn parse_due_date(date: &str) -> Option<NaiveDate> {
    let day = NaiveDate::parse_from_str(date, DUE_DATE_FORMAT).ok()?;
    (day.format(DUE_DATE_FORMAT).to_string() == date).then_some(day)
}

/// Group tasks by their exact `due_date` string and order the groups by
/// calendar date.
///
/// Tasks inside a bucket keep their list order. Unparseable dates sort after
/// every valid one and, among themselves, keep first-encounter order.
pub fn group_by_due_date(tasks: &[Task]) -> Vec<Bucket> {
    let mut buckets: Vec<Bucket> = Vec::new();

    for task in tasks {
        match buckets.iter_mut().find(|b| b.date == task.due_date) {
            Some(bucket) => bucket.items.push(task.clone()),
            None => {
                let mut bucket = Bucket::new(task.due_date.clone());
                bucket.items.push(task.clone());
                buckets.push(bucket);
            }
        }
    }

    // (false, Some(_)) < (true, None): invalid dates last, stable among themselves
    buckets.sort_by_cached_key(|b| {
        let parsed = parse_due_date(&b.date);
        (parsed.is_none(), parsed)
    });
    buckets
}
