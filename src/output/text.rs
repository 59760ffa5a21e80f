use crate::group::header_label;
use crate::models::{Bucket, Task};

pub const EMPTY_LIST_MESSAGE: &str = "No tasks yet. Add one with `todo add <NAME>`.";

pub fn header_line(date: &str) -> String {
    match header_label(date) {
        Some(h) => format!("{}  {}", h.label, h.weekday),
        None => date.to_string(),
    }
}

pub fn task_line(t: &Task) -> String {
    let mark = if t.completed { 'x' } else { ' ' };
    format!("  [{mark}] {} ({})", t.name, t.id)
}

pub fn print_grouped(buckets: &[Bucket]) {
    if buckets.is_empty() {
        println!("{EMPTY_LIST_MESSAGE}");
        return;
    }
    for (i, bucket) in buckets.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", header_line(&bucket.date));
        for t in &bucket.items {
            println!("{}", task_line(t));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_line_marks_completion() {
        let mut t = Task::new(2, "Call dentist", "2024-01-03");
        assert_eq!(task_line(&t), "  [ ] Call dentist (2)");
        t.completed = true;
        assert_eq!(task_line(&t), "  [x] Call dentist (2)");
    }

    #[test]
    fn header_falls_back_to_raw_date() {
        assert_eq!(header_line("2024-01-03"), "Jan 3  Wed");
        assert_eq!(header_line("soon"), "soon");
    }
}
