pub mod by_due_date;
pub mod header;

pub use by_due_date::{group_by_due_date, parse_due_date, DUE_DATE_FORMAT};
pub use header::{header_label, DateHeader};
