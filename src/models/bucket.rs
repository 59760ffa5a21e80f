use serde::Serialize;

use super::Task;

/// Tasks sharing one `due_date` string. Derived on every read, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub date: String,
    pub items: Vec<Task>,
}

impl Bucket {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            items: Vec::new(),
        }
    }
}
