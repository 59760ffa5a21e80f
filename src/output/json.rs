use serde_json::{json, Value};

use crate::error::TodoError;
use crate::group::header_label;
use crate::models::{Bucket, Task};

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &TodoError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

/// Pretty-print a JSON envelope to stdout.
pub fn print(value: &Value) {
    println!("{value:#}");
}

pub fn task_json(t: &Task) -> Value {
    json!({
        "id": t.id,
        "name": t.name,
        "completed": t.completed,
        "due_date": t.due_date
    })
}

pub fn bucket_json(b: &Bucket) -> Value {
    let header = header_label(&b.date);
    json!({
        "date": b.date,
        "label": header.as_ref().map(|h| h.label.clone()),
        "weekday": header.as_ref().map(|h| h.weekday.clone()),
        "tasks": b.items.iter().map(task_json).collect::<Vec<_>>()
    })
}

pub fn buckets_json(buckets: &[Bucket]) -> Value {
    Value::Array(buckets.iter().map(bucket_json).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn bucket_carries_header_and_tasks() {
        let mut bucket = Bucket::new("2024-01-05");
        bucket.items.push(Task::new(1, "Buy milk", "2024-01-05"));

        let v = bucket_json(&bucket);
        assert_eq!(v["label"], "Jan 5");
        assert_eq!(v["weekday"], "Fri");
        assert_eq!(v["tasks"][0]["name"], "Buy milk");
        assert_eq!(v["tasks"][0]["completed"], false);
    }

    #[test]
    fn invalid_date_bucket_has_null_label() {
        let v = bucket_json(&Bucket::new("whenever"));
        assert!(v["label"].is_null());
        assert_eq!(v["date"], "whenever");
    }

    #[test]
    fn error_envelope() {
        let v = error(&TodoError::new(ErrorCode::ValidationError, "bad"));
        assert_eq!(v["success"], false);
        assert_eq!(v["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(v["error"]["message"], "bad");
    }
}
