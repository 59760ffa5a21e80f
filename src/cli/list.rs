use std::path::Path;

use serde_json::json;

use crate::output;
use crate::state::TodoStore;

pub fn run(path: &Path, json_output: bool) -> i32 {
    let store = TodoStore::open(path);
    let buckets = store.grouped();

    if json_output {
        output::json::print(&output::json::success(json!({
            "buckets": output::json::buckets_json(&buckets),
            "total": store.todos().len()
        })));
    } else {
        output::text::print_grouped(&buckets);
    }
    0
}
