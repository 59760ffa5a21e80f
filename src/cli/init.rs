use std::path::Path;

use serde_json::json;

use crate::output;
use crate::state::TodoStore;

pub fn run(path: &Path, json_output: bool) -> i32 {
    let store = TodoStore::open(path);
    let count = store.todos().len();

    if json_output {
        output::json::print(&output::json::success(json!({
            "path": store.path().to_string_lossy(),
            "tasks": count
        })));
    } else {
        println!("Using {} ({count} tasks)", store.path().display());
    }
    0
}
