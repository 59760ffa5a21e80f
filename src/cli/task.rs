use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use serde_json::{json, Value};

use crate::cli::commands::TaskCommands;
use crate::error::TodoError;
use crate::group::DUE_DATE_FORMAT;
use crate::models::{Bucket, Task, TaskPatch};
use crate::output;
use crate::state::{Toggle, TodoStore};

pub fn run(cmd: TaskCommands, path: &Path, json_output: bool) -> i32 {
    let mut store = TodoStore::open(path);

    // Captures the regrouped view pushed by the store after a change.
    let view: Rc<RefCell<Option<Vec<Bucket>>>> = Rc::default();
    let sink = view.clone();
    store.subscribe(move |buckets| *sink.borrow_mut() = Some(buckets.to_vec()));

    let result = match cmd {
        TaskCommands::Add { name, due } => run_add(&mut store, &name, due),
        TaskCommands::Rename { id, name } => run_rename(&mut store, id, &name),
        TaskCommands::Toggle { id } => Ok(run_toggle(&mut store, id)),
        TaskCommands::Delete { id } => Ok(run_delete(&mut store, id)),
    };

    match result {
        Ok(outcome) => {
            let buckets = view.borrow_mut().take().unwrap_or_else(|| store.grouped());
            if json_output {
                let mut data = outcome.data;
                data["buckets"] = output::json::buckets_json(&buckets);
                output::json::print(&output::json::success(data));
            } else {
                println!("{}", outcome.message);
                if outcome.changed {
                    println!();
                    output::text::print_grouped(&buckets);
                }
            }
            0
        }
        Err(e) => {
            if json_output {
                output::json::print(&output::json::error(&e));
            } else {
                eprintln!("Error: {}", e.message);
            }
            1
        }
    }
}

struct Outcome {
    changed: bool,
    message: String,
    data: Value,
}

impl Outcome {
    fn unchanged(id: u64) -> Self {
        Self {
            changed: false,
            message: format!("No task with id {id}; nothing changed."),
            data: json!({ "changed": false, "task": null }),
        }
    }
}

fn today() -> String {
    chrono::Utc::now()
        .date_naive()
        .format(DUE_DATE_FORMAT)
        .to_string()
}

fn run_add(store: &mut TodoStore, name: &str, due: Option<String>) -> Result<Outcome, TodoError> {
    let due_date = due.unwrap_or_else(today);
    let task = store.add_task(name, &due_date)?;
    Ok(Outcome {
        changed: true,
        message: format!("Added task {}: {} (due {})", task.id, task.name, task.due_date),
        data: json!({ "changed": true, "task": output::json::task_json(&task) }),
    })
}

fn run_rename(store: &mut TodoStore, id: u64, name: &str) -> Result<Outcome, TodoError> {
    let previous = store.find(id).cloned();
    let Some(task) = store.update_task(id, TaskPatch::rename(name))? else {
        return Ok(Outcome::unchanged(id));
    };
    let changed = previous.as_ref() != Some(&task);
    let message = if changed {
        format!("Renamed task {}: {}", task.id, task.name)
    } else {
        format!("Task {} is already named {}; nothing changed.", task.id, task.name)
    };
    Ok(Outcome {
        changed,
        message,
        data: json!({ "changed": changed, "task": output::json::task_json(&task) }),
    })
}

fn run_toggle(store: &mut TodoStore, id: u64) -> Outcome {
    let (action, task): (&str, Task) = match store.toggle_task(id) {
        Toggle::Completed(task) => ("completed", task),
        Toggle::Deleted(task) => ("deleted", task),
        Toggle::NotFound => {
            let mut outcome = Outcome::unchanged(id);
            outcome.data["action"] = json!("none");
            return outcome;
        }
    };
    Outcome {
        changed: true,
        message: format!("Task {} {action}: {}", task.id, task.name),
        data: json!({
            "changed": true,
            "action": action,
            "task": output::json::task_json(&task)
        }),
    }
}

fn run_delete(store: &mut TodoStore, id: u64) -> Outcome {
    match store.delete_task(id) {
        Some(task) => Outcome {
            changed: true,
            message: format!("Deleted task {}: {}", task.id, task.name),
            data: json!({ "changed": true, "task": output::json::task_json(&task) }),
        },
        None => Outcome::unchanged(id),
    }
}
