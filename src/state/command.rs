use std::collections::HashSet;

use crate::models::{Task, TaskPatch};

/// Intents accepted by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the whole list (initial load).
    Set(Vec<Task>),
    Add { name: String, due_date: String },
    Update { id: u64, patch: TaskPatch },
    Delete { id: u64 },
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Set(_) => "set",
            Self::Add { .. } => "add",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
        }
    }
}

/// Id for the next task: one past the current maximum, or 1 for an empty list.
/// `None` once the maximum is `u64::MAX`.
pub fn next_id(todos: &[Task]) -> Option<u64> {
    match todos.iter().map(|t| t.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

/// Pure transition from one list to the next.
///
/// `Update`/`Delete` on a missing id, `Add` with an empty name and `Add` with
/// no id left return the list unchanged. `Set` keeps the first task seen for each id.
pub fn apply(todos: &[Task], command: Command) -> Vec<Task> {
    match command {
        Command::Set(list) => {
            let mut seen = HashSet::new();
            list.into_iter().filter(|t| seen.insert(t.id)).collect()
        }
        Command::Add { name, due_date } => {
            let mut next = todos.to_vec();
            match next_id(todos) {
                Some(id) if !name.is_empty() => next.push(Task::new(id, name, due_date)),
                _ => {}
            }
            next
        }
        Command::Update { id, patch } => todos
            .iter()
            .cloned()
            .map(|mut task| {
                if task.id == id {
                    task.apply_patch(&patch);
                }
                task
            })
            .collect(),
        Command::Delete { id } => todos.iter().filter(|t| t.id != id).cloned().collect(),
    }
}
