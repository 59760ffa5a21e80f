use serde::{Deserialize, Serialize};

/// A single to-do item as it appears in `data.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    #[serde(rename = "task_name")]
    pub name: String,
    #[serde(default)]
    pub completed: bool,
    /// `YYYY-MM-DD`, kept verbatim so grouping can key on the exact string
    pub due_date: String,
}

impl Task {
    pub fn new(id: u64, name: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            completed: false,
            due_date: due_date.into(),
        }
    }

    /// Merge the fields present in `patch`, leaving the rest untouched.
    pub fn apply_patch(&mut self, patch: &TaskPatch) {
        if let Some(ref name) = patch.name {
            self.name = name.clone();
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(ref due_date) = patch.due_date {
            self.due_date = due_date.clone();
        }
    }
}

/// Partial update for a task. `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub name: Option<String>,
    pub completed: Option<bool>,
    pub due_date: Option<String>,
}

impl TaskPatch {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }
}

/// On-disk envelope: `{ "todos": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDocument {
    pub todos: Vec<Task>,
}
