use std::path::{Path, PathBuf};

use crate::error::TodoError;
use crate::group::{group_by_due_date, parse_due_date};
use crate::models::{Bucket, Task, TaskPatch};
use crate::storage::{file, Persist, PersistWriter};

use super::command::{self, Command};

/// Callback receiving the regrouped view after every change.
pub type Observer = Box<dyn FnMut(&[Bucket])>;

/// Result of the completion toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle {
    /// The task was open and is now completed.
    Completed(Task),
    /// The task was already completed and has been removed.
    Deleted(Task),
    NotFound,
}

/// Authoritative in-memory task list.
///
/// Every change is handed to the persistence sink as a full snapshot and
/// then broadcast to observers. Persistence never fails a command.
pub struct TodoStore<P: Persist = PersistWriter> {
    todos: Vec<Task>,
    persist: P,
    observers: Vec<Observer>,
}

impl TodoStore<PersistWriter> {
    /// Load the data file at `path`, or create it with an empty list.
    ///
    /// An unreadable or malformed file is logged and replaced by an empty
    /// list.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let loaded = if file::exists(&path) {
            match file::load(&path) {
                Ok(todos) => Some(todos),
                Err(e) => {
                    tracing::warn!(
                        target: "todolist::state",
                        code = e.code.as_str(),
                        "{e}; starting with an empty list"
                    );
                    None
                }
            }
        } else {
            tracing::debug!(
                target: "todolist::state",
                path = %path.display(),
                "No data file yet, initialising"
            );
            None
        };

        let mut store = Self::with_persist(PersistWriter::spawn(&path));
        match loaded {
            Some(todos) => {
                let count = todos.len();
                store.todos = command::apply(&[], Command::Set(todos));
                // Only rewrite the file if loading had to drop duplicates.
                if store.todos.len() != count {
                    tracing::warn!(
                        target: "todolist::state",
                        dropped = count - store.todos.len(),
                        "Dropped tasks with duplicate ids"
                    );
                    store.persist.persist(&store.todos);
                }
            }
            None => store.persist.persist(&store.todos),
        }

        tracing::debug!(
            target: "todolist::state",
            tasks = store.todos.len(),
            "Store initialised"
        );
        store
    }

    pub fn path(&self) -> &Path {
        self.persist.path()
    }
}

impl<P: Persist> TodoStore<P> {
    pub fn with_persist(persist: P) -> Self {
        Self {
            todos: Vec::new(),
            persist,
            observers: Vec::new(),
        }
    }

    pub fn todos(&self) -> &[Task] {
        &self.todos
    }

    pub fn find(&self, id: u64) -> Option<&Task> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn grouped(&self) -> Vec<Bucket> {
        group_by_due_date(&self.todos)
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&[Bucket]) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Apply `command`; persist and notify if the list changed.
    /// Returns whether anything changed.
    pub fn dispatch(&mut self, command: Command) -> bool {
        let kind = command.as_str();
        let next = command::apply(&self.todos, command);
        if next == self.todos {
            tracing::debug!(target: "todolist::state", command = kind, "No change");
            return false;
        }

        self.todos = next;
        tracing::debug!(
            target: "todolist::state",
            command = kind,
            tasks = self.todos.len(),
            "Applied command"
        );
        self.persist.persist(&self.todos);
        self.notify();
        true
    }

    pub fn add_task(&mut self, name: &str, due_date: &str) -> Result<Task, TodoError> {
        validate_name(name)?;
        validate_due_date(due_date)?;

        let id = command::next_id(&self.todos)
            .ok_or_else(|| TodoError::validation("Task id space exhausted"))?;
        self.dispatch(Command::Add {
            name: name.to_string(),
            due_date: due_date.to_string(),
        });
        self.find(id).cloned().ok_or_else(|| TodoError::not_found(id))
    }

    /// `Ok(None)` when no task has `id`; that case is a no-op, not an error.
    pub fn update_task(&mut self, id: u64, patch: TaskPatch) -> Result<Option<Task>, TodoError> {
        if let Some(ref name) = patch.name {
            validate_name(name)?;
        }
        if let Some(ref due_date) = patch.due_date {
            validate_due_date(due_date)?;
        }
        if self.find(id).is_none() {
            log_missing(id);
            return Ok(None);
        }

        self.dispatch(Command::Update { id, patch });
        Ok(self.find(id).cloned())
    }

    pub fn delete_task(&mut self, id: u64) -> Option<Task> {
        let Some(task) = self.find(id).cloned() else {
            log_missing(id);
            return None;
        };
        self.dispatch(Command::Delete { id });
        Some(task)
    }

    /// First press completes the task, a press on a completed task deletes it.
    pub fn toggle_task(&mut self, id: u64) -> Toggle {
        match self.find(id).map(|t| t.completed) {
            None => {
                log_missing(id);
                Toggle::NotFound
            }
            Some(true) => match self.delete_task(id) {
                Some(task) => Toggle::Deleted(task),
                None => Toggle::NotFound,
            },
            Some(false) => {
                self.dispatch(Command::Update {
                    id,
                    patch: TaskPatch::completed(true),
                });
                match self.find(id) {
                    Some(task) => Toggle::Completed(task.clone()),
                    None => Toggle::NotFound,
                }
            }
        }
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let buckets = group_by_due_date(&self.todos);
        for observer in &mut self.observers {
            observer(&buckets);
        }
    }
}

fn validate_name(name: &str) -> Result<(), TodoError> {
    if name.trim().is_empty() {
        return Err(TodoError::validation("Task name must not be empty"));
    }
    Ok(())
}

fn validate_due_date(due_date: &str) -> Result<(), TodoError> {
    if parse_due_date(due_date).is_none() {
        return Err(TodoError::validation(format!(
            "Invalid due date '{due_date}', expected YYYY-MM-DD"
        )));
    }
    Ok(())
}

fn log_missing(id: u64) {
    tracing::debug!(
        target: "todolist::state",
        "{}; ignoring",
        TodoError::not_found(id)
    );
}
