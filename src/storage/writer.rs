use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use crate::models::Task;

use super::file;

/// Sink for full-list snapshots produced by the store.
///
/// Implementations must not block the caller on I/O failures: a failed
/// persist is logged and dropped, the in-memory list stays authoritative.
pub trait Persist {
    fn persist(&self, todos: &[Task]);
}

/// Single background writer owning one data file.
///
/// Snapshots are queued and written in order; when several are queued at
/// once only the newest is written. Dropping the writer closes the queue and
/// waits for the last snapshot to reach disk.
pub struct PersistWriter {
    path: PathBuf,
    tx: Option<Sender<Vec<Task>>>,
    handle: Option<JoinHandle<()>>,
}

impl PersistWriter {
    pub fn spawn(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (tx, rx) = mpsc::channel();
        let thread_path = path.clone();

        let spawned = thread::Builder::new()
            .name("todolist-writer".into())
            .spawn(move || run_writer(&thread_path, rx));

        match spawned {
            Ok(handle) => Self {
                path,
                tx: Some(tx),
                handle: Some(handle),
            },
            Err(e) => {
                tracing::warn!(
                    target: "todolist::storage",
                    error = %e,
                    "Could not start writer thread, persisting synchronously"
                );
                Self {
                    path,
                    tx: None,
                    handle: None,
                }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save_now(&self, todos: &[Task]) {
        if let Err(e) = file::save(&self.path, todos) {
            tracing::error!(target: "todolist::storage", "{e}");
        }
    }
}

impl Persist for PersistWriter {
    fn persist(&self, todos: &[Task]) {
        match self.tx {
            Some(ref tx) => {
                if let Err(mpsc::SendError(snapshot)) = tx.send(todos.to_vec()) {
                    tracing::warn!(
                        target: "todolist::storage",
                        "Writer thread gone, persisting synchronously"
                    );
                    self.save_now(&snapshot);
                }
            }
            None => self.save_now(todos),
        }
    }
}

impl Drop for PersistWriter {
    fn drop(&mut self) {
        self.tx.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::error!(target: "todolist::storage", "Writer thread panicked");
            }
        }
    }
}

fn run_writer(path: &Path, rx: Receiver<Vec<Task>>) {
    while let Ok(mut snapshot) = rx.recv() {
        let mut skipped = 0usize;
        while let Ok(newer) = rx.try_recv() {
            snapshot = newer;
            skipped += 1;
        }

        match file::save(path, &snapshot) {
            Ok(()) => tracing::debug!(
                target: "todolist::storage",
                path = %path.display(),
                tasks = snapshot.len(),
                skipped,
                "Persisted task list"
            ),
            Err(e) => tracing::error!(
                target: "todolist::storage",
                path = %path.display(),
                "Persist failed: {e}"
            ),
        }
    }
}
