use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::error::TodoError;
use crate::models::{Task, TodoDocument};

/// Borrowing twin of `TodoDocument` so saving never clones the list.
#[derive(Serialize)]
struct DocumentRef<'a> {
    todos: &'a [Task],
}

pub fn exists(path: &Path) -> bool {
    path.is_file()
}

/// Read and parse the `{ "todos": [...] }` document at `path`.
pub fn load(path: &Path) -> Result<Vec<Task>, TodoError> {
    let content = fs::read_to_string(path).map_err(|e| TodoError::read(path, e))?;
    let document: TodoDocument =
        serde_json::from_str(&content).map_err(|e| TodoError::parse(path, e))?;
    Ok(document.todos)
}

/// Serialize `todos` and replace whatever is at `path`.
pub fn save(path: &Path, todos: &[Task]) -> Result<(), TodoError> {
    let content = serde_json::to_string_pretty(&DocumentRef { todos })
        .map_err(|e| TodoError::write(path, e))?;
    atomic_write(path, content.as_bytes()).map_err(|e| TodoError::write(path, e))
}

/// Write `content` to `path` atomically using a temp file + rename.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
