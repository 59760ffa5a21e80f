use std::path::{Path, PathBuf};

/// Fixed name of the single per-installation document.
pub const DATA_FILE_NAME: &str = "data.json";

const APP_DIR_NAME: &str = "todolist";

/// Directory holding the data file: `<platform data dir>/todolist`,
/// or the current directory when the platform reports none.
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the path to the data file, honouring an explicit override.
pub fn data_file(override_path: Option<&Path>) -> PathBuf {
    match override_path {
        Some(path) => path.to_path_buf(),
        None => data_dir().join(DATA_FILE_NAME),
    }
}
