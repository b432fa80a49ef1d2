//! Application directory resolution.
//!
//! Uses the [`dirs`] crate for platform-appropriate locations. All state
//! (tasks, theme, logs) lives under one directory so a single environment
//! variable relocates everything, which is also how tests isolate state.

use std::path::PathBuf;

/// State directory holding `tasks.json`, `theme.json`, and logs.
///
/// Resolves to `dirs::data_dir()/taskdeck` by default. Override with the
/// `TASKDECK_DATA_DIR` environment variable.
#[must_use]
pub fn data_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os("TASKDECK_DATA_DIR") {
        return PathBuf::from(override_dir);
    }
    dirs::data_dir()
        .map(|d| d.join("taskdeck"))
        .unwrap_or_else(|| PathBuf::from("/tmp/taskdeck"))
}

/// Log file directory (`data_dir()/logs`).
#[must_use]
pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}
