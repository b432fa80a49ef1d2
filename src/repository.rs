//! Durable storage for tasks and the theme preference.
//!
//! The whole state is re-serialized on every save. The two persisted keys
//! map to two JSON files in a single directory.

use crate::error::{Error, Result};
use crate::task::Task;
use crate::theme::Theme;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

const TASKS_FILE: &str = "tasks.json";
const THEME_FILE: &str = "theme.json";

/// Storage abstraction over the two persisted keys. Swapping the medium
/// (file, embedded database, remote service) only touches this trait.
pub trait Repository {
    fn load_tasks(&self) -> Result<Vec<Task>>;
    fn save_tasks(&self, tasks: &[Task]) -> Result<()>;
    fn load_theme(&self) -> Result<Theme>;
    fn save_theme(&self, theme: Theme) -> Result<()>;
}

/// JSON-file-backed repository rooted at one directory.
pub struct JsonFileRepository {
    dir: PathBuf,
}

impl JsonFileRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Missing files yield the default; malformed content is discarded with
    /// a warning rather than refusing to start.
    fn read_or_default<T: DeserializeOwned + Default>(&self, file: &str) -> Result<T> {
        let path = self.dir.join(file);
        if !path.exists() {
            return Ok(T::default());
        }
        let data = fs::read_to_string(&path)?;
        match serde_json::from_str(&data) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!("discarding malformed {}: {err}", path.display());
                Ok(T::default())
            }
        }
    }

    fn write_atomic(&self, file: &str, json: String) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let dest = self.dir.join(file);
        // Write to a temp file then rename (atomic on the same filesystem).
        let tmp = dest.with_extension("json.part");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &dest)?;
        Ok(())
    }
}

impl Repository for JsonFileRepository {
    fn load_tasks(&self) -> Result<Vec<Task>> {
        self.read_or_default(TASKS_FILE)
    }

    fn save_tasks(&self, tasks: &[Task]) -> Result<()> {
        let json =
            serde_json::to_string_pretty(tasks).map_err(|e| Error::Storage(e.to_string()))?;
        self.write_atomic(TASKS_FILE, json)
    }

    fn load_theme(&self) -> Result<Theme> {
        self.read_or_default(THEME_FILE)
    }

    fn save_theme(&self, theme: Theme) -> Result<()> {
        let json = serde_json::to_string(&theme).map_err(|e| Error::Storage(e.to_string()))?;
        self.write_atomic(THEME_FILE, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repo(dir: &TempDir) -> JsonFileRepository {
        JsonFileRepository::new(dir.path())
    }

    #[test]
    fn missing_tasks_file_loads_empty_list() {
        let dir = TempDir::new().unwrap();
        assert!(repo(&dir).load_tasks().unwrap().is_empty());
    }

    #[test]
    fn missing_theme_file_loads_light() {
        let dir = TempDir::new().unwrap();
        assert_eq!(repo(&dir).load_theme().unwrap(), Theme::Light);
    }

    #[test]
    fn malformed_tasks_file_falls_back_to_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(TASKS_FILE), "not json at all").unwrap();
        assert!(repo(&dir).load_tasks().unwrap().is_empty());
    }

    #[test]
    fn malformed_theme_file_falls_back_to_light() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(THEME_FILE), "\"sepia\"").unwrap();
        assert_eq!(repo(&dir).load_theme().unwrap(), Theme::Light);
    }

    #[test]
    fn tasks_survive_save_and_load() {
        let dir = TempDir::new().unwrap();
        let tasks = vec![
            Task::new(2, "Water plants".into(), "Bob".into()),
            Task::new(1, "Buy milk".into(), "Alice".into()),
        ];
        repo(&dir).save_tasks(&tasks).unwrap();
        let loaded = repo(&dir).load_tasks().unwrap();
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn theme_survives_save_and_load() {
        let dir = TempDir::new().unwrap();
        repo(&dir).save_theme(Theme::Dark).unwrap();
        assert_eq!(repo(&dir).load_theme().unwrap(), Theme::Dark);
    }

    #[test]
    fn save_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = JsonFileRepository::new(dir.path().join("state"));
        nested.save_tasks(&[]).unwrap();
        assert!(dir.path().join("state").join(TASKS_FILE).exists());
    }

    #[test]
    fn save_does_not_leave_temp_file_behind() {
        let dir = TempDir::new().unwrap();
        repo(&dir).save_theme(Theme::Dark).unwrap();
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "part"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
