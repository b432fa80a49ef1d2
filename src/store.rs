//! In-memory task list mirrored to durable storage on every mutation.

use crate::error::{Error, Result};
use crate::repository::Repository;
use crate::task::Task;
use crate::theme::Theme;
use tracing::info;

/// The task list plus the theme preference, backed by an injected
/// [`Repository`]. List order is insertion order, newest first. Ids come
/// from a monotonic counter seeded at load, so they never repeat within
/// one store lifetime.
pub struct TaskStore {
    tasks: Vec<Task>,
    theme: Theme,
    next_id: u64,
    repo: Box<dyn Repository>,
}

impl TaskStore {
    /// Load persisted state and build the store.
    pub fn open(repo: Box<dyn Repository>) -> Result<Self> {
        let tasks = repo.load_tasks()?;
        let theme = repo.load_theme()?;
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        info!("loaded {} tasks, {} theme", tasks.len(), theme);
        Ok(Self {
            tasks,
            theme,
            next_id,
            repo,
        })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Add a task at the front of the list and return its id.
    ///
    /// Both fields are trimmed; an empty description or tasker is rejected
    /// with [`Error::InvalidInput`] and nothing changes.
    pub fn add_task(&mut self, description: &str, tasker: &str) -> Result<u64> {
        let description = description.trim();
        let tasker = tasker.trim();
        if description.is_empty() || tasker.is_empty() {
            return Err(Error::InvalidInput(
                "description and tasker are required".into(),
            ));
        }

        let id = self.next_id;
        self.next_id += 1;
        self.tasks
            .insert(0, Task::new(id, description.to_owned(), tasker.to_owned()));
        self.repo.save_tasks(&self.tasks)?;
        Ok(id)
    }

    /// Flip the completed flag on the matching task. Unknown ids are a
    /// silent no-op and nothing is persisted for them.
    pub fn toggle_complete(&mut self, id: u64) -> Result<bool> {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                self.repo.save_tasks(&self.tasks)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the matching task. The list is persisted whether or not
    /// anything matched; returns true if a task was removed.
    pub fn delete(&mut self, id: u64) -> Result<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        self.repo.save_tasks(&self.tasks)?;
        Ok(removed)
    }

    /// Clear the entire list.
    pub fn delete_all(&mut self) -> Result<()> {
        self.tasks.clear();
        self.repo.save_tasks(&self.tasks)
    }

    /// Persist the current state as-is. Every mutation already saves, so
    /// this is a manual affordance rather than a correctness requirement.
    pub fn save_all(&self) -> Result<()> {
        self.repo.save_tasks(&self.tasks)?;
        self.repo.save_theme(self.theme)
    }

    /// Mark every task completed. Idempotent.
    pub fn select_all(&mut self) -> Result<()> {
        for task in &mut self.tasks {
            task.completed = true;
        }
        self.repo.save_tasks(&self.tasks)
    }

    /// Flip between light and dark, persist the choice, and return the new
    /// value.
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        self.theme = self.theme.toggled();
        self.repo.save_theme(self.theme)?;
        Ok(self.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::JsonFileRepository;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> TaskStore {
        TaskStore::open(Box::new(JsonFileRepository::new(dir.path()))).unwrap()
    }

    #[test]
    fn add_inserts_at_front() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.add_task("Buy milk", "Alice").unwrap();
        store.add_task("Water plants", "Bob").unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.tasks()[0].description, "Water plants");
        assert_eq!(store.tasks()[1].description, "Buy milk");
    }

    #[test]
    fn add_rejects_empty_description() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let err = store.add_task("", "Bob").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn add_rejects_whitespace_only_tasker() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let err = store.add_task("Buy milk", "   ").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn add_trims_both_fields() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.add_task("  Buy milk  ", " Alice ").unwrap();
        assert_eq!(store.tasks()[0].description, "Buy milk");
        assert_eq!(store.tasks()[0].tasker, "Alice");
    }

    #[test]
    fn toggle_flips_only_the_matching_task() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let first = store.add_task("Buy milk", "Alice").unwrap();
        store.add_task("Water plants", "Bob").unwrap();

        assert!(store.toggle_complete(first).unwrap());
        let completed: Vec<bool> = store.tasks().iter().map(|t| t.completed).collect();
        // Newest first, so the untouched task renders before `first`.
        assert_eq!(completed, vec![false, true]);

        assert!(store.toggle_complete(first).unwrap());
        assert!(store.tasks().iter().all(|t| !t.completed));
    }

    #[test]
    fn toggle_unknown_id_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.add_task("Buy milk", "Alice").unwrap();
        assert!(!store.toggle_complete(999).unwrap());
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn delete_removes_exactly_one() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let first = store.add_task("Buy milk", "Alice").unwrap();
        store.add_task("Water plants", "Bob").unwrap();

        assert!(store.delete(first).unwrap());
        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].description, "Water plants");
    }

    #[test]
    fn delete_unknown_id_keeps_list() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.add_task("Buy milk", "Alice").unwrap();
        assert!(!store.delete(999).unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_all_persists_an_empty_list() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.add_task("Buy milk", "Alice").unwrap();
        store.add_task("Water plants", "Bob").unwrap();
        store.delete_all().unwrap();
        assert!(store.is_empty());

        let reloaded = open_store(&dir);
        assert!(reloaded.is_empty());
    }

    #[test]
    fn select_all_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.add_task("Buy milk", "Alice").unwrap();
        store.add_task("Water plants", "Bob").unwrap();

        store.select_all().unwrap();
        assert!(store.tasks().iter().all(|t| t.completed));
        let snapshot: Vec<Task> = store.tasks().to_vec();

        store.select_all().unwrap();
        assert_eq!(store.tasks(), snapshot.as_slice());
    }

    #[test]
    fn save_all_round_trips_through_storage() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.add_task("Buy milk", "Alice").unwrap();
        store.save_all().unwrap();

        let reloaded = open_store(&dir);
        assert_eq!(reloaded.tasks(), store.tasks());
    }

    #[test]
    fn theme_toggle_persists_across_reload() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(store.toggle_theme().unwrap(), Theme::Dark);

        let reloaded = open_store(&dir);
        assert_eq!(reloaded.theme(), Theme::Dark);

        let mut store = reloaded;
        assert_eq!(store.toggle_theme().unwrap(), Theme::Light);
    }

    #[test]
    fn ids_never_repeat_within_a_store_lifetime() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let first = store.add_task("Buy milk", "Alice").unwrap();
        let second = store.add_task("Water plants", "Bob").unwrap();
        store.delete(second).unwrap();
        let third = store.add_task("Walk dog", "Carol").unwrap();

        assert_ne!(third, first);
        assert_ne!(third, second);
    }

    #[test]
    fn id_counter_resumes_past_persisted_ids() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let existing = store.add_task("Buy milk", "Alice").unwrap();

        let mut reloaded = open_store(&dir);
        let fresh = reloaded.add_task("Water plants", "Bob").unwrap();
        assert!(fresh > existing);
    }

    #[test]
    fn state_survives_a_simulated_reload() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.add_task("Buy milk", "Alice").unwrap();
        let id = store.add_task("Water plants", "Bob").unwrap();
        store.toggle_complete(id).unwrap();

        let reloaded = open_store(&dir);
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.tasks()[0].description, "Water plants");
        assert!(reloaded.tasks()[0].completed);
        assert!(!reloaded.tasks()[1].completed);
    }

    #[test]
    fn add_toggle_delete_all_scenario() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let id = store.add_task("Buy milk", "Alice").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].description, "Buy milk");
        assert_eq!(store.tasks()[0].tasker, "Alice");
        assert!(!store.tasks()[0].completed);

        assert!(store.add_task("", "Bob").is_err());
        assert_eq!(store.len(), 1);

        store.toggle_complete(id).unwrap();
        assert!(store.tasks()[0].completed);

        store.delete_all().unwrap();
        assert!(store.is_empty());
    }
}
