//! Task store backed by a single JSON file.
//!
//! The file holds an array of [`RawTask`] records. Every record goes through
//! [`normalize_task`] on the way in and out, so the rest of the crate only
//! ever sees valid [`Task`]s.

use super::TaskSource;
use crate::errors::AppResult;
use crate::models::task::{RawTask, Task, normalize_task};
use log::{debug, warn};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub struct JsonTaskStore {
    path: PathBuf,
}

impl JsonTaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load and normalize all tasks.
    ///
    /// A missing file is an empty store. A file that is not a JSON array is
    /// logged and treated as empty; individual invalid records are dropped.
    /// Records stored without an id get one here, and the file is rewritten
    /// so later loads see the same id.
    pub fn load(&self) -> AppResult<Vec<Task>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let loaded = parse_tasks(&content, &self.path);
        if loaded.assigned_ids > 0 {
            debug!(
                "assigned ids to {} stored task(s) in {}",
                loaded.assigned_ids,
                self.path.display()
            );
            self.save(&loaded.tasks)?;
        }
        Ok(loaded.tasks)
    }

    pub fn save(&self, tasks: &[Task]) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let raws: Vec<RawTask> = tasks.iter().map(Task::to_raw).collect();
        let json = serde_json::to_string_pretty(&raws)?;
        fs::write(&self.path, json)?;
        debug!("saved {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }

    /// Import `seed` unless the store file already exists.
    ///
    /// An unreadable or malformed seed leaves an empty store behind.
    pub fn seed_from_file_if_empty(&self, seed: Option<&Path>) -> AppResult<Vec<Task>> {
        if self.path.exists() {
            return self.load();
        }

        let tasks = match seed {
            Some(seed_path) => match read_seed(seed_path) {
                Ok(tasks) => tasks,
                Err(e) => {
                    warn!(
                        "seed data unavailable at {}: {e}; starting with empty tasks",
                        seed_path.display()
                    );
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        self.save(&tasks)?;
        Ok(tasks)
    }

    /// Drop the current store and seed it again.
    pub fn reset_to_seed(&self, seed: Option<&Path>) -> AppResult<Vec<Task>> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        self.seed_from_file_if_empty(seed)
    }
}

impl TaskSource for JsonTaskStore {
    fn get_tasks(&self) -> AppResult<Vec<Task>> {
        self.load()
    }
}

fn read_seed(path: &Path) -> AppResult<Vec<Task>> {
    let content = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)?;
    if !value.is_array() {
        return Err(crate::errors::AppError::Other(
            "seed file did not contain an array".into(),
        ));
    }
    Ok(normalize_values(value, path).tasks)
}

/// Normalized records plus how many of them had no stored id.
#[derive(Default)]
struct Loaded {
    tasks: Vec<Task>,
    assigned_ids: usize,
}

fn parse_tasks(content: &str, origin: &Path) -> Loaded {
    match serde_json::from_str::<Value>(content) {
        Ok(value) if value.is_array() => normalize_values(value, origin),
        Ok(_) => {
            warn!("{} does not contain a task array; ignoring it", origin.display());
            Loaded::default()
        }
        Err(e) => {
            warn!("could not parse saved tasks in {}: {e}", origin.display());
            Loaded::default()
        }
    }
}

fn normalize_values(value: Value, origin: &Path) -> Loaded {
    let Value::Array(items) = value else {
        return Loaded::default();
    };

    let total = items.len();
    let mut assigned_ids = 0;
    let tasks: Vec<Task> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<RawTask>(item).ok())
        .filter_map(|raw| {
            let task = normalize_task(&raw)?;
            if raw.id.as_deref().is_none_or(str::is_empty) {
                assigned_ids += 1;
            }
            Some(task)
        })
        .collect();

    if tasks.len() < total {
        warn!(
            "dropped {} invalid task record(s) from {}",
            total - tasks.len(),
            origin.display()
        );
    }
    Loaded {
        tasks,
        assigned_ids,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::status::TaskStatus;
    use crate::utils::date::parse_datetime;

    fn sample(title: &str) -> Task {
        Task::new(
            title,
            "",
            parse_datetime("2024-01-01T09:00").unwrap(),
            parse_datetime("2024-01-01T10:00").unwrap(),
            TaskStatus::Backlog,
        )
        .unwrap()
    }

    #[test]
    fn missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonTaskStore::new(dir.path().join("tasks.json"));
        assert!(store.load().unwrap().is_empty());
        assert!(!store.exists());
    }

    #[test]
    fn save_then_load_preserves_tasks() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonTaskStore::new(dir.path().join("nested/tasks.json"));
        let tasks = vec![sample("one"), sample("two")];
        store.save(&tasks).unwrap();
        assert_eq!(store.get_tasks().unwrap(), tasks);
    }

    #[test]
    fn invalid_records_are_dropped_and_garbage_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(
            &path,
            r#"[
                {"id":"ok","title":"Ok","start_datetime":"2024-01-01T09:00","end_datetime":"2024-01-01T10:00"},
                {"id":"rev","title":"Reversed","start_datetime":"2024-01-01T11:00","end_datetime":"2024-01-01T10:00"},
                42
            ]"#,
        )
        .unwrap();
        let store = JsonTaskStore::new(&path);
        let tasks = store.load().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, "ok");

        fs::write(&path, "{not json").unwrap();
        assert!(store.load().unwrap().is_empty());
        fs::write(&path, r#"{"id":"x"}"#).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn generated_ids_are_stable_across_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(
            &path,
            r#"[
                {"title":"No id","start_datetime":"2024-01-01T09:00","end_datetime":"2024-01-01T10:00"},
                {"id":"","title":"Empty id","start_datetime":"2024-01-02T09:00","end_datetime":"2024-01-02T10:00"},
                {"id":"kept","title":"Kept","start_datetime":"2024-01-03T09:00","end_datetime":"2024-01-03T10:00"}
            ]"#,
        )
        .unwrap();
        let store = JsonTaskStore::new(&path);

        let first = store.load().unwrap();
        let second = store.load().unwrap();
        assert_eq!(first, second);
        assert!(first[0].id.starts_with("task_"));
        assert_ne!(first[0].id, first[1].id);
        assert_eq!(first[2].id, "kept");

        let on_disk: Vec<RawTask> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk[0].id.as_deref(), Some(first[0].id.as_str()));
    }

    #[test]
    fn load_without_missing_ids_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let original = r#"[{"id":"a","title":"A","start_datetime":"2024-01-01T09:00","end_datetime":"2024-01-01T10:00"}]"#;
        fs::write(&path, original).unwrap();

        JsonTaskStore::new(&path).load().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn seeding_only_happens_once() {
        let dir = tempfile::tempdir().unwrap();
        let seed = dir.path().join("seed.json");
        fs::write(
            &seed,
            r#"[{"title":"Seeded","start_date":"2024-01-02","end_date":"2024-01-02","status":"done"}]"#,
        )
        .unwrap();
        let store = JsonTaskStore::new(dir.path().join("tasks.json"));

        let first = store.seed_from_file_if_empty(Some(&seed)).unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].status, TaskStatus::Done);

        store.save(&[]).unwrap();
        assert!(store.seed_from_file_if_empty(Some(&seed)).unwrap().is_empty());

        let reset = store.reset_to_seed(Some(&seed)).unwrap();
        assert_eq!(reset.len(), 1);
        assert_eq!(reset[0].title, "Seeded");
    }

    #[test]
    fn unavailable_seed_leaves_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonTaskStore::new(dir.path().join("tasks.json"));
        let tasks = store
            .seed_from_file_if_empty(Some(&dir.path().join("missing.json")))
            .unwrap();
        assert!(tasks.is_empty());
        assert!(store.exists());
    }
}
