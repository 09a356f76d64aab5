use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use super::{Loaded, TaskRepository, codec};
use crate::domain::store::TaskList;

/// Flat-file store. Every save rewrites the whole file and there is no locking,
/// so two invocations racing on the same file end up last-writer-wins.
pub struct FileTaskRepo {
    path: PathBuf,
}

impl FileTaskRepo {
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskRepository for FileTaskRepo {
    fn load(&self) -> Result<Loaded> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "tasks file missing, starting empty");
            return Ok(Loaded::default());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read tasks file {}", self.path.display()))?;
        let loaded = codec::decode(&content);
        for problem in &loaded.skipped {
            debug!(path = %self.path.display(), "skipped: {problem}");
        }
        debug!(
            pending = loaded.tasks.pending.len(),
            completed = loaded.tasks.completed.len(),
            "loaded tasks"
        );
        Ok(loaded)
    }

    fn save(&mut self, tasks: &TaskList) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }
        std::fs::write(&self.path, codec::encode(tasks))
            .with_context(|| format!("failed to write tasks file {}", self.path.display()))?;
        debug!(path = %self.path.display(), "saved tasks");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileTaskRepo::open(dir.path().join("tasks.txt"));
        let loaded = repo.load().unwrap();
        assert_eq!(loaded.tasks, TaskList::default());
        assert!(loaded.skipped.is_empty());
    }

    #[test]
    fn file_repo_round_trip() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let mut repo = FileTaskRepo::open(tmp.path());

        let mut tasks = TaskList::default();
        tasks.add("hello", "high", Some("2024-03-01"));
        tasks.add("world", "low", None);
        tasks.complete(2).unwrap();
        repo.save(&tasks).unwrap();

        assert_eq!(
            std::fs::read_to_string(repo.path()).unwrap(),
            "hello | High | 2024-03-01\n[Completed] world | Low | No Due Date\n"
        );
        assert_eq!(repo.load().unwrap().tasks, tasks);
    }

    #[test]
    fn save_overwrites_previous_content() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "a | Low | No Due Date\nb | Low | No Due Date\n").unwrap();
        let mut repo = FileTaskRepo::open(tmp.path());

        let mut tasks = repo.load().unwrap().tasks;
        tasks.delete(1, crate::domain::task::Category::Pending).unwrap();
        repo.save(&tasks).unwrap();

        assert_eq!(
            std::fs::read_to_string(tmp.path()).unwrap(),
            "b | Low | No Due Date\n"
        );
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let mut repo = FileTaskRepo::open(dir.path().join("nested").join("tasks.txt"));
        repo.save(&TaskList::default()).unwrap();
        assert!(repo.path().exists());
    }
}
