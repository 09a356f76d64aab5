use anyhow::Result;

use super::{Loaded, TaskRepository};
use crate::domain::store::TaskList;

/// Keeps the list in memory. Counts saves so callers can tell read-only
/// commands from mutating ones.
#[derive(Default)]
pub struct InMemoryTaskRepo {
    tasks: TaskList,
    saves: usize,
}

impl InMemoryTaskRepo {
    pub fn with_seed(tasks: TaskList) -> Self {
        Self { tasks, saves: 0 }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl TaskRepository for InMemoryTaskRepo {
    fn load(&self) -> Result<Loaded> {
        Ok(Loaded {
            tasks: self.tasks.clone(),
            skipped: Vec::new(),
        })
    }

    fn save(&mut self, tasks: &TaskList) -> Result<()> {
        self.tasks = tasks.clone();
        self.saves += 1;
        Ok(())
    }
}
