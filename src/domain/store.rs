use serde::Serialize;

use crate::domain::task::{Category, Task};
use crate::error::TaskError;

/// Pending and completed tasks, each in insertion order.
///
/// Tasks are addressed by their 1-based position in one of the two lists, so a
/// number is only meaningful until the next structural change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskList {
    pub pending: Vec<Task>,
    pub completed: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit<'a> {
    pub category: Category,
    pub number: usize,
    pub task: &'a Task,
}

impl TaskList {
    pub fn add(
        &mut self,
        description: impl Into<String>,
        priority: &str,
        due_date: Option<&str>,
    ) -> &Task {
        self.pending.push(Task::new(description, priority, due_date));
        &self.pending[self.pending.len() - 1]
    }

    pub fn complete(&mut self, number: i64) -> Result<&Task, TaskError> {
        let idx = position(number, self.pending.len())?;
        let task = self.pending.remove(idx);
        self.completed.push(task);
        Ok(&self.completed[self.completed.len() - 1])
    }

    pub fn delete(&mut self, number: i64, from: Category) -> Result<Task, TaskError> {
        let list = self.list_mut(from);
        let idx = position(number, list.len())?;
        Ok(list.remove(idx))
    }

    pub fn search(&self, keyword: &str) -> Vec<SearchHit<'_>> {
        let needle = keyword.to_lowercase();
        [Category::Pending, Category::Completed]
            .into_iter()
            .flat_map(|category| {
                self.list(category)
                    .iter()
                    .enumerate()
                    .filter(|(_, task)| task.matches(&needle))
                    .map(move |(idx, task)| SearchHit {
                        category,
                        number: idx + 1,
                        task,
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// Stable sort of pending tasks by priority rank, then due date.
    pub fn prioritize(&mut self) {
        self.pending.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    }

    pub fn list(&self, category: Category) -> &[Task] {
        match category {
            Category::Pending => &self.pending,
            Category::Completed => &self.completed,
        }
    }

    fn list_mut(&mut self, category: Category) -> &mut Vec<Task> {
        match category {
            Category::Pending => &mut self.pending,
            Category::Completed => &mut self.completed,
        }
    }
}

fn position(number: i64, len: usize) -> Result<usize, TaskError> {
    usize::try_from(number)
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
        .ok_or(TaskError::OutOfRange { number, len })
}
