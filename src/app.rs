use anyhow::Result;
use tracing::{debug, info};

use crate::domain::store::TaskList;
use crate::domain::task::Category;
use crate::error::TaskError;
use crate::repo::{TaskRepository, codec};
use crate::ui::{self, Painter};

/// One load → operate → save cycle. Each method returns the text to print.
pub struct App<R: TaskRepository> {
    repo: R,
    tasks: TaskList,
    skipped: Vec<TaskError>,
    painter: Painter,
}

impl<R: TaskRepository> App<R> {
    pub fn new(repo: R, painter: Painter) -> Result<Self> {
        let loaded = repo.load()?;
        Ok(Self {
            repo,
            tasks: loaded.tasks,
            skipped: loaded.skipped,
            painter,
        })
    }

    /// Records dropped while loading. They will be gone after the next save.
    pub fn skipped(&self) -> &[TaskError] {
        &self.skipped
    }

    pub fn add(&mut self, description: &str, priority: &str, due_date: Option<&str>) -> Result<String> {
        if let Err(e) = codec::check_description(description) {
            info!("add rejected: {e}");
            return Ok(ui::render_rejected(&e));
        }
        let msg = ui::render_added(self.tasks.add(description, priority, due_date));
        self.save()?;
        Ok(msg)
    }

    pub fn list(&self, show_completed: bool, json: bool) -> Result<String> {
        if json {
            return Ok(serde_json::to_string_pretty(&self.tasks)?);
        }
        Ok(ui::render_list(&self.tasks, show_completed, self.painter))
    }

    pub fn complete(&mut self, number: i64) -> Result<String> {
        match self.tasks.complete(number) {
            Ok(task) => {
                let msg = ui::render_completed(task);
                self.save()?;
                Ok(msg)
            }
            Err(e) => {
                info!("complete rejected: {e}");
                Ok(ui::render_invalid_complete())
            }
        }
    }

    pub fn delete(&mut self, number: i64, from_completed: bool) -> Result<String> {
        let from = if from_completed {
            Category::Completed
        } else {
            Category::Pending
        };
        match self.tasks.delete(number, from) {
            Ok(task) => {
                self.save()?;
                Ok(ui::render_deleted(&task, from))
            }
            Err(e) => {
                info!("delete rejected: {e}");
                Ok(ui::render_invalid_delete())
            }
        }
    }

    pub fn search(&self, keyword: &str, json: bool) -> Result<String> {
        let hits = self.tasks.search(keyword);
        debug!(keyword, matches = hits.len(), "search");
        if json {
            return Ok(serde_json::to_string_pretty(&hits)?);
        }
        Ok(ui::render_search(&hits))
    }

    pub fn prioritize(&mut self) -> Result<String> {
        self.tasks.prioritize();
        self.save()?;
        Ok(ui::render_prioritized())
    }

    fn save(&mut self) -> Result<()> {
        self.repo.save(&self.tasks)
    }

    #[cfg(test)]
    fn repo(&self) -> &R {
        &self.repo
    }
}
