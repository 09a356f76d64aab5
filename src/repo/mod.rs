use anyhow::Result;

use crate::domain::store::TaskList;
use crate::error::TaskError;

pub mod codec;
pub mod file;
#[cfg(test)]
pub mod memory;

/// A freshly loaded task list plus any records that had to be skipped.
#[derive(Debug, Default)]
pub struct Loaded {
    pub tasks: TaskList,
    pub skipped: Vec<TaskError>,
}

pub trait TaskRepository {
    fn load(&self) -> Result<Loaded>;
    /// Replace everything that was stored with `tasks`.
    fn save(&mut self, tasks: &TaskList) -> Result<()>;
}
