use std::fmt::Write;

use crossterm::style::Stylize;

use crate::domain::store::{SearchHit, TaskList};
use crate::domain::task::{Category, Hint, Task};
use crate::error::TaskError;

#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color: bool,
}

impl Painter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, hint: Hint) -> String {
        if !self.color {
            return text.to_string();
        }
        match hint {
            Hint::High => text.red().to_string(),
            Hint::Medium => text.yellow().to_string(),
            Hint::Low => text.green().to_string(),
            Hint::Plain => text.to_string(),
        }
    }
}

pub fn render_added(task: &Task) -> String {
    format!(
        "Task '{}' added with priority '{}' and due date '{}'.",
        task.description, task.priority, task.due_date
    )
}

pub fn render_list(tasks: &TaskList, show_completed: bool, painter: Painter) -> String {
    let mut out = String::from("Pending Tasks:\n");
    if tasks.pending.is_empty() {
        out.push_str("No pending tasks.\n");
    }
    for (idx, task) in tasks.pending.iter().enumerate() {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{}. {} - Priority: {}, Due: {}",
            idx + 1,
            painter.paint(&task.description, task.priority.hint()),
            task.priority,
            task.due_date
        );
    }

    if show_completed {
        out.push_str("\nCompleted Tasks:\n");
        if tasks.completed.is_empty() {
            out.push_str("No completed tasks.\n");
        }
        for (idx, task) in tasks.completed.iter().enumerate() {
            // Writing into a String cannot fail.
            let _ = writeln!(out, "{}. {} - Completed", idx + 1, task.description);
        }
    }
    out
}

pub fn render_completed(task: &Task) -> String {
    format!("Task '{}' marked as completed.", task.description)
}

pub fn render_deleted(task: &Task, from: Category) -> String {
    format!("Task '{}' deleted from {from} tasks.", task.description)
}

pub fn render_search(hits: &[SearchHit<'_>]) -> String {
    let mut out = String::from("Search Results:\n");
    if hits.is_empty() {
        out.push_str("No tasks found matching the keyword.\n");
    }
    for hit in hits {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{} Task {}: {} - Priority: {}, Due: {}",
            hit.category.label(),
            hit.number,
            hit.task.description,
            hit.task.priority,
            hit.task.due_date
        );
    }
    out
}

pub fn render_prioritized() -> String {
    "Pending tasks sorted by priority and due date.".to_string()
}

pub fn render_invalid_complete() -> String {
    "Invalid task number. Please enter a valid number.".to_string()
}

pub fn render_invalid_delete() -> String {
    "Invalid task number.".to_string()
}

pub fn render_rejected(problem: &TaskError) -> String {
    match problem {
        TaskError::InvalidDescription { reason } => {
            format!("Invalid task description: {reason}.")
        }
        other => other.to_string(),
    }
}

pub fn render_skipped(problem: &TaskError) -> String {
    match problem {
        TaskError::MalformedRecord { line, fields } => format!(
            "Skipping malformed record on line {line}: expected 3 fields, found {fields}"
        ),
        other => other.to_string(),
    }
}
