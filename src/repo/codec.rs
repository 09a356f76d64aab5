//! Line-oriented tasks file format.
//!
//! ```text
//! <description> | <priority> | <due_date>
//! [Completed] <description> | <priority> | <due_date>
//! ```
//!
//! Fields are not escaped, so `check_description` refuses anything that would
//! not read back as the same pending task. Line endings are normalized to `\n`.

use std::fmt::Write;

use super::Loaded;
use crate::domain::store::TaskList;
use crate::domain::task::{Priority, Task};
use crate::error::TaskError;

pub const DELIMITER: &str = " | ";
pub const COMPLETED_MARKER: &str = "[Completed] ";

/// Reject descriptions that would be lost or misread on the next load.
pub fn check_description(description: &str) -> Result<(), TaskError> {
    let reason = if description.trim().is_empty() {
        "it must not be empty"
    } else if description.contains(['\n', '\r']) {
        "it must be a single line"
    } else if description.contains(DELIMITER) || description.ends_with(" |") {
        "it must not contain ' | '"
    } else if description.starts_with(COMPLETED_MARKER) {
        "it must not start with '[Completed] '"
    } else {
        return Ok(());
    };
    Err(TaskError::InvalidDescription { reason })
}

pub fn decode(content: &str) -> Loaded {
    let mut loaded = Loaded::default();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (record, done) = match line.strip_prefix(COMPLETED_MARKER) {
            Some(rest) => (rest, true),
            None => (line, false),
        };
        match parse_record(record, idx + 1) {
            Ok(task) if done => loaded.tasks.completed.push(task),
            Ok(task) => loaded.tasks.pending.push(task),
            Err(e) => loaded.skipped.push(e),
        }
    }
    loaded
}

fn parse_record(record: &str, line: usize) -> Result<Task, TaskError> {
    let fields: Vec<&str> = record.split(DELIMITER).collect();
    let [description, priority, due_date] = fields[..] else {
        return Err(TaskError::MalformedRecord {
            line,
            fields: fields.len(),
        });
    };
    Ok(Task {
        description: description.to_string(),
        priority: Priority::from_stored(priority),
        due_date: due_date.to_string(),
    })
}

pub fn encode(tasks: &TaskList) -> String {
    let mut out = String::new();
    for task in &tasks.pending {
        push_record(&mut out, "", task);
    }
    for task in &tasks.completed {
        push_record(&mut out, COMPLETED_MARKER, task);
    }
    out
}

fn push_record(out: &mut String, prefix: &str, task: &Task) {
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "{prefix}{}{DELIMITER}{}{DELIMITER}{}",
        task.description, task.priority, task.due_date
    );
}
