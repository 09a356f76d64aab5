use thiserror::Error;

/// Recoverable conditions. These are reported to the user and never abort the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("task number {number} is out of range (1..={len})")]
    OutOfRange { number: i64, len: usize },

    #[error("malformed record on line {line}: expected 3 fields, found {fields}")]
    MalformedRecord { line: usize, fields: usize },

    #[error("invalid task description: {reason}")]
    InvalidDescription { reason: &'static str },
}
