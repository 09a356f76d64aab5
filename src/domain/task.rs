use std::fmt;

use serde::{Serialize, Serializer};

pub const NO_DUE_DATE: &str = "No Due Date";

// Undated tasks order as if due on this date.
const UNDATED_SORT_KEY: &str = "9999-12-31";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    #[default]
    Low,
    /// Whatever was stored in the tasks file, kept verbatim.
    Other(String),
}

impl Priority {
    /// Normalize user input at creation time. Anything unrecognized becomes `Low`.
    pub fn from_input(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "high" => Self::High,
            "medium" => Self::Medium,
            _ => Self::Low,
        }
    }

    /// Interpret a stored field. No validation: unknown values survive a round trip.
    pub fn from_stored(raw: &str) -> Self {
        match raw {
            "High" => Self::High,
            "Medium" => Self::Medium,
            "Low" => Self::Low,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Other(raw) => raw,
        }
    }

    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
            Self::Other(_) => 4,
        }
    }

    pub fn hint(&self) -> Hint {
        match self {
            Self::High => Hint::High,
            Self::Medium => Hint::Medium,
            Self::Low => Hint::Low,
            Self::Other(_) => Hint::Plain,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Presentation-only emphasis for a pending entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    High,
    Medium,
    Low,
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Pending,
    Completed,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }

    fn list_name(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.list_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub description: String,
    pub priority: Priority,
    pub due_date: String,
}

impl Task {
    pub fn new(description: impl Into<String>, priority: &str, due_date: Option<&str>) -> Self {
        Self {
            description: description.into(),
            priority: Priority::from_input(priority),
            due_date: due_date.unwrap_or(NO_DUE_DATE).to_string(),
        }
    }

    pub fn sort_key(&self) -> (u8, &str) {
        let due = if self.due_date == NO_DUE_DATE {
            UNDATED_SORT_KEY
        } else {
            self.due_date.as_str()
        };
        (self.priority.rank(), due)
    }

    pub fn matches(&self, needle_lower: &str) -> bool {
        self.description.to_lowercase().contains(needle_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_priority_is_capitalized_or_low() {
        assert_eq!(Priority::from_input("high"), Priority::High);
        assert_eq!(Priority::from_input("MEDIUM"), Priority::Medium);
        assert_eq!(Priority::from_input("urgent"), Priority::Low);
        assert_eq!(Priority::from_input("high").as_str(), "High");
    }

    #[test]
    fn stored_priority_is_kept_verbatim() {
        let p = Priority::from_stored("urgent");
        assert_eq!(p, Priority::Other("urgent".to_string()));
        assert_eq!(p.as_str(), "urgent");
        assert_eq!(p.rank(), 4);
        assert_eq!(p.hint(), Hint::Plain);
        // lowercase is not recognized on load
        assert_eq!(Priority::from_stored("high").rank(), 4);
    }

    #[test]
    fn undated_sorts_as_max_date() {
        let task = Task::new("x", "low", None);
        assert_eq!(task.due_date, NO_DUE_DATE);
        assert_eq!(task.sort_key(), (3, "9999-12-31"));
    }

    #[test]
    fn matches_ignores_case() {
        let task = Task::new("Buy Milk", "low", None);
        assert!(task.matches("milk"));
        assert!(!task.matches("bread"));
    }
}
