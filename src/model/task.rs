use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque task identifier, unique for the lifetime of a session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        TaskId(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        TaskId(s.to_string())
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Label attached to a task when it is created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Unassigned,
    Work,
    Personal,
    Urgent,
}

impl Category {
    /// Display label, `None` for tasks without a category
    pub fn label(self) -> Option<&'static str> {
        match self {
            Category::Unassigned => None,
            Category::Work => Some("Work"),
            Category::Personal => Some("Personal"),
            Category::Urgent => Some("Urgent"),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().unwrap_or("None"))
    }
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub category: Category,
}

impl Task {
    /// A new, not yet completed task with a freshly generated id
    pub fn new(text: impl Into<String>, category: Category, created_at: DateTime<Utc>) -> Self {
        Task {
            id: TaskId::generate(),
            text: text.into(),
            completed: false,
            created_at,
            category,
        }
    }
}
