use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::model::Task;

/// Status-based view selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Active, StatusFilter::Completed];

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Completed => "Completed",
        }
    }

    /// Position within [`StatusFilter::ALL`]
    pub fn index(self) -> usize {
        match self {
            StatusFilter::All => 0,
            StatusFilter::Active => 1,
            StatusFilter::Completed => 2,
        }
    }

    /// The next filter tab, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Case-insensitive substring match. A blank query matches everything.
pub fn matches_search(task: &Task, search: &str) -> bool {
    if search.trim().is_empty() {
        return true;
    }
    task.text.to_lowercase().contains(&search.to_lowercase())
}

pub fn matches_filter(task: &Task, filter: StatusFilter) -> bool {
    match filter {
        StatusFilter::All => true,
        StatusFilter::Active => !task.completed,
        StatusFilter::Completed => task.completed,
    }
}

/// Tasks passing both the search and the status filter, in their original order
pub fn visible<'a>(tasks: &'a [Task], search: &str, filter: StatusFilter) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| matches_search(task, search) && matches_filter(task, filter))
        .collect()
}
