//! Static copy and derived text for the insights panel and list header.

use crate::query::StatusFilter;
use crate::stats::Stats;

pub const SUGGESTIONS: [&str; 4] = [
    "Break down large tasks into smaller ones",
    "Set specific deadlines for better focus",
    "Group similar tasks together",
    "Take breaks between intensive work sessions",
];

/// How many suggestions the panel shows
pub const SHOWN_SUGGESTIONS: usize = 2;

pub fn shown_suggestions() -> &'static [&'static str] {
    &SUGGESTIONS[..SHOWN_SUGGESTIONS]
}

/// One row of the quick stats block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickStat {
    pub title: &'static str,
    pub value: String,
    pub description: &'static str,
}

pub fn quick_stats(stats: &Stats) -> [QuickStat; 3] {
    [
        QuickStat {
            title: "Productivity Score",
            value: format!("{}%", stats.completion_rate),
            description: "Tasks completed overall",
        },
        QuickStat {
            title: "Today's Progress",
            value: stats.completed_today.to_string(),
            description: "Tasks completed today",
        },
        QuickStat {
            title: "Active Tasks",
            value: stats.active_count.to_string(),
            description: "Tasks remaining",
        },
    ]
}

/// Daily summary lines; the encouragement only appears once something is done
pub fn daily_summary(stats: &Stats) -> Vec<String> {
    let mut lines = vec![format!("You've completed {} tasks today.", stats.completed_today)];
    if stats.completed_today > 0 {
        lines.push("Great job! Keep up the momentum 🚀".to_string());
    }
    lines
}

pub fn list_heading(filter: StatusFilter, visible: usize) -> String {
    let title = match filter {
        StatusFilter::All => "All Tasks",
        StatusFilter::Active => "Active Tasks",
        StatusFilter::Completed => "Completed Tasks",
    };
    format!("{title} ({visible})")
}

/// Hint under "No tasks found"
pub fn empty_hint(search: &str) -> &'static str {
    if search.is_empty() {
        "Add your first task to get started"
    } else {
        "Try a different search term"
    }
}
