use chrono::{DateTime, Local, TimeZone};

use crate::model::Task;

/// Derived counts shown in the insights panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Completed tasks created on the current calendar day
    pub completed_today: usize,
    /// Completed share of all tasks, rounded to a whole percent
    pub completion_rate: u8,
    pub active_count: usize,
}

impl Stats {
    /// Compute against the local calendar day
    pub fn compute(tasks: &[Task]) -> Self {
        Self::compute_at(tasks, &Local::now())
    }

    /// Compute against the calendar day of `now` in its own time zone.
    ///
    /// "Today" is measured on the creation instant: there is no completion
    /// timestamp, so a task created yesterday and finished today does not count.
    pub fn compute_at<Tz: TimeZone>(tasks: &[Task], now: &DateTime<Tz>) -> Self {
        let today = now.date_naive();
        let tz = now.timezone();

        let completed = tasks.iter().filter(|t| t.completed).count();
        let completed_today = tasks
            .iter()
            .filter(|t| t.completed && t.created_at.with_timezone(&tz).date_naive() == today)
            .count();

        Stats {
            completed_today,
            completion_rate: completion_rate(completed, tasks.len()),
            active_count: tasks.len() - completed,
        }
    }
}

/// Rounded percentage, half away from zero. Zero when there are no tasks.
fn completion_rate(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let rounded = (completed * 200 + total) / (total * 2);
    rounded.min(100) as u8
}
