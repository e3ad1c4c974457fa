use tracing::{debug, info};

use crate::category;
use crate::model::{Category, Task, TaskId};
use crate::query::{self, StatusFilter};
use crate::stats::Stats;
use crate::store::{EditOutcome, TaskStore};

/// Single owner of session state: the task collection plus the current
/// search query and status filter. Every derived view is recomputed from
/// here on each read.
#[derive(Debug, Clone, Default)]
pub struct Board {
    store: TaskStore,
    pub search: String,
    pub filter: StatusFilter,
}

impl Board {
    pub fn new(store: TaskStore) -> Self {
        Self {
            store,
            search: String::new(),
            filter: StatusFilter::default(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.store.get(id)
    }

    /// Returns the new task, or `None` if `text` was blank and nothing was added
    pub fn add_task(&mut self, text: &str) -> Option<Task> {
        let task = self.store.add(text)?;
        info!(id = %task.id, "added task");
        Some(task)
    }

    pub fn toggle_task(&mut self, id: &TaskId) -> bool {
        let found = self.store.toggle(id);
        if !found {
            debug!(id = %id, "toggle for unknown task");
        }
        found
    }

    pub fn delete_task(&mut self, id: &TaskId) -> bool {
        match self.store.delete(id) {
            Some(task) => {
                info!(id = %task.id, "deleted task");
                true
            }
            None => {
                debug!(id = %id, "delete for unknown task");
                false
            }
        }
    }

    pub fn edit_task(&mut self, id: &TaskId, text: &str) -> EditOutcome {
        self.store.edit(id, text)
    }

    /// Visible tasks for an explicit search and filter
    pub fn visible_tasks_for(&self, search: &str, filter: StatusFilter) -> Vec<&Task> {
        query::visible(self.store.tasks(), search, filter)
    }

    /// Visible tasks for the board's own search and filter
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.visible_tasks_for(&self.search, self.filter)
    }

    pub fn stats(&self) -> Stats {
        Stats::compute(self.store.tasks())
    }

    pub fn suggest_category(text: &str) -> Category {
        category::suggest(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_tracks_search_and_filter() {
        let mut board = Board::default();
        let report = board.add_task("Write report").unwrap();
        board.add_task("Buy groceries");
        board.toggle_task(&report.id);

        board.filter = StatusFilter::Completed;
        let visible: Vec<&str> = board.visible_tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(visible, vec!["Write report"]);

        board.filter = StatusFilter::All;
        board.search = "GROC".into();
        let visible: Vec<&str> = board.visible_tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(visible, vec!["Buy groceries"]);
    }

    #[test]
    fn unknown_ids_are_tolerated() {
        let mut board = Board::default();
        board.add_task("a");
        let missing = TaskId::from("nope");
        assert!(!board.toggle_task(&missing));
        assert!(!board.delete_task(&missing));
        assert_eq!(board.edit_task(&missing, "b"), EditOutcome::NotFound);
        assert_eq!(board.tasks().len(), 1);
    }

    #[test]
    fn blank_add_is_ignored() {
        let mut board = Board::default();
        assert!(board.add_task("  ").is_none());
        assert!(board.tasks().is_empty());
    }
}
