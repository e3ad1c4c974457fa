use chrono::{DateTime, Utc};
use tracing::debug;

use crate::category;
use crate::model::{Category, Task, TaskId};

/// Result of an edit request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Updated,
    /// The new text was empty after trimming; the old text is kept
    Rejected,
    NotFound,
}

/// Ordered task collection, newest first.
///
/// Missing ids and empty text are never errors: the operation is skipped and
/// the outcome tells the caller what happened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from tasks already in display order
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// The sample tasks a fresh session starts with
    pub fn demo(now: DateTime<Utc>) -> Self {
        let mut done = Task::new("Add AI-powered features", Category::Personal, now);
        done.completed = true;
        Self::with_tasks(vec![
            Task::new("Complete cyberpunk todo app", Category::Work, now),
            Task::new("Setup Supabase integration", Category::Work, now),
            done,
        ])
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Create a task from `text` and put it at the front of the list.
    ///
    /// Returns `None` without touching the collection when `text` is blank.
    pub fn add(&mut self, text: &str) -> Option<Task> {
        self.add_at(text, Utc::now())
    }

    /// [`TaskStore::add`] with an explicit creation instant
    pub fn add_at(&mut self, text: &str, now: DateTime<Utc>) -> Option<Task> {
        let text = text.trim();
        if text.is_empty() {
            debug!("ignoring blank task text");
            return None;
        }

        let mut task = Task::new(text, category::suggest(text), now);
        // ids must stay unique within the session
        while self.get(&task.id).is_some() {
            task.id = TaskId::generate();
        }

        debug!(id = %task.id, category = %task.category, "task added");
        self.tasks.insert(0, task.clone());
        Some(task)
    }

    /// Flip the completion flag. Returns `false` if the id is unknown.
    pub fn toggle(&mut self, id: &TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| &t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                debug!(id = %id, completed = task.completed, "task toggled");
                true
            }
            None => false,
        }
    }

    /// Remove a task permanently, returning it if it existed
    pub fn delete(&mut self, id: &TaskId) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| &t.id == id)?;
        debug!(id = %id, "task deleted");
        Some(self.tasks.remove(pos))
    }

    /// Replace a task's text wholesale, keeping every other field
    pub fn edit(&mut self, id: &TaskId, new_text: &str) -> EditOutcome {
        let new_text = new_text.trim();
        let Some(task) = self.tasks.iter_mut().find(|t| &t.id == id) else {
            return EditOutcome::NotFound;
        };
        if new_text.is_empty() {
            debug!(id = %id, "rejecting blank edit");
            return EditOutcome::Rejected;
        }

        task.text = new_text.to_string();
        debug!(id = %id, "task edited");
        EditOutcome::Updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn store_with(texts: &[&str]) -> TaskStore {
        let mut store = TaskStore::new();
        for text in texts {
            store.add(text);
        }
        store
    }

    #[test]
    fn add_prepends_trimmed_text() {
        let mut store = store_with(&["first"]);
        let task = store.add("  second  ").unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.tasks()[0], task);
        assert_eq!(task.text, "second");
        assert!(!task.completed);
        assert_eq!(store.tasks()[1].text, "first");
    }

    #[test]
    fn add_assigns_suggested_category() {
        let mut store = TaskStore::new();
        assert_eq!(store.add("Prepare meeting notes").unwrap().category, Category::Work);
        assert_eq!(store.add("Call the bank asap").unwrap().category, Category::Urgent);
        assert_eq!(store.add("Water plants").unwrap().category, Category::Personal);
    }

    #[test]
    fn add_rejects_blank_text() {
        let mut store = store_with(&["keep"]);
        let before = store.clone();

        assert_eq!(store.add(""), None);
        assert_eq!(store.add("   \t"), None);
        assert_eq!(store, before);
    }

    #[test]
    fn add_does_not_touch_existing_tasks() {
        let mut store = store_with(&["a", "b"]);
        let before: Vec<Task> = store.tasks().to_vec();
        store.add("c");
        assert_eq!(&store.tasks()[1..], &before[..]);
    }

    #[test]
    fn ids_are_unique() {
        let mut store = TaskStore::new();
        for i in 0..500 {
            store.add(&format!("task {i}"));
        }
        let ids: HashSet<&TaskId> = store.tasks().iter().map(|t| &t.id).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn toggle_twice_restores_task() {
        let mut store = store_with(&["a", "b"]);
        let id = store.tasks()[1].id.clone();
        let before = store.clone();

        assert!(store.toggle(&id));
        assert!(store.get(&id).unwrap().completed);
        assert!(store.toggle(&id));
        assert_eq!(store, before);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut store = store_with(&["a"]);
        let before = store.clone();
        assert!(!store.toggle(&TaskId::from("missing")));
        assert_eq!(store, before);
    }

    #[test]
    fn delete_removes_exactly_one() {
        let mut store = store_with(&["a", "b", "c"]);
        let id = store.tasks()[1].id.clone();

        let removed = store.delete(&id).unwrap();
        assert_eq!(removed.text, "b");
        assert_eq!(store.len(), 2);
        assert!(store.get(&id).is_none());
        assert_eq!(store.tasks()[0].text, "c");
        assert_eq!(store.tasks()[1].text, "a");
    }

    #[test]
    fn delete_unknown_id_is_noop() {
        let mut store = store_with(&["a", "b"]);
        let before = store.clone();
        assert_eq!(store.delete(&TaskId::from("missing")), None);
        assert_eq!(store, before);
    }

    #[test]
    fn edit_replaces_text_only() {
        let mut store = store_with(&["work on slides"]);
        let id = store.tasks()[0].id.clone();
        store.toggle(&id);
        let before = store.get(&id).unwrap().clone();

        assert_eq!(store.edit(&id, "  buy flowers "), EditOutcome::Updated);
        let after = store.get(&id).unwrap();
        assert_eq!(after.text, "buy flowers");
        assert_eq!(after.id, before.id);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.completed, before.completed);
        // category is not re-derived from the new text
        assert_eq!(after.category, Category::Work);
    }

    #[test]
    fn edit_rejects_blank_text() {
        let mut store = store_with(&["a"]);
        let id = store.tasks()[0].id.clone();
        let before = store.clone();

        assert_eq!(store.edit(&id, ""), EditOutcome::Rejected);
        assert_eq!(store.edit(&id, "  "), EditOutcome::Rejected);
        assert_eq!(store, before);
    }

    #[test]
    fn edit_unknown_id() {
        let mut store = store_with(&["a"]);
        assert_eq!(store.edit(&TaskId::from("missing"), "x"), EditOutcome::NotFound);
    }

    #[test]
    fn demo_tasks() {
        let store = TaskStore::demo(Utc::now());
        let summary: Vec<(&str, bool, Category)> = store
            .tasks()
            .iter()
            .map(|t| (t.text.as_str(), t.completed, t.category))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Complete cyberpunk todo app", false, Category::Work),
                ("Setup Supabase integration", false, Category::Work),
                ("Add AI-powered features", true, Category::Personal),
            ]
        );
    }
}
