//! End-to-end scenarios against the public session API.

use chrono::Utc;
use pretty_assertions::assert_eq;

use cybertasks::board::Board;
use cybertasks::model::Category;
use cybertasks::query::{self, StatusFilter};
use cybertasks::stats::Stats;
use cybertasks::store::{EditOutcome, TaskStore};

#[test]
fn write_report_lifecycle() {
    let mut board = Board::new(TaskStore::new());

    let task = board.add_task("Write report").unwrap();
    assert_eq!(board.tasks().len(), 1);
    assert_eq!(task.category, Category::Personal);

    assert!(board.toggle_task(&task.id));
    let stats = Stats::compute_at(board.tasks(), &Utc::now());
    assert_eq!(stats.completed_today, 1);
    assert_eq!(stats.completion_rate, 100);
    assert_eq!(stats.active_count, 0);

    let completed = board.visible_tasks_for("", StatusFilter::Completed);
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, task.id);

    assert!(board.visible_tasks_for("report", StatusFilter::Active).is_empty());
}

#[test]
fn mixed_session() {
    let mut board = Board::new(TaskStore::new());
    let meeting = board.add_task("Prepare meeting agenda").unwrap();
    let taxes = board.add_task("File taxes ASAP").unwrap();
    let walk = board.add_task("Walk the dog").unwrap();

    let order: Vec<&str> = board.tasks().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(order, vec!["Walk the dog", "File taxes ASAP", "Prepare meeting agenda"]);

    let categories: Vec<Category> = board.tasks().iter().map(|t| t.category).collect();
    assert_eq!(categories, vec![Category::Personal, Category::Urgent, Category::Work]);

    board.toggle_task(&taxes.id);
    assert_eq!(board.edit_task(&walk.id, "Walk the dog twice"), EditOutcome::Updated);
    assert_eq!(board.edit_task(&meeting.id, "   "), EditOutcome::Rejected);
    assert!(board.delete_task(&meeting.id));
    assert!(!board.delete_task(&meeting.id));

    board.filter = StatusFilter::Active;
    let active: Vec<&str> = board.visible_tasks().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(active, vec!["Walk the dog twice"]);

    let stats = Stats::compute_at(board.tasks(), &Utc::now());
    assert_eq!(stats.completion_rate, 50);
    assert_eq!(stats.active_count, 1);

    // filtering never mutates or reorders the collection
    let before = board.tasks().to_vec();
    let _ = query::visible(board.tasks(), "dog", StatusFilter::Completed);
    assert_eq!(board.tasks(), &before[..]);
}

#[test]
fn suggest_category_examples() {
    assert_eq!(Board::suggest_category("Finish the work project"), Category::Work);
    assert_eq!(Board::suggest_category("This is urgent, asap!"), Category::Urgent);
    assert_eq!(Board::suggest_category("Buy groceries"), Category::Personal);
    assert_eq!(Board::suggest_category("urgent work meeting"), Category::Work);
}
