//! Keyword-based category suggestion for new tasks.
//!
//! Rules are checked in order and the first match wins, so text mentioning
//! both a work keyword and an urgency keyword is filed under Work.

use crate::model::Category;

const WORK_KEYWORDS: &[&str] = &["work", "project", "meeting"];
const URGENT_KEYWORDS: &[&str] = &["urgent", "asap", "important"];

/// Minimum number of characters (exclusive) before the creation form shows a hint.
pub const HINT_MIN_CHARS: usize = 5;

/// Category assigned to a task with the given text. Never `Unassigned`.
pub fn suggest(text: &str) -> Category {
    let lower = text.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

    if contains_any(WORK_KEYWORDS) {
        Category::Work
    } else if contains_any(URGENT_KEYWORDS) {
        Category::Urgent
    } else {
        Category::Personal
    }
}

/// Live hint for text being typed into the creation form.
///
/// Returns `None` until the input is longer than [`HINT_MIN_CHARS`]. The hint
/// is advisory only; task creation always applies [`suggest`].
pub fn hint(text: &str) -> Option<Category> {
    if text.chars().count() > HINT_MIN_CHARS {
        Some(suggest(text))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn work_keywords() {
        assert_eq!(suggest("Finish the work project"), Category::Work);
        assert_eq!(suggest("Team MEETING at noon"), Category::Work);
    }

    #[test]
    fn urgent_keywords() {
        assert_eq!(suggest("This is urgent, asap!"), Category::Urgent);
        assert_eq!(suggest("Important: renew passport"), Category::Urgent);
    }

    #[test]
    fn falls_back_to_personal() {
        assert_eq!(suggest("Buy groceries"), Category::Personal);
        assert_eq!(suggest(""), Category::Personal);
    }

    #[test]
    fn work_wins_over_urgent() {
        assert_eq!(suggest("urgent work meeting"), Category::Work);
        assert_eq!(suggest("ASAP: project review"), Category::Work);
    }

    #[test]
    fn keywords_match_inside_words() {
        // "homework" contains "work"
        assert_eq!(suggest("Help with homework"), Category::Work);
    }

    #[test]
    fn hint_is_gated_on_length() {
        assert_eq!(hint("work"), None);
        assert_eq!(hint("work!"), None);
        assert_eq!(hint("work!!"), Some(Category::Work));
        assert_eq!(hint("groceries"), Some(Category::Personal));
    }

    #[test]
    fn hint_counts_characters_not_bytes() {
        assert_eq!(hint("ééééé"), None);
        assert_eq!(hint("éééééé"), Some(Category::Personal));
    }
}
