use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::widgets::ListState;
use tracing::{debug, info};

use crate::board::Board;
use crate::category;
use crate::model::{Category, TaskId};
use crate::query::StatusFilter;
use crate::store::EditOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Creation form is open
    Adding,
    /// Inline edit of one task
    Editing(TaskId),
    /// Typing into the search bar
    Searching,
}

/// Presentation state: the board plus transient view-local input buffers
pub struct App {
    pub board: Board,
    pub list_state: ListState,
    pub input_mode: InputMode,
    /// Text being composed in the creation form
    pub input_text: String,
    /// Text of the task being edited
    pub edit_text: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(board: Board) -> Self {
        let mut app = Self {
            board,
            list_state: ListState::default(),
            input_mode: InputMode::Normal,
            input_text: String::new(),
            edit_text: String::new(),
            should_quit: false,
        };
        app.clamp_selection();
        app
    }

    fn visible_len(&self) -> usize {
        self.board.visible_tasks().len()
    }

    /// Keep the selection inside the visible list after any change
    fn clamp_selection(&mut self) {
        let len = self.visible_len();
        let selected = match (len, self.list_state.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some(i.min(len - 1)),
        };
        self.list_state.select(selected);
    }

    pub fn selected_task_id(&self) -> Option<TaskId> {
        let selected = self.list_state.selected()?;
        self.board.visible_tasks().get(selected).map(|t| t.id.clone())
    }

    /// Live hint for the creation form
    pub fn category_hint(&self) -> Option<Category> {
        category::hint(&self.input_text)
    }

    fn next_item(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(i));
    }

    fn previous_item(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => len - 1,
        };
        self.list_state.select(Some(i));
    }

    fn set_filter(&mut self, filter: StatusFilter) {
        self.board.filter = filter;
        self.list_state.select(Some(0));
        self.clamp_selection();
    }

    fn open_add_form(&mut self) {
        self.input_text.clear();
        self.input_mode = InputMode::Adding;
    }

    fn close_add_form(&mut self) {
        self.input_text.clear();
        self.input_mode = InputMode::Normal;
    }

    /// Blank input keeps the form open so it can be corrected
    fn submit_add(&mut self) {
        if self.board.add_task(&self.input_text).is_some() {
            self.close_add_form();
            self.list_state.select(Some(0));
            self.clamp_selection();
        } else {
            debug!("blank task submitted, form stays open");
        }
    }

    fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.board.toggle_task(&id);
            self.clamp_selection();
        }
    }

    fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.board.delete_task(&id);
            self.clamp_selection();
        }
    }

    fn start_edit(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        if let Some(task) = self.board.task(&id) {
            self.edit_text = task.text.clone();
            self.input_mode = InputMode::Editing(id);
        }
    }

    /// Leaves edit mode whether or not the edit was applied
    fn save_edit(&mut self, id: TaskId) {
        match self.board.edit_task(&id, &self.edit_text) {
            EditOutcome::Updated => info!(id = %id, "edited task"),
            EditOutcome::Rejected => debug!(id = %id, "blank edit discarded"),
            EditOutcome::NotFound => debug!(id = %id, "edited task no longer exists"),
        }
        self.finish_edit();
    }

    fn finish_edit(&mut self) {
        self.edit_text.clear();
        self.input_mode = InputMode::Normal;
        self.clamp_selection();
    }

    fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        if key_event.kind != KeyEventKind::Press {
            return;
        }

        match self.input_mode.clone() {
            InputMode::Normal => match key_event.code {
                KeyCode::Char('q') => self.quit(),
                KeyCode::Down | KeyCode::Char('j') => self.next_item(),
                KeyCode::Up | KeyCode::Char('k') => self.previous_item(),
                KeyCode::Char('a') | KeyCode::Char('i') => self.open_add_form(),
                KeyCode::Char(' ') => self.toggle_selected(),
                KeyCode::Char('e') | KeyCode::Enter => self.start_edit(),
                KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
                KeyCode::Char('/') => self.input_mode = InputMode::Searching,
                KeyCode::Tab => self.set_filter(self.board.filter.next()),
                KeyCode::BackTab => self.set_filter(self.board.filter.prev()),
                KeyCode::Char('1') => self.set_filter(StatusFilter::All),
                KeyCode::Char('2') => self.set_filter(StatusFilter::Active),
                KeyCode::Char('3') => self.set_filter(StatusFilter::Completed),
                KeyCode::Esc => {
                    self.board.search.clear();
                    self.clamp_selection();
                }
                _ => {}
            },
            InputMode::Adding => match key_event.code {
                KeyCode::Enter => self.submit_add(),
                KeyCode::Esc => self.close_add_form(),
                KeyCode::Backspace => {
                    self.input_text.pop();
                }
                KeyCode::Char(c) => self.input_text.push(c),
                _ => {}
            },
            InputMode::Editing(id) => match key_event.code {
                KeyCode::Enter => self.save_edit(id),
                KeyCode::Esc => self.finish_edit(),
                KeyCode::Backspace => {
                    self.edit_text.pop();
                }
                KeyCode::Char(c) => self.edit_text.push(c),
                _ => {}
            },
            InputMode::Searching => match key_event.code {
                KeyCode::Enter => self.input_mode = InputMode::Normal,
                KeyCode::Esc => {
                    self.board.search.clear();
                    self.input_mode = InputMode::Normal;
                    self.clamp_selection();
                }
                KeyCode::Backspace => {
                    self.board.search.pop();
                    self.clamp_selection();
                }
                KeyCode::Char(c) => {
                    self.board.search.push(c);
                    self.clamp_selection();
                }
                _ => {}
            },
        }
    }
}
