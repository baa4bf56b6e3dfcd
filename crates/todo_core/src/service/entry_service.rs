//! Entry screen create flow.
//!
//! # Responsibility
//! - Hold the in-progress form state: category toggles, title and due date.
//! - Turn a confirmed form into a new `TodoItem` appended to the store.
//!
//! # Invariants
//! - At most one category toggle is selected at any time.
//! - Submission never fails: no category and an empty title are accepted.
//! - Every built item gets a fresh id, even when built twice from one form.

use crate::model::category::Category;
use crate::model::todo::{TodoId, TodoItem};
use crate::store::todo_store::TodoStore;
use chrono::NaiveDate;
use log::info;

/// In-progress state of the entry screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    selected: Option<Category>,
    title: String,
    due_date: NaiveDate,
}

impl EntryForm {
    /// Creates a blank form whose date picker starts at `default_due_date`.
    pub fn new(default_due_date: NaiveDate) -> Self {
        Self {
            selected: None,
            title: String::new(),
            due_date: default_due_date,
        }
    }

    /// Selects `category`, clearing whichever toggle was selected before.
    pub fn select(&mut self, category: Category) {
        self.selected = Some(category);
    }

    /// Clears all category toggles.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<Category> {
        self.selected
    }

    pub fn is_selected(&self, category: Category) -> bool {
        self.selected == Some(category)
    }

    /// Replaces the title text verbatim (no trimming).
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_due_date(&mut self, due_date: NaiveDate) {
        self.due_date = due_date;
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Builds a new item from the current form state with a fresh id.
    pub fn build(&self) -> TodoItem {
        TodoItem::new(self.selected, self.title.clone(), self.due_date)
    }

    /// Confirms the form: builds an item and appends it to `store`.
    ///
    /// Returns the id of the appended item.
    pub fn submit(&self, store: &mut TodoStore) -> TodoId {
        let item = self.build();
        let id = item.id();
        info!(
            "event=todo_create module=entry status=ok category={} title_len={}",
            self.selected.map_or("none", Category::as_str),
            self.title.chars().count()
        );
        store.append(item);
        id
    }
}
