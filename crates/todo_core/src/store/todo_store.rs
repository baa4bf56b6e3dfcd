//! Ordered in-memory to-do store.
//!
//! # Responsibility
//! - Provide append, remove-at-position, count and indexed read.
//! - Report out-of-bounds positions instead of panicking.
//!
//! # Invariants
//! - `append` always grows the store by exactly one item at the end.
//! - `remove_at` shifts every later item down by one position.
//! - The store is the sole owner of its items; readers get borrows.
//!
//! The store is not synchronized. A caller sharing it across threads must
//! guard every operation with one lock.

use crate::model::todo::{TodoId, TodoItem};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for positional access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// Requested position is not within `[0, count)`.
    OutOfRange { index: usize, count: usize },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { index, count } => {
                write!(f, "index {index} out of range for {count} item(s)")
            }
        }
    }
}

impl Error for StoreError {}

/// Ordered collection of the session's to-do items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoStore {
    items: Vec<TodoItem>,
}

impl TodoStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store preloaded with `items` in iteration order.
    pub fn with_items(items: impl IntoIterator<Item = TodoItem>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Appends `item` at the end. Acceptance is unconditional.
    pub fn append(&mut self, item: TodoItem) {
        self.items.push(item);
        debug!(
            "event=todo_append module=store status=ok count={}",
            self.items.len()
        );
    }

    /// Removes and returns the item at `index`.
    ///
    /// # Errors
    /// - `StoreError::OutOfRange` when `index >= count()`; the store is left
    ///   untouched.
    pub fn remove_at(&mut self, index: usize) -> StoreResult<TodoItem> {
        self.check_bounds(index)?;
        let removed = self.items.remove(index);
        debug!(
            "event=todo_remove module=store status=ok index={} count={}",
            index,
            self.items.len()
        );
        Ok(removed)
    }

    /// Number of stored items.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrows the item at `index`.
    ///
    /// # Errors
    /// - `StoreError::OutOfRange` when `index >= count()`.
    pub fn item_at(&self, index: usize) -> StoreResult<&TodoItem> {
        self.check_bounds(index)?;
        Ok(&self.items[index])
    }

    /// Iterates items in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, TodoItem> {
        self.items.iter()
    }

    /// Current position of the item with `id`, if stored.
    pub fn position_of(&self, id: TodoId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn check_bounds(&self, index: usize) -> StoreResult<()> {
        let count = self.items.len();
        if index >= count {
            warn!(
                "event=todo_bounds module=store status=error error_code=out_of_range index={} count={}",
                index, count
            );
            return Err(StoreError::OutOfRange { index, count });
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TodoStore {
    type Item = &'a TodoItem;
    type IntoIter = std::slice::Iter<'a, TodoItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{StoreError, TodoStore};
    use crate::model::todo::TodoItem;
    use chrono::NaiveDate;

    fn item(title: &str) -> TodoItem {
        TodoItem::new(None, title, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    #[test]
    fn failed_remove_leaves_store_untouched() {
        let mut store = TodoStore::with_items([item("a"), item("b")]);
        let before = store.clone();

        let err = store.remove_at(2).unwrap_err();
        assert_eq!(err, StoreError::OutOfRange { index: 2, count: 2 });
        assert_eq!(store, before);
    }

    #[test]
    fn out_of_range_message_names_index_and_count() {
        let err = StoreError::OutOfRange { index: 5, count: 3 };
        assert_eq!(err.to_string(), "index 5 out of range for 3 item(s)");
    }

    #[test]
    fn position_of_tracks_shifts() {
        let a = item("a");
        let b = item("b");
        let c = item("c");
        let c_id = c.id();
        let mut store = TodoStore::with_items([a, b, c]);

        assert_eq!(store.position_of(c_id), Some(2));
        store.remove_at(0).unwrap();
        assert_eq!(store.position_of(c_id), Some(1));
        store.remove_at(1).unwrap();
        assert_eq!(store.position_of(c_id), None);
    }
}
