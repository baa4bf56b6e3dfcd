//! To-do item record.
//!
//! # Responsibility
//! - Define the value entity shown as one row of the list screen.
//! - Generate a fresh identifier for every new item.
//!
//! # Invariants
//! - `id` is assigned at construction and never reassigned.
//! - Fields are private; once built an item cannot change.
//! - `title` is stored verbatim, empty titles included.

use super::category::Category;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a to-do item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Draws a fresh random (v4) identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an identifier that already exists elsewhere.
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for TodoId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// One to-do entry: optional category, free-text title and a due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    id: TodoId,
    category: Option<Category>,
    title: String,
    /// Calendar date only; serialized as `YYYY-MM-DD`.
    due_date: NaiveDate,
}

impl TodoItem {
    /// Creates an item with a freshly generated id.
    ///
    /// No field is validated: an unset category and an empty title are both
    /// accepted.
    pub fn new(category: Option<Category>, title: impl Into<String>, due_date: NaiveDate) -> Self {
        Self::with_id(TodoId::new(), category, title, due_date)
    }

    /// Creates an item with a caller-provided id.
    pub fn with_id(
        id: TodoId,
        category: Option<Category>,
        title: impl Into<String>,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            category,
            title: title.into(),
            due_date,
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Icon asset for this item, `None` when no category was selected.
    pub fn icon_name(&self) -> Option<&'static str> {
        super::category::icon_for(self.category)
    }
}

/// Error returned when due-date text does not follow `yyyy-MM-dd`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueDateParseError {
    pub input: String,
}

impl Display for DueDateParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid due date `{}`; expected yyyy-MM-dd", self.input)
    }
}

impl Error for DueDateParseError {}

/// `yyyy-MM-dd` as a chrono format string.
const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `yyyy-MM-dd` date.
///
/// The year must have four digits; month and day may omit the leading zero
/// (`2014-11-2`). The result must be a real calendar date.
pub fn parse_due_date(text: &str) -> Result<NaiveDate, DueDateParseError> {
    let trimmed = text.trim();
    let invalid = || DueDateParseError {
        input: trimmed.to_string(),
    };

    let year = trimmed.split('-').next().unwrap_or_default();
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(trimmed, DUE_DATE_FORMAT).map_err(|_| invalid())
}
