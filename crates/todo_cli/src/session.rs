//! Line command interpreter acting as list and entry screens.
//!
//! # Responsibility
//! - Parse one input line into a list, create or delete action.
//! - Drive the core flows against the session's store.
//!
//! # Invariants
//! - The interpreter never touches the store except through core flows.
//! - A failed command leaves the store unchanged.

use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};
use todo_core::{
    delete_row, parse_due_date, render_rows, Category, CategoryParseError, DueDateParseError,
    EntryForm, IsoDateFormatter, StoreError, TodoRow, TodoStore,
};

pub const HELP: &str = "commands:
  list                                      show all items
  add <category|none> <yyyy-MM-dd|today> <title>
                                            create an item
  remove <index>                            delete the item at <index>
  count                                     show the number of items
  help                                      show this help
  quit | exit                               leave";

/// Result of one successfully executed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to print; may be empty.
    Output(String),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unknown(String),
    Usage(&'static str),
    InvalidIndex(String),
    Category(CategoryParseError),
    DueDate(DueDateParseError),
    Store(StoreError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(command) => write!(f, "unknown command `{command}`; try `help`"),
            Self::Usage(usage) => write!(f, "usage: {usage}"),
            Self::InvalidIndex(value) => write!(f, "invalid index `{value}`"),
            Self::Category(err) => write!(f, "{err}"),
            Self::DueDate(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Category(err) => Some(err),
            Self::DueDate(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Unknown(_) | Self::Usage(_) | Self::InvalidIndex(_) => None,
        }
    }
}

impl From<CategoryParseError> for CommandError {
    fn from(value: CategoryParseError) -> Self {
        Self::Category(value)
    }
}

impl From<DueDateParseError> for CommandError {
    fn from(value: DueDateParseError) -> Self {
        Self::DueDate(value)
    }
}

impl From<StoreError> for CommandError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

const ADD_USAGE: &str = "add <category|none> <yyyy-MM-dd|today> <title>";
const REMOVE_USAGE: &str = "remove <index>";

/// Executes one input line against `store`.
///
/// `today` backs the `today` date keyword and the entry form's default date.
pub fn execute(
    store: &mut TodoStore,
    line: &str,
    today: NaiveDate,
) -> Result<Outcome, CommandError> {
    let Some((command, rest)) = next_token(line) else {
        return Ok(Outcome::Output(String::new()));
    };

    match command {
        "list" | "ls" => Ok(Outcome::Output(format_rows(&render_rows(
            store,
            &IsoDateFormatter,
        )))),
        "add" => add(store, rest, today),
        "remove" | "rm" => remove(store, rest),
        "count" => Ok(Outcome::Output(store.count().to_string())),
        "help" => Ok(Outcome::Output(HELP.to_string())),
        "quit" | "exit" => Ok(Outcome::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn add(store: &mut TodoStore, args: &str, today: NaiveDate) -> Result<Outcome, CommandError> {
    let (category, rest) = next_token(args).ok_or(CommandError::Usage(ADD_USAGE))?;
    let (date, title) = next_token(rest).ok_or(CommandError::Usage(ADD_USAGE))?;

    let mut form = EntryForm::new(today);
    if !category.eq_ignore_ascii_case("none") {
        form.select(Category::parse(category)?);
    }
    if !date.eq_ignore_ascii_case("today") {
        form.set_due_date(parse_due_date(date)?);
    }
    form.set_title(title);

    let id = form.submit(store);
    Ok(Outcome::Output(format!(
        "added #{} ({id})",
        store.count().saturating_sub(1)
    )))
}

fn remove(store: &mut TodoStore, args: &str) -> Result<Outcome, CommandError> {
    let (index, extra) = next_token(args).ok_or(CommandError::Usage(REMOVE_USAGE))?;
    if !extra.trim().is_empty() {
        return Err(CommandError::Usage(REMOVE_USAGE));
    }
    let invalid = || CommandError::InvalidIndex(index.to_string());
    if !index.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let index: usize = index.parse().map_err(|_| invalid())?;

    let removed = delete_row(store, index)?;
    Ok(Outcome::Output(format!("removed #{index} ({})", removed.id())))
}

/// Renders rows as `<index>  <icon or ->  <date>  <title>` lines.
pub fn format_rows(rows: &[TodoRow]) -> String {
    if rows.is_empty() {
        return "(no items)".to_string();
    }
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            format!(
                "{index:>3}  {:<24}  {}  {}",
                row.icon.unwrap_or("-"),
                row.due_date,
                row.title
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// Splits off the first whitespace-delimited token; the remainder keeps
// everything after the single separating whitespace character.
fn next_token(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    match input.char_indices().find(|(_, ch)| ch.is_whitespace()) {
        Some((at, ch)) => Some((&input[..at], &input[at + ch.len_utf8()..])),
        None => Some((input, "")),
    }
}
