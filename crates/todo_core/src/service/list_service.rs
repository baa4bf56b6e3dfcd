//! List screen render and delete flows.
//!
//! # Responsibility
//! - Project stored items into display rows (icon, title, formatted date).
//! - Route swipe-to-delete into exactly one store removal.
//! - Provide the preloaded sample list shown on first launch.
//!
//! # Invariants
//! - Row `i` always reflects `item_at(i)` of the store it was rendered from.
//! - Date text comes from the caller's formatter; the core picks no locale.

use crate::model::category::Category;
use crate::model::todo::{TodoId, TodoItem};
use crate::store::todo_store::{StoreResult, TodoStore};
use chrono::NaiveDate;
use log::{debug, info};

/// `yyyy-MM-dd` as a chrono format string.
pub const ISO_DATE_TEMPLATE: &str = "%Y-%m-%d";

/// Formats a due date for display.
///
/// Implementations may reorder fields or substitute separators for the
/// active locale.
pub trait DateFormatter {
    fn format(&self, date: NaiveDate) -> String;
}

/// Default formatter rendering `yyyy-MM-dd`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsoDateFormatter;

impl DateFormatter for IsoDateFormatter {
    fn format(&self, date: NaiveDate) -> String {
        date.format(ISO_DATE_TEMPLATE).to_string()
    }
}

impl<F> DateFormatter for F
where
    F: Fn(NaiveDate) -> String,
{
    fn format(&self, date: NaiveDate) -> String {
        self(date)
    }
}

/// Display projection of one stored item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub id: TodoId,
    /// Icon asset name; `None` renders no icon.
    pub icon: Option<&'static str>,
    pub title: String,
    pub due_date: String,
}

impl TodoRow {
    fn from_item(item: &TodoItem, formatter: &impl DateFormatter) -> Self {
        Self {
            id: item.id(),
            icon: item.icon_name(),
            title: item.title().to_string(),
            due_date: formatter.format(item.due_date()),
        }
    }
}

/// Renders every stored item as a row, in store order.
pub fn render_rows(store: &TodoStore, formatter: &impl DateFormatter) -> Vec<TodoRow> {
    let rows: Vec<TodoRow> = store
        .iter()
        .map(|item| TodoRow::from_item(item, formatter))
        .collect();
    debug!("event=list_render module=list status=ok rows={}", rows.len());
    rows
}

/// Handles a swipe-to-delete on row `index`.
///
/// Calls `TodoStore::remove_at` exactly once and returns the removed item.
/// The caller re-renders afterwards.
///
/// # Errors
/// - `StoreError::OutOfRange` when `index` was not a rendered row.
pub fn delete_row(store: &mut TodoStore, index: usize) -> StoreResult<TodoItem> {
    let removed = store.remove_at(index)?;
    info!(
        "event=todo_delete module=list status=ok index={} remaining={}",
        index,
        store.count()
    );
    Ok(removed)
}

/// Sample items preloaded into the list on first display, each with a fresh id.
pub fn sample_items() -> Vec<TodoItem> {
    const SAMPLES: [(Category, &str, i32, u32, u32); 4] = [
        (Category::Child, "1.去游乐场", 2014, 11, 2),
        (Category::ShoppingCart, "2.购物", 2014, 10, 2),
        (Category::Phone, "3.打电话", 2015, 11, 2),
        (Category::Travel, "4.去欧洲旅游", 2015, 9, 2),
    ];

    SAMPLES
        .iter()
        .filter_map(|&(category, title, year, month, day)| {
            NaiveDate::from_ymd_opt(year, month, day)
                .map(|date| TodoItem::new(Some(category), title, date))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{render_rows, sample_items, DateFormatter, IsoDateFormatter};
    use crate::model::category::Category;
    use crate::model::todo::TodoItem;
    use crate::store::todo_store::TodoStore;
    use chrono::{Datelike, NaiveDate};

    #[test]
    fn iso_formatter_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2015, 9, 2).unwrap();
        assert_eq!(IsoDateFormatter.format(date), "2015-09-02");
    }

    #[test]
    fn closures_act_as_formatters() {
        let store = TodoStore::with_items([TodoItem::new(
            None,
            "x",
            NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
        )]);
        let day_first =
            |date: NaiveDate| format!("{:02}/{:02}/{}", date.day(), date.month(), date.year());

        let rows = render_rows(&store, &day_first);
        assert_eq!(rows[0].due_date, "07/03/2024");
        assert_eq!(rows[0].icon, None);
    }

    #[test]
    fn sample_list_matches_first_launch_content() {
        let samples = sample_items();
        let summary: Vec<_> = samples
            .iter()
            .map(|item| (item.category(), item.title(), item.due_date().to_string()))
            .collect();

        assert_eq!(
            summary,
            vec![
                (Some(Category::Child), "1.去游乐场", "2014-11-02".to_string()),
                (Some(Category::ShoppingCart), "2.购物", "2014-10-02".to_string()),
                (Some(Category::Phone), "3.打电话", "2015-11-02".to_string()),
                (Some(Category::Travel), "4.去欧洲旅游", "2015-09-02".to_string()),
            ]
        );
    }

    #[test]
    fn sample_ids_are_fresh_per_call() {
        let first = sample_items();
        let second = sample_items();
        assert!(first.iter().zip(&second).all(|(a, b)| a.id() != b.id()));
    }
}
