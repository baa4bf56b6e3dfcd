//! Core logic for the to-do list.
//! This crate owns the item model, the session store and the flows that
//! list and entry screens drive.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{icon_for, Category, CategoryParseError};
pub use model::todo::{parse_due_date, DueDateParseError, TodoId, TodoItem};
pub use service::entry_service::EntryForm;
pub use service::list_service::{
    delete_row, render_rows, sample_items, DateFormatter, IsoDateFormatter, TodoRow,
};
pub use store::todo_store::{StoreError, StoreResult, TodoStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
