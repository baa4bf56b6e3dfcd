//! To-do domain model.
//!
//! # Responsibility
//! - Define the item record owned by the store and read by list/entry flows.
//! - Define the closed category set and its icon table.
//!
//! # Invariants
//! - Every item is identified by a `TodoId` generated once at construction.
//! - Items are immutable after construction; there is no edit path.

pub mod category;
pub mod todo;
