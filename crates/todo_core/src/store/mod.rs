//! Session-scoped item storage.
//!
//! # Responsibility
//! - Own every `TodoItem` of the running session in display order.
//! - Guard positional access with explicit bounds errors.
//!
//! # Invariants
//! - Insertion order is append order; the store never sorts.
//! - Nothing is persisted; the store lives as long as its owner.

pub mod todo_store;
