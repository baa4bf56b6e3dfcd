//! Presentation-facing use-case flows.
//!
//! # Responsibility
//! - Model the entry screen's create flow and the list screen's render and
//!   delete flows as plain synchronous calls.
//! - Keep screens decoupled from store internals; the store is always passed
//!   in explicitly.

pub mod entry_service;
pub mod list_service;
