//! Data models for todos.
//!
//! - [`Priority`]: Ranked urgency levels (low, medium, high)
//! - [`TodoItem`]: A validated todo entry
//! - [`TodoRecord`]: The loosely-typed text/priority pair used for transport

mod item;
mod priority;

pub use item::{TodoItem, TodoRecord};
pub use priority::Priority;
