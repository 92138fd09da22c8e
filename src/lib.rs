//! # Todos - a single-session todo list with priority levels
//!
//! Todos keeps an in-memory list of todo items, each carrying free text and a
//! [`model::Priority`]. The list is always ordered most urgent first, with
//! insertion order preserved among equal priorities.
//!
//! ## Quick Start
//!
//! ```
//! use todos::state::{NewItemForm, TodoStateManager};
//!
//! let mut state = TodoStateManager::empty();
//! state.add_item(&NewItemForm::new("  Buy milk  ").with_priority("High"));
//! state.add_item(&NewItemForm::new("Walk dog"));
//!
//! let items = state.snapshot();
//! assert_eq!(items[0].text(), "Buy milk");
//! assert_eq!(items[1].priority().as_str(), "Medium");
//! ```
//!
//! ## Modules
//!
//! - [`model`]: Data models (Priority, TodoItem, TodoRecord)
//! - [`state`]: The state manager owning the ordered list
//! - [`cli`]: Console frontend
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`validation`]: Input normalization

/// Console frontend built on clap.
pub mod cli;

/// Configuration loading.
///
/// Handles `.todos.yml` files and the user config directory.
pub mod config;

/// Error types and result aliases.
///
/// Defines `TodoError` enum and `Result<T>` type alias.
pub mod error;

pub mod logging;

/// Data models for todos.
pub mod model;

pub mod state;

/// Input validation utilities.
pub mod validation;
