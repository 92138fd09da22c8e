use super::priority::Priority;
use crate::{error::Result, validation};
use serde::{Deserialize, Serialize};

/// Loosely-typed text/priority pair exchanged with the presentation layer.
///
/// Missing fields deserialize to an empty `text` and a `"Medium"` priority.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoRecord {
    #[serde(default)]
    pub text: String,

    #[serde(default = "default_priority")]
    pub priority: String,
}

fn default_priority() -> String {
    Priority::default().as_str().to_string()
}

impl TodoRecord {
    pub fn new(text: impl Into<String>, priority: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            priority: priority.into(),
        }
    }
}

/// A todo entry. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "TodoRecord", into = "TodoRecord")]
pub struct TodoItem {
    text: String,
    priority: Priority,
}

impl TodoItem {
    /// Validated entry point for raw user input.
    ///
    /// Returns `None` when `text` is absent or blank. The stored text is
    /// trimmed and `priority` goes through [`Priority::from_string`].
    pub fn create(text: Option<&str>, priority: Option<&str>) -> Option<Self> {
        let text = validation::normalize_text(text)?;
        Some(Self {
            text,
            priority: Priority::from_string(priority),
        })
    }

    /// Tolerant rebuild from a record. The text is taken as-is, so an empty
    /// text survives; only [`TodoItem::create`] enforces non-empty text.
    pub fn from_record(record: &TodoRecord) -> Self {
        Self {
            text: record.text.clone(),
            priority: Priority::from_string(Some(&record.priority)),
        }
    }

    /// Decodes a JSON object with optional `text` and `priority` keys.
    pub fn from_json(json: &str) -> Result<Self> {
        let record: TodoRecord = serde_json::from_str(json)?;
        Ok(Self::from(record))
    }

    pub fn to_record(&self) -> TodoRecord {
        TodoRecord::new(self.text.clone(), self.priority.as_str())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }
}

impl From<TodoRecord> for TodoItem {
    fn from(record: TodoRecord) -> Self {
        Self::from_record(&record)
    }
}

impl From<TodoItem> for TodoRecord {
    fn from(item: TodoItem) -> Self {
        Self {
            text: item.text,
            priority: item.priority.as_str().to_string(),
        }
    }
}
