//! Todo list state.
//!
//! [`TodoStateManager`] exclusively owns the ordered record collection. The
//! presentation layer reads snapshots and submits commands, and may subscribe
//! to be told when the collection changes so it can re-render.

use crate::{
    config::SessionSettings,
    model::{Priority, TodoItem, TodoRecord},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Records present when a session starts, in declared order.
pub const SEED_RECORDS: [(&str, &str); 3] = [
    ("Write Code", "Medium"),
    ("Sleep", "High"),
    ("Have Fun", "Low"),
];

/// Fields submitted by the add-item form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItemForm {
    #[serde(default)]
    pub new_item: Option<String>,

    #[serde(default)]
    pub priority: Option<String>,
}

impl NewItemForm {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            new_item: Some(text.into()),
            priority: None,
        }
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Submitted text, `""` when absent.
    pub fn text(&self) -> &str {
        self.new_item.as_deref().unwrap_or("")
    }

    /// Submitted priority text, `"Medium"` when absent.
    pub fn priority_text(&self) -> &str {
        self.priority
            .as_deref()
            .unwrap_or_else(|| Priority::Medium.as_str())
    }
}

/// Handle returned by [`TodoStateManager::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&[TodoRecord])>;

pub struct TodoStateManager {
    items: Vec<TodoRecord>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    revision: u64,
}

impl TodoStateManager {
    /// Creates a manager holding the seed records in declared order.
    pub fn new() -> Self {
        Self::with_records(
            SEED_RECORDS
                .iter()
                .map(|(text, priority)| TodoRecord::new(*text, *priority))
                .collect(),
        )
    }

    pub fn empty() -> Self {
        Self::with_records(Vec::new())
    }

    /// Trusted constructor. Records are kept as given, without sorting.
    pub fn with_records(items: Vec<TodoRecord>) -> Self {
        Self {
            items,
            listeners: Vec::new(),
            next_subscription: 0,
            revision: 0,
        }
    }

    pub fn from_settings(settings: &SessionSettings) -> Self {
        let mut state = if settings.seed {
            Self::new()
        } else {
            Self::empty()
        };
        if settings.sort_on_start {
            state.sort_by_priority();
        }
        state
    }

    /// Validates the form and appends the new item, then re-sorts.
    ///
    /// Invalid text leaves the collection untouched. Returns whether an item
    /// was added.
    pub fn add_item(&mut self, input: &NewItemForm) -> bool {
        let Some(item) = TodoItem::create(Some(input.text()), Some(input.priority_text())) else {
            trace!("ignoring todo with empty text");
            return false;
        };

        debug!(text = %item.text(), priority = %item.priority(), "adding todo");
        self.items.push(item.to_record());
        self.sort_by_priority();
        self.changed();
        true
    }

    /// Removes the first record equal to `record`. Returns whether one was
    /// removed.
    pub fn complete_item(&mut self, record: &TodoRecord) -> bool {
        let Some(index) = self.items.iter().position(|r| r == record) else {
            trace!(text = %record.text, "no matching todo to complete");
            return false;
        };

        let removed = self.items.remove(index);
        debug!(text = %removed.text, priority = %removed.priority, "completed todo");
        self.changed();
        true
    }

    /// Stable sort by priority rank, most urgent first. Unknown priority
    /// strings rank as `Medium`.
    pub fn sort_by_priority(&mut self) {
        self.items.sort_by_key(|r| Priority::rank_of(&r.priority));
    }

    /// Current collection decoded into items.
    pub fn snapshot(&self) -> Vec<TodoItem> {
        self.items.iter().map(TodoItem::from_record).collect()
    }

    pub fn records(&self) -> &[TodoRecord] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of state changes so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Registers a listener called with the records after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(&[TodoRecord]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn changed(&mut self) {
        self.revision += 1;
        for (_, listener) in &mut self.listeners {
            listener(&self.items);
        }
    }
}

impl Default for TodoStateManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TodoStateManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoStateManager")
            .field("items", &self.items)
            .field("listeners", &self.listeners.len())
            .field("revision", &self.revision)
            .finish()
    }
}
