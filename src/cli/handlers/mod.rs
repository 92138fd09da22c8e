mod add;
mod done;
mod list;
mod priorities;
mod utils;

pub use add::handle_add;
pub use done::handle_done;
pub use list::handle_list;
pub use priorities::handle_priorities;
pub use utils::{format_priority, print_todo_list};

use crate::config::DisplaySettings;
use crate::state::TodoStateManager;

/// State shared by all session command handlers
pub struct SessionContext {
    pub state: TodoStateManager,
    pub display: DisplaySettings,
}

impl SessionContext {
    pub fn new(state: TodoStateManager, display: DisplaySettings) -> Self {
        Self { state, display }
    }
}
