//! ClickUp Agent Tools
//!
//! All tools in this crate live under one category:
//!
//! - `task_mgmt`: ClickUp task management tools (create-or-update task,
//!   add comment, list tasks)

pub mod task_mgmt;

// Re-export all tools for easy access
pub use task_mgmt::{AddCommentTool, CreateTaskTool, ListTasksTool};

use clickup_core::{ClickUpResult, Tool};
use std::sync::Arc;

/// Build the default tool set from the process environment.
///
/// Fails with a configuration error when `CLICKUP_API_TKN` is unset, or when
/// `CLICKUP_LIST_ID` is unset (the create and list tools need a default
/// list).
pub fn get_default_tools() -> ClickUpResult<Vec<Arc<dyn Tool>>> {
    Ok(vec![
        Arc::new(CreateTaskTool::from_env()?),
        Arc::new(AddCommentTool::from_env()?),
        Arc::new(ListTasksTool::from_env()?),
    ])
}
