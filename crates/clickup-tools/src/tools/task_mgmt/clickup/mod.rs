//! ClickUp task tools
//!
//! Three tools covering the core ClickUp workflow:
//!
//! - [`CreateTaskTool`] creates a task or sub-task, or updates an existing
//!   task when `task_id` is given
//! - [`AddCommentTool`] adds a comment to an existing task
//! - [`ListTasksTool`] fetches every non-archived task in the configured list
//!
//! Configuration comes from `CLICKUP_API_TKN` and `CLICKUP_LIST_ID`, both
//! overridable at construction. Every operation is a single request/response
//! round trip; the service's JSON response is returned verbatim.

mod client;
mod comment_tool;
mod config;
mod create_tool;
mod functions;
mod list_tool;
mod normalize;
mod types;

#[cfg(test)]
mod tests;

// Re-export public APIs
pub use client::ClickUpClient;
pub use comment_tool::AddCommentTool;
pub use config::{ClickUpConfig, ENV_API_TOKEN, ENV_LIST_ID};
pub use create_tool::CreateTaskTool;
pub use functions::{
    add_clickup_comment, create_clickup_task, init_default_tools, list_clickup_tasks,
};
pub use list_tool::ListTasksTool;
pub use normalize::{normalize_due_date, normalize_priority};
pub use types::{CommentInput, CreateOrUpdateInput};
