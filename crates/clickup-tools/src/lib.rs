//! Tool implementations for ClickUp agent integrations
//!
//! Exposes three ClickUp v2 API operations as agent tools: create-or-update
//! task, add comment, and list tasks. Each tool is a stateless single-shot
//! HTTP round trip against the configured list; nothing is cached or retried
//! locally.

pub mod tools;

// Re-export tools
pub use tools::task_mgmt::{
    AddCommentTool, ClickUpClient, ClickUpConfig, CommentInput, CreateOrUpdateInput,
    CreateTaskTool, ListTasksTool, add_clickup_comment, create_clickup_task,
    init_default_tools, list_clickup_tasks,
};
pub use tools::get_default_tools;
