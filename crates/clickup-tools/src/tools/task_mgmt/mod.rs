//! Task management tools backed by the ClickUp v2 API

pub mod clickup;

pub use clickup::{
    AddCommentTool, ClickUpClient, ClickUpConfig, CommentInput, CreateOrUpdateInput,
    CreateTaskTool, ListTasksTool, add_clickup_comment, create_clickup_task,
    init_default_tools, list_clickup_tasks,
};
