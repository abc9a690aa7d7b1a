//! Bare-function wrappers over process-wide default tool instances
//!
//! The defaults are explicit singletons: the host calls
//! [`init_default_tools`] once at startup, then the wrappers delegate to the
//! shared instances. Calling a wrapper before initialization is a
//! configuration error; nothing is constructed implicitly at load time.

use clickup_core::{ClickUpError, ClickUpResult};
use once_cell::sync::OnceCell;
use serde_json::Value;

use super::comment_tool::AddCommentTool;
use super::create_tool::CreateTaskTool;
use super::list_tool::ListTasksTool;
use super::types::{CommentInput, CreateOrUpdateInput};

struct DefaultTools {
    creator: CreateTaskTool,
    commenter: AddCommentTool,
    lister: ListTasksTool,
}

static DEFAULT_TOOLS: OnceCell<DefaultTools> = OnceCell::new();

/// Construct the shared default tool instances.
///
/// Token and list id resolve as everywhere else: explicit override first,
/// then environment. Returns a configuration error when credentials are
/// missing or when the defaults were already initialized.
pub fn init_default_tools(token: Option<String>, list_id: Option<String>) -> ClickUpResult<()> {
    let tools = DefaultTools {
        creator: CreateTaskTool::new(token.clone(), list_id.clone())?,
        commenter: AddCommentTool::new(token.clone())?,
        lister: ListTasksTool::new(token, list_id)?,
    };
    DEFAULT_TOOLS
        .set(tools)
        .map_err(|_| ClickUpError::config("default ClickUp tools already initialized"))
}

fn default_tools() -> ClickUpResult<&'static DefaultTools> {
    DEFAULT_TOOLS.get().ok_or_else(|| {
        ClickUpError::config("default ClickUp tools not initialized; call init_default_tools first")
    })
}

/// Functional wrapper over [`CreateTaskTool`].
pub async fn create_clickup_task(input: &CreateOrUpdateInput) -> ClickUpResult<Value> {
    default_tools()?.creator.run(input).await
}

/// Functional wrapper over [`AddCommentTool`].
pub async fn add_clickup_comment(task_id: &str, comment_text: &str) -> ClickUpResult<Value> {
    let input = CommentInput {
        task_id: task_id.to_string(),
        comment_text: comment_text.to_string(),
    };
    default_tools()?.commenter.run(&input).await
}

/// Functional wrapper over [`ListTasksTool`].
pub async fn list_clickup_tasks() -> ClickUpResult<Value> {
    default_tools()?.lister.run().await
}
