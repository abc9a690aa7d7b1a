//! Tool for commenting on an existing ClickUp task

use async_trait::async_trait;
use clickup_core::ClickUpResult;
use clickup_core::tools::base::{Tool, ToolError};
use clickup_core::tools::types::{ToolCall, ToolParameter, ToolResult, ToolSchema};
use reqwest::Method;
use serde_json::{Value, json};
use tracing::info;

use super::client::ClickUpClient;
use super::config::ClickUpConfig;
use super::types::CommentInput;

/// Tool that adds a comment to an existing task. Needs only the API token;
/// no default list is involved.
#[derive(Debug, Clone)]
pub struct AddCommentTool {
    client: ClickUpClient,
}

impl AddCommentTool {
    pub fn new(token: Option<String>) -> ClickUpResult<Self> {
        let config = ClickUpConfig::resolve(token, None)?;
        Ok(Self {
            client: ClickUpClient::new(config.token())?,
        })
    }

    pub fn from_env() -> ClickUpResult<Self> {
        Self::new(None)
    }

    #[cfg(test)]
    pub(crate) fn with_client(client: ClickUpClient) -> Self {
        Self { client }
    }

    /// Post the comment and return the service's JSON response verbatim.
    pub async fn run(&self, input: &CommentInput) -> ClickUpResult<Value> {
        info!(task_id = %input.task_id, "adding ClickUp comment");
        let payload = json!({ "comment_text": input.comment_text });
        self.client
            .request(
                Method::POST,
                &format!("/task/{}/comment", input.task_id),
                Some(&payload),
            )
            .await
    }
}

#[async_trait]
impl Tool for AddCommentTool {
    fn name(&self) -> &str {
        "clickup_add_comment"
    }

    fn description(&self) -> &str {
        "Add a comment to an existing ClickUp task."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            self.name(),
            self.description(),
            vec![
                ToolParameter::string("task_id", "Existing task id."),
                ToolParameter::string("comment_text", "Comment body (Markdown supported)."),
            ],
        )
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        for field in ["task_id", "comment_text"] {
            if call.get_string(field).is_none() {
                return Err(ToolError::InvalidArguments(format!(
                    "Missing '{field}' parameter"
                )));
            }
        }
        Ok(())
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        self.validate(call)?;
        let input: CommentInput = call
            .parse_arguments()
            .map_err(|e| ToolError::InvalidArguments(format!("Invalid arguments: {e}")))?;

        let response = self.run(&input).await.map_err(ToolError::from)?;

        Ok(ToolResult::success(
            &call.id,
            self.name(),
            serde_json::to_string(&response)?,
        ))
    }
}
