//! Tool for creating or updating a ClickUp task

use async_trait::async_trait;
use clickup_core::tools::base::{Tool, ToolError};
use clickup_core::tools::types::{ToolCall, ToolParameter, ToolResult, ToolSchema};
use clickup_core::ClickUpResult;
use reqwest::Method;
use serde_json::Value;
use tracing::info;

use super::client::ClickUpClient;
use super::config::ClickUpConfig;
use super::types::CreateOrUpdateInput;

/// Tool that creates a task or sub-task in the configured list, or updates
/// an existing task when `task_id` is supplied.
#[derive(Debug, Clone)]
pub struct CreateTaskTool {
    client: ClickUpClient,
    list_id: String,
}

impl CreateTaskTool {
    /// Build the tool, resolving token and list id from the overrides or the
    /// environment. Missing values are a configuration error raised here,
    /// before any call is attempted.
    pub fn new(token: Option<String>, list_id: Option<String>) -> ClickUpResult<Self> {
        let config = ClickUpConfig::resolve(token, list_id)?;
        let list_id = config.require_list_id()?.to_string();
        Ok(Self {
            client: ClickUpClient::new(config.token())?,
            list_id,
        })
    }

    /// Build the tool from the environment alone.
    pub fn from_env() -> ClickUpResult<Self> {
        Self::new(None, None)
    }

    #[cfg(test)]
    pub(crate) fn with_client(client: ClickUpClient, list_id: &str) -> Self {
        Self {
            client,
            list_id: list_id.to_string(),
        }
    }

    /// Run the operation against the typed input, returning the service's
    /// JSON response verbatim.
    pub async fn run(&self, input: &CreateOrUpdateInput) -> ClickUpResult<Value> {
        let payload = Value::Object(input.build_payload()?);

        if let Some(task_id) = input.task_id.as_deref().filter(|id| !id.is_empty()) {
            info!(task_id, "updating ClickUp task");
            self.client
                .request(Method::PUT, &format!("/task/{task_id}"), Some(&payload))
                .await
        } else {
            info!(list_id = %self.list_id, "creating ClickUp task");
            self.client
                .request(
                    Method::POST,
                    &format!("/list/{}/task", self.list_id),
                    Some(&payload),
                )
                .await
        }
    }
}

#[async_trait]
impl Tool for CreateTaskTool {
    fn name(&self) -> &str {
        "clickup_create_or_update_task"
    }

    fn description(&self) -> &str {
        "Create a task or sub-task in the configured ClickUp list, or update an existing task when task_id is given. Title is required for creation and ignored on update."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            self.name(),
            self.description(),
            vec![
                ToolParameter::string("title", "Task title. Required when creating; ignored on update."),
                ToolParameter::optional_string("description", "Task description (Markdown)."),
                ToolParameter::optional_string("status", "Status name, e.g. 'to do'."),
                ToolParameter::optional_string(
                    "priority",
                    "Priority: 1-4 or urgent/high/normal/low. Unrecognized values fall back to normal.",
                )
                .with_default(3),
                ToolParameter::optional_string("due_date", "Due date as YYYY-MM-DD."),
                ToolParameter::optional_string(
                    "parent_id",
                    "If set, create the task as a sub-task of this task id.",
                ),
                ToolParameter::optional_string(
                    "task_id",
                    "If set, update this task instead of creating a new one.",
                ),
            ],
        )
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        let has_task_id = call
            .get_string("task_id")
            .is_some_and(|id| !id.is_empty());
        let has_title = call.get_string("title").is_some_and(|t| !t.is_empty());
        if !has_task_id && !has_title {
            return Err(ToolError::InvalidArguments(
                "title is required when creating a task".to_string(),
            ));
        }
        Ok(())
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let input: CreateOrUpdateInput = call
            .parse_arguments()
            .map_err(|e| ToolError::InvalidArguments(format!("Invalid arguments: {e}")))?;
        let mode = if input.is_update() { "update" } else { "create" };

        let response = self.run(&input).await.map_err(ToolError::from)?;

        Ok(
            ToolResult::success(&call.id, self.name(), serde_json::to_string(&response)?)
                .with_metadata("mode", mode),
        )
    }
}
