//! Tool for listing the tasks in the configured ClickUp list

use async_trait::async_trait;
use clickup_core::ClickUpResult;
use clickup_core::tools::base::{Tool, ToolError};
use clickup_core::tools::types::{ToolCall, ToolResult, ToolSchema};
use reqwest::Method;
use serde_json::Value;
use tracing::info;

use super::client::ClickUpClient;
use super::config::ClickUpConfig;

/// Tool that fetches every non-archived task from the configured list.
///
/// Takes no runtime arguments; the archived-exclusion filter is fixed. The
/// response is returned verbatim, pagination included, for the caller to
/// interpret.
#[derive(Debug, Clone)]
pub struct ListTasksTool {
    client: ClickUpClient,
    list_id: String,
}

impl ListTasksTool {
    pub fn new(token: Option<String>, list_id: Option<String>) -> ClickUpResult<Self> {
        let config = ClickUpConfig::resolve(token, list_id)?;
        let list_id = config.require_list_id()?.to_string();
        Ok(Self {
            client: ClickUpClient::new(config.token())?,
            list_id,
        })
    }

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

    /// Fetch the list and return the service's JSON response verbatim.
    pub async fn run(&self) -> ClickUpResult<Value> {
        info!(list_id = %self.list_id, "listing ClickUp tasks");
        self.client
            .request(
                Method::GET,
                &format!("/list/{}/task?archived=false", self.list_id),
                None,
            )
            .await
    }
}

#[async_trait]
impl Tool for ListTasksTool {
    fn name(&self) -> &str {
        "clickup_list_tasks"
    }

    fn description(&self) -> &str {
        "Fetch all non-archived tasks from the configured ClickUp list."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(self.name(), self.description(), Vec::new())
    }

    fn is_read_only(&self) -> bool {
        true
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let response = self.run().await.map_err(ToolError::from)?;

        Ok(ToolResult::success(
            &call.id,
            self.name(),
            serde_json::to_string(&response)?,
        ))
    }
}
