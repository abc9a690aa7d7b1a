//! Base trait and error type for tools

use crate::error::ClickUpError;
use crate::tools::types::{ToolCall, ToolResult, ToolSchema};
use async_trait::async_trait;
use std::time::{Duration, Instant};

/// Error type for tool operations
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Invalid arguments provided to the tool
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Tool execution failed
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// Tool configuration is missing or unusable
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ClickUpError> for ToolError {
    fn from(err: ClickUpError) -> Self {
        match err {
            ClickUpError::Config { message } => ToolError::Configuration(message),
            ClickUpError::Validation { message, .. } => ToolError::InvalidArguments(message),
            ClickUpError::Remote { message, .. } => ToolError::ExecutionFailed(message),
            ClickUpError::Json { message } => ToolError::ExecutionFailed(message),
        }
    }
}

/// Base trait for all tools
///
/// Tools are capabilities an agent can invoke against the environment. Each
/// tool publishes a schema for its arguments and performs its work in
/// `execute`.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool's unique name
    ///
    /// Tool names must be unique within a registry and should follow
    /// the pattern: lowercase with underscores (e.g., "clickup_list_tasks").
    fn name(&self) -> &str;

    /// Get the tool's description
    ///
    /// Included in the system prompt so the LLM knows when to use the tool.
    fn description(&self) -> &str;

    /// Get the tool's JSON schema for input parameters
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with the given arguments
    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError>;

    /// Validate the tool call arguments
    ///
    /// Default implementation does nothing. Override for custom validation.
    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        let _ = call;
        Ok(())
    }

    /// Whether this tool only reads data (no side effects)
    fn is_read_only(&self) -> bool {
        false
    }

    /// Get the maximum execution time as Duration
    fn max_execution_duration(&self) -> Option<Duration> {
        Some(Duration::from_secs(30))
    }

    /// Execute the tool with timing and error handling
    async fn execute_with_timing(&self, call: &ToolCall) -> ToolResult {
        let start_time = Instant::now();

        // Validate arguments first
        if let Err(err) = self.validate(call) {
            return ToolResult::error(&call.id, self.name(), err.to_string())
                .with_execution_time(start_time.elapsed().as_millis() as u64);
        }

        match self.execute(call).await {
            Ok(mut result) => {
                result.execution_time_ms = Some(start_time.elapsed().as_millis() as u64);
                result
            }
            Err(err) => ToolResult::error(&call.id, self.name(), err.to_string())
                .with_execution_time(start_time.elapsed().as_millis() as u64),
        }
    }
}
