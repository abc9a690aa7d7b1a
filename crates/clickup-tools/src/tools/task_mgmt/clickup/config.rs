//! Credential and list-id resolution for the ClickUp tools

use clickup_core::{ClickUpError, ClickUpResult};

/// Environment variable holding the personal ClickUp API token
pub const ENV_API_TOKEN: &str = "CLICKUP_API_TKN";

/// Environment variable holding the default list id
pub const ENV_LIST_ID: &str = "CLICKUP_LIST_ID";

/// Resolved ClickUp configuration.
///
/// Resolution order for each value: explicit argument, then environment
/// variable, else absent. Empty strings count as absent. The token is
/// mandatory for every tool; the list id only for tools that operate on the
/// configured default list.
#[derive(Debug, Clone)]
pub struct ClickUpConfig {
    token: String,
    list_id: Option<String>,
}

impl ClickUpConfig {
    /// Resolve configuration from explicit overrides and the environment.
    pub fn resolve(token: Option<String>, list_id: Option<String>) -> ClickUpResult<Self> {
        let token = token
            .filter(|value| !value.is_empty())
            .or_else(|| env_non_empty(ENV_API_TOKEN))
            .ok_or_else(|| ClickUpError::config(format!("{ENV_API_TOKEN} missing")))?;

        let list_id = list_id
            .filter(|value| !value.is_empty())
            .or_else(|| env_non_empty(ENV_LIST_ID));

        Ok(Self { token, list_id })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn list_id(&self) -> Option<&str> {
        self.list_id.as_deref()
    }

    /// The default list id, or a configuration error when absent.
    pub fn require_list_id(&self) -> ClickUpResult<&str> {
        self.list_id
            .as_deref()
            .ok_or_else(|| ClickUpError::config(format!("{ENV_LIST_ID} missing")))
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
