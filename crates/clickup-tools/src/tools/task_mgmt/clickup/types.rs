//! Typed inputs and payload mapping for the ClickUp tools

use clickup_core::{ClickUpError, ClickUpResult};
use serde::Deserialize;
use serde_json::{Map, Value, json};

use super::normalize::{normalize_due_date, normalize_priority};

/// Arguments for creating or updating a task.
///
/// Presence of `task_id` is the sole discriminator between the create and
/// update paths. Unknown keys in the incoming argument object are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateOrUpdateInput {
    /// Task title. Mandatory for creation, never forwarded on update.
    #[serde(default)]
    pub title: Option<String>,
    /// Task description (Markdown)
    #[serde(default)]
    pub description: Option<String>,
    /// Status name, e.g. "to do". Lower-cased before send.
    #[serde(default)]
    pub status: Option<String>,
    /// Priority: 1-4, a digit string, or urgent/high/normal/low
    #[serde(default)]
    pub priority: Option<Value>,
    /// Due date as YYYY-MM-DD, stored as midnight-UTC millis
    #[serde(default)]
    pub due_date: Option<String>,
    /// Create as a sub-task of this task id (create only)
    #[serde(default)]
    pub parent_id: Option<String>,
    /// When set, update this task instead of creating a new one
    #[serde(default)]
    pub task_id: Option<String>,
}

impl CreateOrUpdateInput {
    /// Whether this input targets the update path.
    pub fn is_update(&self) -> bool {
        self.task_id.as_deref().is_some_and(|id| !id.is_empty())
    }

    /// Map the input into the wire payload.
    ///
    /// Field rules:
    /// - `name`: create only; a missing or empty title on create is a
    ///   validation error raised here, before any network call
    /// - `description`: forwarded whenever present, even if empty
    /// - `status`: forwarded lower-cased when non-empty
    /// - `priority`: always present, normalized into 1-4
    /// - `due_date`: present only when the date string resolves
    /// - `parent`: create only
    pub fn build_payload(&self) -> ClickUpResult<Map<String, Value>> {
        let is_update = self.is_update();
        let mut payload = Map::new();

        if !is_update {
            match self.title.as_deref().filter(|t| !t.is_empty()) {
                Some(title) => {
                    payload.insert("name".to_string(), json!(title));
                }
                None => {
                    return Err(ClickUpError::validation(
                        "title",
                        "title is required when creating a task",
                    ));
                }
            }
        }

        if let Some(description) = &self.description {
            payload.insert("description".to_string(), json!(description));
        }

        if let Some(status) = self.status.as_deref().filter(|s| !s.is_empty()) {
            payload.insert("status".to_string(), json!(status.to_lowercase()));
        }

        payload.insert(
            "priority".to_string(),
            json!(normalize_priority(self.priority.as_ref())),
        );

        if let Some(due_ms) = normalize_due_date(self.due_date.as_deref()) {
            payload.insert("due_date".to_string(), json!(due_ms));
        }

        if !is_update {
            if let Some(parent) = self.parent_id.as_deref().filter(|p| !p.is_empty()) {
                payload.insert("parent".to_string(), json!(parent));
            }
        }

        Ok(payload)
    }
}

/// Arguments for adding a comment to an existing task.
///
/// Both fields are mandatory and forwarded without normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentInput {
    /// Existing task id
    pub task_id: String,
    /// Comment body (Markdown supported)
    pub comment_text: String,
}
