//! ClickUp Agent Tools Core Library
//!
//! This crate provides the framework-facing seam for the ClickUp agent
//! tools: the `Tool` trait, the tool call/result/schema types, and the
//! unified error type. It carries nothing ClickUp-specific; the actual
//! tool implementations live in `clickup-tools`.

pub mod error;
pub mod tools;

// Re-export commonly used types
pub use error::{ClickUpError, ClickUpResult};
pub use tools::{Tool, ToolCall, ToolError, ToolParameter, ToolResult, ToolSchema};
