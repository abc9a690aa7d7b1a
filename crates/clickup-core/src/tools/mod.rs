//! Tool abstractions exposed to the hosting agent framework

pub mod base;
pub mod types;

pub use base::{Tool, ToolError};
pub use types::{ToolCall, ToolParameter, ToolResult, ToolSchema};
