//! Stub executor for tool identifiers without a native implementation.
//!
//! The registry accepts any identifier, so identifiers that do not name a
//! built-in tool are bound to this executor. It acknowledges the
//! invocation with a success-status echo of its input, which keeps the
//! reasoning loop's trace well-formed while the real capability is absent.

use crate::tools::definition::{ToolConfig, ToolDefinition, ToolExecutionFuture, ToolExecutorTrait};
use serde_json::{json, Value};
use std::time::Duration;

/// Placeholder executor that echoes its input.
#[derive(Debug, Clone)]
pub struct StubTool {
    name: String,
}

impl StubTool {
    /// Creates a stub executor for the given identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns a generic tool configuration for an identifier.
    #[must_use]
    pub fn config(name: &str) -> ToolConfig {
        ToolConfig::new(ToolDefinition {
            name: name.to_string(),
            description: format!("Placeholder capability for '{name}'"),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "additionalProperties": true
            }),
        })
        .with_timeout(Duration::from_secs(5))
    }
}

impl ToolExecutorTrait for StubTool {
    fn execute(&self, args: Value) -> ToolExecutionFuture {
        let name = self.name.clone();
        Box::pin(async move {
            Ok(json!({
                "result": format!("executed {name} with input {args}"),
                "status": "success"
            }))
        })
    }
}
