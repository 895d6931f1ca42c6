//! Tool definition and executor traits.
//!
//! Defines the contract every tool capability implements and the
//! [`ToolConfig`] structure that pairs a definition with execution limits.

use crate::tools::error::ToolError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Describes a tool to the reasoning loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// The identifier the tool is registered under
    pub name: String,
    /// Description of what the tool does
    pub description: String,
    /// JSON Schema for the tool's input parameters
    pub input_schema: Value,
}

/// Configuration for a registered tool.
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// The tool definition
    pub definition: ToolDefinition,
    /// Per-invocation execution timeout
    pub timeout: Duration,
}

impl ToolConfig {
    /// Default per-invocation timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates a new tool configuration with the default timeout.
    #[must_use]
    pub fn new(definition: ToolDefinition) -> Self {
        Self {
            definition,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets the per-invocation execution timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// The result type for tool execution futures.
pub type ToolExecutionFuture =
    Pin<Box<dyn Future<Output = Result<Value, ToolError>> + Send + Sync + 'static>>;

/// Trait implemented by every tool capability.
///
/// A tool accepts a structured input mapping and produces a structured
/// output mapping. Execution is a future because real tools (search, code
/// execution) suspend on I/O; the built-in tools complete immediately.
///
/// # Example
///
/// ```rust
/// use cadre_ai::tools::{ToolExecutorTrait, ToolExecutionFuture};
/// use serde_json::Value;
///
/// #[derive(Debug)]
/// struct EchoTool;
///
/// impl ToolExecutorTrait for EchoTool {
///     fn execute(&self, args: Value) -> ToolExecutionFuture {
///         Box::pin(async move { Ok(args) })
///     }
/// }
/// ```
pub trait ToolExecutorTrait: Send + Sync + Debug {
    /// Executes the tool with the given arguments.
    fn execute(&self, args: Value) -> ToolExecutionFuture;

    /// Validates the input arguments before execution.
    ///
    /// The default implementation accepts any arguments.
    ///
    /// # Errors
    ///
    /// Returns a [`ToolError`] describing why the arguments were rejected.
    fn validate_args(&self, _args: &Value) -> Result<(), ToolError> {
        Ok(())
    }
}

/// A boxed tool executor for dynamic dispatch.
pub type BoxedToolExecutor = Box<dyn ToolExecutorTrait>;

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(name: &str) -> ToolDefinition {
        ToolDefinition {
            name: name.to_string(),
            description: "a test tool".to_string(),
            input_schema: serde_json::json!({"type": "object"}),
        }
    }

    #[test]
    fn config_uses_default_timeout() {
        let config = ToolConfig::new(definition("t"));
        assert_eq!(config.timeout, ToolConfig::DEFAULT_TIMEOUT);
    }

    #[test]
    fn config_with_timeout() {
        let config = ToolConfig::new(definition("t")).with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn definition_serialization_roundtrip() {
        let def = definition("calculator");
        let json = serde_json::to_string(&def).unwrap();
        let back: ToolDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(def, back);
    }
}
