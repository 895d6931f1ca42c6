//! The invocation protocol between the reasoning loop and a tool.
//!
//! One iteration of the loop produces a [`ToolRequest`], hands it to the
//! registry, and receives a [`ToolObservation`] back. Observations are
//! immutable once created and carry an explicit success/error status — a
//! failed invocation is data, never a fault that unwinds the loop.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A request to invoke one tool with structured input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRequest {
    /// The identifier of the tool to invoke
    pub tool: String,
    /// Structured input for the tool
    pub input: Value,
}

impl ToolRequest {
    /// Creates a new tool request.
    #[must_use]
    pub fn new(tool: impl Into<String>, input: Value) -> Self {
        Self {
            tool: tool.into(),
            input,
        }
    }
}

/// The outcome of one tool invocation.
///
/// Serializes with an explicit `status` field:
/// `{"status":"success","result":…}` or `{"status":"error","error":…}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ToolObservation {
    /// The tool produced a result
    Success {
        /// The tool's structured output
        result: Value,
    },
    /// The invocation failed
    Error {
        /// Human-readable description of the failure
        error: String,
    },
}

impl ToolObservation {
    /// Creates a success observation.
    #[must_use]
    pub fn success(result: Value) -> Self {
        Self::Success { result }
    }

    /// Creates an error observation.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }

    /// Returns true if the invocation succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the status as a string, matching the serialized form.
    #[must_use]
    pub fn status(&self) -> &'static str {
        match self {
            Self::Success { .. } => "success",
            Self::Error { .. } => "error",
        }
    }
}
