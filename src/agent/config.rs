//! Agent configuration.
//!
//! Defines the execution mode and the immutable per-agent configuration
//! consumed by the reasoning loop and the dispatcher.

use crate::error::CadreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Execution strategy selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Always run the single-agent reasoning loop
    Single,
    /// Always fan out to the role-specialized agents
    Multi,
    /// Choose per task based on the complexity score
    Auto,
}

impl Mode {
    /// Returns the mode as a lowercase string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multi => "multi",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mode {
    type Err = CadreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::Single),
            "multi" => Ok(Self::Multi),
            "auto" => Ok(Self::Auto),
            other => Err(CadreError::configuration(
                "mode",
                format!("unknown mode '{other}'; expected one of: single, multi, auto"),
            )),
        }
    }
}

/// Configuration for one agent.
///
/// Immutable for the agent's lifetime; constructed with builder methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Display name for the agent
    pub name: String,
    /// Number of think/act/observe steps per `execute` call
    pub max_iterations: usize,
    /// Tool identifiers to register at construction
    #[serde(default)]
    pub tools: Vec<String>,
    /// Execution strategy
    pub mode: Mode,
    /// Stop after the first success-status observation instead of running
    /// the full iteration budget
    #[serde(default)]
    pub early_exit: bool,
    /// Optional wall-clock limit for one `execute` call
    #[serde(default)]
    pub deadline: Option<Duration>,
}

impl AgentConfig {
    /// Creates a configuration with the given name and defaults for the
    /// remaining fields (10 iterations, calculator tool, single mode).
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_iterations: 10,
            tools: vec!["calculator".to_string()],
            mode: Mode::Single,
            early_exit: false,
            deadline: None,
        }
    }

    /// Sets the iteration budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the list of tool identifiers to register.
    #[must_use]
    pub fn with_tools(mut self, tools: &[&str]) -> Self {
        self.tools = tools.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Adds a single tool identifier.
    #[must_use]
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tools.push(tool.into());
        self
    }

    /// Sets the execution mode.
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Enables or disables early termination on success.
    #[must_use]
    pub fn with_early_exit(mut self, early_exit: bool) -> Self {
        self.early_exit = early_exit;
        self
    }

    /// Sets a wall-clock deadline for each `execute` call.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Checks the configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `max_iterations` is zero.
    pub fn validate(&self) -> Result<(), CadreError> {
        if self.max_iterations == 0 {
            return Err(CadreError::configuration(
                "max_iterations",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new("primary")
    }
}
