//! Configuration file schema.
//!
//! Maps directly to the TOML configuration format:
//!
//! ```toml
//! [agent]
//! mode = "auto"
//! max_iterations = 10
//!
//! [tools]
//! enabled = ["calculator"]
//! ```
//!
//! String-typed fields (like `mode`) are validated when the file schema is
//! resolved into a runtime [`AgentConfig`], so an explicitly supplied bad
//! value is always an error, never silently defaulted.

use crate::agent::{AgentConfig, Mode};
use crate::error::CadreError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CadreConfig {
    /// The `[agent]` table
    pub agent: AgentSection,
    /// The `[tools]` table
    pub tools: ToolsSection,
    /// The `[credentials]` table
    pub credentials: CredentialsSection,
}

/// The `[agent]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentSection {
    /// Display name for the primary agent.
    pub name: String,
    /// Execution mode: "single", "multi", or "auto".
    pub mode: String,
    /// Iteration budget per execution.
    pub max_iterations: usize,
    /// Stop early on the first success observation.
    pub early_exit: bool,
    /// Optional wall-clock deadline per execution, in seconds.
    pub deadline_secs: Option<u64>,
}

impl Default for AgentSection {
    fn default() -> Self {
        Self {
            name: "primary".to_string(),
            mode: "single".to_string(),
            max_iterations: 10,
            early_exit: false,
            deadline_secs: None,
        }
    }
}

/// The `[tools]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsSection {
    /// Tool identifiers registered with the primary agent.
    pub enabled: Vec<String>,
}

impl Default for ToolsSection {
    fn default() -> Self {
        Self {
            enabled: vec!["calculator".to_string()],
        }
    }
}

/// The `[credentials]` table.
///
/// The core performs no credential validation; when `api_key_env` is set,
/// the CLI checks the named environment variable exists before starting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialsSection {
    /// Environment variable expected to hold the model API key.
    pub api_key_env: Option<String>,
}

impl CadreConfig {
    /// Resolves the file schema into a validated runtime [`AgentConfig`].
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unknown mode string or a zero
    /// iteration budget.
    pub fn resolve_agent_config(&self) -> Result<AgentConfig, CadreError> {
        let mode: Mode = self.agent.mode.parse()?;

        let config = AgentConfig {
            name: self.agent.name.clone(),
            max_iterations: self.agent.max_iterations,
            tools: self.tools.enabled.clone(),
            mode,
            early_exit: self.agent.early_exit,
            deadline: self.agent.deadline_secs.map(Duration::from_secs),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = CadreConfig::default();
        assert_eq!(config.agent.mode, "single");
        assert_eq!(config.agent.max_iterations, 10);
        assert_eq!(config.tools.enabled, vec!["calculator"]);
        assert!(config.credentials.api_key_env.is_none());
    }

    #[test]
    fn default_resolves_cleanly() {
        let agent = CadreConfig::default().resolve_agent_config().unwrap();
        assert_eq!(agent.mode, Mode::Single);
        assert_eq!(agent.max_iterations, 10);
        assert_eq!(agent.tools, vec!["calculator"]);
    }

    #[test]
    fn unknown_mode_is_a_configuration_error() {
        let mut config = CadreConfig::default();
        config.agent.mode = "warp".to_string();
        let err = config.resolve_agent_config().unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("warp"));
    }

    #[test]
    fn zero_iterations_is_a_configuration_error() {
        let mut config = CadreConfig::default();
        config.agent.max_iterations = 0;
        assert!(config.resolve_agent_config().is_err());
    }

    #[test]
    fn deadline_secs_converts_to_duration() {
        let mut config = CadreConfig::default();
        config.agent.deadline_secs = Some(45);
        let agent = config.resolve_agent_config().unwrap();
        assert_eq!(agent.deadline, Some(Duration::from_secs(45)));
    }
}
