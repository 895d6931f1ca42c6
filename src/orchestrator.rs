//! Agent orchestration entry point.
//!
//! The [`Orchestrator`] owns the configuration-derived parameters and the
//! primary controller, built exactly once at startup. It keeps no history:
//! every `execute_task` call is independent.

use crate::agent::{AgentConfig, ExecutionResult, HybridController, Mode};
use crate::config::CadreConfig;
use crate::error::CadreError;

/// Coordinates task execution for external callers.
#[derive(Debug)]
pub struct Orchestrator {
    agent_config: AgentConfig,
    controller: HybridController,
}

impl Orchestrator {
    /// Builds an orchestrator from file configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the configuration is invalid.
    pub fn new(config: &CadreConfig) -> Result<Self, CadreError> {
        let agent_config = config.resolve_agent_config()?;
        Self::with_agent_config(agent_config)
    }

    /// Builds an orchestrator from an already-resolved agent configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the configuration is invalid.
    pub fn with_agent_config(agent_config: AgentConfig) -> Result<Self, CadreError> {
        let controller = HybridController::from_config(&agent_config)?;

        tracing::info!(
            agent = %agent_config.name,
            mode = %agent_config.mode,
            max_iterations = agent_config.max_iterations,
            "orchestrator ready"
        );

        Ok(Self {
            agent_config,
            controller,
        })
    }

    /// Returns the resolved agent configuration.
    #[must_use]
    pub fn agent_config(&self) -> &AgentConfig {
        &self.agent_config
    }

    /// Executes a task, optionally overriding the configured mode for this
    /// one call.
    ///
    /// # Errors
    ///
    /// Returns a [`CadreError`] for configuration faults or a cancelled
    /// execution. Tool-level faults are recorded in the result's trace and
    /// never propagate.
    pub async fn execute_task(
        &self,
        task: &str,
        mode_override: Option<Mode>,
    ) -> Result<ExecutionResult, CadreError> {
        match mode_override {
            Some(mode) => {
                tracing::debug!(task, mode = %mode, "executing with mode override");
                self.controller.execute_with_mode(task, mode).await
            }
            None => self.controller.execute(task).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Role;

    #[tokio::test]
    async fn default_config_executes_single_mode() {
        let orchestrator = Orchestrator::new(&CadreConfig::default()).unwrap();
        let result = orchestrator.execute_task("say hello", None).await.unwrap();
        assert_eq!(result.mode, Mode::Single);
        assert_eq!(result.iterations, 10);
    }

    #[tokio::test]
    async fn mode_override_takes_precedence() {
        let orchestrator = Orchestrator::with_agent_config(
            AgentConfig::new("primary").with_max_iterations(1),
        )
        .unwrap();

        let result = orchestrator
            .execute_task("say hello", Some(Mode::Multi))
            .await
            .unwrap();
        assert_eq!(result.mode, Mode::Multi);
        assert!(result.role(Role::Critic).is_some());
    }

    #[tokio::test]
    async fn override_applies_to_a_single_call() {
        let orchestrator = Orchestrator::with_agent_config(
            AgentConfig::new("primary").with_max_iterations(1),
        )
        .unwrap();

        let overridden = orchestrator
            .execute_task("say hello", Some(Mode::Multi))
            .await
            .unwrap();
        let plain = orchestrator.execute_task("say hello", None).await.unwrap();

        assert_eq!(overridden.mode, Mode::Multi);
        assert_eq!(plain.mode, Mode::Single);
    }

    #[test]
    fn invalid_file_config_is_rejected() {
        let mut config = CadreConfig::default();
        config.agent.mode = "warp".to_string();
        assert!(Orchestrator::new(&config).is_err());
    }
}
