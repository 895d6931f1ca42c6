//! Execution-strategy dispatch.
//!
//! [`TaskExecutor`] is the one polymorphic capability shared by every
//! executor variant; [`HybridController`] composes a single-agent loop and
//! four role-specialized loops behind it, choosing between them per task.

use crate::agent::config::{AgentConfig, Mode};
use crate::agent::result::{ExecutionResult, ExecutionStatus, Role};
use crate::agent::tool_loop::ToolLoopAgent;
use crate::agent::trace::ExecutionTrace;
use crate::complexity;
use crate::error::CadreError;
use async_trait::async_trait;
use chrono::Utc;
use futures::future;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Complexity score above which `auto` mode fans out to the roles.
const MULTI_AGENT_THRESHOLD: f64 = 0.5;

/// A task executor: text in, structured result out.
///
/// Concrete variants differ in strategy, not in contract — the loop agent
/// runs one bounded cycle, the controller arbitrates between strategies.
#[async_trait]
pub trait TaskExecutor: Send + Sync + Debug {
    /// Executes a task to completion.
    ///
    /// # Errors
    ///
    /// Returns a [`CadreError`] for configuration faults or a cancelled
    /// execution; tool-level faults are recorded in the result instead.
    async fn execute(&self, task: &str) -> Result<ExecutionResult, CadreError>;
}

#[async_trait]
impl TaskExecutor for ToolLoopAgent {
    async fn execute(&self, task: &str) -> Result<ExecutionResult, CadreError> {
        ToolLoopAgent::execute(self, task).await
    }
}

/// Chooses between single-agent and multi-agent execution.
///
/// Construction builds the single-agent loop and one loop per role, each
/// with its own identically configured tool registry. Nothing is shared
/// between the role agents, so their executions are free to run
/// concurrently.
#[derive(Debug)]
pub struct HybridController {
    mode: Mode,
    deadline: Option<Duration>,
    single: Arc<ToolLoopAgent>,
    roles: BTreeMap<Role, Arc<ToolLoopAgent>>,
}

impl HybridController {
    /// Builds a controller from an agent configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the configuration is invalid.
    pub fn from_config(config: &AgentConfig) -> Result<Self, CadreError> {
        config.validate()?;

        let single = Arc::new(ToolLoopAgent::new(config.clone())?);

        let mut roles = BTreeMap::new();
        for role in Role::ALL {
            let role_config = AgentConfig {
                name: role.as_str().to_string(),
                ..config.clone()
            };
            roles.insert(role, Arc::new(ToolLoopAgent::new(role_config)?));
        }

        Ok(Self {
            mode: config.mode,
            deadline: config.deadline,
            single,
            roles,
        })
    }

    /// Returns the configured mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Executes a task under the configured mode.
    ///
    /// # Errors
    ///
    /// See [`TaskExecutor::execute`].
    pub async fn execute(&self, task: &str) -> Result<ExecutionResult, CadreError> {
        self.execute_with_mode(task, self.mode).await
    }

    /// Executes a task under an explicit mode, bypassing the configured one.
    ///
    /// `auto` resolves to `single` or `multi` via the complexity score
    /// before anything runs. When a deadline is configured, the whole call
    /// races against it and a cancellation error is returned on expiry —
    /// never a partial result.
    ///
    /// # Errors
    ///
    /// See [`TaskExecutor::execute`].
    pub async fn execute_with_mode(
        &self,
        task: &str,
        mode: Mode,
    ) -> Result<ExecutionResult, CadreError> {
        let resolved = self.resolve(task, mode);

        let execution = async {
            match resolved {
                Mode::Single => self.single.execute(task).await,
                Mode::Multi => self.execute_multi(task).await,
                Mode::Auto => unreachable!("auto resolves before execution"),
            }
        };

        match self.deadline {
            Some(deadline) => tokio::time::timeout(deadline, execution)
                .await
                .map_err(|_| CadreError::cancelled(task, deadline))?,
            None => execution.await,
        }
    }

    /// Resolves `auto` to a concrete strategy; other modes pass through.
    fn resolve(&self, task: &str, mode: Mode) -> Mode {
        match mode {
            Mode::Auto => {
                let score = complexity::score(task);
                let resolved = if score > MULTI_AGENT_THRESHOLD {
                    Mode::Multi
                } else {
                    Mode::Single
                };
                tracing::debug!(score, resolved = %resolved, "auto mode resolved");
                resolved
            }
            explicit => explicit,
        }
    }

    /// Fans the task out to all roles and merges their results.
    ///
    /// Roles run concurrently; a role that fails or panics contributes a
    /// failed-status sub-result and does not abort the others.
    async fn execute_multi(&self, task: &str) -> Result<ExecutionResult, CadreError> {
        let started_at = Utc::now();
        let started = Instant::now();

        tracing::debug!(task, roles = self.roles.len(), "multi-agent execution started");

        let mut keys = Vec::with_capacity(self.roles.len());
        let mut handles = Vec::with_capacity(self.roles.len());
        for (role, agent) in &self.roles {
            let agent = Arc::clone(agent);
            let role_task = format!("As a {role}, {task}");
            keys.push((*role, role_task.clone()));
            handles.push(tokio::spawn(
                async move { agent.execute(&role_task).await },
            ));
        }

        let mut role_results = BTreeMap::new();
        for ((role, role_task), joined) in keys.into_iter().zip(future::join_all(handles).await) {
            let outcome = match joined {
                Ok(Ok(result)) => result,
                Ok(Err(e)) => {
                    tracing::warn!(role = %role, error = %e, "role execution failed");
                    failed_role_result(role_task, e.to_string())
                }
                Err(e) => {
                    tracing::warn!(role = %role, error = %e, "role task aborted");
                    failed_role_result(role_task, format!("role task aborted: {e}"))
                }
            };
            role_results.insert(role, outcome);
        }

        let iterations = role_results.values().map(|r| r.iterations).sum();

        Ok(ExecutionResult {
            task: task.to_string(),
            answer: format!("Multi-agent execution of: {task}"),
            iterations,
            status: ExecutionStatus::Completed,
            mode: Mode::Multi,
            trace: ExecutionTrace::new(),
            role_results,
            started_at,
            elapsed: started.elapsed(),
        })
    }
}

#[async_trait]
impl TaskExecutor for HybridController {
    async fn execute(&self, task: &str) -> Result<ExecutionResult, CadreError> {
        HybridController::execute(self, task).await
    }
}

/// Builds the sub-result recorded for a role whose execution failed.
fn failed_role_result(task: String, reason: String) -> ExecutionResult {
    ExecutionResult {
        task,
        answer: reason,
        iterations: 0,
        status: ExecutionStatus::Failed,
        mode: Mode::Single,
        trace: ExecutionTrace::new(),
        role_results: BTreeMap::new(),
        started_at: Utc::now(),
        elapsed: Duration::ZERO,
    }
}
