//! The bounded reasoning loop.
//!
//! [`ToolLoopAgent`] runs a fixed number of think/act/observe steps over
//! its own tool registry, accumulating a trace. The loop holds no state
//! between `execute` calls and never mutates the registry, so separate
//! calls are independent.
//!
//! Thought production and action selection sit behind [`ActionPolicy`].
//! The default [`KeywordPolicy`] is a deterministic stand-in for a real
//! reasoning backend: it emits a templated thought and routes on a single
//! keyword. Substituting a model-driven policy only requires implementing
//! the trait.

use crate::agent::config::{AgentConfig, Mode};
use crate::agent::result::{ExecutionResult, ExecutionStatus};
use crate::agent::trace::{ExecutionTrace, TraceStep};
use crate::error::CadreError;
use crate::tools::builtins::CALCULATOR_TOOL;
use crate::tools::{ToolRegistry, ToolRequest};
use crate::types::{AgentId, RunId};
use chrono::Utc;
use serde_json::json;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::time::Instant;

/// Identifier of the fallback action.
///
/// Deliberately never registered: selecting it produces an unknown-tool
/// error observation, which is the loop's way of recording "nothing useful
/// to do this step" without faulting.
pub const FALLBACK_ACTION: &str = "no_op";

/// Answer text when the loop exhausts its budget.
///
/// The base loop does not synthesize an answer from observations; the
/// trace carries everything a caller needs.
const FALLBACK_ANSWER: &str =
    "No conclusive answer was produced within the iteration budget; see the execution trace.";

/// Produces the thought and selects the action for one iteration.
pub trait ActionPolicy: Send + Sync + Debug {
    /// Produces the reasoning text for one iteration.
    fn thought(&self, task: &str, iteration: usize) -> String;

    /// Chooses the tool invocation for one iteration.
    fn select(&self, task: &str, registry: &ToolRegistry) -> ToolRequest;
}

/// Default keyword-routing policy.
///
/// Routes to the calculator when the task mentions "calculate" and the
/// tool is registered, deriving the expression from the text following
/// the last `"Calculate "`; everything else becomes the fallback action.
#[derive(Debug, Default, Clone)]
pub struct KeywordPolicy;

impl ActionPolicy for KeywordPolicy {
    fn thought(&self, task: &str, iteration: usize) -> String {
        format!("Thinking about how to {task} (iteration {iteration})")
    }

    fn select(&self, task: &str, registry: &ToolRegistry) -> ToolRequest {
        if task.to_lowercase().contains("calculate") && registry.has(CALCULATOR_TOOL) {
            let expression = if task.contains("Calculate ") {
                task.split("Calculate ").last().unwrap_or(task).to_string()
            } else {
                "42 * 73".to_string()
            };
            return ToolRequest::new(CALCULATOR_TOOL, json!({ "expression": expression }));
        }

        ToolRequest::new(
            FALLBACK_ACTION,
            json!({ "query": format!("placeholder action for: {}", task.to_lowercase()) }),
        )
    }
}

/// An agent that executes tasks through the bounded reasoning loop.
#[derive(Debug)]
pub struct ToolLoopAgent {
    id: AgentId,
    config: AgentConfig,
    registry: ToolRegistry,
    policy: Box<dyn ActionPolicy>,
}

impl ToolLoopAgent {
    /// Creates an agent, registering the configured tools.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the configuration is invalid
    /// (e.g. a zero iteration budget).
    pub fn new(config: AgentConfig) -> Result<Self, CadreError> {
        config.validate()?;
        let registry = ToolRegistry::with_tools(&config.tools);

        tracing::debug!(
            name = %config.name,
            tools = registry.len(),
            max_iterations = config.max_iterations,
            "agent constructed"
        );

        Ok(Self {
            id: AgentId::new(),
            config,
            registry,
            policy: Box::new(KeywordPolicy),
        })
    }

    /// Replaces the action policy.
    #[must_use]
    pub fn with_policy(mut self, policy: Box<dyn ActionPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the agent's identifier.
    #[must_use]
    pub fn id(&self) -> &AgentId {
        &self.id
    }

    /// Returns the agent's configuration.
    #[must_use]
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Returns the agent's tool registry.
    #[must_use]
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Executes a task through the bounded loop.
    ///
    /// Runs exactly `max_iterations` steps — or fewer when `early_exit` is
    /// enabled and a success-status observation arrives — and reports an
    /// iteration count equal to the trace length. Tool faults never
    /// propagate; they are recorded as error observations and the loop
    /// continues.
    ///
    /// # Errors
    ///
    /// The base loop itself is infallible; the `Result` is part of the
    /// [`TaskExecutor`](crate::agent::TaskExecutor) contract shared with
    /// fallible executors.
    pub async fn execute(&self, task: &str) -> Result<ExecutionResult, CadreError> {
        let run = RunId::new();
        let started_at = Utc::now();
        let started = Instant::now();
        let mut trace = ExecutionTrace::new();

        tracing::debug!(agent = %self.id, run = %run, task, "reasoning loop started");

        for iteration in 0..self.config.max_iterations {
            // Yield between steps so a surrounding deadline or cancellation
            // can take effect even when every tool completes immediately.
            tokio::task::yield_now().await;

            let thought = self.policy.thought(task, iteration);
            let action = self.policy.select(task, &self.registry);
            let observation = self.registry.dispatch(&action).await;

            tracing::trace!(
                run = %run,
                iteration,
                tool = %action.tool,
                status = observation.status(),
                "step completed"
            );

            let stop = self.config.early_exit && observation.is_success();
            trace.push(TraceStep {
                thought,
                action,
                observation,
            });

            if stop {
                tracing::debug!(run = %run, iteration, "early exit on success observation");
                break;
            }
        }

        let iterations = trace.len();
        tracing::debug!(run = %run, iterations, "reasoning loop finished");

        Ok(ExecutionResult {
            task: task.to_string(),
            answer: FALLBACK_ANSWER.to_string(),
            iterations,
            status: ExecutionStatus::Completed,
            mode: Mode::Single,
            trace,
            role_results: BTreeMap::new(),
            started_at,
            elapsed: started.elapsed(),
        })
    }
}
