//! Terminal execution result returned to callers.

use crate::agent::config::Mode;
use crate::agent::trace::ExecutionTrace;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Terminal status of one execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    /// The execution ran to completion
    Completed,
    /// The execution did not produce a result (only appears on per-role
    /// sub-results whose task failed or panicked)
    Failed,
}

/// Role taken by one specialized agent in multi-agent execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Gathers background material
    Researcher,
    /// Breaks the task into steps
    Planner,
    /// Carries out the planned steps
    Executor,
    /// Reviews the other roles' output
    Critic,
}

impl Role {
    /// All roles, in merge order.
    pub const ALL: [Role; 4] = [Role::Researcher, Role::Planner, Role::Executor, Role::Critic];

    /// Returns the role name as a lowercase string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Researcher => "researcher",
            Self::Planner => "planner",
            Self::Executor => "executor",
            Self::Critic => "critic",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The structured result of one `execute` call.
///
/// Immutable once built. In single mode `role_results` is empty and the
/// trace holds the loop's iterations; in multi mode the trace is empty and
/// each role's full result (with its own trace) lives in `role_results`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// The task that was executed
    pub task: String,
    /// The answer text
    pub answer: String,
    /// Number of completed loop iterations (summed over roles in multi mode)
    pub iterations: usize,
    /// Terminal status
    pub status: ExecutionStatus,
    /// The strategy that actually ran (never `auto`)
    pub mode: Mode,
    /// Per-iteration trace (single mode)
    pub trace: ExecutionTrace,
    /// Per-role sub-results (multi mode)
    pub role_results: BTreeMap<Role, ExecutionResult>,
    /// When the execution started
    pub started_at: DateTime<Utc>,
    /// Wall-clock duration of the execution
    pub elapsed: Duration,
}

impl ExecutionResult {
    /// Returns true if the execution ran to completion.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == ExecutionStatus::Completed
    }

    /// Returns one role's sub-result, if present.
    #[must_use]
    pub fn role(&self, role: Role) -> Option<&ExecutionResult> {
        self.role_results.get(&role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExecutionResult {
        ExecutionResult {
            task: "add 2 and 2".to_string(),
            answer: "done".to_string(),
            iterations: 3,
            status: ExecutionStatus::Completed,
            mode: Mode::Single,
            trace: ExecutionTrace::new(),
            role_results: BTreeMap::new(),
            started_at: Utc::now(),
            elapsed: Duration::from_millis(12),
        }
    }

    #[test]
    fn role_order_is_stable() {
        let names: Vec<_> = Role::ALL.iter().map(Role::as_str).collect();
        assert_eq!(names, vec!["researcher", "planner", "executor", "critic"]);
    }

    #[test]
    fn roles_serialize_as_lowercase_strings() {
        assert_eq!(
            serde_json::to_string(&Role::Researcher).unwrap(),
            "\"researcher\""
        );
    }

    #[test]
    fn completed_accessor() {
        let result = sample();
        assert!(result.is_completed());
        assert!(result.role(Role::Planner).is_none());
    }

    #[test]
    fn serialization_roundtrip() {
        let mut result = sample();
        result.role_results.insert(Role::Critic, sample());

        let json = serde_json::to_string(&result).unwrap();
        let back: ExecutionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }

    #[test]
    fn role_map_keys_serialize_by_name() {
        let mut result = sample();
        result.role_results.insert(Role::Researcher, sample());
        let value = serde_json::to_value(&result).unwrap();
        assert!(value["role_results"]["researcher"].is_object());
    }
}
