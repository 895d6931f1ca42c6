//! Execution trace accumulated by the reasoning loop.
//!
//! One [`TraceStep`] is appended per iteration; the trace is append-only
//! and owned by the loop for the duration of one `execute` call, after
//! which it is returned embedded in the result.

use crate::tools::{ToolObservation, ToolRequest};
use serde::{Deserialize, Serialize};

/// One think/act/observe iteration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    /// The reasoning text produced for this iteration
    pub thought: String,
    /// The tool invocation chosen
    pub action: ToolRequest,
    /// What came back from the invocation
    pub observation: ToolObservation,
}

/// Ordered, append-only sequence of trace steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionTrace {
    steps: Vec<TraceStep>,
}

impl ExecutionTrace {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one completed step.
    pub fn push(&mut self, step: TraceStep) {
        self.steps.push(step);
    }

    /// Returns the number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if no steps have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the recorded steps in order.
    #[must_use]
    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    /// Iterates over the recorded steps in order.
    pub fn iter(&self) -> impl Iterator<Item = &TraceStep> {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn step(i: usize) -> TraceStep {
        TraceStep {
            thought: format!("thought {i}"),
            action: ToolRequest::new("no_op", json!({})),
            observation: ToolObservation::error("unknown tool: no_op"),
        }
    }

    #[test]
    fn trace_preserves_order() {
        let mut trace = ExecutionTrace::new();
        trace.push(step(0));
        trace.push(step(1));
        trace.push(step(2));

        assert_eq!(trace.len(), 3);
        let thoughts: Vec<_> = trace.iter().map(|s| s.thought.as_str()).collect();
        assert_eq!(thoughts, vec!["thought 0", "thought 1", "thought 2"]);
    }

    #[test]
    fn empty_trace() {
        let trace = ExecutionTrace::new();
        assert!(trace.is_empty());
        assert_eq!(trace.len(), 0);
    }

    #[test]
    fn serialization_roundtrip() {
        let mut trace = ExecutionTrace::new();
        trace.push(step(0));
        let json = serde_json::to_string(&trace).unwrap();
        let back: ExecutionTrace = serde_json::from_str(&json).unwrap();
        assert_eq!(trace, back);
    }
}
