//! Custom error types for cadre-ai.
//!
//! Each error type implements Display, Debug, Clone, PartialEq, Eq, and
//! std::error::Error. No external error crates (anyhow, thiserror, eyre)
//! are used.
//!
//! Propagation policy: tool-level faults never reach this module — they are
//! converted into error-status observations inside the reasoning loop. Only
//! configuration faults, credential preconditions, and cancellation of an
//! in-flight execution surface as [`CadreError`].

use std::fmt;
use std::time::Duration;

/// Errors surfaced to callers of the orchestration scaffold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CadreError {
    /// The specific error that occurred
    pub kind: CadreErrorKind,
}

/// Specific cadre error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CadreErrorKind {
    /// A configuration value was invalid
    Configuration {
        /// The configuration field at fault
        field: String,
        /// Why it was invalid
        reason: String,
    },
    /// A required credential was not present in the environment
    MissingCredential {
        /// The environment variable that was expected
        variable: String,
    },
    /// An in-flight execution exceeded its deadline
    Cancelled {
        /// The task that was cancelled
        task: String,
        /// The deadline that was exceeded
        deadline: Duration,
    },
}

impl CadreError {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: CadreErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(CadreErrorKind::Configuration {
            field: field.into(),
            reason: reason.into(),
        })
    }

    /// Creates a missing credential error.
    #[must_use]
    pub fn missing_credential(variable: impl Into<String>) -> Self {
        Self::new(CadreErrorKind::MissingCredential {
            variable: variable.into(),
        })
    }

    /// Creates a cancellation error.
    #[must_use]
    pub fn cancelled(task: impl Into<String>, deadline: Duration) -> Self {
        Self::new(CadreErrorKind::Cancelled {
            task: task.into(),
            deadline,
        })
    }

    /// Returns true if this error is a configuration fault.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self.kind, CadreErrorKind::Configuration { .. })
    }

    /// Returns true if this error is a cancelled execution.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self.kind, CadreErrorKind::Cancelled { .. })
    }
}

impl fmt::Display for CadreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            CadreErrorKind::Configuration { field, reason } => {
                write!(f, "invalid configuration for '{field}': {reason}")
            }
            CadreErrorKind::MissingCredential { variable } => {
                write!(
                    f,
                    "required credential '{variable}' not found in the environment; \
                     set it or remove the [credentials] entry from the config file"
                )
            }
            CadreErrorKind::Cancelled { task, deadline } => {
                write!(
                    f,
                    "execution of '{task}' cancelled after exceeding its {}s deadline",
                    deadline.as_secs()
                )
            }
        }
    }
}

impl std::error::Error for CadreError {}
