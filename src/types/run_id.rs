//! Run identifier type using TypeID format.
//!
//! A `RunId` names a single `execute` call so every log line produced by
//! one run can be correlated. Format: `run_01h455vb4pex5vsknk084sn02q`.

use mti::prelude::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A validated run identifier for correlating one task execution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RunId(MagicTypeId);

/// Error returned when attempting to create an invalid run ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidRunId {
    /// TypeID parsing failed
    Parse(String),
    /// Wrong prefix (expected "run")
    WrongPrefix {
        /// The expected prefix
        expected: &'static str,
        /// The actual prefix found
        actual: String,
    },
}

impl fmt::Display for InvalidRunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "invalid run ID: {e}"),
            Self::WrongPrefix { expected, actual } => {
                write!(f, "expected prefix '{expected}', got '{actual}'")
            }
        }
    }
}

impl std::error::Error for InvalidRunId {}

impl RunId {
    /// The TypeID prefix for run identifiers.
    pub const PREFIX: &'static str = "run";

    /// Creates a new run ID with a fresh UUIDv7 (time-sortable).
    #[must_use]
    pub fn new() -> Self {
        Self(Self::PREFIX.create_type_id::<V7>())
    }

    /// Parses a run ID from a string, validating the prefix.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRunId::Parse`] if the string is not valid TypeID
    /// format, or [`InvalidRunId::WrongPrefix`] if the prefix is not `run`.
    pub fn parse(s: &str) -> Result<Self, InvalidRunId> {
        let id = MagicTypeId::from_str(s).map_err(|e| InvalidRunId::Parse(e.to_string()))?;

        let prefix = id.prefix().as_str();
        if prefix != Self::PREFIX {
            return Err(InvalidRunId::WrongPrefix {
                expected: Self::PREFIX,
                actual: prefix.to_string(),
            });
        }

        Ok(Self(id))
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RunId {
    type Err = InvalidRunId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for RunId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RunId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_prefixed_id() {
        let id = RunId::new();
        assert!(id.to_string().starts_with("run_"));
    }

    #[test]
    fn parse_wrong_prefix_fails() {
        let result = RunId::parse("agent_01h455vb4pex5vsknk084sn02q");
        assert!(matches!(
            result,
            Err(InvalidRunId::WrongPrefix { expected: "run", .. })
        ));
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(RunId::new(), RunId::new());
    }
}
