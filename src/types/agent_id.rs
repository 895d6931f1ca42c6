//! Agent identifier type using TypeID format.
//!
//! Format: `agent_01h455vb4pex5vsknk084sn02q` — human-readable,
//! time-sortable, globally unique.

use mti::prelude::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A validated agent identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AgentId(MagicTypeId);

/// Error returned when attempting to create an invalid agent ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidAgentId {
    /// TypeID parsing failed
    Parse(String),
    /// Wrong prefix (expected "agent")
    WrongPrefix {
        /// The expected prefix
        expected: &'static str,
        /// The actual prefix found
        actual: String,
    },
}

impl fmt::Display for InvalidAgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "invalid agent ID: {e}"),
            Self::WrongPrefix { expected, actual } => {
                write!(f, "expected prefix '{expected}', got '{actual}'")
            }
        }
    }
}

impl std::error::Error for InvalidAgentId {}

impl AgentId {
    /// The TypeID prefix for agent identifiers.
    pub const PREFIX: &'static str = "agent";

    /// Creates a new agent ID with a fresh UUIDv7 (time-sortable).
    #[must_use]
    pub fn new() -> Self {
        Self(Self::PREFIX.create_type_id::<V7>())
    }

    /// Parses an agent ID from a string, validating the prefix.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAgentId::Parse`] if the string is not valid TypeID
    /// format, or [`InvalidAgentId::WrongPrefix`] if the prefix is not
    /// `agent`.
    pub fn parse(s: &str) -> Result<Self, InvalidAgentId> {
        let id = MagicTypeId::from_str(s).map_err(|e| InvalidAgentId::Parse(e.to_string()))?;

        let prefix = id.prefix().as_str();
        if prefix != Self::PREFIX {
            return Err(InvalidAgentId::WrongPrefix {
                expected: Self::PREFIX,
                actual: prefix.to_string(),
            });
        }

        Ok(Self(id))
    }
}

impl Default for AgentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AgentId {
    type Err = InvalidAgentId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for AgentId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AgentId {
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
        let id = AgentId::new();
        assert!(id.to_string().starts_with("agent_"));
    }

    #[test]
    fn parse_roundtrip() {
        let id = AgentId::new();
        let parsed = AgentId::parse(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn parse_wrong_prefix_fails() {
        let result = AgentId::parse("run_01h455vb4pex5vsknk084sn02q");
        assert!(matches!(
            result,
            Err(InvalidAgentId::WrongPrefix {
                expected: "agent",
                ..
            })
        ));
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(AgentId::new(), AgentId::new());
    }

    #[test]
    fn serialization_roundtrip() {
        let id = AgentId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: AgentId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
