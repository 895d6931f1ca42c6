//! Built-in tools.
//!
//! The scaffold ships one real capability — the arithmetic calculator —
//! plus the stub executor that backs permissively registered identifiers.
//!
//! ```rust
//! use cadre_ai::tools::builtins::BuiltinTools;
//!
//! assert!(BuiltinTools::available().contains(&"calculator"));
//! ```

mod calculate;
mod stub;

pub use calculate::{CalculateTool, CALCULATOR_TOOL};
pub use stub::StubTool;

use crate::tools::definition::{BoxedToolExecutor, ToolConfig};
use std::sync::Arc;

/// Catalog of built-in tools.
#[derive(Debug)]
pub struct BuiltinTools;

impl BuiltinTools {
    /// Lists all available built-in tool identifiers.
    #[must_use]
    pub fn available() -> Vec<&'static str> {
        vec![CALCULATOR_TOOL]
    }

    /// Resolves an identifier to its built-in configuration and executor.
    ///
    /// Returns `None` when no built-in exists under that identifier.
    #[must_use]
    pub fn resolve(identifier: &str) -> Option<(ToolConfig, Arc<BoxedToolExecutor>)> {
        match identifier {
            CALCULATOR_TOOL => Some((
                CalculateTool::config(),
                Arc::new(Box::new(CalculateTool::new()) as BoxedToolExecutor),
            )),
            _ => None,
        }
    }
}
