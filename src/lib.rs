//! # Cadre-AI: Agent Orchestration Scaffold
//!
//! A minimal scaffold for orchestrating task execution: given a
//! natural-language task, choose an execution strategy, run a bounded
//! think/act/observe cycle against a tool registry, and return a
//! structured result.
//!
//! ## Architecture
//!
//! - **Tool Registry**: maps tool identifiers to executable capabilities
//! - **Reasoning Loop**: fixed-budget think/act/observe cycle with a trace
//! - **Complexity Assessor**: scores a task to pick a strategy
//! - **Hybrid Controller**: single-agent vs. four-role multi-agent dispatch
//! - **Orchestrator**: configuration plus the one `execute_task` entry point
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cadre_ai::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), CadreError> {
//!     let orchestrator = Orchestrator::new(&CadreConfig::default())?;
//!     let result = orchestrator.execute_task("Calculate 2+2", None).await?;
//!     println!("{}", result.answer);
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod complexity;
pub mod config;
pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod tools;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::agent::{
        AgentConfig, ExecutionResult, ExecutionStatus, HybridController, Mode, Role,
        TaskExecutor, ToolLoopAgent,
    };
    pub use crate::config::CadreConfig;
    pub use crate::error::{CadreError, CadreErrorKind};
    pub use crate::logging::{LogLevel, LoggingConfig};
    pub use crate::orchestrator::Orchestrator;
    pub use crate::tools::{ToolObservation, ToolRegistry, ToolRequest};
    pub use crate::types::{AgentId, RunId};
}
