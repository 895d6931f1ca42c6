//! Configuration management.
//!
//! Configuration is stored in TOML and loaded once at process start; the
//! resolved, immutable [`CadreConfig`] is passed explicitly to the
//! [`Orchestrator`](crate::orchestrator::Orchestrator). Search order:
//!
//! 1. `./cadre.toml` (project-local)
//! 2. `~/.config/cadre/config.toml` (XDG config)
//!
//! # Example Configuration
//!
//! ```toml
//! [agent]
//! name = "primary"
//! mode = "auto"
//! max_iterations = 10
//! early_exit = false
//!
//! [tools]
//! enabled = ["calculator"]
//!
//! [credentials]
//! api_key_env = "OPENAI_API_KEY"
//! ```

mod file;
mod types;

pub use file::{from_path, from_str, load, search_paths};
pub use types::{AgentSection, CadreConfig, CredentialsSection, ToolsSection};
