//! Tool registry and invocation dispatch.
//!
//! The registry maps tool identifiers to executable capabilities. It is
//! owned exclusively by one agent instance: registration happens at
//! construction and the mapping is read-only during execution, so no
//! locking is needed.

use crate::tools::builtins::BuiltinTools;
use crate::tools::builtins::StubTool;
use crate::tools::definition::{BoxedToolExecutor, ToolConfig};
use crate::tools::protocol::{ToolObservation, ToolRequest};
use std::collections::HashMap;
use std::sync::Arc;

/// A registered tool entry.
#[derive(Debug, Clone)]
pub struct RegisteredTool {
    /// The tool configuration
    pub config: ToolConfig,
    /// The tool executor
    pub executor: Arc<BoxedToolExecutor>,
    /// Whether the tool loaded successfully
    pub loaded: bool,
}

/// Registry of tools available to one agent instance.
///
/// Registration is permissive: any identifier is accepted and marked
/// loaded. Identifiers naming a built-in tool bind to the real executor;
/// anything else binds to a stub that echoes its input. Duplicate
/// registration is last-write-wins.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, RegisteredTool>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry pre-loaded with the given tool identifiers.
    #[must_use]
    pub fn with_tools<S: AsRef<str>>(identifiers: &[S]) -> Self {
        let mut registry = Self::new();
        for identifier in identifiers {
            registry.register(identifier.as_ref());
        }
        registry
    }

    /// Registers a tool by identifier.
    ///
    /// Returns true when the descriptor was stored. Identifiers are not
    /// validated against a catalog; unknown identifiers get a stub
    /// executor so invoking them yields a success-status echo rather than
    /// a fault.
    pub fn register(&mut self, identifier: &str) -> bool {
        let (config, executor) = match BuiltinTools::resolve(identifier) {
            Some((config, executor)) => (config, executor),
            None => {
                let stub = StubTool::new(identifier);
                (StubTool::config(identifier), Arc::new(Box::new(stub) as BoxedToolExecutor))
            }
        };

        let replaced = self
            .tools
            .insert(
                identifier.to_string(),
                RegisteredTool {
                    config,
                    executor,
                    loaded: true,
                },
            )
            .is_some();

        tracing::debug!(tool = %identifier, replaced, "tool registered");
        true
    }

    /// Registers a tool with an explicit configuration and executor.
    pub fn register_executor(
        &mut self,
        config: ToolConfig,
        executor: Arc<BoxedToolExecutor>,
    ) {
        let name = config.definition.name.clone();
        self.tools.insert(
            name.clone(),
            RegisteredTool {
                config,
                executor,
                loaded: true,
            },
        );
        tracing::debug!(tool = %name, "tool registered with explicit executor");
    }

    /// Returns true if the identifier is registered.
    #[must_use]
    pub fn has(&self, identifier: &str) -> bool {
        self.tools.contains_key(identifier)
    }

    /// Returns the descriptor for a registered identifier.
    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<&RegisteredTool> {
        self.tools.get(identifier)
    }

    /// Returns the number of registered tools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true if no tools are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Returns the registered identifiers in arbitrary order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(String::as_str)
    }

    /// Invokes a tool per the invocation protocol.
    ///
    /// Never fails: unknown identifiers, argument validation failures,
    /// executor faults, and timeouts all become error-status observations,
    /// so the reasoning loop always continues.
    pub async fn dispatch(&self, request: &ToolRequest) -> ToolObservation {
        let Some(registered) = self.tools.get(&request.tool) else {
            tracing::debug!(tool = %request.tool, "dispatch to unregistered tool");
            return ToolObservation::error(format!("unknown tool: {}", request.tool));
        };

        if let Err(e) = registered.executor.validate_args(&request.input) {
            tracing::debug!(tool = %request.tool, error = %e, "argument validation failed");
            return ToolObservation::error(e.to_string());
        }

        let execution = registered.executor.execute(request.input.clone());
        match tokio::time::timeout(registered.config.timeout, execution).await {
            Ok(Ok(result)) => ToolObservation::success(result),
            Ok(Err(e)) => {
                tracing::debug!(tool = %request.tool, error = %e, "tool execution failed");
                ToolObservation::error(e.to_string())
            }
            Err(_) => {
                tracing::warn!(
                    tool = %request.tool,
                    timeout_ms = registered.config.timeout.as_millis() as u64,
                    "tool execution timed out"
                );
                ToolObservation::error(format!(
                    "tool '{}' timed out after {}ms",
                    request.tool,
                    registered.config.timeout.as_millis()
                ))
            }
        }
    }
}
