//! Builtin function system for minihs
//!
//! First-order builtins implement [`Tool`] and live in a [`ToolRegistry`].
//! The higher-order builtins (`map`, `filter`, `fold`) call back into the
//! evaluator and are handled there.

pub mod stdlib;

use crate::error::{Error, Result};
use crate::runtime::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Tool trait - every first-order builtin implements this
pub trait Tool: Send + Sync {
    /// Name the builtin is applied by
    fn name(&self) -> &str;

    /// Tool description
    fn description(&self) -> &str;

    /// Execute the tool
    fn execute(&self, args: &[Value]) -> Result<Value>;

    /// Check if tool requires specific number of arguments
    fn arity(&self) -> Option<usize> {
        None // None means variadic
    }
}

/// Positional argument of a tool call, or an error naming the missing position
pub fn argument<'a>(tool: &str, args: &'a [Value], index: usize) -> Result<&'a Value> {
    args.get(index).ok_or_else(|| Error::InvalidArguments {
        function: tool.to_string(),
        reason: format!("missing argument {}", index + 1),
    })
}

/// Tool registry
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create new registry with standard library
    pub fn new() -> Self {
        let mut registry = ToolRegistry {
            tools: HashMap::new(),
        };

        stdlib::register_all(&mut registry);

        registry
    }

    /// Create empty registry (for testing)
    pub fn empty() -> Self {
        ToolRegistry {
            tools: HashMap::new(),
        }
    }

    /// Register a tool
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        self.tools.insert(name, Arc::new(tool));
    }

    /// Get tool by exact name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Check if tool exists
    pub fn has(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Runs a tool after checking its declared arity
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        let tool = self.get(name).ok_or_else(|| Error::UndefinedFunction {
            name: name.to_string(),
        })?;

        if let Some(expected) = tool.arity() {
            if args.len() != expected {
                return Err(Error::PatternArityMismatch {
                    function: name.to_string(),
                    expected,
                    got: args.len(),
                });
            }
        }

        tool.execute(args)
    }

    /// List all tool names
    pub fn list_tools(&self) -> Vec<String> {
        let mut names: Vec<_> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get tool count
    pub fn count(&self) -> usize {
        self.tools.len()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
