use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::runtime::Value;

/// Names bound by one successful clause match
///
/// A binding set lives only while its clause body is evaluated.
pub type Bindings = HashMap<String, Value>;

/// Top-level variables
///
/// Names are bound once; rebinding is an error rather than an overwrite.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment
    pub fn new() -> Self {
        Environment {
            variables: HashMap::new(),
        }
    }

    /// Binds `name`, failing if it is already bound
    pub fn define(&mut self, name: String, value: Value) -> Result<()> {
        if self.variables.contains_key(&name) {
            return Err(Error::ImmutableReassignment { name });
        }
        self.variables.insert(name, value);
        Ok(())
    }

    /// Gets the value bound to `name`
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Checks if a name is bound
    pub fn exists(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of bound names
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// True when nothing is bound
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
