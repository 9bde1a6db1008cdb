use std::collections::HashMap;

use crate::parser::Clause;

/// User-defined functions, each an ordered list of clauses
///
/// Clause order is declaration order and decides matching priority.
#[derive(Debug, Clone, Default)]
pub struct DefinitionStore {
    functions: HashMap<String, Vec<Clause>>,
}

impl DefinitionStore {
    /// Creates an empty store
    pub fn new() -> Self {
        DefinitionStore {
            functions: HashMap::new(),
        }
    }

    /// Stores the clauses of `name`, returning any clauses they replace
    pub fn insert(&mut self, name: String, clauses: Vec<Clause>) -> Option<Vec<Clause>> {
        self.functions.insert(name, clauses)
    }

    /// Clauses of `name` in declaration order
    pub fn get(&self, name: &str) -> Option<&[Clause]> {
        self.functions.get(name).map(Vec::as_slice)
    }

    /// Checks if a function is defined
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Number of defined functions
    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    /// Total number of clauses across all functions
    pub fn clause_count(&self) -> usize {
        self.functions.values().map(Vec::len).sum()
    }
}
