//! Interpreter configuration

use serde::{Deserialize, Serialize};

/// Tunables for loading and evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    /// Prefix marking a whole source line as a comment
    pub comment_marker: String,
    /// Maximum nesting of function applications before evaluation aborts
    pub max_depth: usize,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig {
            comment_marker: "--".to_string(),
            max_depth: 1000,
        }
    }
}

impl InterpreterConfig {
    /// Parses a configuration from JSON, filling omitted fields with defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = InterpreterConfig::default();
        assert_eq!(config.comment_marker, "--");
        assert_eq!(config.max_depth, 1000);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = InterpreterConfig::from_json(r#"{"max_depth": 50}"#).unwrap();
        assert_eq!(config.max_depth, 50);
        assert_eq!(config.comment_marker, "--");
    }

    #[test]
    fn test_invalid_json() {
        assert!(InterpreterConfig::from_json("{max_depth").is_err());
    }
}
