//! Load and REPL entry points
//!
//! A [`Session`] owns one interpreter state and exposes the two operations a
//! host calls: loading a whole program and evaluating one REPL line. Both
//! return serializable outcomes instead of errors, so a host can render them
//! without knowing the error type.

use crate::config::InterpreterConfig;
use crate::error::{Error, Result};
use crate::parser::{classify_line, Clause, SourceLine};
use crate::runtime::{Interpreter, Value};
use crate::tools::ToolRegistry;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Counts of what a successful load defined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadReport {
    pub loaded_function_count: usize,
    pub loaded_clause_count: usize,
    pub loaded_variable_count: usize,
}

/// Result of loading a program
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadOutcome {
    pub ok: bool,
    #[serde(flatten)]
    pub report: Option<LoadReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Result of evaluating one REPL line
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplOutcome {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl LoadOutcome {
    fn success(report: LoadReport) -> Self {
        LoadOutcome {
            ok: true,
            report: Some(report),
            error_message: None,
        }
    }

    fn failure(error: &Error) -> Self {
        LoadOutcome {
            ok: false,
            report: None,
            error_message: Some(error.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Serializes the outcome as a JSON object
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl ReplOutcome {
    fn success(text: impl Into<String>) -> Self {
        ReplOutcome {
            ok: true,
            result_text: Some(text.into()),
            error_message: None,
        }
    }

    fn failure(error: &Error) -> Self {
        ReplOutcome {
            ok: false,
            result_text: None,
            error_message: Some(error.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Serializes the outcome as a JSON object
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// One interpreter instance driven by a host
pub struct Session {
    interpreter: Interpreter,
    registry: Arc<ToolRegistry>,
    config: InterpreterConfig,
}

impl Session {
    /// Creates a session with the default configuration
    pub fn new() -> Self {
        Self::with_config(InterpreterConfig::default())
    }

    /// Creates a session with a custom configuration
    pub fn with_config(config: InterpreterConfig) -> Self {
        let registry = Arc::new(ToolRegistry::new());
        Session {
            interpreter: Interpreter::with_registry(config.clone(), Arc::clone(&registry)),
            registry,
            config,
        }
    }

    /// Current interpreter state
    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Replaces all definitions with those of `program`
    ///
    /// On failure the previous definitions stay in place.
    pub fn load(&mut self, program: &str) -> LoadOutcome {
        match self.try_load(program) {
            Ok(report) => LoadOutcome::success(report),
            Err(err) => {
                debug!(error = %err, "program load failed");
                LoadOutcome::failure(&err)
            }
        }
    }

    fn try_load(&mut self, program: &str) -> Result<LoadReport> {
        debug!(lines = program.lines().count(), "loading program");

        let mut staged =
            Interpreter::with_registry(self.config.clone(), Arc::clone(&self.registry));
        let mut pending: Option<(String, Vec<Clause>)> = None;

        for (index, line) in program.lines().enumerate() {
            let line_number = index + 1;
            match classify_line(line, &self.config.comment_marker) {
                SourceLine::Blank => {}
                SourceLine::Guard => {
                    warn!(line = line_number, "guard syntax is not supported, line skipped");
                }
                SourceLine::Malformed(reason) => {
                    warn!(line = line_number, %reason, "malformed line skipped");
                }
                SourceLine::Clause { name, clause } => match pending.as_mut() {
                    Some((current, clauses)) if *current == name => clauses.push(clause),
                    _ => {
                        flush(&mut staged, pending.take());
                        pending = Some((name, vec![clause]));
                    }
                },
                SourceLine::Binding { name, expression } => {
                    flush(&mut staged, pending.take());
                    let value = staged.evaluate(&expression)?;
                    staged.define_variable(name, value)?;
                }
            }
        }
        flush(&mut staged, pending.take());

        let report = LoadReport {
            loaded_function_count: staged.store().function_count(),
            loaded_clause_count: staged.store().clause_count(),
            loaded_variable_count: staged.env().len(),
        };
        debug!(
            functions = report.loaded_function_count,
            clauses = report.loaded_clause_count,
            variables = report.loaded_variable_count,
            "program loaded"
        );

        self.interpreter = staged;
        Ok(report)
    }

    /// Evaluates one REPL line
    ///
    /// `name = expr` binds a new variable; anything else is evaluated as an
    /// expression and rendered.
    pub fn eval_repl_line(&mut self, line: &str) -> ReplOutcome {
        match self.try_repl_line(line) {
            Ok(text) => ReplOutcome::success(text),
            Err(err) => ReplOutcome::failure(&err),
        }
    }

    fn try_repl_line(&mut self, line: &str) -> Result<String> {
        match classify_line(line, &self.config.comment_marker) {
            SourceLine::Blank => Ok(String::new()),
            SourceLine::Binding { name, expression } => {
                if self.interpreter.env().exists(&name) {
                    return Err(Error::ImmutableReassignment { name });
                }
                let value = self.interpreter.evaluate(&expression)?;
                let text = format!("{} = {}", name, value);
                debug!(%name, %value, "repl binding");
                self.interpreter.define_variable(name, value)?;
                Ok(text)
            }
            _ => Ok(self.interpreter.evaluate(line)?.to_string()),
        }
    }

    /// Evaluates an expression against the loaded definitions
    pub fn evaluate(&self, expression: &str) -> Result<Value> {
        self.interpreter.evaluate(expression)
    }

    /// Applies a builtin or user function to argument values
    pub fn apply(&self, name: &str, args: Vec<Value>) -> Result<Value> {
        self.interpreter.apply(name, args)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Stores a finished clause group, warning when it replaces an earlier one
fn flush(interpreter: &mut Interpreter, group: Option<(String, Vec<Clause>)>) {
    if let Some((name, clauses)) = group {
        if interpreter.define_function(name.clone(), clauses).is_some() {
            warn!(function = %name, "clauses replace an earlier definition");
        }
    }
}
