//! Error types for the minihs interpreter

use thiserror::Error;

/// Interpreter errors
///
/// Every failure inside the interpreter is one of these values. The public
/// session entry points convert them into structured outcomes, so none of
/// them ever crosses the load/eval boundary as a panic.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Parse errors
    /// Text that no grammar rule accepts
    ///
    /// **Triggered by:** dangling operators, empty groups, a lone operator run
    /// **Example:** `1 +`, `()`, `==`
    #[error("Cannot evaluate expression: {text}")]
    UnparseableExpression {
        /// The offending expression text
        text: String,
    },

    // Runtime errors
    /// Reference to a name that is neither bound nor a known function
    #[error("Undefined variable: {name}")]
    UndefinedVariable {
        /// Variable name
        name: String,
    },

    /// Application of a name that is neither a builtin nor user-defined
    ///
    /// **Triggered by:** calling a function before its clauses are loaded
    /// **Example:** `square 3` when no `square` clause exists
    #[error("Undefined function: {name}")]
    UndefinedFunction {
        /// Function name
        name: String,
    },

    /// No clause of a user function accepted the arguments
    ///
    /// **Triggered by:** argument count mismatch with every clause, or no
    /// pattern set matching the argument values
    /// **Example:** `f 1 2` when `f` only has one-parameter clauses
    #[error("No pattern matched for {function} with arguments [{}]", arguments.join(", "))]
    NoClauseMatched {
        /// Function name
        function: String,
        /// Rendered argument values
        arguments: Vec<String>,
    },

    /// Builtin called with the wrong number of arguments
    #[error("{function} expects {expected} argument(s), got {got}")]
    PatternArityMismatch {
        /// Function name
        function: String,
        /// Expected argument count
        expected: usize,
        /// Actual argument count
        got: usize,
    },

    /// Type mismatch error
    ///
    /// **Triggered by:** an operation receiving a value of the wrong kind
    /// **Example:** `1 + "a"`, `map double 5`
    #[error("Type error: expected {expected}, got {got}")]
    TypeError {
        /// Expected type
        expected: String,
        /// Actual type
        got: String,
    },

    /// `head`/`tail` (or similar) on an empty list
    #[error("Empty list for operation: {operation}")]
    EmptyList {
        /// Operation name
        operation: String,
    },

    /// Invalid arguments that are well-typed but unusable
    #[error("Invalid arguments for {function}: {reason}")]
    InvalidArguments {
        /// Function name
        function: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Attempt to rebind a top-level name
    ///
    /// **Triggered by:** `y = 10` after `y = 5` in the same session
    #[error("Cannot reassign immutable variable: {name}")]
    ImmutableReassignment {
        /// Variable name
        name: String,
    },

    // Resource errors
    /// Function applications nested deeper than the configured limit
    #[error("Recursion limit exceeded (max depth: {limit})")]
    RecursionLimit {
        /// Maximum allowed nesting
        limit: usize,
    },
}

impl Error {
    /// Create an unparseable-expression error for the given text
    pub fn unparseable(text: impl Into<String>) -> Self {
        Error::UnparseableExpression { text: text.into() }
    }

    /// Create a type error from an expectation and the offending type name
    pub fn type_error(expected: impl Into<String>, got: impl Into<String>) -> Self {
        Error::TypeError {
            expected: expected.into(),
            got: got.into(),
        }
    }
}

/// Result type for minihs operations
pub type Result<T> = std::result::Result<T, Error>;
