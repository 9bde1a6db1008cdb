#![allow(missing_docs)]
//! # minihs - a small Haskell-like interpreter
//!
//! A tree-walking interpreter for a teaching subset of a Haskell-like
//! language: functions defined by pattern-matched clauses, list literals and
//! cons patterns, a fixed set of binary operators, operator sections and a
//! handful of builtins (`head`, `tail`, `map`, `filter`, `fold`, ...).
//!
//! ## Quick Start
//!
//! ```rust
//! use minihs::{Session, Value};
//!
//! let mut session = Session::new();
//! let outcome = session.load(
//!     r#"
//! -- recursion over numbers
//! factorial 0 = 1
//! factorial n = n * factorial (n - 1)
//!
//! double x = x * 2
//! "#,
//! );
//! assert!(outcome.is_ok());
//!
//! assert_eq!(session.evaluate("factorial 5").unwrap(), Value::Number(120.0));
//!
//! let repl = session.eval_repl_line("map double [1, 2, 3]");
//! assert_eq!(repl.result_text.as_deref(), Some("[2, 4, 6]"));
//! ```
//!
//! ## Language Overview
//!
//! ### Values
//! - Numbers (`42`, `-3.5`), strings (`"text"`), booleans (`True`, `False`)
//! - Lists (`[1, 2, 3]`, `[]`), possibly nested
//! - Function values: a function name, or an operator section such as
//!   `(<10)`, `(10+)` or `(*)`
//!
//! ### Definitions
//! - `name p1 p2 ... = body` adds a clause to `name`; consecutive clauses
//!   form one function and are tried top to bottom
//! - `name = expr` binds an immutable top-level variable
//! - Patterns: `[]`, `(x:xs)`, `[a, b]`, a variable, `_`, or a literal
//!
//! ### Operators
//! Operators are tried in the order `+ - * / < > <= >= == : /=`; the first
//! one present at the top level of an expression becomes its root. This is
//! not conventional precedence: `2 * 3 + 1` is `(2 * 3) + 1`, but
//! `10 - 2 - 3` is `10 - (2 - 3)`. Parenthesize to be explicit.
//!
//! ## Architecture
//!
//! 1. **Lexer** ([`lexer`]) - turns expression text into tokens, capturing
//!    bracketed and parenthesized groups whole
//! 2. **Parser** ([`parser`]) - builds expression trees, clause patterns and
//!    classifies program lines
//! 3. **Runtime** ([`runtime`]) - pattern matching and evaluation
//! 4. **Tools** ([`tools`]) - first-order builtin functions
//! 5. **Session** ([`session`]) - load and REPL entry points with
//!    serializable outcomes
//!
//! ## Error Handling
//!
//! Every failure is an [`Error`]. [`Session::evaluate`] returns it directly;
//! [`Session::load`] and [`Session::eval_repl_line`] fold it into their
//! outcome's `error_message`:
//!
//! ```rust
//! use minihs::{Error, Session};
//!
//! let session = Session::new();
//! match session.evaluate("head []") {
//!     Err(Error::EmptyList { operation }) => assert_eq!(operation, "head"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

/// Current version of minihs
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod runtime;
pub mod session;
pub mod tools;

pub use config::InterpreterConfig;
pub use error::{Error, Result};
pub use lexer::{tokenize, Scanner, Token, TokenKind};
pub use parser::{parse_expression, BinaryOp, Clause, Expression, Pattern};
pub use runtime::{match_clause, match_pattern, Bindings, Callable, Interpreter, Value};
pub use session::{LoadOutcome, LoadReport, ReplOutcome, Session};
pub use tools::{Tool, ToolRegistry};
