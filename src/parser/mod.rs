//! minihs Parser Module
//!
//! Turns token streams into expression trees, clause parameter lists into
//! patterns, and classifies program source lines.

mod ast;
mod expr_parser;
mod pattern;
mod program;

pub use ast::{BinaryOp, Clause, Expression, Literal, Pattern, Section};
pub use expr_parser::parse_expression;
pub use pattern::{parse_pattern, parse_patterns};
pub use program::{classify_line, split_definition, SourceLine};
