use regex::Regex;

use super::ast::Clause;
use super::expr_parser::parse_expression;
use super::pattern::parse_patterns;
use crate::lexer::tokenize;

lazy_static::lazy_static! {
    /// Leading identifier of a definition's left-hand side, then the rest
    static ref DEFINITION_HEAD: Regex = Regex::new(r"^([A-Za-z_][\w']*)(.*)$").unwrap();
}

/// Classification of one line of program source
#[derive(Debug, Clone, PartialEq)]
pub enum SourceLine {
    /// Blank or comment line
    Blank,
    /// Guard alternative (`| cond = ...`), which the language does not support
    Guard,
    /// One pattern-matched clause of a function
    Clause {
        /// Function name
        name: String,
        /// Parsed clause
        clause: Clause,
    },
    /// Top-level `name = expr`; the right-hand side stays text so that
    /// parse failures surface when it is evaluated
    Binding {
        /// Bound name
        name: String,
        /// Right-hand side expression text
        expression: String,
    },
    /// Anything else; skipped by the loader
    Malformed(String),
}

/// Classifies a source line
///
/// A line is a clause exactly when something stands between the leading
/// identifier and the first standalone `=`; with nothing there it is a
/// binding.
pub fn classify_line(line: &str, comment_marker: &str) -> SourceLine {
    let trimmed = line.trim();
    if trimmed.is_empty() || (!comment_marker.is_empty() && trimmed.starts_with(comment_marker)) {
        return SourceLine::Blank;
    }
    if trimmed.starts_with('|') {
        return SourceLine::Guard;
    }

    let (lhs, rhs) = match split_definition(trimmed) {
        Some(parts) => parts,
        None => return SourceLine::Malformed("no definition `=` found".to_string()),
    };
    if rhs.trim().is_empty() {
        return SourceLine::Malformed("empty right-hand side".to_string());
    }

    let captures = match DEFINITION_HEAD.captures(lhs.trim()) {
        Some(captures) => captures,
        None => return SourceLine::Malformed("definition must start with an identifier".to_string()),
    };
    let name = captures[1].to_string();
    let params = captures[2].trim();

    if params.is_empty() {
        return SourceLine::Binding {
            name,
            expression: rhs.trim().to_string(),
        };
    }

    let patterns = match parse_patterns(params) {
        Ok(patterns) if !patterns.is_empty() => patterns,
        Ok(_) => return SourceLine::Malformed(format!("no parameter patterns in `{}`", params)),
        Err(err) => return SourceLine::Malformed(err.to_string()),
    };
    match parse_expression(&rhs) {
        Ok(body) => SourceLine::Clause {
            name,
            clause: Clause {
                params: patterns,
                body,
            },
        },
        Err(err) => SourceLine::Malformed(err.to_string()),
    }
}

/// Splits a line at its first standalone `=` operator run
///
/// `==`, `<=`, `>=` and `/=` are whole tokens and never match.
pub fn split_definition(line: &str) -> Option<(String, String)> {
    let token = tokenize(line)
        .into_iter()
        .find(|token| token.operator() == Some("="))?;
    let lhs: String = line.chars().take(token.offset).collect();
    let rhs: String = line.chars().skip(token.offset + 1).collect();
    Some((lhs, rhs))
}
