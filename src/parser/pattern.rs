use super::ast::Pattern;
use super::expr_parser::parse_expression;
use crate::error::{Error, Result};
use crate::lexer::{split_list_items, tokenize, Token, TokenKind};

/// Parses the parameter text of a clause (everything between the function
/// name and `=`) into one pattern per token
pub fn parse_patterns(text: &str) -> Result<Vec<Pattern>> {
    tokenize(text).iter().map(parse_pattern).collect()
}

/// Parses a single parameter pattern
///
/// Forms are recognized in a fixed order: `[]`, `(h:t)`, `[a, b, ...]`,
/// a bare identifier, then any constant literal.
pub fn parse_pattern(token: &Token) -> Result<Pattern> {
    match &token.kind {
        TokenKind::BracketedList(inner) if inner.trim().is_empty() => Ok(Pattern::EmptyList),

        TokenKind::ParenGroup(inner) => match cons_names(inner) {
            Some((head, tail)) => Ok(Pattern::Cons { head, tail }),
            None => literal_pattern(token),
        },

        TokenKind::BracketedList(inner) => {
            let items = split_list_items(inner);
            if items.iter().all(|item| is_identifier(item)) {
                Ok(Pattern::ListDestructure(items))
            } else {
                literal_pattern(token)
            }
        }

        TokenKind::Identifier(name) if name == "_" => Ok(Pattern::Wildcard),
        TokenKind::Identifier(name) if !matches!(name.as_str(), "True" | "False" | "true" | "false") => {
            Ok(Pattern::Variable(name.clone()))
        }

        _ => literal_pattern(token),
    }
}

/// `h:t` with both sides plain identifiers
fn cons_names(inner: &str) -> Option<(String, String)> {
    match tokenize(inner).as_slice() {
        [head, colon, tail] if colon.operator() == Some(":") => match (&head.kind, &tail.kind) {
            (TokenKind::Identifier(h), TokenKind::Identifier(t)) => Some((h.clone(), t.clone())),
            _ => None,
        },
        _ => None,
    }
}

fn literal_pattern(token: &Token) -> Result<Pattern> {
    parse_expression(&token.lexeme)?
        .as_constant()
        .map(Pattern::Literal)
        .ok_or_else(|| Error::unparseable(token.lexeme.clone()))
}

fn is_identifier(text: &str) -> bool {
    matches!(tokenize(text).as_slice(), [t] if matches!(&t.kind, TokenKind::Identifier(name) if name == text))
}
