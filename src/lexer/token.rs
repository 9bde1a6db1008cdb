use serde::{Deserialize, Serialize};

/// A single token from an expression or source line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Original text of the token
    pub lexeme: String,
    /// Character offset where the token starts (0-indexed)
    pub offset: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, lexeme: String, offset: usize) -> Self {
        Token {
            kind,
            lexeme,
            offset,
        }
    }

    /// True for tokens that can stand on their own as a value
    pub fn is_operand(&self) -> bool {
        !matches!(self.kind, TokenKind::Operator(_))
    }

    /// Returns the operator text if this is an operator run
    pub fn operator(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Operator(op) => Some(op),
            _ => None,
        }
    }
}

/// All token types produced by the scanner
///
/// Bracketed and parenthesized groups keep their raw inner text; whoever
/// consumes them re-scans that text when the nested structure is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TokenKind {
    /// Numeric literal (optional leading `-`, optional fractional part)
    Number(f64),
    /// Identifier: letters, digits, `_` and `'`, not starting with a digit
    Identifier(String),
    /// Maximal run of operator characters, e.g. `>=`, `==`, `:`
    Operator(String),
    /// Double-quoted text without the quotes (no escape processing)
    String(String),
    /// `[...]` group, payload is the raw inner text
    BracketedList(String),
    /// `(...)` group, payload is the raw inner text
    ParenGroup(String),
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "{}", n),
            TokenKind::Identifier(id) => write!(f, "{}", id),
            TokenKind::Operator(op) => write!(f, "{}", op),
            TokenKind::String(s) => write!(f, "\"{}\"", s),
            TokenKind::BracketedList(inner) => write!(f, "[{}]", inner),
            TokenKind::ParenGroup(inner) => write!(f, "({})", inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_detection() {
        let op = Token::new(TokenKind::Operator("+".to_string()), "+".to_string(), 0);
        let num = Token::new(TokenKind::Number(1.0), "1".to_string(), 0);
        assert!(!op.is_operand());
        assert!(num.is_operand());
        assert_eq!(op.operator(), Some("+"));
        assert_eq!(num.operator(), None);
    }

    #[test]
    fn test_display_restores_groups() {
        assert_eq!(TokenKind::BracketedList("1, 2".to_string()).to_string(), "[1, 2]");
        assert_eq!(TokenKind::ParenGroup("x:xs".to_string()).to_string(), "(x:xs)");
    }
}
