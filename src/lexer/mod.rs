//! Lexical analysis for minihs
//!
//! Converts expression text into a flat stream of tokens. Bracketed and
//! parenthesized groups are captured whole and re-scanned on demand.

mod scanner;
mod token;

pub use scanner::{is_identifier_char, split_list_items, tokenize, Scanner};
pub use token::{Token, TokenKind};
