use super::token::{Token, TokenKind};

/// Characters that form operator runs
const OPERATOR_CHARS: &[char] = &['+', '-', '*', '/', ':', '<', '>', '=', '!'];

/// Best-effort, single-pass scanner for expression text
///
/// The scanner never fails: characters it does not recognize are skipped and
/// unterminated groups or strings run to the end of the input. Malformed
/// input surfaces later as an evaluation error.
pub struct Scanner {
    /// Source code as character vector
    source: Vec<char>,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Start position of current token
    start: usize,
    /// Current position in source
    current: usize,
}

impl Scanner {
    /// Creates a new scanner over the given text
    pub fn new(source: &str) -> Self {
        Scanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
        }
    }

    /// Scans all tokens and returns them in source order
    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }
        self.tokens
    }

    fn scan_token(&mut self) {
        let c = self.advance();

        match c {
            ' ' | '\r' | '\t' | '\n' => {}

            '[' => {
                let inner = self.scan_group('[', ']');
                self.add_token(TokenKind::BracketedList(inner));
            }
            '(' => {
                let inner = self.scan_group('(', ')');
                self.add_token(TokenKind::ParenGroup(inner));
            }

            '"' => {
                let text = self.scan_string();
                self.add_token(TokenKind::String(text));
            }

            '-' if self.peek().is_ascii_digit() && !self.follows_operand() => self.scan_number(),

            c if c.is_ascii_digit() => self.scan_number(),

            c if OPERATOR_CHARS.contains(&c) => {
                while OPERATOR_CHARS.contains(&self.peek()) {
                    self.advance();
                }
                let op = self.lexeme();
                self.add_token(TokenKind::Operator(op));
            }

            c if c.is_alphabetic() || c == '_' => {
                while is_identifier_char(self.peek()) {
                    self.advance();
                }
                let name = self.lexeme();
                self.add_token(TokenKind::Identifier(name));
            }

            // Commas, closing delimiters and anything else are not tokens
            _ => {}
        }
    }

    /// Consumes up to the matching `close`, returning the raw inner text
    fn scan_group(&mut self, open: char, close: char) -> String {
        let inner_start = self.current;
        let mut depth = 1usize;

        while !self.is_at_end() {
            let c = self.advance();
            if c == '"' {
                self.scan_string();
            } else if c == open {
                depth += 1;
            } else if c == close {
                depth -= 1;
                if depth == 0 {
                    return self.source[inner_start..self.current - 1].iter().collect();
                }
            }
        }

        self.source[inner_start..self.current].iter().collect()
    }

    /// Consumes a string body after the opening quote
    fn scan_string(&mut self) -> String {
        let mut value = String::new();
        while !self.is_at_end() && self.peek() != '"' {
            value.push(self.advance());
        }
        if !self.is_at_end() {
            self.advance(); // closing "
        }
        value
    }

    fn scan_number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance(); // consume .
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let text = self.lexeme();
        if let Ok(value) = text.parse::<f64>() {
            self.add_token(TokenKind::Number(value));
        }
    }

    /// A `-` right after a value is subtraction, not a sign
    ///
    /// This narrows the plain "`-` before a digit starts a number" rule:
    /// `f -1` scans as `f`, `-`, `1` and parses as `f - 1`, which is what
    /// splitting the expression at `-` would have produced anyway.
    fn follows_operand(&self) -> bool {
        self.tokens.last().map(Token::is_operand).unwrap_or(false)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    fn peek_next(&self) -> char {
        if self.current + 1 >= self.source.len() {
            '\0'
        } else {
            self.source[self.current + 1]
        }
    }

    fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    fn add_token(&mut self, kind: TokenKind) {
        let lexeme = self.lexeme();
        self.tokens.push(Token::new(kind, lexeme, self.start));
    }
}

/// Tokenizes `text`; shorthand for `Scanner::new(text).scan_tokens()`
pub fn tokenize(text: &str) -> Vec<Token> {
    Scanner::new(text).scan_tokens()
}

/// True for characters allowed after the first character of an identifier
pub fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}

/// Splits list-literal contents at commas that sit outside any nested
/// bracket, paren or string
///
/// Segments are trimmed; an all-whitespace input yields no segments.
pub fn split_list_items(inner: &str) -> Vec<String> {
    if inner.trim().is_empty() {
        return Vec::new();
    }

    let mut items = Vec::new();
    let mut current = String::new();
    let mut depth = 0i32;
    let mut in_string = false;

    for c in inner.chars() {
        match c {
            '"' => in_string = !in_string,
            '[' | '(' if !in_string => depth += 1,
            ']' | ')' if !in_string => depth -= 1,
            ',' if !in_string && depth == 0 => {
                items.push(current.trim().to_string());
                current.clear();
                continue;
            }
            _ => {}
        }
        current.push(c);
    }
    items.push(current.trim().to_string());

    items
}
