use super::ast::{BinaryOp, Expression, Literal, Section};
use crate::error::{Error, Result};
use crate::lexer::{split_list_items, tokenize, Token, TokenKind};

/// Parses expression text into an expression tree
///
/// Rules, first applicable wins:
/// 1. a single token is a literal, variable, list literal, section or group;
/// 2. otherwise the expression is split at the first top-level occurrence of
///    the first operator in [`BinaryOp::SPLIT_ORDER`] that has operands on
///    both sides;
/// 3. otherwise a leading identifier followed by more tokens is a function
///    application whose arguments are the remaining single tokens.
pub fn parse_expression(text: &str) -> Result<Expression> {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return Err(Error::unparseable(text.trim()));
    }
    parse_tokens(&tokens)
}

fn parse_tokens(tokens: &[Token]) -> Result<Expression> {
    match tokens {
        [] => Err(Error::unparseable("")),
        [single] => parse_single(single),
        _ => {
            if let Some(expr) = split_binary(tokens)? {
                return Ok(expr);
            }

            match &tokens[0].kind {
                TokenKind::Identifier(name) if bool_literal(name).is_none() => {
                    let args = tokens[1..]
                        .iter()
                        .map(parse_single)
                        .collect::<Result<Vec<_>>>()?;
                    Ok(Expression::Application {
                        name: name.clone(),
                        args,
                    })
                }
                _ => Err(Error::unparseable(render(tokens))),
            }
        }
    }
}

/// Splits at the first operator of the split order found with two non-empty sides
///
/// Groups are single tokens, so every operator token seen here is at depth 0.
fn split_binary(tokens: &[Token]) -> Result<Option<Expression>> {
    for op in BinaryOp::SPLIT_ORDER {
        let position = tokens
            .iter()
            .position(|token| token.operator() == Some(op.symbol()));

        if let Some(index) = position {
            if index == 0 || index + 1 == tokens.len() {
                continue;
            }
            let left = parse_tokens(&tokens[..index])?;
            let right = parse_tokens(&tokens[index + 1..])?;
            return Ok(Some(Expression::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            }));
        }
    }
    Ok(None)
}

fn parse_single(token: &Token) -> Result<Expression> {
    match &token.kind {
        TokenKind::Number(n) => Ok(Expression::Literal(Literal::Number(*n))),
        TokenKind::String(s) => Ok(Expression::Literal(Literal::String(s.clone()))),
        TokenKind::Identifier(name) => Ok(match bool_literal(name) {
            Some(b) => Expression::Literal(Literal::Bool(b)),
            None => Expression::Variable(name.clone()),
        }),
        TokenKind::BracketedList(inner) => parse_list_literal(inner),
        TokenKind::ParenGroup(inner) => parse_group(inner),
        TokenKind::Operator(op) => Err(Error::unparseable(op.clone())),
    }
}

fn parse_list_literal(inner: &str) -> Result<Expression> {
    let items = split_list_items(inner)
        .iter()
        .map(|item| parse_expression(item))
        .collect::<Result<Vec<_>>>()?;
    Ok(Expression::ListLiteral(items))
}

fn parse_group(inner: &str) -> Result<Expression> {
    let tokens = tokenize(inner);
    if tokens.is_empty() {
        return Err(Error::unparseable(format!("({})", inner)));
    }
    if let Some(section) = parse_section(&tokens)? {
        return Ok(Expression::Section(section));
    }
    parse_tokens(&tokens)
}

/// Recognizes `(op)`, `(op operand)` and `(operand op)`
fn parse_section(tokens: &[Token]) -> Result<Option<Section>> {
    let leading = tokens.first().and_then(Token::operator).and_then(BinaryOp::from_symbol);
    let trailing = tokens.last().and_then(Token::operator).and_then(BinaryOp::from_symbol);

    match (leading, trailing) {
        (Some(op), _) if tokens.len() == 1 => Ok(Some(Section::Bare(op))),
        (Some(op), _) => {
            let operand = parse_tokens(&tokens[1..])?;
            Ok(Some(Section::Right {
                op,
                operand: Box::new(operand),
            }))
        }
        (None, Some(op)) => {
            let operand = parse_tokens(&tokens[..tokens.len() - 1])?;
            Ok(Some(Section::Left {
                op,
                operand: Box::new(operand),
            }))
        }
        (None, None) => Ok(None),
    }
}

fn bool_literal(name: &str) -> Option<bool> {
    match name {
        "True" | "true" => Some(true),
        "False" | "false" => Some(false),
        _ => None,
    }
}

fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.lexeme.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
