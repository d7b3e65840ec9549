//! Recursive descent parser for filter expressions.
//!
//! # Grammar
//!
//! ```text
//! expr ::= "|" "(" expr "," expr ")"     (Or)
//!        | "&" "(" expr "," expr ")"     (And)
//!        | "!" "(" expr ")"              (Not)
//!        | "@" word                      (Author)
//!        | "#" word                      (Tag)
//! ```
//!
//! Every production is selected by its first token, so one token of
//! lookahead suffices and the parser never backtracks. Each step is a pure
//! function from `(tokens, index)` to `(node, next_index)`.

use tracing::debug;

use super::ast::Expression;
use super::error::{SyntaxError, SyntaxResult};
use super::lexer::{Lexer, Token, TokenKind};

/// Description of the tokens that may start an expression.
const EXPRESSION_START: &str = "one of '|', '&', '!', '@', '#'";

/// Maximum number of nested operators in one expression.
///
/// Parsing, rendering and evaluation all recurse once per level.
pub const MAX_DEPTH: usize = 128;

/// Parses a filter expression string into an [`Expression`].
///
/// # Errors
///
/// Returns `SyntaxError::EmptyExpression` if the input is empty,
/// `SyntaxError::InvalidCharacter` if it contains characters outside the
/// expression alphabet, `SyntaxError::UnexpectedToken` or
/// `SyntaxError::UnexpectedEnd` if it does not follow the grammar,
/// `SyntaxError::TooDeep` if operators nest deeper than [`MAX_DEPTH`], and
/// `SyntaxError::TrailingTokens` if input remains after a complete
/// expression.
///
/// # Example
///
/// ```
/// use fritter_expr_rs::expression::{parse, Expression};
///
/// let expr = parse("&(@alice,#dog)").unwrap();
/// assert_eq!(expr, Expression::and(Expression::author("alice"), Expression::tag("dog")));
/// ```
pub fn parse(input: &str) -> SyntaxResult<Expression> {
    if input.is_empty() {
        return Err(SyntaxError::EmptyExpression);
    }

    let tokens = Lexer::new(input).tokenize()?;
    let (expression, next) = parse_expression(&tokens, 0, 0)?;

    // Check that we consumed all tokens
    if next < tokens.len() {
        return Err(SyntaxError::TrailingTokens { index: next });
    }

    debug!(input, expression = %expression, "parsed filter");
    Ok(expression)
}

/// Parses one expression starting at `index`, enclosed by `depth` operators.
///
/// Returns the node and the index of the first token after it.
fn parse_expression(
    tokens: &[Token],
    index: usize,
    depth: usize,
) -> SyntaxResult<(Expression, usize)> {
    let token = tokens
        .get(index)
        .ok_or(SyntaxError::UnexpectedEnd { index })?;

    let is_operator = matches!(token.kind, TokenKind::Or | TokenKind::And | TokenKind::Not);
    if is_operator && depth >= MAX_DEPTH {
        return Err(SyntaxError::TooDeep { index });
    }

    match &token.kind {
        TokenKind::Or => {
            let (left, right, next) = parse_binary_operands(tokens, index + 1, depth + 1)?;
            Ok((Expression::or(left, right), next))
        }
        TokenKind::And => {
            let (left, right, next) = parse_binary_operands(tokens, index + 1, depth + 1)?;
            Ok((Expression::and(left, right), next))
        }
        TokenKind::Not => {
            let next = expect(tokens, index + 1, &TokenKind::OpenParen, "'('")?;
            let (sub, next) = parse_expression(tokens, next, depth + 1)?;
            let next = expect(tokens, next, &TokenKind::CloseParen, "')'")?;
            Ok((Expression::negate(sub), next))
        }
        TokenKind::At => {
            let (username, next) = expect_word(tokens, index + 1)?;
            Ok((Expression::author(username), next))
        }
        TokenKind::Hash => {
            let (label, next) = expect_word(tokens, index + 1)?;
            Ok((Expression::tag(label), next))
        }
        other => Err(SyntaxError::unexpected_token(
            index,
            EXPRESSION_START,
            other.as_str(),
        )),
    }
}

/// Parses `"(" expr "," expr ")"` starting at `index`.
fn parse_binary_operands(
    tokens: &[Token],
    index: usize,
    depth: usize,
) -> SyntaxResult<(Expression, Expression, usize)> {
    let next = expect(tokens, index, &TokenKind::OpenParen, "'('")?;
    let (left, next) = parse_expression(tokens, next, depth)?;
    let next = expect(tokens, next, &TokenKind::Comma, "','")?;
    let (right, next) = parse_expression(tokens, next, depth)?;
    let next = expect(tokens, next, &TokenKind::CloseParen, "')'")?;
    Ok((left, right, next))
}

/// Checks that the token at `index` is `expected` and returns the next index.
fn expect(
    tokens: &[Token],
    index: usize,
    expected: &TokenKind,
    description: &'static str,
) -> SyntaxResult<usize> {
    match tokens.get(index) {
        Some(token) if &token.kind == expected => Ok(index + 1),
        Some(token) => Err(SyntaxError::unexpected_token(
            index,
            description,
            token.kind.as_str(),
        )),
        None => Err(SyntaxError::UnexpectedEnd { index }),
    }
}

/// Reads the word token at `index` and returns it with the next index.
fn expect_word(tokens: &[Token], index: usize) -> SyntaxResult<(String, usize)> {
    match tokens.get(index).map(|t| &t.kind) {
        Some(TokenKind::Word(word)) => Ok((word.clone(), index + 1)),
        Some(other) => Err(SyntaxError::unexpected_token(index, "a name", other.as_str())),
        None => Err(SyntaxError::UnexpectedEnd { index }),
    }
}
