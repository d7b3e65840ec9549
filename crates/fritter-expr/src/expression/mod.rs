//! Filter expression parser and evaluator.
//!
//! Filters select posts with prefix-notation boolean expressions over
//! authorship and tags.
//!
//! # Supported Syntax
//!
//! - `@username` - Posts by a user
//! - `#label` - Posts with a tag
//! - `!(expr)` - Posts not matching `expr`
//! - `&(expr,expr)` - Posts matching both
//! - `|(expr,expr)` - Posts matching either
//!
//! Names are runs of `[A-Za-z0-9_]`. Whitespace is not allowed anywhere.
//!
//! # Example
//!
//! ```
//! use fritter_expr_rs::expression::{parse, Expression};
//!
//! let expr = parse("|(@alice,!(#dog))").unwrap();
//! assert_eq!(expr.render(), "Or(Author(alice),Not(Tag(dog)))");
//! ```

mod ast;
mod error;
mod evaluator;
mod lexer;
mod parser;

pub use ast::Expression;
pub use error::{SyntaxError, SyntaxResult};
pub use lexer::{tokenize, Lexer, Token, TokenKind};
pub use parser::{parse, MAX_DEPTH};

pub(crate) use lexer::is_word_char;

#[cfg(test)]
mod tests;
