//! Lexer (tokenizer) for filter expressions.

use std::iter::Peekable;
use std::str::CharIndices;

use super::error::{SyntaxError, SyntaxResult};

/// Returns true for characters allowed inside a name (`[A-Za-z0-9_]`).
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// The kind of a token in a filter expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // ==================== Operators ====================
    /// The OR operator (`|`).
    Or,

    /// The AND operator (`&`).
    And,

    /// The NOT operator (`!`).
    Not,

    /// The author prefix (`@`).
    At,

    /// The tag prefix (`#`).
    Hash,

    // ==================== Punctuation ====================
    /// Opening parenthesis `(`.
    OpenParen,

    /// Closing parenthesis `)`.
    CloseParen,

    /// Operand separator `,`.
    Comma,

    // ==================== Words ====================
    /// A maximal run of word characters.
    Word(String),
}

impl TokenKind {
    /// Returns the source text of this token.
    pub fn as_str(&self) -> &str {
        match self {
            TokenKind::Or => "|",
            TokenKind::And => "&",
            TokenKind::Not => "!",
            TokenKind::At => "@",
            TokenKind::Hash => "#",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Word(word) => word,
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        Some(match c {
            '|' => TokenKind::Or,
            '&' => TokenKind::And,
            '!' => TokenKind::Not,
            '@' => TokenKind::At,
            '#' => TokenKind::Hash,
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            ',' => TokenKind::Comma,
            _ => return None,
        })
    }
}

/// A token with its position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token.
    pub kind: TokenKind,
    /// The byte position where the token starts (0-indexed).
    pub position: usize,
}

/// Lexer for tokenizing filter expressions.
///
/// The grammar has no whitespace rule, so a space is rejected like any other
/// character outside `| & ! @ # ( ) ,` and `[A-Za-z0-9_]`.
pub struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    /// Tokenizes the whole input.
    ///
    /// The input is validated before any token is produced.
    ///
    /// # Errors
    ///
    /// Returns `SyntaxError::InvalidCharacter` for the first character that
    /// is neither a structural symbol nor a word character.
    pub fn tokenize(mut self) -> SyntaxResult<Vec<Token>> {
        Self::validate(self.input)?;

        let mut tokens = Vec::new();
        while let Some((position, c)) = self.chars.next() {
            let kind = match TokenKind::from_symbol(c) {
                Some(kind) => kind,
                None => TokenKind::Word(self.read_word(position)),
            };
            tokens.push(Token { kind, position });
        }
        Ok(tokens)
    }

    fn validate(input: &str) -> SyntaxResult<()> {
        match input
            .char_indices()
            .find(|&(_, c)| !is_word_char(c) && TokenKind::from_symbol(c).is_none())
        {
            Some((position, character)) => Err(SyntaxError::InvalidCharacter {
                character,
                position,
            }),
            None => Ok(()),
        }
    }

    /// Reads the rest of a word whose first character starts at `start`.
    fn read_word(&mut self, start: usize) -> String {
        let mut end = start + 1;
        while let Some(&(i, c)) = self.chars.peek() {
            if !is_word_char(c) {
                break;
            }
            end = i + c.len_utf8();
            self.chars.next();
        }
        self.input[start..end].to_string()
    }
}

/// Splits `input` into its token strings.
///
/// ```
/// use fritter_expr_rs::expression::tokenize;
///
/// let tokens = tokenize("&(@alice,#dog)").unwrap();
/// assert_eq!(tokens, vec!["&", "(", "@", "alice", ",", "#", "dog", ")"]);
/// ```
pub fn tokenize(input: &str) -> SyntaxResult<Vec<String>> {
    Ok(Lexer::new(input)
        .tokenize()?
        .into_iter()
        .map(|t| t.kind.as_str().to_string())
        .collect())
}
