use log::warn;
use logos::Logos;

use crate::interpreter::token::{Token, TokenKind};

/// Scans `source` left to right and returns its tokens in input order.
///
/// Lexing never fails. Whitespace (space, `\r`, `\n` — not tabs) produces no
/// token, and a character that matches no recognized class is reported
/// through a `log::warn!` record and skipped, so the rest of the string is
/// still lexed. All other per-character rules, including the bracket
/// normalization and the leading-`0` special case, live on [`TokenKind`].
///
/// # Parameters
/// - `source`: The expression text to scan.
///
/// # Returns
/// The lexed tokens, in the order they appear in `source`.
///
/// # Example
/// ```
/// use shunt::interpreter::{lexer::tokenize, token::TokenKind};
///
/// let tokens = tokenize("2 + 30*x");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(kinds,
///            vec![TokenKind::Literal,
///                 TokenKind::Add,
///                 TokenKind::Literal,
///                 TokenKind::Multiply,
///                 TokenKind::Variable]);
/// assert_eq!(tokens[2].text(), "30");
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(kind) = lexer.next() {
        match kind {
            Ok(kind) => tokens.push(Token::new(kind, lexer.slice())),
            Err(()) => {
                warn!("there is no such token: {:?} at byte {}; skipping",
                      lexer.slice(),
                      lexer.span().start);
            },
        }
    }

    tokens
}
