use std::fmt;

use logos::Logos;

/// Classifies a token and carries its lexing rules.
///
/// The lexer produces one `TokenKind` per recognized unit of input; the
/// classification never changes afterwards. Whitespace (space, `\r`, `\n`)
/// is skipped between tokens and produces no kind at all.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \r\n]+")]
pub enum TokenKind {
    /// Identifier tokens such as `x` or `total_2`. Recognized lexically, but
    /// there is no binding environment: evaluating one is always an error.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Variable,
    /// Numeric literal tokens such as `42`, `3.5` or `.25`.
    ///
    /// A run starting with `1`-`9` or `.` consumes digits and dots greedily,
    /// with no check that `.` appears at most once; `1.2.3` lexes as a single
    /// literal and only fails later, when the evaluator parses it. A leading
    /// `0` is the one-character special case: it lexes as the literal `0` on
    /// its own and the scan resumes at the next character (hex and octal
    /// forms were never implemented).
    #[regex(r"[1-9][0-9.]*")]
    #[regex(r"\.[0-9.]*")]
    #[token("0")]
    Literal,
    /// `+`
    #[token("+")]
    Add,
    /// `-`
    #[token("-")]
    Subtract,
    /// `*`
    #[token("*")]
    Multiply,
    /// `/`
    #[token("/")]
    Divide,
    /// `(`, `[` or `{`; all three normalize to the same kind.
    #[regex(r"[\(\[\{]")]
    LeftParen,
    /// `)`, `]` or `}`; all three normalize to the same kind.
    #[regex(r"[\)\]\}]")]
    RightParen,
}

impl TokenKind {
    /// Returns the precedence rank of this kind.
    ///
    /// The table is inverted relative to naive intuition: a *smaller* rank
    /// binds tighter. Combined with the `>=` pop rule in the converter this
    /// reproduces standard mathematical precedence and left-associativity
    /// for operators of equal rank, so the numbers must not be "fixed"
    /// without re-verifying the conversion examples. Parenthesis ranks are
    /// dead values; the converter never compares against a parenthesis top.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 6,
            Self::Multiply | Self::Divide => 5,
            Self::LeftParen | Self::RightParen => 2,
            Self::Variable | Self::Literal => 0,
        }
    }

    /// Returns `true` for the four binary operators `+ - * /`.
    #[must_use]
    pub const fn is_binary_operator(self) -> bool {
        matches!(self, Self::Add | Self::Subtract | Self::Multiply | Self::Divide)
    }

    /// Returns `true` for unary operators.
    ///
    /// The classification slot is reserved, but no kind is ever classified
    /// as unary; this is always `false`.
    #[must_use]
    pub const fn is_unary_operator(self) -> bool {
        false
    }

    /// Returns `true` for either parenthesis kind.
    #[must_use]
    pub const fn is_paren(self) -> bool {
        matches!(self, Self::LeftParen | Self::RightParen)
    }

    /// Returns `true` for `LeftParen`.
    #[must_use]
    pub const fn is_left_paren(self) -> bool {
        matches!(self, Self::LeftParen)
    }

    /// Returns `true` for `RightParen`.
    #[must_use]
    pub const fn is_right_paren(self) -> bool {
        matches!(self, Self::RightParen)
    }

    /// Returns the one-character display code for this kind.
    ///
    /// Operands use a letter (`V` for variables, `L` for literals); every
    /// operator and parenthesis uses its own character.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Variable => 'V',
            Self::Literal => 'L',
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::LeftParen => '(',
            Self::RightParen => ')',
        }
    }
}

/// A lexical token: a classification plus the exact text it was lexed from.
///
/// Tokens are immutable once constructed. They are created by the lexer,
/// moved by value through the converter (which only reorders them) and
/// consumed by the evaluator; none survives past the final numeric result.
///
/// # Example
/// ```
/// use shunt::interpreter::token::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Literal, "3.5");
/// assert_eq!(token.text(), "3.5");
/// assert_eq!(token.to_string(), "L : 3.5");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    /// Creates a token of the given kind from its source text.
    ///
    /// Parenthesis tokens canonicalize their text: every opener (`(`, `[`,
    /// `{`) is stored as `"("` and every closer as `")"`, so downstream
    /// stages never see the bracket style that was actually typed.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        let text = match kind {
            TokenKind::LeftParen => String::from("("),
            TokenKind::RightParen => String::from(")"),
            _ => text.into(),
        };

        Self { kind, text }
    }

    /// The token's classification.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact text this token was lexed from.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The precedence rank of the token's kind. See [`TokenKind::precedence`].
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        self.kind.precedence()
    }

    /// See [`TokenKind::is_binary_operator`].
    #[must_use]
    pub const fn is_binary_operator(&self) -> bool {
        self.kind.is_binary_operator()
    }

    /// See [`TokenKind::is_unary_operator`].
    #[must_use]
    pub const fn is_unary_operator(&self) -> bool {
        self.kind.is_unary_operator()
    }

    /// See [`TokenKind::is_paren`].
    #[must_use]
    pub const fn is_paren(&self) -> bool {
        self.kind.is_paren()
    }

    /// See [`TokenKind::is_left_paren`].
    #[must_use]
    pub const fn is_left_paren(&self) -> bool {
        self.kind.is_left_paren()
    }

    /// See [`TokenKind::is_right_paren`].
    #[must_use]
    pub const fn is_right_paren(&self) -> bool {
        self.kind.is_right_paren()
    }

    /// Returns `true` when the operator on the stack (`top`) must be emitted
    /// before `self` is pushed.
    ///
    /// This is the `>=` comparison of precedence ranks: under the inverted
    /// rank table (see [`TokenKind::precedence`]) it pops stacked operators
    /// that bind at least as tightly as the incoming one, which keeps equal
    /// ranks left-associative.
    #[must_use]
    pub const fn yields_to(&self, top: &Self) -> bool {
        self.precedence() >= top.precedence()
    }
}

impl fmt::Display for Token {
    /// Renders the token as `"<code> : <text>"`, e.g. `L : 3.5` or `+ : +`.
    ///
    /// A debugging aid for external consumers, not a parseable format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.kind.code(), self.text)
    }
}
