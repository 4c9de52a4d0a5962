/// The token module defines the value shared by every stage.
///
/// A token pairs a classification with the exact source text it was lexed
/// from. The classification exposes the precedence table and the predicates
/// the converter and evaluator dispatch on, so the later stages never look
/// at raw characters again.
///
/// # Responsibilities
/// - Defines `TokenKind` and the `Token` value type.
/// - Carries the precedence table and classification predicates.
/// - Renders tokens for debugging via `Display`.
pub mod token;
/// The lexer module tokenizes an expression for further processing.
///
/// The lexer reads the raw source text and produces an ordered sequence of
/// tokens: literals, identifiers, the four binary operators, and normalized
/// parentheses. This is the first stage of the pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into tokens in input order.
/// - Skips whitespace; reports and skips unrecognized characters.
/// - Preserves the original's lexical gaps (leading `0`, unvalidated dots)
///   without ever failing.
pub mod lexer;
/// The converter module reorders infix tokens into postfix form.
///
/// The converter runs the shunting-yard algorithm over the token sequence
/// produced by the lexer, honoring operator precedence and parenthesization
/// with an explicit operator stack. Its output feeds the evaluator directly.
///
/// # Responsibilities
/// - Produces a postfix sequence holding the same operand and operator
///   tokens as the input.
/// - Consumes parentheses, never emitting them.
/// - Detects unmatched right parentheses instead of reading past the stack.
pub mod converter;
/// The evaluator module reduces a postfix sequence to a number.
///
/// The evaluator walks the postfix sequence with an explicit operand stack,
/// parsing literals and applying binary operators. It is the final stage of
/// the pipeline and the place where malformed input surfaces as errors.
///
/// # Responsibilities
/// - Computes the numeric result of a postfix sequence.
/// - Reports malformed literals, unbound variables, and malformed postfix
///   shapes as distinguishable errors.
pub mod evaluator;
