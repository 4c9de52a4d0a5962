//! # shunt
//!
//! shunt is an infix arithmetic expression evaluator written in Rust.
//! It lexes an expression into tokens, reorders them into postfix (reverse
//! Polish) form with the shunting-yard algorithm, and reduces the postfix
//! sequence to a number with a single operand stack.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{converter::to_postfix, evaluator::evaluate, lexer::tokenize},
};

/// Provides unified error types for conversion and evaluation.
///
/// This module defines all errors that can be raised while converting or
/// evaluating an expression. It standardizes error reporting and carries
/// detailed information about failures for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all terminal failure modes.
/// - Attaches the offending text, name, or position to each failure.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together the token model, lexing, infix-to-postfix
/// conversion, and postfix evaluation to turn expression text into a number.
/// Each stage is a stateless function; data flows strictly left to right
/// through them.
///
/// # Responsibilities
/// - Coordinates the core components: token, lexer, converter, evaluator.
/// - Provides the per-stage entry points for callers that need them.
/// - Manages the flow of data and errors between stages.
pub mod interpreter;

/// Evaluates an infix arithmetic expression and returns its numeric value.
///
/// This is the composition of all three stages —
/// [`tokenize`](interpreter::lexer::tokenize),
/// [`to_postfix`](interpreter::converter::to_postfix) and
/// [`evaluate`](interpreter::evaluator::evaluate) — and the single entry
/// point most consumers need. The pipeline holds no state across calls and
/// shares nothing between invocations, so concurrent calls on independent
/// inputs need no synchronization.
///
/// # Errors
/// Returns an error if conversion or evaluation fails; see
/// [`Error`](error::Error). Unrecognized characters in the input do not
/// fail the call — they are reported through `log` and skipped.
///
/// # Examples
/// ```
/// use shunt::evaluate_expression;
///
/// // Multiplication binds tighter than addition.
/// assert_eq!(evaluate_expression("2+3*4").unwrap(), 14.0);
///
/// // Any bracket style groups; `(` and `]` pair freely.
/// assert_eq!(evaluate_expression("[1+2)*3").unwrap(), 9.0);
///
/// // 'x' has no bound value, so this fails rather than guessing.
/// assert!(evaluate_expression("x+1").is_err());
/// ```
pub fn evaluate_expression(source: &str) -> Result<f64, Error> {
    let tokens = tokenize(source);
    let postfix = to_postfix(tokens)?;
    let result = evaluate(&postfix)?;

    Ok(result)
}
