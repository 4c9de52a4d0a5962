use crate::{
    error::RuntimeError,
    interpreter::token::{Token, TokenKind},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Reduces a postfix token sequence to a single numeric result.
///
/// The sequence is walked left to right over an explicit operand stack:
/// literals parse to `f64` and push, binary operators pop the right operand
/// and then the left, apply `+ - * /` and push the result. Division is
/// ordinary IEEE floating-point division — dividing by zero yields an
/// infinity or NaN, not an error.
///
/// Variables have no binding environment, so any variable reaching this
/// stage fails rather than silently defaulting to a value. Parentheses never
/// belong in a postfix sequence and fail likewise.
///
/// # Parameters
/// - `postfix`: The postfix sequence, as produced by
///   [`to_postfix`](crate::interpreter::converter::to_postfix).
///
/// # Returns
/// The single value left on the operand stack.
///
/// # Errors
/// - `MalformedLiteral` if a literal's text does not parse as a number
///   (e.g. `1.2.3`).
/// - `UnboundVariable` if a variable token reaches evaluation.
/// - `StackUnderflow` if an operator finds fewer than two operands; the
///   stack is never read past its end.
/// - `MisplacedToken` if a parenthesis reaches evaluation.
/// - `EmptyExpression` if the sequence leaves no value to return.
/// - `TrailingOperands` if more than one value remains — a malformed postfix
///   sequence is signaled, never resolved by picking one arbitrarily.
///
/// # Example
/// ```
/// use shunt::interpreter::{converter::to_postfix, evaluator::evaluate, lexer::tokenize};
///
/// let postfix = to_postfix(tokenize("10/2-3")).unwrap();
/// assert_eq!(evaluate(&postfix).unwrap(), 2.0);
/// ```
pub fn evaluate(postfix: &[Token]) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match token.kind() {
            TokenKind::Literal => {
                let value = token.text()
                                 .parse::<f64>()
                                 .map_err(|_| RuntimeError::MalformedLiteral { text: token.text()
                                                                                           .to_string(), })?;
                stack.push(value);
            },
            TokenKind::Variable => {
                return Err(RuntimeError::UnboundVariable { name: token.text().to_string() });
            },
            TokenKind::Add => {
                let (left, right) = pop_operands(&mut stack, TokenKind::Add)?;
                stack.push(left + right);
            },
            TokenKind::Subtract => {
                let (left, right) = pop_operands(&mut stack, TokenKind::Subtract)?;
                stack.push(left - right);
            },
            TokenKind::Multiply => {
                let (left, right) = pop_operands(&mut stack, TokenKind::Multiply)?;
                stack.push(left * right);
            },
            TokenKind::Divide => {
                let (left, right) = pop_operands(&mut stack, TokenKind::Divide)?;
                stack.push(left / right);
            },
            TokenKind::LeftParen | TokenKind::RightParen => {
                return Err(RuntimeError::MisplacedToken { token: token.to_string() });
            },
        }
    }

    let result = stack.pop().ok_or(RuntimeError::EmptyExpression)?;

    if !stack.is_empty() {
        return Err(RuntimeError::TrailingOperands { count: stack.len() + 1 });
    }

    Ok(result)
}

/// Pops the right operand and then the left operand for a binary operator.
fn pop_operands(stack: &mut Vec<f64>, operator: TokenKind) -> EvalResult<(f64, f64)> {
    let right = stack.pop()
                     .ok_or(RuntimeError::StackUnderflow { operator: operator.code() })?;
    let left = stack.pop()
                    .ok_or(RuntimeError::StackUnderflow { operator: operator.code() })?;

    Ok((left, right))
}
