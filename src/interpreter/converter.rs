use crate::{error::ParseError, interpreter::token::Token};

/// Result type used by the converter.
pub type ConvertResult<T> = Result<T, ParseError>;

/// Reorders an infix token sequence into postfix (reverse Polish) form.
///
/// This is the shunting-yard algorithm: operands pass straight through to
/// the output while operators wait on an explicit stack until every operator
/// that binds at least as tightly has been emitted. The conversion is a pure
/// reordering — the output holds exactly the same operand and operator
/// tokens as the input, with parentheses consumed along the way and never
/// emitted.
///
/// Per token, in input order:
/// - Binary operator: pop stacked operators into the output while the top is
///   not a parenthesis and the incoming operator yields to it
///   ([`Token::yields_to`]), then push.
/// - Unary operator: push directly. No token is classified unary today, so
///   this arm is unreachable until that changes.
/// - Left parenthesis: push directly.
/// - Right parenthesis: pop into the output until a left parenthesis
///   surfaces, then discard that parenthesis.
/// - Operand (variable or literal): append to the output.
///
/// When the input is exhausted, the remaining stack drains into the output
/// in pop order.
///
/// # Parameters
/// - `tokens`: The infix sequence, as produced by
///   [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// The postfix sequence.
///
/// # Errors
/// - `UnmatchedRightParen` if a right parenthesis is seen while no left
///   parenthesis is on the stack; the stack is never read past its end.
///
/// # Example
/// ```
/// use shunt::interpreter::{converter::to_postfix, lexer::tokenize};
///
/// let postfix = to_postfix(tokenize("2+3*4")).unwrap();
/// let texts: Vec<_> = postfix.iter().map(|t| t.text()).collect();
/// assert_eq!(texts, vec!["2", "3", "4", "*", "+"]);
/// ```
pub fn to_postfix(tokens: Vec<Token>) -> ConvertResult<Vec<Token>> {
    let mut postfix = Vec::with_capacity(tokens.len());
    let mut operators: Vec<Token> = Vec::new();

    for (index, token) in tokens.into_iter().enumerate() {
        if token.is_binary_operator() {
            while let Some(top) = operators.pop_if(|top| !top.is_paren() && token.yields_to(top)) {
                postfix.push(top);
            }
            operators.push(token);
        } else if token.is_unary_operator() {
            operators.push(token);
        } else if token.is_left_paren() {
            operators.push(token);
        } else if token.is_right_paren() {
            loop {
                match operators.pop() {
                    // The matching opener is discarded, not emitted.
                    Some(top) if top.is_left_paren() => break,
                    Some(top) => postfix.push(top),
                    None => return Err(ParseError::UnmatchedRightParen { index }),
                }
            }
        } else {
            postfix.push(token);
        }
    }

    while let Some(operator) = operators.pop() {
        postfix.push(operator);
    }

    Ok(postfix)
}
