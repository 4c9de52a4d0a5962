#[derive(Debug)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum RuntimeError {
    /// A literal token's text did not parse as a number.
    MalformedLiteral {
        /// The text that failed to parse.
        text: String,
    },
    /// A variable reached evaluation, but there is no binding environment to
    /// resolve it.
    UnboundVariable {
        /// The name of the variable.
        name: String,
    },
    /// A binary operator found fewer than two operands on the stack.
    StackUnderflow {
        /// The display character of the operator.
        operator: char,
    },
    /// A token that has no business in a postfix sequence reached
    /// evaluation.
    MisplacedToken {
        /// The display form of the token.
        token: String,
    },
    /// The postfix sequence was empty, leaving no value to return.
    EmptyExpression,
    /// More than one value remained on the stack after evaluation.
    TrailingOperands {
        /// How many values were left over.
        count: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedLiteral { text } => {
                write!(f, "Error: Literal '{text}' is not a valid number.")
            },

            Self::UnboundVariable { name } => {
                write!(f, "Error: Variable '{name}' has no bound value.")
            },

            Self::StackUnderflow { operator } => write!(f,
                                                        "Error: Operator '{operator}' is missing its operands."),

            Self::MisplacedToken { token } => {
                write!(f, "Error: Token '{token}' cannot appear in a postfix sequence.")
            },

            Self::EmptyExpression => write!(f, "Error: Nothing to evaluate."),

            Self::TrailingOperands { count } => write!(f,
                                                       "Error: {count} values left over after evaluation; expected exactly one."),
        }
    }
}

impl std::error::Error for RuntimeError {}
