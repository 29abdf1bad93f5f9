/// Lexing errors.
///
/// Defines all error types that can occur while turning the input line into
/// tokens, such as unexpected characters or malformed numeric literals.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the expression tree
/// from the token stream: missing operands, unmatched parentheses, and
/// trailing input after a complete expression.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while reducing the expression
/// tree to a value, such as division by zero.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any error the pipeline can produce for one input line.
///
/// This is the single structured value handed to the caller when lexing,
/// parsing, or evaluation fails. The pipeline is "first error wins": the
/// stage that fails aborts immediately and its error is surfaced unmodified,
/// never alongside a partial result.
#[derive(Debug)]
pub enum Error {
    /// The lexer rejected the input.
    Lex(LexError),
    /// The parser rejected the token stream.
    Parse(ParseError),
    /// The evaluator could not reduce the expression to a value.
    Eval(EvalError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => e.fmt(f),
            Self::Parse(e) => e.fmt(f),
            Self::Eval(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<EvalError> for Error {
    fn from(error: EvalError) -> Self {
        Self::Eval(error)
    }
}
