#[derive(Debug)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// A factor (number or parenthesized expression) was expected but not
    /// found.
    ExpectedFactor {
        /// Description of the token that was found instead.
        found: String,
        /// The byte offset in the input line where the error occurred.
        position: usize,
    },
    /// A `(` was not matched by a following `)`.
    UnmatchedParen {
        /// The byte offset of the opening parenthesis.
        position: usize,
    },
    /// Found extra tokens after the expression was fully parsed.
    TrailingInput {
        /// The first trailing token.
        token: String,
        /// The byte offset in the input line where the error occurred.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedFactor { found, position } => {
                write!(
                    f,
                    "Error at position {position}: Expected a number or '(' but found {found}."
                )
            }
            Self::UnmatchedParen { position } => {
                write!(
                    f,
                    "Error at position {position}: Expected closing parenthesis ')' but none found."
                )
            }
            Self::TrailingInput { token, position } => {
                write!(
                    f,
                    "Error at position {position}: Trailing input after expression: {token}."
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}
