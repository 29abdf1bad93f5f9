#[derive(Debug)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// Found a character that cannot start any token.
    UnexpectedCharacter {
        /// The character encountered.
        character: char,
        /// The byte offset in the input line where the error occurred.
        position: usize,
    },
    /// Characters that looked numeric did not form a valid literal.
    InvalidNumber {
        /// The text that failed to lex as a number.
        literal: String,
        /// The byte offset in the input line where the error occurred.
        position: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter {
                character,
                position,
            } => {
                write!(
                    f,
                    "Error at position {position}: Unexpected character '{character}'."
                )
            }
            Self::InvalidNumber { literal, position } => {
                write!(
                    f,
                    "Error at position {position}: Invalid numeric literal '{literal}'."
                )
            }
        }
    }
}

impl std::error::Error for LexError {}
