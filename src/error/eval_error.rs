#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The byte offset of the `/` operator in the input line.
        position: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            }
        }
    }
}

impl std::error::Error for EvalError {}
