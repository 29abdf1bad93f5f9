//! # lineval
//!
//! lineval is a small arithmetic calculator written in Rust.
//! It reads a single line of text containing an expression over `+`, `-`,
//! `*`, `/` and parentheses, and reduces it to one number by lexing,
//! parsing, and evaluating it.

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
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator, parser};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` type that
/// represent the syntactic structure of an expression as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the expression tree with exclusive ownership of child nodes.
/// - Attaches byte positions to AST nodes for error reporting.
/// - Provides a parenthesized rendering of the parsed structure.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while processing an
/// input line. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and
/// byte positions for debugging and user feedback.
///
/// # Responsibilities
/// - Defines one error enum per pipeline stage (lexer, parser, evaluator).
/// - Attaches byte positions and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the pipeline from raw text to a numeric result.
///
/// This module ties together lexing, parsing, and evaluation to provide a
/// complete runtime for expression evaluation. It exposes the public API
/// for the three stages.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, and evaluator.
/// - Manages the flow of tokens, trees, and errors between phases.
pub mod interpreter;

pub use error::Error;

/// Evaluates one line of arithmetic and returns its value.
///
/// This function runs the full pipeline on the provided source line: the
/// parser pulls tokens from the lexer on demand, builds the expression
/// tree, and the evaluator folds the tree to a number. Each call owns its
/// own token cursor and tree, so concurrent calls on distinct inputs are
/// safe.
///
/// A trailing line terminator ends the expression; any text after the
/// first newline is ignored.
///
/// # Errors
/// Returns an [`Error`] if lexing, parsing, or evaluation fails. The first
/// error aborts the pipeline and is surfaced unmodified.
///
/// # Examples
/// ```
/// use lineval::evaluate_line;
///
/// // Multiplication binds tighter than addition.
/// assert_eq!(evaluate_line("2 + 3 * 4").unwrap(), 14.0);
///
/// // Parentheses override precedence.
/// assert_eq!(evaluate_line("(2 + 3) * 4").unwrap(), 20.0);
///
/// // Division by zero is an error, not infinity.
/// assert!(evaluate_line("5 / 0").is_err());
/// ```
pub fn evaluate_line(source: &str) -> Result<f64, Error> {
    let expr = parser::parse(source)?;
    Ok(evaluator::evaluate(&expr)?)
}
