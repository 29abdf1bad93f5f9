/// The evaluator module reduces an expression tree to a number.
///
/// The evaluator walks the AST produced by the parser in post order,
/// evaluating both operands of a binary operation before applying the
/// operator. It is the final stage of the pipeline.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing the four arithmetic operations.
/// - Reports division by zero as an error instead of producing infinity.
pub mod evaluator;
/// The lexer module tokenizes the input line for further parsing.
///
/// The lexer reads the raw text and produces tokens on demand, each
/// corresponding to a meaningful element of the expression: numbers,
/// operators, parentheses, or the end-of-input marker. This is the first
/// stage of the pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with byte positions.
/// - Handles numeric literals, operators, and parentheses.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer one at a time and constructs an
/// AST representing the structure of the expression, honoring operator
/// precedence, left-associativity, and parenthesized grouping.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes via recursive descent.
/// - Validates the grammar, reporting errors with position info.
/// - Rejects trailing input after a complete expression.
pub mod parser;
