/// An abstract syntax tree (AST) node representing a parsed arithmetic
/// expression.
///
/// `Expr` is the handoff between the parser and the evaluator. A tree is
/// produced once by the parser, walked once by the evaluator, and then
/// dropped. Every internal node exclusively owns its two children, so the
/// tree is acyclic with exactly one root and cleans itself up on scope exit.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal, such as `42` or `3.14`.
    Number {
        /// The literal value.
        value: f64,
        /// Byte offset of the literal in the source line.
        position: usize,
    },
    /// A binary operation (addition, subtraction, multiplication, division).
    BinaryOp {
        /// Left operand.
        left: Box<Self>,
        /// The operator.
        op: BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Byte offset of the operator token in the source line.
        position: usize,
    },
}

impl Expr {
    /// Gets the byte position from `self`.
    /// ## Example
    /// ```
    /// use lineval::ast::Expr;
    ///
    /// let expr = Expr::Number { value: 7.0, position: 5 };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Number { position, .. } | Self::BinaryOp { position, .. } => *position,
        }
    }
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for Expr {
    /// Renders the expression fully parenthesized, making the parsed
    /// grouping visible.
    /// ## Example
    /// ```
    /// use lineval::interpreter::parser::parse;
    ///
    /// let expr = parse("10 - 2 - 3").unwrap();
    ///
    /// assert_eq!(expr.to_string(), "((10 - 2) - 3)");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::BinaryOp {
                left, op, right, ..
            } => write!(f, "({left} {op} {right})"),
        }
    }
}
