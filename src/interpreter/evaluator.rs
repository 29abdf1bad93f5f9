use crate::{
    ast::{BinaryOperator, Expr},
    error::EvalError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`EvalError`] describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression tree to a single number.
///
/// The walk is a structural, post-order recursion: both children of a
/// binary operation are evaluated fully before the operator is applied, and
/// a numeric literal returns its stored value directly. There is no mutable
/// state; evaluation is purely a fold over the tree, with recursion depth
/// bounded by the nesting depth of the expression.
///
/// Division checks the right operand for exactly zero and reports it as an
/// error rather than producing infinity.
///
/// # Parameters
/// - `expr`: The expression tree to evaluate.
///
/// # Returns
/// The numeric value of the expression.
///
/// # Errors
/// Returns [`EvalError::DivisionByZero`] when the right operand of a `/`
/// evaluates to zero.
///
/// ## Example
/// ```
/// use lineval::interpreter::{evaluator::evaluate, parser::parse};
///
/// let expr = parse("(2 + 3) * 4").unwrap();
///
/// assert_eq!(evaluate(&expr).unwrap(), 20.0);
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<f64> {
    match expr {
        Expr::Number { value, .. } => Ok(*value),
        Expr::BinaryOp {
            left,
            op,
            right,
            position,
        } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;

            match op {
                BinaryOperator::Add => Ok(left + right),
                BinaryOperator::Sub => Ok(left - right),
                BinaryOperator::Mul => Ok(left * right),
                BinaryOperator::Div => {
                    if right == 0.0 {
                        Err(EvalError::DivisionByZero {
                            position: *position,
                        })
                    } else {
                        Ok(left / right)
                    }
                }
            }
        }
    }
}
