use crate::{
    ast::{BinaryOperator, Expr},
    error::{Error, ParseError},
    interpreter::lexer::{Token, TokenStream},
};

/// Result type used by the parser.
///
/// Parsing can fail either because the lexer rejected the input or because
/// the token stream does not match the grammar, so the error side is the
/// unified [`Error`].
pub type ParseResult<T> = Result<T, Error>;

/// Parses one line of input into an expression tree.
///
/// This is the entry point for parsing. It pulls tokens from a fresh
/// [`TokenStream`] while descending through the grammar:
///
/// ```text
///     expression := term (("+" | "-") term)*
///     term       := factor (("*" | "/") factor)*
///     factor     := NUMBER | "(" expression ")"
/// ```
///
/// After the expression is complete, the next token must be the end of the
/// input; anything else is reported as trailing input. A line terminator
/// ends the expression, so text after the first newline is ignored.
///
/// # Parameters
/// - `source`: The line to parse.
///
/// # Returns
/// The root of the parsed expression tree.
///
/// # Errors
/// - [`ParseError::TrailingInput`] if tokens remain after the expression.
/// - Any error raised by the grammar rules or the lexer.
///
/// ## Example
/// ```
/// use lineval::interpreter::parser::parse;
///
/// let expr = parse("2 + 3 * 4").unwrap();
///
/// // Multiplication binds tighter than addition.
/// assert_eq!(expr.to_string(), "(2 + (3 * 4))");
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    let mut tokens = TokenStream::new(source);
    let expr = parse_expression(&mut tokens)?;

    match tokens.next_token()? {
        (Token::EndOfInput, _) => Ok(expr),
        (token, span) => Err(ParseError::TrailingInput {
            token: token.to_string(),
            position: span.start,
        }
        .into()),
    }
}

/// Parses addition and subtraction expressions.
///
/// Handles the left-associative binary operators `+` and `-`. The rule
/// first obtains a left operand from [`parse_term`], then loops consuming
/// an operator and its right operand, folding the chain to the left so that
/// `1 - 2 - 3` parses as `(1 - 2) - 3`.
///
/// Grammar: `expression := term (("+" | "-") term)*`
fn parse_expression(tokens: &mut TokenStream) -> ParseResult<Expr> {
    let mut left = parse_term(tokens)?;

    loop {
        let (token, span) = tokens.peek()?;
        let op = match token {
            Token::Plus => BinaryOperator::Add,
            Token::Minus => BinaryOperator::Sub,
            _ => break,
        };
        tokens.next_token()?;

        let right = parse_term(tokens)?;
        left = Expr::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
            position: span.start,
        };
    }

    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// Handles the left-associative binary operators `*` and `/`, one
/// precedence level above addition.
///
/// Grammar: `term := factor (("*" | "/") factor)*`
fn parse_term(tokens: &mut TokenStream) -> ParseResult<Expr> {
    let mut left = parse_factor(tokens)?;

    loop {
        let (token, span) = tokens.peek()?;
        let op = match token {
            Token::Star => BinaryOperator::Mul,
            Token::Slash => BinaryOperator::Div,
            _ => break,
        };
        tokens.next_token()?;

        let right = parse_factor(tokens)?;
        left = Expr::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
            position: span.start,
        };
    }

    Ok(left)
}

/// Parses a factor, the atomic level of the grammar.
///
/// A factor is either a numeric literal or a parenthesized expression.
///
/// Grammar: `factor := NUMBER | "(" expression ")"`
///
/// # Errors
/// - [`ParseError::ExpectedFactor`] if the next token starts neither form.
/// - [`ParseError::UnmatchedParen`] if a `(` is not closed by `)`; the
///   position reported is that of the opening parenthesis.
fn parse_factor(tokens: &mut TokenStream) -> ParseResult<Expr> {
    match tokens.next_token()? {
        (Token::Number(value), span) => Ok(Expr::Number {
            value,
            position: span.start,
        }),
        (Token::LParen, span) => {
            let expr = parse_expression(tokens)?;
            match tokens.next_token()? {
                (Token::RParen, _) => Ok(expr),
                _ => Err(ParseError::UnmatchedParen {
                    position: span.start,
                }
                .into()),
            }
        }
        (token, span) => Err(ParseError::ExpectedFactor {
            found: token.to_string(),
            position: span.start,
        }
        .into()),
    }
}
