use std::ops::Range;

use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the input line.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the expression language.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `.5`.
    #[regex(r"[0-9]+\.[0-9]+", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    #[regex(r"[0-9]+", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// End of the expression. A line terminator produces this token; the
    /// natural end of the input yields it as well.
    #[regex(r"[\r\n]")]
    EndOfInput,
    /// Spaces and tabs.
    #[regex(r"[ \t]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "number `{n}`"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::EndOfInput => write!(f, "end of input"),
            Self::Ignored => write!(f, "whitespace"),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number, rejecting the match.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// A pull-based cursor over the tokens of one input line.
///
/// The parser draws tokens from this stream on demand; the input is never
/// tokenized up front. The stream holds no state beyond the current offset
/// and a single token of lookahead, so constructing a fresh `TokenStream`
/// per line keeps the whole pipeline reentrant.
///
/// Once the end of the expression is reached, every further call keeps
/// returning [`Token::EndOfInput`] without advancing.
///
/// ## Example
/// ```
/// use lineval::interpreter::lexer::{Token, TokenStream};
///
/// let mut tokens = TokenStream::new("1 + 2");
///
/// assert_eq!(tokens.next_token().unwrap().0, Token::Number(1.0));
/// assert_eq!(tokens.next_token().unwrap().0, Token::Plus);
/// assert_eq!(tokens.next_token().unwrap().0, Token::Number(2.0));
/// assert_eq!(tokens.next_token().unwrap().0, Token::EndOfInput);
/// assert_eq!(tokens.next_token().unwrap().0, Token::EndOfInput);
/// ```
pub struct TokenStream<'src> {
    lexer: logos::Lexer<'src, Token>,
    peeked: Option<(Token, Range<usize>)>,
    done: bool,
}

impl<'src> TokenStream<'src> {
    /// Creates a token stream over one line of input.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            lexer: Token::lexer(source),
            peeked: None,
            done: false,
        }
    }

    /// Returns the next token together with its byte span, consuming it.
    ///
    /// A line terminator or the natural end of the input produces
    /// [`Token::EndOfInput`]; after that, the call is idempotent.
    ///
    /// # Errors
    /// Returns a [`LexError`] if the input contains a character that cannot
    /// start any token or a malformed numeric literal.
    pub fn next_token(&mut self) -> Result<(Token, Range<usize>), LexError> {
        match self.peeked.take() {
            Some(entry) => Ok(entry),
            None => self.advance(),
        }
    }

    /// Returns the next token without consuming it.
    ///
    /// # Errors
    /// Returns a [`LexError`] under the same conditions as
    /// [`Self::next_token`].
    pub fn peek(&mut self) -> Result<(Token, Range<usize>), LexError> {
        match self.peeked.clone() {
            Some(entry) => Ok(entry),
            None => {
                let entry = self.advance()?;
                self.peeked = Some(entry.clone());
                Ok(entry)
            }
        }
    }

    fn advance(&mut self) -> Result<(Token, Range<usize>), LexError> {
        if self.done {
            let end = self.lexer.source().len();
            return Ok((Token::EndOfInput, end..end));
        }

        match self.lexer.next() {
            None => {
                self.done = true;
                let end = self.lexer.source().len();
                Ok((Token::EndOfInput, end..end))
            }
            Some(Ok(Token::EndOfInput)) => {
                self.done = true;
                Ok((Token::EndOfInput, self.lexer.span()))
            }
            Some(Ok(token)) => Ok((token, self.lexer.span())),
            Some(Err(())) => {
                let span = self.lexer.span();
                match self.lexer.slice().chars().next() {
                    Some(c) if c.is_ascii_digit() => Err(LexError::InvalidNumber {
                        literal: self.lexer.slice().to_string(),
                        position: span.start,
                    }),
                    Some(c) => Err(LexError::UnexpectedCharacter {
                        character: c,
                        position: span.start,
                    }),
                    // An empty match never forms a valid literal.
                    None => Err(LexError::InvalidNumber {
                        literal: String::new(),
                        position: span.start,
                    }),
                }
            }
        }
    }
}
