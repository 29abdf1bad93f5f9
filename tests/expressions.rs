use lineval::{
    error::{Error, EvalError, LexError, ParseError},
    evaluate_line,
    interpreter::{
        lexer::{Token, TokenStream},
        parser::parse,
    },
};

fn assert_value(src: &str, expected: f64) {
    match evaluate_line(src) {
        Ok(value) => assert_eq!(value, expected, "wrong result for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("8 - 5", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("10 / 2", 5.0);
    assert_value("42", 42.0);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_value("2+3*4", 14.0);
    assert_value("2*3+4", 10.0);
    assert_value("10-8/4", 8.0);
}

#[test]
fn same_precedence_operators_group_from_the_left() {
    assert_value("10-2-3", 5.0);
    assert_value("100/5/2", 10.0);
    assert_value("1-2-3-4", -8.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2+3)*4", 20.0);
    assert_value("2*(3+4)", 14.0);
    assert_value("((1+2)*(3+4))", 21.0);
    assert_value("(((7)))", 7.0);
}

#[test]
fn parsed_grouping_is_left_associative() {
    let expr = parse("1 - 2 - 3 - 4").unwrap();
    assert_eq!(expr.to_string(), "(((1 - 2) - 3) - 4)");

    let expr = parse("2 + 3 * 4").unwrap();
    assert_eq!(expr.to_string(), "(2 + (3 * 4))");
}

#[test]
fn division_is_floating_point() {
    assert_value("10 / 4", 2.5);
    assert_value("1 / 8", 0.125);
}

#[test]
fn decimal_literals() {
    assert_value("1.5 * 2", 3.0);
    assert_value(".5 + .25", 0.75);
    assert_value("3.14 + 0.86", 4.0);
}

#[test]
fn whitespace_is_insensitive() {
    assert_value(" 2  +  3 ", 5.0);
    assert_value("\t2+3\t", 5.0);
    assert_value("2+3", 5.0);
}

#[test]
fn newline_ends_the_expression() {
    assert_value("1+2\n3+4", 3.0);
    assert_value("6 * 7\n", 42.0);
    assert_value("6 * 7\r\n", 42.0);
}

#[test]
fn division_by_zero_is_an_error() {
    assert!(matches!(
        evaluate_line("5/0"),
        Err(Error::Eval(EvalError::DivisionByZero { .. }))
    ));
    assert!(matches!(
        evaluate_line("1/(2-2)"),
        Err(Error::Eval(EvalError::DivisionByZero { .. }))
    ));
    // Zero on the left is fine.
    assert_value("0/5", 0.0);
}

#[test]
fn missing_operand_is_expected_factor() {
    assert!(matches!(
        evaluate_line("2+"),
        Err(Error::Parse(ParseError::ExpectedFactor { .. }))
    ));
    assert!(matches!(
        evaluate_line("*3"),
        Err(Error::Parse(ParseError::ExpectedFactor { .. }))
    ));
    assert!(matches!(
        evaluate_line("()"),
        Err(Error::Parse(ParseError::ExpectedFactor { .. }))
    ));
    assert!(matches!(
        evaluate_line(""),
        Err(Error::Parse(ParseError::ExpectedFactor { .. }))
    ));
}

#[test]
fn unary_minus_is_not_supported() {
    assert!(matches!(
        evaluate_line("-5"),
        Err(Error::Parse(ParseError::ExpectedFactor { .. }))
    ));
}

#[test]
fn unclosed_parenthesis_is_reported_at_the_opening_paren() {
    match evaluate_line("1 + (2+3") {
        Err(Error::Parse(ParseError::UnmatchedParen { position })) => {
            assert_eq!(position, 4);
        }
        other => panic!("Expected UnmatchedParen, got {other:?}"),
    }
}

#[test]
fn trailing_tokens_are_rejected() {
    match evaluate_line("2 3") {
        Err(Error::Parse(ParseError::TrailingInput { position, .. })) => {
            assert_eq!(position, 2);
        }
        other => panic!("Expected TrailingInput, got {other:?}"),
    }
    assert!(matches!(
        evaluate_line("(1+2))"),
        Err(Error::Parse(ParseError::TrailingInput { .. }))
    ));
}

#[test]
fn stray_characters_are_lex_errors() {
    match evaluate_line("2 + a") {
        Err(Error::Lex(LexError::UnexpectedCharacter {
            character,
            position,
        })) => {
            assert_eq!(character, 'a');
            assert_eq!(position, 4);
        }
        other => panic!("Expected UnexpectedCharacter, got {other:?}"),
    }
    assert!(matches!(
        evaluate_line("1 $ 2"),
        Err(Error::Lex(LexError::UnexpectedCharacter { .. }))
    ));
}

#[test]
fn lone_dot_is_an_unexpected_character() {
    assert!(matches!(
        evaluate_line("1 + ."),
        Err(Error::Lex(LexError::UnexpectedCharacter {
            character: '.',
            ..
        }))
    ));
}

#[test]
fn end_marker_is_idempotent() {
    let mut tokens = TokenStream::new("7");
    assert_eq!(tokens.next_token().unwrap().0, Token::Number(7.0));

    for _ in 0..3 {
        let (token, span) = tokens.next_token().unwrap();
        assert_eq!(token, Token::EndOfInput);
        assert_eq!(span, 1..1);
    }
}

#[test]
fn end_marker_is_idempotent_after_a_newline() {
    let mut tokens = TokenStream::new("1\n2");
    assert_eq!(tokens.next_token().unwrap().0, Token::Number(1.0));
    assert_eq!(tokens.next_token().unwrap().0, Token::EndOfInput);
    // The token after the newline is never reached.
    assert_eq!(tokens.next_token().unwrap().0, Token::EndOfInput);
}

#[test]
fn peek_does_not_consume() {
    let mut tokens = TokenStream::new("3 + 4");
    assert_eq!(tokens.peek().unwrap().0, Token::Number(3.0));
    assert_eq!(tokens.peek().unwrap().0, Token::Number(3.0));
    assert_eq!(tokens.next_token().unwrap().0, Token::Number(3.0));
    assert_eq!(tokens.peek().unwrap().0, Token::Plus);
}

#[test]
fn tokens_carry_their_byte_spans() {
    let mut tokens = TokenStream::new("10 + 2");
    assert_eq!(tokens.next_token().unwrap(), (Token::Number(10.0), 0..2));
    assert_eq!(tokens.next_token().unwrap(), (Token::Plus, 3..4));
    assert_eq!(tokens.next_token().unwrap(), (Token::Number(2.0), 5..6));
}

#[test]
fn error_messages_name_the_position() {
    let error = evaluate_line("5/0").unwrap_err();
    assert_eq!(error.to_string(), "Error at position 1: Division by zero.");

    let error = evaluate_line("2 + a").unwrap_err();
    assert_eq!(
        error.to_string(),
        "Error at position 4: Unexpected character 'a'."
    );
}
