use lrcalc::{
    arithmetic::ArithmeticError,
    base::{ErrorKind, SilentHandler},
    evaluate, evaluate_with,
    lexical::{self, token::TokenKind},
    syntax::{self, State},
};

#[test]
fn evaluating_left_to_right() {
    assert_eq!(evaluate("2+3*4"), Ok(20.into()));
    assert_eq!(evaluate("10-2-3"), Ok(5.into()));
    assert_eq!(evaluate("1+2+3+4"), Ok(10.into()));
    assert_eq!(evaluate("100/10/3"), Ok(3.into()));
    assert_eq!(evaluate("2*5-20"), Ok((-10).into()));
}

#[test]
fn evaluating_floor_division() {
    assert_eq!(evaluate("7/2"), Ok(3.into()));
    assert_eq!(evaluate("0-7/2"), Ok((-4).into()));
    assert_eq!(evaluate("3-10/3"), Ok((-3).into()));
    assert_eq!(evaluate("0-6/3"), Ok((-2).into()));
}

#[test]
fn evaluating_multi_digit_and_whitespace() {
    assert_eq!(evaluate("12+3"), Ok(15.into()));
    assert_eq!(evaluate("  3 +  4 "), Ok(7.into()));
    assert_eq!(evaluate("\t100\t*\t2"), Ok(200.into()));
    assert_eq!(evaluate("5"), Ok(5.into()));
}

#[test]
fn evaluating_division_by_zero() {
    let error = evaluate("3/0").expect_err("Expecting division by zero");
    assert_eq!(error.kind(), ErrorKind::Arithmetic);

    let Ok(ArithmeticError::DivisionByZero(error)) = error.into_arithmetic_error() else {
        panic!("Expected division by zero");
    };
    assert_eq!(error.dividend, 3.into());
    assert_eq!(error.span.str(), "0");

    // the divisor is checked even when the dividend is zero
    let error = evaluate("5-5/0").expect_err("Expecting division by zero");
    let Ok(ArithmeticError::DivisionByZero(error)) = error.into_arithmetic_error() else {
        panic!("Expected division by zero");
    };
    assert_eq!(error.dividend, 0.into());
}

#[test]
fn evaluating_integers_wider_than_i64() {
    let evaluate_to_string = |input: &str| {
        evaluate(input)
            .map(|value| value.to_string())
            .map_err(|error| error.kind())
    };

    assert_eq!(
        evaluate_to_string("99999999999999999999+1"),
        Ok("100000000000000000000".to_string())
    );
    assert_eq!(
        evaluate_to_string("9223372036854775807+1"),
        Ok("9223372036854775808".to_string())
    );
    assert_eq!(
        evaluate_to_string("0-9223372036854775808/0-1"),
        Err(ErrorKind::Arithmetic)
    );
    assert_eq!(
        evaluate_to_string("0-9223372036854775808/1-1"),
        Ok("-9223372036854775809".to_string())
    );
}

#[test]
fn evaluating_parse_errors() {
    for input in ["3+", "+3", "3 3", "", "   ", "3 + * 4", "3 4 +"] {
        let error = evaluate(input).expect_err("Expecting parse failure");
        assert_eq!(error.kind(), ErrorKind::Parse, "input: {input:?}");
    }

    let Err(lrcalc::base::Error::ParseError(syntax::Error::UnexpectedSyntax(error))) =
        evaluate("3+")
    else {
        panic!("Expected unexpected syntax");
    };
    assert_eq!(
        error.state,
        State::ExpectSecondInteger(lrcalc::arithmetic::Operator::Add)
    );
    assert_eq!(error.found.kind(), TokenKind::EndOfInput);
}

#[test]
fn evaluating_lexical_errors() {
    let error = evaluate("3&4").expect_err("Expecting lexical failure");
    assert_eq!(error.kind(), ErrorKind::Lex);

    let Ok(lexical::Error::UnrecognizedCharacter(error)) = error.into_lexical_error() else {
        panic!("Expected unrecognized character");
    };
    assert_eq!(error.character, '&');
    assert_eq!(error.position, 1);

    // lexing is lazy, so the grammar error in front of the character is reported first
    assert_eq!(evaluate("+ &").map_err(|e| e.kind()), Err(ErrorKind::Parse));
    assert_eq!(evaluate("1.5").map_err(|e| e.kind()), Err(ErrorKind::Lex));
}

#[test]
fn evaluating_is_idempotent() {
    for input in ["2+3*4", "3/0", "3+", "3&4", "1 - 2"] {
        let first = evaluate(input).map_err(|error| error.kind());
        let second = evaluate(input).map_err(|error| error.kind());
        assert_eq!(first, second, "input: {input:?}");
    }
}

#[test]
fn evaluating_reports_to_handler() {
    let handler = SilentHandler::new();
    assert_eq!(evaluate_with(&handler, "6/3"), Ok(2.into()));
    assert!(!handler.has_received());

    assert!(evaluate_with(&handler, "6/").is_err());
    assert!(handler.has_received());
}

#[test]
fn evaluating_error_messages() {
    colored::control::set_override(false);

    let message = evaluate("3&4").unwrap_err().to_string();
    assert!(message.starts_with("[error]: unrecognized character `&` at position 1"));

    let message = evaluate("3+").unwrap_err().to_string();
    assert!(message.starts_with(
        "[error]: expected a number after the operator `+`, but found end of input"
    ));

    let message = evaluate("+3").unwrap_err().to_string();
    assert!(message.starts_with(
        "[error]: expected a number at the start of the expression, but found the operator `+`"
    ));

    let message = evaluate("3 3").unwrap_err().to_string();
    assert!(message
        .starts_with("[error]: expected an operator or end of input, but found the number `3`"));

    let message = evaluate("3/0").unwrap_err().to_string();
    assert!(message.starts_with("[error]: division by zero"));
}
