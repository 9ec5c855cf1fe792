use bumpalo::Bump;
use pretty_assertions::assert_eq;

use crate::parser::{BinaryOp, Expr, ParseErrorKind, Span, UnaryOp, parse, parse_with_max_depth};

#[test]
fn test_number_forms() {
    let arena = Bump::new();
    for (source, value) in [("42", 42.0), ("3.25", 3.25), ("5.", 5.0), (".5", 0.5), ("0", 0.0), ("0.5", 0.5), ("100", 100.0)] {
        let parsed = parse(&arena, source).unwrap();
        assert_eq!(parsed.expr, &Expr::Number(value), "source: {source}");
    }
}

#[test]
fn test_simple_binary_expr() {
    let arena = Bump::new();
    let parsed = parse(&arena, "1+2").unwrap();
    assert_eq!(
        parsed.expr,
        &Expr::Binary {
            op: BinaryOp::Add,
            left: &Expr::Number(1.0),
            right: &Expr::Number(2.0),
        }
    );
}

#[test]
fn test_unary_signs() {
    let arena = Bump::new();
    let parsed = parse(&arena, "-4").unwrap();
    assert_eq!(
        parsed.expr,
        &Expr::Unary {
            op: UnaryOp::Neg,
            expr: &Expr::Number(4.0),
        }
    );

    let parsed = parse(&arena, "+4").unwrap();
    assert_eq!(
        parsed.expr,
        &Expr::Unary {
            op: UnaryOp::Pos,
            expr: &Expr::Number(4.0),
        }
    );
}

#[test]
fn test_spans_are_recorded() {
    let arena = Bump::new();
    let parsed = parse(&arena, "12*(3+4)").unwrap();
    assert_eq!(parsed.ann.span_of(parsed.expr), Some(Span(0..7)));

    let Expr::Binary { left, right, .. } = parsed.expr else {
        panic!("expected a binary expression, got {:?}", parsed.expr);
    };
    assert_eq!(parsed.ann.span_of(left), Some(Span(0..2)));
    assert_eq!(parsed.ann.snippet(&parsed.ann.span_of(right).unwrap()), "3+4");
}

#[test]
fn test_whitespace_is_ignored() {
    let arena = Bump::new();
    let spaced = parse(&arena, " 1 +\t2 ").unwrap();
    let tight = parse(&arena, "1+2").unwrap();
    assert_eq!(spaced.expr, tight.expr);
}

#[test]
fn test_unclosed_paren() {
    let arena = Bump::new();
    let err = parse(&arena, "(2+3").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnclosedDelimiter { delimiter: '(' });
    assert_eq!(err.span, Span(0..1));
}

#[test]
fn test_trailing_operator() {
    let arena = Bump::new();
    let err = parse(&arena, "2+").unwrap_err();
    match err.kind {
        ParseErrorKind::UnexpectedToken { found, .. } => assert_eq!(found, "end of input"),
        other => panic!("expected UnexpectedToken, got {:?}", other),
    }
}

#[test]
fn test_stray_closing_paren() {
    let arena = Bump::new();
    let err = parse(&arena, "2)").unwrap_err();
    match err.kind {
        ParseErrorKind::UnexpectedToken { found, .. } => assert_eq!(found, "')'"),
        other => panic!("expected UnexpectedToken, got {:?}", other),
    }
}

#[test]
fn test_rejected_inputs() {
    let arena = Bump::new();
    for source in ["", "()", "--5", "1..2", "1.2.3", "*3", "2**3", "."] {
        assert!(parse(&arena, source).is_err(), "expected error for {source:?}");
    }
}

#[test]
fn test_leading_zero_rejected() {
    let arena = Bump::new();
    for (source, text) in [("007", "007"), ("08", "08"), ("1+00.5", "00.5")] {
        let err = parse(&arena, source).unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::LeadingZero {
                text: text.to_string()
            },
            "source: {source}"
        );
    }
}

#[test]
fn test_sign_repeating_operator_rejected() {
    let arena = Bump::new();
    for (source, at) in [("5--3", 2..3), ("5++3", 2..3), ("1*(2--3)", 5..6)] {
        let err = parse(&arena, source).unwrap_err();
        assert!(
            matches!(err.kind, ParseErrorKind::UnexpectedToken { .. }),
            "source: {source}"
        );
        assert_eq!(err.span, Span(at), "source: {source}");
    }
}

#[test]
fn test_sign_after_other_operator() {
    let arena = Bump::new();
    for source in ["5+-3", "5-+3", "2*-3", "2/+4", "-3+-3"] {
        assert!(parse(&arena, source).is_ok(), "expected {source:?} to parse");
    }
}

#[test]
fn test_number_too_large() {
    let arena = Bump::new();
    let source = "9".repeat(400);
    let source = arena.alloc_str(&source);
    let err = parse(&arena, source).unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::InvalidNumber { .. }));
}

#[test]
fn test_max_depth() {
    let arena = Bump::new();
    assert!(parse_with_max_depth(&arena, "((1))", 2).is_ok());

    let err = parse_with_max_depth(&arena, "(((1)))", 2).unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::MaxDepthExceeded {
            depth: 3,
            max_depth: 2
        }
    );
    assert_eq!(err.span, Span(2..3));
}
