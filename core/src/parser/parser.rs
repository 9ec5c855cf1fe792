use bumpalo::Bump;
use lazy_static::lazy_static;
use pest::Parser;
use pest::iterators::Pair;
use pest::pratt_parser::{Assoc, Op, PrattParser};
use pest_derive::Parser;

use super::error::convert_pest_error;
use super::{
    BinaryOp, Expr, ParseError, ParseErrorKind, ParsedExpr, Span, UnaryOp,
    syntax::AnnotatedSource,
};

/// Default nesting limit for parenthesized groups.
pub const DEFAULT_MAX_DEPTH: usize = 256;

lazy_static! {
    // Note: precedence is defined lowest to highest.
    static ref PRATT_PARSER: PrattParser<Rule> = PrattParser::new()
        .op(
            Op::infix(Rule::add, Assoc::Left) |
            Op::infix(Rule::sub, Assoc::Left)
        )                                               // `+`, `-`
        .op(
            Op::infix(Rule::mul, Assoc::Left) |
            Op::infix(Rule::div, Assoc::Left)
        )                                               // `*`, `/`
        .op(Op::prefix(Rule::neg) | Op::prefix(Rule::pos)); // unary `-`, `+`
}

#[derive(Parser)]
#[grammar = "parser/expression.pest"]
pub struct ExpressionParser;

/// Parse `source` with the default nesting limit.
pub fn parse<'a>(arena: &'a Bump, source: &'a str) -> Result<ParsedExpr<'a>, ParseError> {
    parse_with_max_depth(arena, source, DEFAULT_MAX_DEPTH)
}

/// Parse `source`, rejecting input nested deeper than `max_depth` groups.
pub fn parse_with_max_depth<'a>(
    arena: &'a Bump,
    source: &'a str,
    max_depth: usize,
) -> Result<ParsedExpr<'a>, ParseError> {
    check_nesting(source, max_depth)?;

    let mut pairs =
        ExpressionParser::parse(Rule::main, source).map_err(|e| convert_pest_error(e, source))?;
    let main = pairs.next().ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::Other {
                message: "missing expected pair in rule".to_string(),
            },
            source,
            Span::new(0, source.len()),
        )
    })?;

    let ann = arena.alloc(AnnotatedSource::new(arena, source));
    let builder = AstBuilder { arena, ann };
    let expr = builder.build_main(main)?;
    tracing::trace!(source, "parsed expression");

    Ok(ParsedExpr { expr, ann })
}

/// Reject nesting deeper than `max_depth` before handing the input to pest,
/// whose descent is recursive.
fn check_nesting(source: &str, max_depth: usize) -> Result<(), ParseError> {
    let mut depth = 0usize;
    for (pos, c) in source.char_indices() {
        match c {
            '(' => {
                depth += 1;
                if depth > max_depth {
                    return Err(ParseError::new(
                        ParseErrorKind::MaxDepthExceeded { depth, max_depth },
                        source,
                        Span::new(pos, pos + 1),
                    ));
                }
            }
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

/// `07` and `00.5` have a leading zero; `0`, `0.5` and `.05` do not.
fn has_leading_zero(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next() == Some('0') && chars.next().is_some_and(|c| c.is_ascii_digit())
}

struct AstBuilder<'a> {
    arena: &'a Bump,
    ann: &'a AnnotatedSource<'a, Expr<'a>>,
}

impl<'a> AstBuilder<'a> {
    fn alloc(&self, expr: Expr<'a>, span: Span) -> &'a Expr<'a> {
        let expr = self.arena.alloc(expr);
        self.ann.add_span(expr, span);
        expr
    }

    fn span_of(&self, expr: &Expr<'a>, fallback: &Span) -> Span {
        self.ann.span_of(expr).unwrap_or_else(|| fallback.clone())
    }

    fn missing(&self, what: &str, span: Span) -> ParseError {
        ParseError::new(
            ParseErrorKind::Other {
                message: format!("missing {what}"),
            },
            self.ann.source,
            span,
        )
    }

    fn build_main(&self, pair: Pair<'a, Rule>) -> Result<&'a Expr<'a>, ParseError> {
        let span = Span::from(pair.as_span());
        let inner = pair
            .into_inner()
            .find(|p| p.as_rule() == Rule::expression)
            .ok_or_else(|| self.missing("expression", span))?;
        self.build_expr(inner)
    }

    fn build_expr(&self, pair: Pair<'a, Rule>) -> Result<&'a Expr<'a>, ParseError> {
        self.check_signs(&pair)?;
        PRATT_PARSER
            .map_primary(|primary| self.build_primary(primary))
            .map_prefix(|op, rhs| {
                let rhs = rhs?;
                let op_span = Span::from(op.as_span());
                let op = match op.as_rule() {
                    Rule::neg => UnaryOp::Neg,
                    Rule::pos => UnaryOp::Pos,
                    rule => unreachable!("Unknown prefix operator: {:?}", rule),
                };
                let span = Span::combine(&op_span, &self.span_of(rhs, &op_span));
                Ok(self.alloc(Expr::Unary { op, expr: rhs }, span))
            })
            .map_infix(|lhs, op, rhs| {
                let (lhs, rhs) = (lhs?, rhs?);
                let op_span = Span::from(op.as_span());
                let op = match op.as_rule() {
                    Rule::add => BinaryOp::Add,
                    Rule::sub => BinaryOp::Sub,
                    Rule::mul => BinaryOp::Mul,
                    Rule::div => BinaryOp::Div,
                    rule => unreachable!("Unknown binary operator: {:?}", rule),
                };
                let span = Span::combine(&self.span_of(lhs, &op_span), &self.span_of(rhs, &op_span));
                Ok(self.alloc(
                    Expr::Binary {
                        op,
                        left: lhs,
                        right: rhs,
                    },
                    span,
                ))
            })
            .parse(pair.into_inner())
    }

    /// `5-+3` and `5+-3` are fine, but a sign may not repeat the operator
    /// before it: `5--3` and `5++3` are rejected.
    fn check_signs(&self, pair: &Pair<'a, Rule>) -> Result<(), ParseError> {
        let mut prev = None;
        for inner in pair.clone().into_inner() {
            let rule = inner.as_rule();
            if matches!(
                (prev, rule),
                (Some(Rule::sub), Rule::neg) | (Some(Rule::add), Rule::pos)
            ) {
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedToken {
                        expected: "number or expression".to_string(),
                        found: format!("'{}'", inner.as_str()),
                    },
                    self.ann.source,
                    Span::from(inner.as_span()),
                ));
            }
            prev = Some(rule);
        }
        Ok(())
    }

    fn build_primary(&self, pair: Pair<'a, Rule>) -> Result<&'a Expr<'a>, ParseError> {
        let span = Span::from(pair.as_span());
        match pair.as_rule() {
            Rule::number => {
                let text = pair.as_str();
                if has_leading_zero(text) {
                    return Err(ParseError::new(
                        ParseErrorKind::LeadingZero {
                            text: text.to_string(),
                        },
                        self.ann.source,
                        span,
                    ));
                }
                match text.parse::<f64>() {
                    Ok(value) if value.is_finite() => Ok(self.alloc(Expr::Number(value), span)),
                    _ => Err(ParseError::new(
                        ParseErrorKind::InvalidNumber {
                            text: text.to_string(),
                        },
                        self.ann.source,
                        span,
                    )),
                }
            }
            Rule::grouped => {
                let inner = pair
                    .into_inner()
                    .next()
                    .ok_or_else(|| self.missing("grouped expression", span))?;
                self.build_expr(inner)
            }
            rule => Err(ParseError::new(
                ParseErrorKind::Other {
                    message: format!("Unhandled rule: {:?}", rule),
                },
                self.ann.source,
                span,
            )),
        }
    }
}
