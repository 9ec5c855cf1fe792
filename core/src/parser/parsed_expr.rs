use crate::parser::{BinaryOp, UnaryOp, syntax::AnnotatedSource};

#[derive(Debug)]
pub struct ParsedExpr<'a> {
    pub expr: &'a Expr<'a>,
    pub ann: &'a AnnotatedSource<'a, Expr<'a>>,
}

impl<'a> ParsedExpr<'a> {
    pub fn source(&self) -> &'a str {
        self.ann.source
    }
}

/// Arithmetic AST. Parentheses leave no node behind: `(1 + 2)` and `1 + 2`
/// produce the same tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'a> {
    Binary {
        op: BinaryOp,
        left: &'a Expr<'a>,
        right: &'a Expr<'a>,
    },
    Unary {
        op: UnaryOp,
        expr: &'a Expr<'a>,
    },
    Number(f64),
}
