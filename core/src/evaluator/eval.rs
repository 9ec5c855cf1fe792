//! Core evaluation logic.

use crate::{
    evaluator::{
        EvalError, EvalErrorKind, EvaluatorOptions, ResourceExceeded::StackOverflow, RuntimeError,
        operators,
    },
    parser::{Expr, ParsedExpr, Span},
};

/// Tree-walking evaluator for parsed arithmetic.
pub struct Evaluator<'p, 'a> {
    options: EvaluatorOptions,
    /// The expression being evaluated (used for error context).
    parsed: &'p ParsedExpr<'a>,
    depth: usize,
}

impl<'p, 'a> Evaluator<'p, 'a> {
    pub fn new(options: EvaluatorOptions, parsed: &'p ParsedExpr<'a>) -> Self {
        Self {
            options,
            parsed,
            depth: 0,
        }
    }

    fn span_of(&self, expr: &Expr<'a>) -> Span {
        self.parsed
            .ann
            .span_of(expr)
            .unwrap_or_else(|| Span::new(0, self.parsed.source().len()))
    }

    fn error(&self, expr: &Expr<'a>, kind: EvalErrorKind) -> EvalError {
        EvalError {
            kind,
            src: self.parsed.source().to_string(),
            span: self.span_of(expr),
        }
    }

    /// Evaluate the whole expression.
    pub fn eval(&mut self) -> Result<f64, EvalError> {
        let value = self.eval_expr(self.parsed.expr)?;
        tracing::trace!(source = self.parsed.source(), value, "evaluated");
        Ok(value)
    }

    /// Evaluate an expression node.
    fn eval_expr(&mut self, expr: &'a Expr<'a>) -> Result<f64, EvalError> {
        // Check depth before recursing
        if self.depth >= self.options.max_depth {
            return Err(self.error(
                expr,
                StackOverflow {
                    depth: self.depth,
                    max_depth: self.options.max_depth,
                }
                .into(),
            ));
        }

        self.depth += 1;
        let result = self.eval_expr_inner(expr);
        self.depth -= 1;

        result
    }

    fn eval_expr_inner(&mut self, expr: &'a Expr<'a>) -> Result<f64, EvalError> {
        match *expr {
            Expr::Number(value) => Ok(value),

            Expr::Unary { op, expr: operand } => {
                let value = self.eval_expr(operand)?;
                Ok(operators::eval_unary(op, value))
            }

            Expr::Binary { .. } => self.eval_chain(expr),
        }
    }

    /// Evaluate a left-leaning chain such as `1+2-3+...` without recursing
    /// along its spine, so the depth limit tracks parentheses and signs
    /// rather than the number of operands.
    fn eval_chain(&mut self, expr: &'a Expr<'a>) -> Result<f64, EvalError> {
        let mut spine = Vec::new();
        let mut node = expr;
        while let Expr::Binary { left, .. } = *node {
            spine.push(node);
            node = left;
        }

        let mut acc = self.eval_expr(node)?;
        for &node in spine.iter().rev() {
            let Expr::Binary { op, right, .. } = *node else {
                continue;
            };
            let right_val = self.eval_expr(right)?;
            acc = operators::eval_binary(op, acc, right_val).map_err(|e| {
                let e = match e {
                    RuntimeError::DivisionByZero { .. } => RuntimeError::DivisionByZero {
                        divisor: Some(self.span_of(right)),
                    },
                    other => other,
                };
                self.error(node, e.into())
            })?;
        }
        Ok(acc)
    }
}
