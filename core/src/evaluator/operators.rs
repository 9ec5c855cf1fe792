//! Binary and unary operator implementations.

use crate::{
    evaluator::RuntimeError,
    parser::{BinaryOp, UnaryOp},
};

/// Evaluate a binary operation on two floats.
///
/// Division by an exact zero is reported as such; any other operation whose
/// result is infinite or NaN is reported as `NonFinite`.
pub(super) fn eval_binary(op: BinaryOp, left: f64, right: f64) -> Result<f64, RuntimeError> {
    let result = match op {
        BinaryOp::Add => left + right,
        BinaryOp::Sub => left - right,
        BinaryOp::Mul => left * right,
        BinaryOp::Div => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero { divisor: None });
            }
            left / right
        }
    };
    finite(result)
}

pub(super) fn eval_unary(op: UnaryOp, value: f64) -> f64 {
    match op {
        UnaryOp::Neg => -value,
        UnaryOp::Pos => value,
    }
}

fn finite(value: f64) -> Result<f64, RuntimeError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RuntimeError::NonFinite)
    }
}
