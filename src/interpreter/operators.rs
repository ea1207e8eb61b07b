//! Operator semantics.
//!
//! Each operator checks its operand tags before computing anything:
//! both operands must carry the same tag, and that tag must be one the
//! operator supports. Integer arithmetic wraps on overflow.

use std::cmp::Ordering;

use crate::{
    ast::{
        ast::{ArithmeticOp, ComparisonOp, LogicalOp},
        types::Value,
    },
    errors::errors::{Error, ErrorImpl},
};

pub fn arithmetic(op: ArithmeticOp, left: Value, right: Value) -> Result<Value, Error> {
    if left.ty() != right.ty() {
        return Err(Error::runtime(ErrorImpl::ArithmeticTypeMatchError {
            op,
            left: left.ty(),
            right: right.ty(),
        }));
    }

    if op == ArithmeticOp::Divide && right.is_zero() {
        return Err(Error::runtime(ErrorImpl::DivideByZero {
            dividend: left.to_string(),
        }));
    }

    match (op, left, right) {
        (ArithmeticOp::Add, Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a.wrapping_add(b))),
        (ArithmeticOp::Add, Value::FloatingPoint(a), Value::FloatingPoint(b)) => Ok(Value::FloatingPoint(a + b)),
        (ArithmeticOp::Add, Value::String(a), Value::String(b)) => Ok(Value::String(a + &b)),

        (ArithmeticOp::Subtract, Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a.wrapping_sub(b))),
        (ArithmeticOp::Subtract, Value::FloatingPoint(a), Value::FloatingPoint(b)) => Ok(Value::FloatingPoint(a - b)),

        (ArithmeticOp::Multiply, Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a.wrapping_mul(b))),
        (ArithmeticOp::Multiply, Value::FloatingPoint(a), Value::FloatingPoint(b)) => Ok(Value::FloatingPoint(a * b)),

        (ArithmeticOp::Divide, Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(floor_div(a, b))),
        (ArithmeticOp::Divide, Value::FloatingPoint(a), Value::FloatingPoint(b)) => Ok(Value::FloatingPoint(a / b)),

        (op, left, _) => Err(Error::runtime(ErrorImpl::UnsupportedArithmeticType {
            op,
            received: left.ty(),
        })),
    }
}

/// Integer division rounding toward negative infinity. `b` must be non-zero.
fn floor_div(a: i64, b: i64) -> i64 {
    let quotient = a.wrapping_div(b);
    if a.wrapping_rem(b) != 0 && ((a < 0) != (b < 0)) {
        quotient - 1
    } else {
        quotient
    }
}

pub fn logical(op: LogicalOp, left: Value, right: Value) -> Result<Value, Error> {
    match (left, right) {
        (Value::Boolean(a), Value::Boolean(b)) => Ok(Value::Boolean(match op {
            LogicalOp::And => a && b,
            LogicalOp::Or => a || b,
        })),
        (left, right) => Err(Error::runtime(ErrorImpl::LogicalTypeMatchError {
            op,
            left: left.ty(),
            right: right.ty(),
        })),
    }
}

pub fn not(value: Value) -> Result<Value, Error> {
    match value {
        Value::Boolean(b) => Ok(Value::Boolean(!b)),
        other => Err(Error::runtime(ErrorImpl::NotExpectsBoolean {
            received: other.ty(),
        })),
    }
}

pub fn compare(op: ComparisonOp, left: &Value, right: &Value) -> Result<Value, Error> {
    if left.ty() != right.ty() {
        return Err(Error::runtime(ErrorImpl::ComparisonTypeMatchError {
            op,
            left: left.ty(),
            right: right.ty(),
        }));
    }

    // None only for NaN operands, which compare unequal and unordered
    let ordering = match (left, right) {
        (Value::Unit, Value::Unit) => Some(Ordering::Equal),
        (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
        (Value::FloatingPoint(a), Value::FloatingPoint(b)) => a.partial_cmp(b),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Boolean(a), Value::Boolean(b)) => Some(a.cmp(b)),
        _ => None,
    };

    let result = match op {
        ComparisonOp::Lt => ordering == Some(Ordering::Less),
        ComparisonOp::Lte => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
        ComparisonOp::Gt => ordering == Some(Ordering::Greater),
        ComparisonOp::Gte => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
        ComparisonOp::Eq => ordering == Some(Ordering::Equal),
        ComparisonOp::Ne => ordering != Some(Ordering::Equal),
    };

    Ok(Value::Boolean(result))
}
