//! Constructors for building expression trees.
//!
//! Trees usually come out of the parser, but the evaluator accepts any
//! `Expr`, so these helpers keep hand-built trees (mostly in tests) short.

use super::{
    ast::{ArithmeticOp, ComparisonOp, Expr, LogicalOp},
    types::Value,
};

// LITERALS

impl Expr {
    pub fn unit() -> Expr {
        Expr::Literal(Value::Unit)
    }

    pub fn int(value: i64) -> Expr {
        Expr::Literal(Value::Integer(value))
    }

    pub fn float(value: f64) -> Expr {
        Expr::Literal(Value::FloatingPoint(value))
    }

    pub fn string<A: AsRef<str>>(value: A) -> Expr {
        Expr::Literal(Value::string(value))
    }

    pub fn boolean(value: bool) -> Expr {
        Expr::Literal(Value::Boolean(value))
    }

    pub fn variable<A: AsRef<str>>(name: A) -> Expr {
        Expr::Variable(name.as_ref().to_owned())
    }
}

// COMPLEX

impl Expr {
    pub fn assign<A: AsRef<str>>(name: A, value: Expr) -> Expr {
        Expr::Assign {
            name: name.as_ref().to_owned(),
            value: Box::new(value),
        }
    }

    pub fn arithmetic(op: ArithmeticOp, left: Expr, right: Expr) -> Expr {
        Expr::Arithmetic {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn add(left: Expr, right: Expr) -> Expr {
        Expr::arithmetic(ArithmeticOp::Add, left, right)
    }

    pub fn subtract(left: Expr, right: Expr) -> Expr {
        Expr::arithmetic(ArithmeticOp::Subtract, left, right)
    }

    pub fn multiply(left: Expr, right: Expr) -> Expr {
        Expr::arithmetic(ArithmeticOp::Multiply, left, right)
    }

    pub fn divide(left: Expr, right: Expr) -> Expr {
        Expr::arithmetic(ArithmeticOp::Divide, left, right)
    }

    pub fn logical(op: LogicalOp, left: Expr, right: Expr) -> Expr {
        Expr::Logical {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn and(left: Expr, right: Expr) -> Expr {
        Expr::logical(LogicalOp::And, left, right)
    }

    pub fn or(left: Expr, right: Expr) -> Expr {
        Expr::logical(LogicalOp::Or, left, right)
    }

    pub fn not(expr: Expr) -> Expr {
        Expr::Not(Box::new(expr))
    }

    pub fn compare(op: ComparisonOp, left: Expr, right: Expr) -> Expr {
        Expr::Comparison {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn lt(left: Expr, right: Expr) -> Expr {
        Expr::compare(ComparisonOp::Lt, left, right)
    }

    pub fn lte(left: Expr, right: Expr) -> Expr {
        Expr::compare(ComparisonOp::Lte, left, right)
    }

    pub fn gt(left: Expr, right: Expr) -> Expr {
        Expr::compare(ComparisonOp::Gt, left, right)
    }

    pub fn gte(left: Expr, right: Expr) -> Expr {
        Expr::compare(ComparisonOp::Gte, left, right)
    }

    pub fn equal(left: Expr, right: Expr) -> Expr {
        Expr::compare(ComparisonOp::Eq, left, right)
    }

    pub fn not_equal(left: Expr, right: Expr) -> Expr {
        Expr::compare(ComparisonOp::Ne, left, right)
    }

    pub fn if_else(condition: Expr, then_branch: Expr, else_branch: Expr) -> Expr {
        Expr::If {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }

    pub fn while_loop(condition: Expr, body: Expr) -> Expr {
        Expr::While {
            condition: Box::new(condition),
            body: Box::new(body),
        }
    }

    pub fn print(expr: Expr) -> Expr {
        Expr::Print(Box::new(expr))
    }
}
