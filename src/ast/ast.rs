use std::fmt::Display;

use super::types::Value;

/// Arithmetic Operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Logical Operators
///
/// Both operands are always evaluated; there is no short-circuiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOp {
    And,
    Or,
}

/// Comparison Operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    Lt,
    Lte,
    Gt,
    Gte,
    Eq,
    Ne,
}

impl Display for ArithmeticOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Display for LogicalOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Display for ComparisonOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Expression
///
/// A node of the program's abstract syntax tree. The tree is built once
/// and never mutated during evaluation. The set of kinds is closed, so
/// adding a kind fails to compile until every match handles it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Integer, floating point, string, boolean or unit literal.
    Literal(Value),
    Variable(String),
    Assign {
        name: String,
        value: Box<Expr>,
    },
    Arithmetic {
        op: ArithmeticOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Logical {
        op: LogicalOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Not(Box<Expr>),
    Comparison {
        op: ComparisonOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    If {
        condition: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    While {
        condition: Box<Expr>,
        body: Box<Expr>,
    },
    Sequence(Vec<Expr>),
    /// Program root; evaluates exactly like `Sequence`.
    Program(Vec<Expr>),
    Print(Box<Expr>),
}

fn write_list(f: &mut std::fmt::Formatter<'_>, name: &str, exprs: &[Expr]) -> std::fmt::Result {
    write!(f, "{}(", name)?;
    for (i, expr) in exprs.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", expr)?;
    }
    write!(f, ")")
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Literal(Value::Unit) => write!(f, "Unit"),
            Expr::Literal(Value::String(s)) => write!(f, "String({:?})", s),
            Expr::Literal(value) => write!(f, "{}({})", value.ty(), value),
            Expr::Variable(name) => write!(f, "Variable({})", name),
            Expr::Assign { name, value } => write!(f, "Assign({}, {})", name, value),
            Expr::Arithmetic { op, left, right } => write!(f, "{}({}, {})", op, left, right),
            Expr::Logical { op, left, right } => write!(f, "{}({}, {})", op, left, right),
            Expr::Not(expr) => write!(f, "Not({})", expr),
            Expr::Comparison { op, left, right } => write!(f, "{}({}, {})", op, left, right),
            Expr::If {
                condition,
                then_branch,
                else_branch,
            } => write!(f, "If({}, {}, {})", condition, then_branch, else_branch),
            Expr::While { condition, body } => write!(f, "While({}, {})", condition, body),
            Expr::Sequence(exprs) => write_list(f, "Sequence", exprs),
            Expr::Program(exprs) => write_list(f, "Program", exprs),
            Expr::Print(expr) => write!(f, "Print({})", expr),
        }
    }
}
