use std::fmt::Display;

use thiserror::Error;

use crate::{
    ast::{
        ast::{ArithmeticOp, ComparisonOp, LogicalOp},
        types::Type,
    },
    Position,
};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Option<Position>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position: Some(position),
        }
    }

    /// Creates an error raised while evaluating, where no source position is known.
    pub fn runtime(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
            position: None,
        }
    }

    pub fn get_position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. }
            | ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnexpectedTokenDetailed { .. }
            | ErrorImpl::NumberParseError { .. }
            | ErrorImpl::InvalidAssignmentTarget { .. } => ErrorKind::Syntax,
            ErrorImpl::VariableNotDeclared { .. } => ErrorKind::UnboundName,
            ErrorImpl::AssignmentTypeMatchError { .. }
            | ErrorImpl::ArithmeticTypeMatchError { .. }
            | ErrorImpl::UnsupportedArithmeticType { .. }
            | ErrorImpl::LogicalTypeMatchError { .. }
            | ErrorImpl::NotExpectsBoolean { .. }
            | ErrorImpl::ComparisonTypeMatchError { .. }
            | ErrorImpl::ConditionExpectsBoolean { .. } => ErrorKind::TypeMismatch,
            ErrorImpl::DivideByZero { .. } => ErrorKind::DivideByZero,
            ErrorImpl::OutputError { .. } => ErrorKind::Output,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::InvalidAssignmentTarget { .. } => "InvalidAssignmentTarget",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::AssignmentTypeMatchError { .. } => "AssignmentTypeMatchError",
            ErrorImpl::ArithmeticTypeMatchError { .. } => "ArithmeticTypeMatchError",
            ErrorImpl::UnsupportedArithmeticType { .. } => "UnsupportedArithmeticType",
            ErrorImpl::LogicalTypeMatchError { .. } => "LogicalTypeMatchError",
            ErrorImpl::NotExpectsBoolean { .. } => "NotExpectsBoolean",
            ErrorImpl::ComparisonTypeMatchError { .. } => "ComparisonTypeMatchError",
            ErrorImpl::ConditionExpectsBoolean { .. } => "ConditionExpectsBoolean",
            ErrorImpl::DivideByZero { .. } => "DivideByZero",
            ErrorImpl::OutputError { .. } => "OutputError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::InvalidAssignmentTarget { target } => ErrorTip::Suggestion(format!(
                "Cannot assign to `{}`, only variables can be assigned",
                target
            )),
            ErrorImpl::VariableNotDeclared { variable } => ErrorTip::Suggestion(format!(
                "Cannot read from `{}` before assignment",
                variable
            )),
            ErrorImpl::AssignmentTypeMatchError {
                variable,
                expected,
                received,
            } => ErrorTip::Suggestion(format!(
                "`{}` holds a `{}`, cannot assign a `{}` to it",
                variable, expected, received
            )),
            ErrorImpl::ArithmeticTypeMatchError { op, left, right } => {
                ErrorTip::Suggestion(format!(
                    "Mismatched types for {}: cannot combine `{}` with `{}`",
                    op, left, right
                ))
            }
            ErrorImpl::UnsupportedArithmeticType { op, received } => {
                ErrorTip::Suggestion(format!("{} is not defined for `{}` operands", op, received))
            }
            ErrorImpl::LogicalTypeMatchError { op, left, right } => ErrorTip::Suggestion(format!(
                "{} expects `Boolean` operands, received `{}` and `{}`",
                op, left, right
            )),
            ErrorImpl::NotExpectsBoolean { received } => ErrorTip::Suggestion(format!(
                "Not expects a `Boolean` operand, received `{}`",
                received
            )),
            ErrorImpl::ComparisonTypeMatchError { op, left, right } => {
                ErrorTip::Suggestion(format!(
                    "Mismatched types for {}: cannot compare `{}` with `{}`",
                    op, left, right
                ))
            }
            ErrorImpl::ConditionExpectsBoolean { construct, received } => {
                ErrorTip::Suggestion(format!(
                    "Expected `Boolean` for {} condition, received `{}`",
                    construct, received
                ))
            }
            ErrorImpl::DivideByZero { dividend } => {
                ErrorTip::Suggestion(format!("Cannot divide {} by zero", dividend))
            }
            ErrorImpl::OutputError { message } => {
                ErrorTip::Suggestion(format!("Failed to write output: {}", message))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

/// The class of failure an error belongs to.
///
/// Callers should branch on this rather than on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input, raised by the lexer and parser.
    Syntax,
    UnboundName,
    TypeMismatch,
    DivideByZero,
    /// The output sink failed while printing.
    Output,
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("invalid assignment target: {target}")]
    InvalidAssignmentTarget { target: String },
    #[error("variable {variable:?} not declared")]
    VariableNotDeclared { variable: String },
    #[error("cannot assign {received} to {variable:?} of type {expected}")]
    AssignmentTypeMatchError {
        variable: String,
        expected: Type,
        received: Type,
    },
    #[error("mismatched types for {op}: {left} and {right}")]
    ArithmeticTypeMatchError {
        op: ArithmeticOp,
        left: Type,
        right: Type,
    },
    #[error("cannot apply {op} to {received} operands")]
    UnsupportedArithmeticType { op: ArithmeticOp, received: Type },
    #[error("{op} expects boolean operands: received {left} and {right}")]
    LogicalTypeMatchError {
        op: LogicalOp,
        left: Type,
        right: Type,
    },
    #[error("Not expects a boolean operand: received {received}")]
    NotExpectsBoolean { received: Type },
    #[error("mismatched types for {op}: {left} and {right}")]
    ComparisonTypeMatchError {
        op: ComparisonOp,
        left: Type,
        right: Type,
    },
    #[error("{construct} condition must be boolean: received {received}")]
    ConditionExpectsBoolean {
        construct: &'static str,
        received: Type,
    },
    #[error("cannot divide {dividend} by zero")]
    DivideByZero { dividend: String },
    #[error("failed to write output: {message}")]
    OutputError { message: String },
}
