use crate::{
    ast::{
        ast::{ArithmeticOp, ComparisonOp, Expr, LogicalOp},
        types::Value,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: parser.current_token().value.clone(),
                    message: String::from("expected expression"),
                },
                parser.get_position(),
            ))
        }
    };

    let mut left = nud(parser)?;

    // While the next token binds tighter than the caller, keep folding it into lhs
    while parser.current_binding_power() > bp {
        let token_kind = parser.current_token_kind();
        let led = match parser.get_led_lookup().get(&token_kind) {
            Some(led) => *led,
            None => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedToken { token: parser.current_token().value.clone() },
                    parser.get_position(),
                ))
            }
        };

        let token_bp = parser.current_binding_power();
        left = led(parser, left, token_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let position = parser.get_position();
            let token = parser.advance().value.clone();

            let value = if token.contains('.') {
                token.parse::<f64>().map(Value::FloatingPoint)
                    .map_err(|_| ErrorImpl::NumberParseError { token: token.clone() })
            } else {
                token.parse::<i64>().map(Value::Integer)
                    .map_err(|_| ErrorImpl::NumberParseError { token: token.clone() })
            };

            value
                .map(Expr::Literal)
                .map_err(|error| Error::new(error, position))
        }
        TokenKind::Identifier => Ok(Expr::variable(&parser.advance().value)),
        TokenKind::String => Ok(Expr::string(&parser.advance().value)),
        TokenKind::True => {
            parser.advance();
            Ok(Expr::boolean(true))
        }
        TokenKind::False => {
            parser.advance();
            Ok(Expr::boolean(false))
        }
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken { token: parser.current_token().value.clone() },
            parser.get_position(),
        )),
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();

    let right = parse_expr(parser, bp)?;

    let expr = match operator_token.kind {
        TokenKind::Plus => Expr::arithmetic(ArithmeticOp::Add, left, right),
        TokenKind::Dash => Expr::arithmetic(ArithmeticOp::Subtract, left, right),
        TokenKind::Star => Expr::arithmetic(ArithmeticOp::Multiply, left, right),
        TokenKind::Slash => Expr::arithmetic(ArithmeticOp::Divide, left, right),
        TokenKind::And => Expr::logical(LogicalOp::And, left, right),
        TokenKind::Or => Expr::logical(LogicalOp::Or, left, right),
        TokenKind::Less => Expr::compare(ComparisonOp::Lt, left, right),
        TokenKind::LessEquals => Expr::compare(ComparisonOp::Lte, left, right),
        TokenKind::Greater => Expr::compare(ComparisonOp::Gt, left, right),
        TokenKind::GreaterEquals => Expr::compare(ComparisonOp::Gte, left, right),
        TokenKind::Equals => Expr::compare(ComparisonOp::Eq, left, right),
        TokenKind::NotEquals => Expr::compare(ComparisonOp::Ne, left, right),
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken { token: operator_token.value },
                operator_token.span.start,
            ))
        }
    };

    Ok(expr)
}

/// `!expr`, or `-` in front of a numeric literal.
pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    match operator_token.kind {
        TokenKind::Not => Ok(Expr::not(rhs)),
        TokenKind::Dash => match rhs {
            Expr::Literal(Value::Integer(value)) => Ok(Expr::int(value.wrapping_neg())),
            Expr::Literal(Value::FloatingPoint(value)) => Ok(Expr::float(-value)),
            other => Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: other.to_string(),
                    message: String::from("negation only applies to number literals"),
                },
                operator_token.span.start,
            )),
        },
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken { token: operator_token.value },
            operator_token.span.start,
        )),
    }
}

pub fn parse_assignment_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();

    let name = match left {
        Expr::Variable(name) => name,
        other => {
            return Err(Error::new(
                ErrorImpl::InvalidAssignmentTarget { target: other.to_string() },
                operator_token.span.start,
            ))
        }
    };

    // Right associative: `a = b = 1` assigns `b` first
    let rhs = parse_expr(parser, BindingPower::Default)?;

    Ok(Expr::assign(name, rhs))
}

/// `( expr )` for grouping, `()` for the unit literal.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();

    if parser.current_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return Ok(Expr::unit());
    }

    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_print_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();

    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::print(expr))
}
