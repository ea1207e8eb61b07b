use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Parses one item of a program or block along with its separator.
///
/// The `;` may be left out before `}` or end of input, and after an item
/// that itself ends in `}`.
pub fn parse_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    let expr = parse_expr(parser, BindingPower::Default)?;

    match parser.current_token_kind() {
        TokenKind::Semicolon => {
            parser.advance();
        }
        TokenKind::CloseCurly | TokenKind::EOF => {}
        _ if parser.previous_token_kind() == Some(TokenKind::CloseCurly) => {}
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken { token: parser.current_token().value.clone() },
                parser.get_position(),
            ))
        }
    }

    Ok(expr)
}

pub fn parse_block_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenCurly)?;

    let mut body = vec![];

    while parser.current_token_kind() != TokenKind::CloseCurly {
        if !parser.has_tokens() {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: parser.current_token().value.clone(),
                    message: String::from("expected } to close block"),
                },
                parser.get_position(),
            ));
        }

        body.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Expr::Sequence(body))
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();

    let condition = parse_expr(parser, BindingPower::Default)?;
    let then_branch = parse_block_expr(parser)?;

    let else_branch = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();

        if parser.current_token_kind() == TokenKind::If {
            parse_if_expr(parser)?
        } else {
            parse_block_expr(parser)?
        }
    } else {
        Expr::unit()
    };

    Ok(Expr::if_else(condition, then_branch, else_branch))
}

pub fn parse_while_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();

    let condition = parse_expr(parser, BindingPower::Default)?;
    let body = parse_block_expr(parser)?;

    Ok(Expr::while_loop(condition, body))
}
