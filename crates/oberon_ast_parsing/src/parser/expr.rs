//! Expressions, parsed by precedence climbing

use crate::parser::{CouldParse, Parsable, ParseResult, Parser};
use oberon_ast::expr::{
    BinOp, BinaryExpr, CallExpr, Expr, IdentifierExpr, Literal, LiteralExpr,
    UnaryExpr, UnaryOp,
};
use oberon_tokens::token::{Token, TokenKind};

impl Parsable for Expr {
    const NON_TERMINAL: &'static str = "expression";

    fn parse(parser: &mut Parser<'_>) -> ParseResult<Self> {
        parse_binary(parser, 0)
    }
}

impl CouldParse for Expr {
    fn could_parse(parser: &mut Parser<'_>) -> ParseResult<bool> {
        Ok(parser.peek()?.is_some_and(|t| {
            matches!(
                t.kind(),
                TokenKind::Identifier(_)
                    | TokenKind::Integer(_)
                    | TokenKind::Float(_)
                    | TokenKind::String(_)
                    | TokenKind::True
                    | TokenKind::False
                    | TokenKind::LParen
                    | TokenKind::Minus
                    | TokenKind::Bang
            )
        }))
    }
}

fn binary_op(token: &Token) -> Option<BinOp> {
    let op = match token.kind() {
        TokenKind::Or => BinOp::Or,
        TokenKind::And => BinOp::And,
        TokenKind::Eq => BinOp::Eq,
        TokenKind::Neq => BinOp::Neq,
        TokenKind::Lt => BinOp::Lt,
        TokenKind::Lte => BinOp::Lte,
        TokenKind::Gt => BinOp::Gt,
        TokenKind::Gte => BinOp::Gte,
        TokenKind::Plus => BinOp::Add,
        TokenKind::Minus => BinOp::Sub,
        TokenKind::Star => BinOp::Mul,
        TokenKind::Div => BinOp::Div,
        TokenKind::Rem => BinOp::Rem,
        _ => return None,
    };
    Some(op)
}

/// Parses operands joined by operators binding at least as tightly as `min_precedence`
fn parse_binary(parser: &mut Parser<'_>, min_precedence: u8) -> ParseResult<Expr> {
    let mut left = parse_unary(parser)?;
    loop {
        let Some(op) = parser.peek()?.and_then(binary_op) else {
            break;
        };
        if op.precedence() < min_precedence {
            break;
        }
        let location = parser.peek_location()?;
        parser.consume()?;
        // every binary operator is left associative
        let right = parse_binary(parser, op.precedence() + 1)?;
        left = Expr::Binary(BinaryExpr::new(left, op, right, location));
    }
    Ok(left)
}

fn parse_unary(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    let op = parser.peek()?.and_then(|t| match t.kind() {
        TokenKind::Minus => Some(UnaryOp::Neg),
        TokenKind::Bang => Some(UnaryOp::Not),
        _ => None,
    });
    match op {
        Some(op) => {
            let location = parser.peek_location()?;
            parser.consume()?;
            let operand = parser.nested(parse_unary)?;
            Ok(Expr::Unary(UnaryExpr::new(op, operand, location)))
        }
        None => parse_primary(parser),
    }
}

fn parse_primary(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    let literal = parser.peek()?.and_then(|t| match t.kind() {
        TokenKind::Integer(i) => Some(Literal::Integer(*i)),
        TokenKind::Float(f) => Some(Literal::Float(*f)),
        TokenKind::String(s) => Some(Literal::String(s.clone())),
        TokenKind::True => Some(Literal::Boolean(true)),
        TokenKind::False => Some(Literal::Boolean(false)),
        _ => None,
    });
    if let Some(literal) = literal {
        let location = parser.peek_location()?;
        parser.consume()?;
        return Ok(Expr::Literal(LiteralExpr::new(literal, location)));
    }

    if parser.consume_if(|t| t.kind() == &TokenKind::LParen)?.is_some() {
        let inner = parser.parse::<Expr>()?;
        parser.expect(&TokenKind::RParen)?;
        return Ok(inner);
    }

    let is_identifier = parser
        .peek()?
        .is_some_and(|t| matches!(t.kind(), TokenKind::Identifier(_)));
    if !is_identifier {
        return Err(parser.unexpected("expression"));
    }
    let (name, location) = parser.expect_identifier()?;
    let identifier = Expr::Identifier(IdentifierExpr::new(name, location.clone()));
    if parser.consume_if(|t| t.kind() == &TokenKind::LParen)?.is_none() {
        return Ok(identifier);
    }

    let mut arguments = vec![];
    if !parser.check(&TokenKind::RParen)? {
        loop {
            arguments.push(parser.parse::<Expr>()?);
            if parser.consume_if(|t| t.kind() == &TokenKind::Comma)?.is_none() {
                break;
            }
        }
    }
    parser.expect(&TokenKind::RParen)?;
    Ok(Expr::Call(CallExpr::new(identifier, arguments, location)))
}
