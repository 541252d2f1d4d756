use crate::parser::{CouldParse, ErrorKind, Parsable, ParseResult, Parser};
use oberon_ast::block::Block;
use oberon_ast::expr::Expr;
use oberon_ast::statements::{
    AssignStmt, ExprStmt, IfStmt, ReturnStmt, Stmt, VarDeclStmt, WhileStmt,
};
use oberon_tokens::token::TokenKind;
use oberon_tokens::Located;

impl Parsable for Stmt {
    const NON_TERMINAL: &'static str = "statement";

    fn parse(parser: &mut Parser<'_>) -> ParseResult<Self> {
        let kind = parser.peek()?.map(|t| t.kind().clone());
        match kind {
            Some(TokenKind::Var) => parse_var_decl(parser).map(Stmt::VarDecl),
            Some(TokenKind::If) => parse_if(parser).map(Stmt::If),
            Some(TokenKind::While) => parse_while(parser).map(Stmt::While),
            Some(TokenKind::Return) => parse_return(parser).map(Stmt::Return),
            _ => parse_assign_or_expr(parser),
        }
    }
}

impl CouldParse for Stmt {
    fn could_parse(parser: &mut Parser<'_>) -> ParseResult<bool> {
        Ok(parser
            .peek()?
            .is_some_and(|t| t.kind() != &TokenKind::RCurly))
    }
}

fn parse_var_decl(parser: &mut Parser<'_>) -> ParseResult<VarDeclStmt> {
    let keyword = parser.expect(&TokenKind::Var)?;
    let (name, _) = parser.expect_identifier()?;
    let initializer = match parser.consume_if(|t| t.kind() == &TokenKind::Assign)? {
        Some(_) => Some(parser.parse::<Expr>()?),
        None => None,
    };
    parser.expect(&TokenKind::SemiColon)?;
    Ok(VarDeclStmt::new(name, initializer, keyword.location().clone()))
}

fn parse_condition(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    parser.expect(&TokenKind::LParen)?;
    let condition = parser.parse::<Expr>()?;
    parser.expect(&TokenKind::RParen)?;
    Ok(condition)
}

fn parse_if(parser: &mut Parser<'_>) -> ParseResult<IfStmt> {
    let keyword = parser.expect(&TokenKind::If)?;
    let condition = parse_condition(parser)?;
    let then_block = parser.parse::<Block>()?;
    let else_block = match parser.consume_if(|t| t.kind() == &TokenKind::Else)? {
        Some(_) => Some(parser.parse::<Block>()?),
        None => None,
    };
    Ok(IfStmt::new(
        condition,
        then_block,
        else_block,
        keyword.location().clone(),
    ))
}

fn parse_while(parser: &mut Parser<'_>) -> ParseResult<WhileStmt> {
    let keyword = parser.expect(&TokenKind::While)?;
    let condition = parse_condition(parser)?;
    let body = parser.parse::<Block>()?;
    Ok(WhileStmt::new(condition, body, keyword.location().clone()))
}

fn parse_return(parser: &mut Parser<'_>) -> ParseResult<ReturnStmt> {
    let keyword = parser.expect(&TokenKind::Return)?;
    let value = parser.parse_opt::<Expr>()?;
    parser.expect(&TokenKind::SemiColon)?;
    Ok(ReturnStmt::new(value, keyword.location().clone()))
}

/// Parses the leading expression first, then decides between an assignment and an expression
/// statement by the token that follows it
fn parse_assign_or_expr(parser: &mut Parser<'_>) -> ParseResult<Stmt> {
    let location = parser.peek_location()?;
    let expr = parser.parse::<Expr>()?;
    if parser.check(&TokenKind::Assign)? {
        let Some(target) = expr.as_identifier() else {
            return Err(parser.error(ErrorKind::InvalidAssignmentTarget));
        };
        let target = target.name().to_string();
        parser.expect(&TokenKind::Assign)?;
        let value = parser.parse::<Expr>()?;
        parser.expect(&TokenKind::SemiColon)?;
        return Ok(Stmt::Assign(AssignStmt::new(target, value, location)));
    }
    parser.expect(&TokenKind::SemiColon)?;
    Ok(Stmt::Expr(ExprStmt::new(expr, location)))
}

#[cfg(test)]
mod tests {
    use crate::parser::tests::test_parser;
    use crate::parser::{ErrorKind, UnitError};
    use oberon_ast::expr::{BinOp, Expr, Literal};
    use oberon_ast::statements::Stmt;
    use oberon_tokens::{Located, SourceLocation};
    use test_log::test;

    fn parse_stmt(text: &str) -> Stmt {
        let mut stmt = None;
        test_parser(text, |parser| {
            stmt = Some(parser.parse::<Stmt>().unwrap());
        });
        stmt.unwrap()
    }

    fn parse_stmt_error(text: &str) -> UnitError {
        let mut error = None;
        test_parser(text, |parser| {
            error = Some(parser.parse::<Stmt>().unwrap_err());
        });
        error.unwrap()
    }

    #[test]
    fn test_var_decl() {
        let Stmt::VarDecl(decl) = parse_stmt("var x = 1;") else {
            panic!("expected var decl");
        };
        assert_eq!(decl.name(), "x");
        assert!(matches!(decl.initializer(), Some(Expr::Literal(_))));

        let Stmt::VarDecl(decl) = parse_stmt("var y;") else {
            panic!("expected var decl");
        };
        assert!(decl.initializer().is_none());
    }

    #[test]
    fn test_assignment() {
        let Stmt::Assign(assign) = parse_stmt("total = total + 1;") else {
            panic!("expected assignment");
        };
        assert_eq!(assign.target(), "total");
        let Expr::Binary(value) = assign.value() else {
            panic!("expected binary value");
        };
        assert_eq!(value.op(), BinOp::Add);
        assert_eq!(assign.location(), &SourceLocation::new("test.ob", 1, 1));
    }

    #[test]
    fn test_invalid_assignment_target() {
        let UnitError::Parse(error) = parse_stmt_error("f(x) = 2;") else {
            panic!("expected parse error");
        };
        assert_eq!(error.error_kind(), &ErrorKind::InvalidAssignmentTarget);
        assert_eq!(error.location(), &SourceLocation::new("test.ob", 1, 6));
    }

    #[test]
    fn test_expression_statement() {
        let Stmt::Expr(stmt) = parse_stmt("a + b;") else {
            panic!("expected expression statement");
        };
        assert!(matches!(stmt.expr(), Expr::Binary(_)));
        assert_eq!(stmt.location(), &SourceLocation::new("test.ob", 1, 1));
    }

    #[test]
    fn test_if_else() {
        let Stmt::If(if_stmt) = parse_stmt("if (c) { a; } else { b; c; }") else {
            panic!("expected if");
        };
        assert!(matches!(if_stmt.condition(), Expr::Identifier(_)));
        assert_eq!(if_stmt.then_block().statements().len(), 1);
        assert_eq!(if_stmt.else_block().map(|b| b.statements().len()), Some(2));
    }

    #[test]
    fn test_while() {
        let Stmt::While(while_stmt) = parse_stmt("while (true) { }") else {
            panic!("expected while");
        };
        let Expr::Literal(condition) = while_stmt.condition() else {
            panic!("expected literal condition");
        };
        assert_eq!(condition.value(), &Literal::Boolean(true));
        assert!(while_stmt.body().is_empty());
    }

    #[test]
    fn test_return() {
        let Stmt::Return(ret) = parse_stmt("return;") else {
            panic!("expected return");
        };
        assert!(ret.value().is_none());
        let Stmt::Return(ret) = parse_stmt("return -x;") else {
            panic!("expected return");
        };
        assert!(matches!(ret.value(), Some(Expr::Unary(_))));
    }

    #[test]
    fn test_missing_semicolon() {
        let UnitError::Parse(error) = parse_stmt_error("x = 1 }") else {
            panic!("expected parse error");
        };
        assert_eq!(error.error_kind(), &ErrorKind::expected_token("`;`", "`}`"));
        assert_eq!(error.location(), &SourceLocation::new("test.ob", 1, 7));
    }
}
