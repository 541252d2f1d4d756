use crate::parser::{ErrorKind, Parsable, ParseResult, Parser};
use oberon_ast::block::Block;
use oberon_ast::function::{FunctionDefinition, Parameter};
use oberon_ast::statements::Stmt;
use oberon_tokens::token::TokenKind;
use oberon_tokens::Located;
use std::collections::HashSet;
use tracing::debug;

impl Parsable for FunctionDefinition {
    const NON_TERMINAL: &'static str = "function definition";

    fn parse(parser: &mut Parser<'_>) -> ParseResult<Self> {
        let keyword = parser.expect(&TokenKind::Function)?;
        let (name, _) = parser.expect_identifier()?;
        parser.expect(&TokenKind::LParen)?;
        let mut parameters: Vec<Parameter> = vec![];
        if !parser.check(&TokenKind::RParen)? {
            let mut seen = HashSet::new();
            loop {
                let parameter = parser.parse::<Parameter>()?;
                if !seen.insert(parameter.name().to_string()) {
                    return Err(parser.error_at(
                        ErrorKind::DuplicateParameter(parameter.name().to_string()),
                        parameter.location().clone(),
                    ));
                }
                parameters.push(parameter);
                if parser.consume_if(|t| t.kind() == &TokenKind::Comma)?.is_none() {
                    break;
                }
            }
        }
        parser.expect(&TokenKind::RParen)?;

        let body = parser.parse::<Block>()?;
        debug!(
            "parsed function {name} with {} parameters and {} statements",
            parameters.len(),
            body.statements().len()
        );
        Ok(FunctionDefinition::new(
            name,
            parameters,
            body,
            keyword.location().clone(),
        ))
    }
}

impl Parsable for Parameter {
    const NON_TERMINAL: &'static str = "parameter";

    fn parse(parser: &mut Parser<'_>) -> ParseResult<Self> {
        let (name, location) = parser.expect_identifier()?;
        Ok(Parameter::new(name, location))
    }
}

impl Parsable for Block {
    const NON_TERMINAL: &'static str = "block";

    fn parse(parser: &mut Parser<'_>) -> ParseResult<Self> {
        let open = parser.expect(&TokenKind::LCurly)?;
        let mut statements = vec![];
        while let Some(stmt) = parser.parse_opt::<Stmt>()? {
            statements.push(stmt);
        }
        parser.expect(&TokenKind::RCurly)?;
        Ok(Block::new(statements, open.location().clone()))
    }
}
