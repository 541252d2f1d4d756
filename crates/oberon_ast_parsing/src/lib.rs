#![doc = include_str!("../README.md")]

use crate::lexer::Lexer;
use crate::parser::Parser;
use oberon_ast::function::FunctionDefinition;
use std::sync::Arc;
use tracing::debug;

pub mod lexer;
pub mod parser;

pub use parser::{ParseError, UnitError};

/// Parses the text of one file into its function definitions, in declaration order.
///
/// Empty input, or input holding only whitespace and comments, yields no definitions.
pub fn parse_unit(file: &str, text: &str) -> Result<Vec<FunctionDefinition>, UnitError> {
    let mut parser = Parser::new(tokenize(file, text));
    let functions = parser.parse_unit()?;
    debug!("parsed {} functions from {file}", functions.len());
    Ok(functions)
}

/// Creates a lazy token stream over the text of one file
pub fn tokenize<'src>(file: impl Into<Arc<str>>, text: &'src str) -> Lexer<'src> {
    Lexer::new(file, text)
}
