//! Builds the syntax tree from a token stream

use crate::lexer::Lexer;
use oberon_ast::function::FunctionDefinition;
use oberon_tokens::token::{Token, TokenKind};
use oberon_tokens::{Located, SourceLocation};
use tracing::trace;

mod error;
mod expr;
mod function;
mod statement;
mod traits;

pub use error::{ErrorKind, ParseError, ParseResult, UnitError};
pub use traits::{CouldParse, Parsable};

/// How deep non-terminals and unary operators may nest before parsing gives up
pub const MAX_NESTING: usize = 64;

#[derive(Debug, Default)]
enum State {
    #[default]
    Uninit,
    Lookahead(Token),
    Eof,
    Poisoned,
}

/// A predictive parser with a single token of lookahead.
///
/// Tokens are pulled from the lexer only when the parser needs to look at them, and the first
/// error of any kind ends the parse. After a lexical error the parser is poisoned and pulls
/// nothing more.
///
/// # Examples
/// ```
/// # use oberon_ast_parsing::lexer::Lexer;
/// # use oberon_ast_parsing::parser::Parser;
/// let mut parser = Parser::new(Lexer::new("example.ob", "function main() { }"));
/// let functions = parser.parse_unit().unwrap();
/// assert_eq!(functions[0].name(), "main");
/// ```
#[derive(Debug)]
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    state: State,
    last_end: Option<SourceLocation>,
    non_terminals: Vec<&'static str>,
    depth: usize,
}

impl<'src> Parser<'src> {
    /// Creates a new parser with a given lexer
    pub fn new(lexer: Lexer<'src>) -> Self {
        Self {
            lexer,
            state: State::default(),
            last_end: None,
            non_terminals: vec![],
            depth: 0,
        }
    }

    /// Parses function definitions until the end of input
    pub fn parse_unit(&mut self) -> ParseResult<Vec<FunctionDefinition>> {
        let mut functions = vec![];
        while self.peek()?.is_some() {
            functions.push(self.parse::<FunctionDefinition>()?);
        }
        Ok(functions)
    }

    fn next_token(&mut self) -> ParseResult {
        match self.lexer.next() {
            None => {
                self.state = State::Eof;
            }
            Some(Ok(token)) => {
                self.state = State::Lookahead(token);
            }
            Some(Err(e)) => {
                self.state = State::Poisoned;
                return Err(e.into());
            }
        }
        Ok(())
    }

    /// Peeks the current lookahead, or `None` at the end of input
    pub fn peek(&mut self) -> ParseResult<Option<&Token>> {
        if matches!(self.state, State::Uninit) {
            self.next_token()?;
        }
        match &self.state {
            State::Lookahead(token) => Ok(Some(token)),
            State::Eof => Ok(None),
            State::Uninit | State::Poisoned => Err(self.error(ErrorKind::ParserPoisoned)),
        }
    }

    /// Checks if the lookahead is of the given kind
    pub fn check(&mut self, kind: &TokenKind) -> ParseResult<bool> {
        Ok(self.peek()?.is_some_and(|token| token.kind() == kind))
    }

    /// Gets the location of the lookahead, or of the end of input
    pub fn peek_location(&mut self) -> ParseResult<SourceLocation> {
        match self.peek()? {
            Some(token) => Ok(token.location().clone()),
            None => Ok(self.end_location()),
        }
    }

    /// Consumes the lookahead, returning `None` at the end of input
    pub fn consume(&mut self) -> ParseResult<Option<Token>> {
        if matches!(self.state, State::Uninit) {
            self.next_token()?;
        }
        let token = match std::mem::replace(&mut self.state, State::Poisoned) {
            State::Lookahead(token) => {
                self.last_end = Some(token.end());
                self.state = State::Uninit;
                token
            }
            State::Eof => {
                self.state = State::Eof;
                return Ok(None);
            }
            State::Uninit | State::Poisoned => return Err(self.error(ErrorKind::ParserPoisoned)),
        };
        trace!("consumed {token:?}");
        Ok(Some(token))
    }

    /// Consumes the lookahead if the predicate matches
    pub fn consume_if<F>(&mut self, predicate: F) -> ParseResult<Option<Token>>
    where
        F: FnOnce(&Token) -> bool,
    {
        let should_consume = self.peek()?.is_some_and(predicate);
        if should_consume {
            self.consume()
        } else {
            Ok(None)
        }
    }

    /// Consumes a token of the given kind, or fails naming it as expected
    pub fn expect(&mut self, kind: &TokenKind) -> ParseResult<Token> {
        match self.consume_if(|token| token.kind() == kind)? {
            Some(token) => Ok(token),
            None => Err(self.unexpected(kind)),
        }
    }

    /// Consumes an identifier, returning its name and location
    pub fn expect_identifier(&mut self) -> ParseResult<(String, SourceLocation)> {
        let token = self.consume_if(|token| matches!(token.kind(), TokenKind::Identifier(_)))?;
        match token {
            Some(token) => {
                let location = token.location().clone();
                match token.into_kind() {
                    TokenKind::Identifier(name) => Ok((name, location)),
                    _ => unreachable!("only identifiers are consumed"),
                }
            }
            None => Err(self.unexpected("identifier")),
        }
    }

    /// Gets if the last peek found the end of input
    pub fn eof(&self) -> bool {
        matches!(self.state, State::Eof)
    }

    /// Wrapper function for parsing a non-terminal, tracking it for error messages
    pub fn parse<P: Parsable>(&mut self) -> ParseResult<P> {
        trace!("starting parsing {} state={:?}", P::NON_TERMINAL, self.state);
        self.nested(|parser| {
            parser.non_terminals.push(P::NON_TERMINAL);
            let result = P::parse(parser);
            if result.is_ok() {
                parser.non_terminals.pop();
            }
            result
        })
    }

    /// Runs `func` one nesting level deeper, failing at the lookahead once [MAX_NESTING] is
    /// exceeded
    pub fn nested<T, F>(&mut self, func: F) -> ParseResult<T>
    where
        F: FnOnce(&mut Self) -> ParseResult<T>,
    {
        if self.depth >= MAX_NESTING {
            let location = self.peek_location()?;
            return Err(self.error_at(ErrorKind::NestingTooDeep(MAX_NESTING), location));
        }
        self.depth += 1;
        let result = func(self);
        self.depth -= 1;
        result
    }

    /// Wrapper function for parsing an optional non-terminal
    pub fn parse_opt<P: CouldParse>(&mut self) -> ParseResult<Option<P>> {
        if P::could_parse(self)? {
            Ok(Some(self.parse()?))
        } else {
            Ok(None)
        }
    }

    /// The error for a lookahead that doesn't match `expected`
    pub fn unexpected(&mut self, expected: impl std::fmt::Display) -> UnitError {
        let kind = match self.peek() {
            Ok(Some(found)) => ErrorKind::expected_token(expected, found.kind()),
            Ok(None) => ErrorKind::unexpected_eof(expected),
            Err(e) => return e,
        };
        self.error(kind)
    }

    /// Creates an error located at the lookahead.
    ///
    /// At the end of input the error is located directly after the last consumed token, or at the
    /// start of the file if no token was consumed.
    pub fn error(&self, kind: ErrorKind) -> UnitError {
        let location = match &self.state {
            State::Lookahead(token) => token.location().clone(),
            _ => self.end_location(),
        };
        self.error_at(kind, location)
    }

    /// Creates an error at a given location
    pub fn error_at(&self, kind: ErrorKind, location: SourceLocation) -> UnitError {
        ParseError::new(kind, location, self.non_terminals.iter().copied()).into()
    }

    fn end_location(&self) -> SourceLocation {
        self.last_end
            .clone()
            .unwrap_or_else(|| SourceLocation::start_of(self.lexer.file().clone()))
    }
}

impl<'src> From<Lexer<'src>> for Parser<'src> {
    fn from(value: Lexer<'src>) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use test_log::test;

    pub fn test_parser<F>(s: &str, callback: F)
    where
        F: FnOnce(&mut Parser<'_>),
    {
        let mut parser = Parser::new(Lexer::new("test.ob", s));
        callback(&mut parser)
    }

    #[test]
    fn test_consume() {
        test_parser("var x = 1.0;", |parser| {
            let consumed_token = parser.consume().unwrap().unwrap();
            assert_eq!(consumed_token.kind(), &TokenKind::Var);
            assert_eq!(consumed_token.location(), &SourceLocation::new("test.ob", 1, 1));
            let token = parser.peek().unwrap().unwrap();
            assert_eq!(token.kind(), &TokenKind::Identifier("x".to_string()));
            assert_eq!(token.location(), &SourceLocation::new("test.ob", 1, 5));
        });
    }

    #[test]
    fn test_consume_if() {
        test_parser("var x = 1.0;", |parser| {
            assert!(parser
                .consume_if(|tok| tok.kind() == &TokenKind::Star)
                .unwrap()
                .is_none());
            assert!(parser
                .consume_if(|tok| tok.kind() == &TokenKind::Var)
                .unwrap()
                .is_some());
        });
    }

    #[test]
    fn test_eof_error_after_last_token() {
        test_parser("var x", |parser| {
            parser.expect(&TokenKind::Var).unwrap();
            parser.expect_identifier().unwrap();
            assert!(parser.peek().unwrap().is_none());
            assert!(parser.eof());
            let error = parser.expect(&TokenKind::SemiColon).unwrap_err();
            let UnitError::Parse(error) = error else {
                panic!("expected parse error, got {error:?}");
            };
            assert_eq!(error.error_kind(), &ErrorKind::unexpected_eof("`;`"));
            assert_eq!(error.location(), &SourceLocation::new("test.ob", 1, 6));
        });
    }

    #[test]
    fn test_empty_input_errors_at_start() {
        test_parser("", |parser| {
            let error = parser.expect(&TokenKind::Function).unwrap_err();
            assert_eq!(error.location(), &SourceLocation::new("test.ob", 1, 1));
        });
    }

    #[test]
    fn test_poisoned_after_lex_error() {
        test_parser("var $ x", |parser| {
            parser.consume().unwrap();
            assert!(matches!(parser.peek(), Err(UnitError::Lex(_))));
            let UnitError::Parse(error) = parser.peek().unwrap_err() else {
                panic!("expected parse error");
            };
            assert_eq!(error.error_kind(), &ErrorKind::ParserPoisoned);
        });
    }
}
