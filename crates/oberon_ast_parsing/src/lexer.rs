//! Responsible with converting source text into a token stream

use crate::lexer::token_parsing::{parse_insignificant, parse_token, TokenError};
use nom::combinator::consumed;
use nom::Offset;
use oberon_tokens::token::Token;
use oberon_tokens::{DiagnosticKind, DiagnosticSource, Located, LocatedError, SourceLocation};
use std::iter::FusedIterator;
use std::sync::Arc;
use thiserror::Error;
use tracing::trace;

mod token_parsing;

/// Lazily converts the text of one file into tokens.
///
/// Tokens are produced on demand, one per call to [Iterator::next]. The stream ends at the end of
/// the text or directly after the first [LexError].
///
/// # Examples
/// ```
/// # use oberon_ast_parsing::lexer::Lexer;
/// # use oberon_tokens::token::TokenKind;
/// let kinds = Lexer::new("example.ob", "return x;")
///     .map(|token| token.map(|token| token.into_kind()))
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
/// assert_eq!(
///     kinds,
///     [TokenKind::Return, TokenKind::Identifier("x".to_string()), TokenKind::SemiColon]
/// );
/// ```
#[derive(Debug)]
pub struct Lexer<'src> {
    rest: &'src str,
    location: SourceLocation,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer over the text of `file`
    pub fn new(file: impl Into<Arc<str>>, text: &'src str) -> Self {
        Self {
            rest: text,
            location: SourceLocation::start_of(file),
            finished: false,
        }
    }

    /// The file being lexed
    pub fn file(&self) -> &Arc<str> {
        self.location.file_name()
    }

    fn advance(&mut self, rest: &'src str) {
        let offset = self.rest.offset(rest);
        self.location = self.location.end_of(&self.rest[..offset]);
        self.rest = rest;
    }

    fn error(&self, error: nom::Err<TokenError<'src>>) -> LexError {
        let error = match error {
            nom::Err::Error(e) | nom::Err::Failure(e) => e,
            nom::Err::Incomplete(_) => TokenError::new(&self.rest[self.rest.len()..], None),
        };
        let offset = self.rest.offset(error.input);
        let location = self.location.end_of(&self.rest[..offset]);
        let kind = error.kind.unwrap_or_else(|| {
            LexErrorKind::InvalidChar(error.input.chars().next().unwrap_or_default())
        });
        LexError::new(kind, location)
    }

    fn next_token(&mut self) -> LexResult<Option<Token>> {
        let (rest, ()) = parse_insignificant(self.rest).map_err(|e| self.error(e))?;
        self.advance(rest);
        if self.rest.is_empty() {
            return Ok(None);
        }

        let (rest, (lexeme, kind)) = consumed(parse_token)(self.rest).map_err(|e| self.error(e))?;
        let token = Token::new(kind, lexeme, self.location.clone());
        self.advance(rest);
        trace!("lexed {token:?} at {}", token.location());
        Ok(Some(token))
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for Lexer<'_> {}

type LexResult<T> = Result<T, LexError>;

/// A malformed character sequence, located at the offending character
pub type LexError = LocatedError<LexErrorKind>;

/// The kind of a [LexError]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexErrorKind {
    #[error("invalid character {0:?}")]
    InvalidChar(char),
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("invalid escape sequence `\\{0}`")]
    InvalidEscape(char),
    #[error("invalid number literal `{0}`")]
    InvalidNumber(String),
}

impl DiagnosticSource for LexErrorKind {
    const KIND: DiagnosticKind = DiagnosticKind::Lex;
}
