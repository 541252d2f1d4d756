use crate::lexer::LexError;
use itertools::Itertools as _;
use oberon_tokens::{Diagnostic, DiagnosticKind, DiagnosticSource, Located, LocatedError, SourceLocation};
use std::fmt::{Display, Formatter};

/// Represents an error occurring during parsing
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub struct ParseError {
    error: LocatedError<ErrorKind>,
    context: Vec<&'static str>,
}

impl ParseError {
    /// Creates a new error
    pub fn new(
        kind: ErrorKind,
        location: SourceLocation,
        context: impl IntoIterator<Item = &'static str>,
    ) -> Self {
        Self {
            error: LocatedError::new(kind, location),
            context: context.into_iter().collect(),
        }
    }

    pub fn error_kind(&self) -> &ErrorKind {
        self.error.error()
    }

    /// The non-terminals that were being parsed when this error occurred, outermost first
    pub fn context(&self) -> &[&'static str] {
        &self.context
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)?;
        if !self.context.is_empty() {
            write!(f, " (while parsing {})", self.context.iter().join(" > "))?;
        }
        Ok(())
    }
}

impl Located for ParseError {
    fn location(&self) -> &SourceLocation {
        self.error.location()
    }
}

impl Diagnostic for ParseError {
    fn kind(&self) -> DiagnosticKind {
        self.error.kind()
    }

    fn message(&self) -> String {
        self.error.message()
    }
}

/// [ParseError] kind
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ErrorKind {
    #[error("expected {expected}, found {found}")]
    ExpectedToken { expected: String, found: String },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String },
    #[error("duplicate parameter `{0}`")]
    DuplicateParameter(String),
    #[error("invalid assignment target, only a variable can be assigned to")]
    InvalidAssignmentTarget,
    #[error("attempting to continue parsing but parser was poisoned")]
    ParserPoisoned,
    #[error("nested more than {0} levels deep")]
    NestingTooDeep(usize),
}

impl ErrorKind {
    pub fn expected_token(expected: impl Display, found: impl Display) -> Self {
        Self::ExpectedToken {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    pub fn unexpected_eof(expected: impl Display) -> Self {
        Self::UnexpectedEof {
            expected: expected.to_string(),
        }
    }
}

impl DiagnosticSource for ErrorKind {
    const KIND: DiagnosticKind = DiagnosticKind::Parse;
}

/// Any error that ends the parsing of a unit
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnitError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Located for UnitError {
    fn location(&self) -> &SourceLocation {
        match self {
            UnitError::Lex(e) => e.location(),
            UnitError::Parse(e) => e.location(),
        }
    }
}

impl Diagnostic for UnitError {
    fn kind(&self) -> DiagnosticKind {
        match self {
            UnitError::Lex(e) => e.kind(),
            UnitError::Parse(e) => Diagnostic::kind(e),
        }
    }

    fn message(&self) -> String {
        match self {
            UnitError::Lex(e) => e.message(),
            UnitError::Parse(e) => e.message(),
        }
    }
}

pub type ParseResult<T = ()> = Result<T, UnitError>;
