//! The diagnostic shape shared by every phase of the front end

use crate::location::{Located, SourceLocation};
use std::fmt::{Debug, Display, Formatter};

/// Which phase raised a diagnostic
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// malformed character stream
    Lex,
    /// grammar violation
    Parse,
    /// raised by a visitor while on a statement level node
    Statement,
    /// raised by a visitor while on an expression level node
    Expression,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::Lex => "lex",
            DiagnosticKind::Parse => "parse",
            DiagnosticKind::Statement => "statement",
            DiagnosticKind::Expression => "expression",
        }
    }
}

impl Display for DiagnosticKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured error record of `{kind, file, line, column, message}`.
///
/// Every error type in the front end implements this, so one renderer can format any of them.
pub trait Diagnostic: Located + std::error::Error {
    /// The phase this diagnostic came from
    fn kind(&self) -> DiagnosticKind;

    /// The message, without location information
    fn message(&self) -> String;
}

/// Associates an error kind with the phase that raises it
pub trait DiagnosticSource: Display + Debug {
    const KIND: DiagnosticKind;
}

/// An error with a location
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub struct LocatedError<E> {
    error: E,
    location: SourceLocation,
}

impl<E> LocatedError<E> {
    pub fn new(error: E, location: SourceLocation) -> Self {
        Self { error, location }
    }

    /// Gets the error kind
    pub fn error(&self) -> &E {
        &self.error
    }
}

impl<E> Located for LocatedError<E> {
    fn location(&self) -> &SourceLocation {
        &self.location
    }
}

impl<E: Display> Display for LocatedError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.location, self.error)
    }
}

impl<E: DiagnosticSource> Diagnostic for LocatedError<E> {
    fn kind(&self) -> DiagnosticKind {
        E::KIND
    }

    fn message(&self) -> String {
        self.error.to_string()
    }
}
