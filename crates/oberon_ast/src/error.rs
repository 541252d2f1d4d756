//! Diagnostics raised while traversing the tree

use oberon_tokens::{Diagnostic, DiagnosticKind, Located, SourceLocation};
use std::fmt::Display;
use std::io;
use thiserror::Error;

/// Raised while a visitor was processing a statement level node.
///
/// Function definitions, parameters and blocks count as statement level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{location}: {message}")]
pub struct StatementException {
    location: SourceLocation,
    message: String,
}

impl StatementException {
    pub fn new(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            location,
            message: message.into(),
        }
    }
}

impl Located for StatementException {
    fn location(&self) -> &SourceLocation {
        &self.location
    }
}

impl Diagnostic for StatementException {
    fn kind(&self) -> DiagnosticKind {
        DiagnosticKind::Statement
    }

    fn message(&self) -> String {
        self.message.clone()
    }
}

/// Raised while a visitor was processing an expression level node
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{location}: {message}")]
pub struct ExpressionException {
    location: SourceLocation,
    message: String,
}

impl ExpressionException {
    pub fn new(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            location,
            message: message.into(),
        }
    }
}

impl Located for ExpressionException {
    fn location(&self) -> &SourceLocation {
        &self.location
    }
}

impl Diagnostic for ExpressionException {
    fn kind(&self) -> DiagnosticKind {
        DiagnosticKind::Expression
    }

    fn message(&self) -> String {
        self.message.clone()
    }
}

/// The diagnostic that ends a traversal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraversalError {
    #[error(transparent)]
    Statement(#[from] StatementException),
    #[error(transparent)]
    Expression(#[from] ExpressionException),
}

impl Located for TraversalError {
    fn location(&self) -> &SourceLocation {
        match self {
            TraversalError::Statement(e) => e.location(),
            TraversalError::Expression(e) => e.location(),
        }
    }
}

impl Diagnostic for TraversalError {
    fn kind(&self) -> DiagnosticKind {
        match self {
            TraversalError::Statement(e) => e.kind(),
            TraversalError::Expression(e) => e.kind(),
        }
    }

    fn message(&self) -> String {
        match self {
            TraversalError::Statement(e) => e.message(),
            TraversalError::Expression(e) => e.message(),
        }
    }
}

/// The level of the node whose `accept` attributes a failure
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum NodeLevel {
    Statement,
    Expression,
}

/// An error returned from a [Visitor](crate::visitor::Visitor) operation.
///
/// Visitors create these with [VisitError::raise]; the node being visited then attaches its
/// own location on the way out.
#[derive(Debug, Error)]
pub enum VisitError {
    /// Raised by a visitor, not yet attributed to a node
    #[error("{0}")]
    Raised(String),
    /// Attributed to the node that was active when it was raised
    #[error(transparent)]
    Attributed(#[from] TraversalError),
}

impl VisitError {
    /// Aborts the traversal with a message
    pub fn raise(message: impl Display) -> Self {
        Self::Raised(message.to_string())
    }

    /// Attributes this error to a node, unless a deeper node already claimed it
    pub(crate) fn attribute(self, level: NodeLevel, location: &SourceLocation) -> Self {
        VisitError::Attributed(self.into_traversal_error(level, location))
    }

    pub(crate) fn into_traversal_error(
        self,
        level: NodeLevel,
        location: &SourceLocation,
    ) -> TraversalError {
        match self {
            VisitError::Attributed(e) => e,
            VisitError::Raised(message) => match level {
                NodeLevel::Statement => {
                    StatementException::new(message, location.clone()).into()
                }
                NodeLevel::Expression => {
                    ExpressionException::new(message, location.clone()).into()
                }
            },
        }
    }
}

impl From<io::Error> for VisitError {
    fn from(value: io::Error) -> Self {
        VisitError::raise(value)
    }
}

/// The result of a single visitor operation
pub type VisitResult = Result<(), VisitError>;
