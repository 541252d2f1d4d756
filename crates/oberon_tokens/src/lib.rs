//! Source locations, lexical tokens and the diagnostic shape shared by the whole front end.

pub mod diagnostic;
pub mod location;
pub mod token;

pub use diagnostic::{Diagnostic, DiagnosticKind, DiagnosticSource, LocatedError};
pub use location::{Located, SourceLocation};
