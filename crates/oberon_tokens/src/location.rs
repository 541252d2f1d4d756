//! A trait that can provide the [SourceLocation] of a token, node or diagnostic

use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Something that knows where in the source text it came from.
pub trait Located {
    fn location(&self) -> &SourceLocation;
}

/// A position within a named source file.
///
/// Lines and columns are both 1-based. The file name is shared, so cloning a location
/// never copies the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceLocation {
    file: Arc<str>,
    line: usize,
    column: usize,
}

impl SourceLocation {
    /// Creates a new source location
    pub fn new(file: impl Into<Arc<str>>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }

    /// The first position of a file
    pub fn start_of(file: impl Into<Arc<str>>) -> Self {
        Self::new(file, 1, 1)
    }

    /// Gets the location directly after `lexeme`, assuming `lexeme` starts at this location
    pub fn end_of(&self, lexeme: &str) -> Self {
        let mut line = self.line;
        let mut column = self.column;
        for c in lexeme.chars() {
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Self {
            file: self.file.clone(),
            line,
            column,
        }
    }

    /// Gets the file this location is from
    #[inline]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Gets the shared file name
    #[inline]
    pub fn file_name(&self) -> &Arc<str> {
        &self.file
    }

    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }
}

impl Located for SourceLocation {
    fn location(&self) -> &SourceLocation {
        self
    }
}

impl Display for SourceLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}
