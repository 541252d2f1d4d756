use crate::error::{NodeLevel, VisitResult};
use crate::statements::Stmt;
use crate::visitor::Visitor;
use oberon_tokens::{Located, SourceLocation};

/// A block of statements, located at its opening brace
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    location: SourceLocation,
    statements: Vec<Stmt>,
}

impl Block {
    pub fn new(statements: impl IntoIterator<Item = Stmt>, location: SourceLocation) -> Self {
        Self {
            location,
            statements: statements.into_iter().collect(),
        }
    }

    /// Creates a new empty block
    pub const fn empty(location: SourceLocation) -> Self {
        Self {
            location,
            statements: Vec::new(),
        }
    }

    pub fn statements(&self) -> &[Stmt] {
        &self.statements
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult {
        visitor
            .visit_block(self)
            .map_err(|e| e.attribute(NodeLevel::Statement, &self.location))
    }
}

impl Located for Block {
    fn location(&self) -> &SourceLocation {
        &self.location
    }
}
