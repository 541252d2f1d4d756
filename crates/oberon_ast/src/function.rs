//! Contains the function definition, the root node of every parsed unit

use crate::block::Block;
use crate::error::{NodeLevel, VisitResult};
use crate::statements::Stmt;
use crate::visitor::Visitor;
use oberon_tokens::{Located, SourceLocation};

/// A function definition, located at its `function` keyword.
///
/// Exclusively owns its parameters and body. Parameter names are unique within one definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDefinition {
    location: SourceLocation,
    name: String,
    parameters: Vec<Parameter>,
    body: Block,
}

impl FunctionDefinition {
    pub fn new(
        name: impl Into<String>,
        parameters: impl IntoIterator<Item = Parameter>,
        body: Block,
        location: SourceLocation,
    ) -> Self {
        Self {
            location,
            name: name.into(),
            parameters: parameters.into_iter().collect(),
            body,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn body(&self) -> &Block {
        &self.body
    }

    /// The top level statements of the body
    pub fn statements(&self) -> &[Stmt] {
        self.body.statements()
    }

    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult {
        visitor
            .visit_function_definition(self)
            .map_err(|e| e.attribute(NodeLevel::Statement, &self.location))
    }
}

impl Located for FunctionDefinition {
    fn location(&self) -> &SourceLocation {
        &self.location
    }
}

/// A named function parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    location: SourceLocation,
    name: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            location,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult {
        visitor
            .visit_parameter(self)
            .map_err(|e| e.attribute(NodeLevel::Statement, &self.location))
    }
}

impl Located for Parameter {
    fn location(&self) -> &SourceLocation {
        &self.location
    }
}
