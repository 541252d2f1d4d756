//! Statements

use crate::block::Block;
use crate::error::{NodeLevel, VisitResult};
use crate::expr::Expr;
use crate::visitor::Visitor;
use oberon_tokens::{Located, SourceLocation};

/// A statement
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VarDecl(VarDeclStmt),
    Assign(AssignStmt),
    If(IfStmt),
    While(WhileStmt),
    Return(ReturnStmt),
    Expr(ExprStmt),
}

impl Stmt {
    /// Dispatches to the [Visitor] operation for this variant.
    ///
    /// A failure that isn't already attributed to a deeper node is attributed to this statement.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult {
        let result = match self {
            Stmt::VarDecl(s) => visitor.visit_var_decl(s),
            Stmt::Assign(s) => visitor.visit_assign(s),
            Stmt::If(s) => visitor.visit_if_stmt(s),
            Stmt::While(s) => visitor.visit_while_stmt(s),
            Stmt::Return(s) => visitor.visit_return_stmt(s),
            Stmt::Expr(s) => visitor.visit_expr_stmt(s),
        };
        result.map_err(|e| e.attribute(NodeLevel::Statement, self.location()))
    }
}

impl Located for Stmt {
    fn location(&self) -> &SourceLocation {
        match self {
            Stmt::VarDecl(s) => s.location(),
            Stmt::Assign(s) => s.location(),
            Stmt::If(s) => s.location(),
            Stmt::While(s) => s.location(),
            Stmt::Return(s) => s.location(),
            Stmt::Expr(s) => s.location(),
        }
    }
}

/// `var name;` or `var name = initializer;`
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    location: SourceLocation,
    name: String,
    initializer: Option<Expr>,
}

impl VarDeclStmt {
    pub fn new(
        name: impl Into<String>,
        initializer: impl Into<Option<Expr>>,
        location: SourceLocation,
    ) -> Self {
        Self {
            location,
            name: name.into(),
            initializer: initializer.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn initializer(&self) -> Option<&Expr> {
        self.initializer.as_ref()
    }
}

impl Located for VarDeclStmt {
    fn location(&self) -> &SourceLocation {
        &self.location
    }
}

/// `target = value;`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    location: SourceLocation,
    target: String,
    value: Expr,
}

impl AssignStmt {
    pub fn new(target: impl Into<String>, value: Expr, location: SourceLocation) -> Self {
        Self {
            location,
            target: target.into(),
            value,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn value(&self) -> &Expr {
        &self.value
    }
}

impl Located for AssignStmt {
    fn location(&self) -> &SourceLocation {
        &self.location
    }
}

/// If statement
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    location: SourceLocation,
    condition: Expr,
    then_block: Block,
    else_block: Option<Block>,
}

impl IfStmt {
    pub fn new(
        condition: Expr,
        then_block: Block,
        else_block: impl Into<Option<Block>>,
        location: SourceLocation,
    ) -> Self {
        Self {
            location,
            condition,
            then_block,
            else_block: else_block.into(),
        }
    }

    pub fn condition(&self) -> &Expr {
        &self.condition
    }

    pub fn then_block(&self) -> &Block {
        &self.then_block
    }

    pub fn else_block(&self) -> Option<&Block> {
        self.else_block.as_ref()
    }
}

impl Located for IfStmt {
    fn location(&self) -> &SourceLocation {
        &self.location
    }
}

/// while statement
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    location: SourceLocation,
    condition: Expr,
    body: Block,
}

impl WhileStmt {
    pub fn new(condition: Expr, body: Block, location: SourceLocation) -> Self {
        Self {
            location,
            condition,
            body,
        }
    }

    pub fn condition(&self) -> &Expr {
        &self.condition
    }

    pub fn body(&self) -> &Block {
        &self.body
    }
}

impl Located for WhileStmt {
    fn location(&self) -> &SourceLocation {
        &self.location
    }
}

/// Return from a function
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    location: SourceLocation,
    value: Option<Expr>,
}

impl ReturnStmt {
    pub fn new(value: impl Into<Option<Expr>>, location: SourceLocation) -> Self {
        Self {
            location,
            value: value.into(),
        }
    }

    pub fn value(&self) -> Option<&Expr> {
        self.value.as_ref()
    }
}

impl Located for ReturnStmt {
    fn location(&self) -> &SourceLocation {
        &self.location
    }
}

/// A statement consisting of a single expression
#[derive(Debug, Clone, PartialEq)]
pub struct ExprStmt {
    location: SourceLocation,
    expr: Expr,
}

impl ExprStmt {
    pub fn new(expr: Expr, location: SourceLocation) -> Self {
        Self { location, expr }
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }
}

impl Located for ExprStmt {
    fn location(&self) -> &SourceLocation {
        &self.location
    }
}
