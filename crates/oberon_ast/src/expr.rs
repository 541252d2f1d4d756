//! Expressions

use crate::error::{NodeLevel, VisitResult};
use crate::visitor::Visitor;
use oberon_tokens::{Located, SourceLocation};
use std::fmt::{Display, Formatter};

/// An expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralExpr),
    Identifier(IdentifierExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Call(CallExpr),
}

impl Expr {
    /// Dispatches to the [Visitor] operation for this variant.
    ///
    /// A failure that isn't already attributed to a deeper node is attributed to this expression.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult {
        let result = match self {
            Expr::Literal(e) => visitor.visit_literal(e),
            Expr::Identifier(e) => visitor.visit_identifier(e),
            Expr::Unary(e) => visitor.visit_unary(e),
            Expr::Binary(e) => visitor.visit_binary(e),
            Expr::Call(e) => visitor.visit_call(e),
        };
        result.map_err(|e| e.attribute(NodeLevel::Expression, self.location()))
    }

    /// Gets the identifier this expression names, if it is a bare identifier
    pub fn as_identifier(&self) -> Option<&IdentifierExpr> {
        match self {
            Expr::Identifier(id) => Some(id),
            _ => None,
        }
    }
}

impl Located for Expr {
    fn location(&self) -> &SourceLocation {
        match self {
            Expr::Literal(e) => e.location(),
            Expr::Identifier(e) => e.location(),
            Expr::Unary(e) => e.location(),
            Expr::Binary(e) => e.location(),
            Expr::Call(e) => e.location(),
        }
    }
}

/// A literal value
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Integer(i) => write!(f, "{i}"),
            Literal::Float(float) => write!(f, "{float:?}"),
            Literal::String(s) => write!(f, "{s:?}"),
            Literal::Boolean(b) => write!(f, "{b}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    location: SourceLocation,
    value: Literal,
}

impl LiteralExpr {
    pub fn new(value: Literal, location: SourceLocation) -> Self {
        Self { location, value }
    }

    pub fn value(&self) -> &Literal {
        &self.value
    }
}

impl Located for LiteralExpr {
    fn location(&self) -> &SourceLocation {
        &self.location
    }
}

/// A reference to a named variable, parameter or function
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierExpr {
    location: SourceLocation,
    name: String,
}

impl IdentifierExpr {
    pub fn new(name: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            location,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Located for IdentifierExpr {
    fn location(&self) -> &SourceLocation {
        &self.location
    }
}

/// A unary operation
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `-`
    Neg,
    /// `!`
    Not,
}

impl UnaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
        }
    }
}

impl Display for UnaryOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A prefix operator applied to one operand, located at the operator
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    location: SourceLocation,
    op: UnaryOp,
    operand: Box<Expr>,
}

impl UnaryExpr {
    pub fn new(op: UnaryOp, operand: Expr, location: SourceLocation) -> Self {
        Self {
            location,
            op,
            operand: Box::new(operand),
        }
    }

    pub fn op(&self) -> UnaryOp {
        self.op
    }

    pub fn operand(&self) -> &Expr {
        &self.operand
    }
}

impl Located for UnaryExpr {
    fn location(&self) -> &SourceLocation {
        &self.location
    }
}

/// A binary operation
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinOp {
    Mul,
    Div,
    Rem,
    Add,
    Sub,
    Lt,
    Lte,
    Gt,
    Gte,
    Eq,
    Neq,
    And,
    Or,
}

impl BinOp {
    /// The binding strength of this operator, higher binds tighter
    pub fn precedence(&self) -> u8 {
        match self {
            BinOp::Or => 1,
            BinOp::And => 2,
            BinOp::Eq | BinOp::Neq => 3,
            BinOp::Lt | BinOp::Lte | BinOp::Gt | BinOp::Gte => 4,
            BinOp::Add | BinOp::Sub => 5,
            BinOp::Mul | BinOp::Div | BinOp::Rem => 6,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Rem => "%",
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Lt => "<",
            BinOp::Lte => "<=",
            BinOp::Gt => ">",
            BinOp::Gte => ">=",
            BinOp::Eq => "==",
            BinOp::Neq => "!=",
            BinOp::And => "&&",
            BinOp::Or => "||",
        }
    }
}

impl Display for BinOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An infix operation, located at the operator
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    location: SourceLocation,
    op: BinOp,
    left: Box<Expr>,
    right: Box<Expr>,
}

impl BinaryExpr {
    pub fn new(left: Expr, op: BinOp, right: Expr, location: SourceLocation) -> Self {
        Self {
            location,
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn op(&self) -> BinOp {
        self.op
    }

    pub fn left(&self) -> &Expr {
        &self.left
    }

    pub fn right(&self) -> &Expr {
        &self.right
    }
}

impl Located for BinaryExpr {
    fn location(&self) -> &SourceLocation {
        &self.location
    }
}

/// A call expression, located at the callee
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    location: SourceLocation,
    callee: Box<Expr>,
    arguments: Vec<Expr>,
}

impl CallExpr {
    pub fn new(
        callee: Expr,
        arguments: impl IntoIterator<Item = Expr>,
        location: SourceLocation,
    ) -> Self {
        Self {
            location,
            callee: Box::new(callee),
            arguments: arguments.into_iter().collect(),
        }
    }

    pub fn callee(&self) -> &Expr {
        &self.callee
    }

    pub fn arguments(&self) -> &[Expr] {
        &self.arguments
    }
}

impl Located for CallExpr {
    fn location(&self) -> &SourceLocation {
        &self.location
    }
}
