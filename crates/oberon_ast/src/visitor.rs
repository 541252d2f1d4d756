//! Double dispatch traversal over the tree.
//!
//! Each node's `accept` selects the [Visitor] operation for its own variant, and each operation
//! defaults to the matching `walk_*` function which visits the children in a fixed order:
//!
//! | node                 | children, in order                          |
//! |----------------------|---------------------------------------------|
//! | function definition  | parameters, then the body block             |
//! | block                | statements                                  |
//! | `var`                | initializer                                 |
//! | assignment           | value                                       |
//! | `if`                 | condition, then block, else block           |
//! | `while`              | condition, body                             |
//! | `return`             | value                                       |
//! | unary                | operand                                     |
//! | binary               | left, right                                 |
//! | call                 | callee, arguments left to right             |
//!
//! New behavior is added by implementing [Visitor]; the node types never change.

use crate::block::Block;
use crate::error::{NodeLevel, TraversalError, VisitError};
use crate::expr::{BinaryExpr, CallExpr, IdentifierExpr, LiteralExpr, UnaryExpr};
use crate::function::{FunctionDefinition, Parameter};
use crate::statements::{AssignStmt, ExprStmt, IfStmt, ReturnStmt, VarDeclStmt, WhileStmt};
use oberon_tokens::Located;
use oberon_visitor_gen::visitor;
use tracing::trace;

visitor! {
    /// An operation over the tree, with one method per node kind.
    pub trait Visitor {
        type Err = VisitError;

        pub visit fn function_definition(v, function: &FunctionDefinition) {
            for parameter in function.parameters() {
                parameter.accept(v)?;
            }
            function.body().accept(v)
        }

        pub visit fn parameter(_v, _parameter: &Parameter) {
            Ok(())
        }

        pub visit fn block(v, block: &Block) {
            for stmt in block.statements() {
                stmt.accept(v)?;
            }
            Ok(())
        }

        pub visit fn var_decl(v, decl: &VarDeclStmt) {
            match decl.initializer() {
                Some(initializer) => initializer.accept(v),
                None => Ok(()),
            }
        }

        pub visit fn assign(v, assign: &AssignStmt) {
            assign.value().accept(v)
        }

        pub visit fn if_stmt(v, if_stmt: &IfStmt) {
            if_stmt.condition().accept(v)?;
            if_stmt.then_block().accept(v)?;
            match if_stmt.else_block() {
                Some(else_block) => else_block.accept(v),
                None => Ok(()),
            }
        }

        pub visit fn while_stmt(v, while_stmt: &WhileStmt) {
            while_stmt.condition().accept(v)?;
            while_stmt.body().accept(v)
        }

        pub visit fn return_stmt(v, return_stmt: &ReturnStmt) {
            match return_stmt.value() {
                Some(value) => value.accept(v),
                None => Ok(()),
            }
        }

        pub visit fn expr_stmt(v, expr_stmt: &ExprStmt) {
            expr_stmt.expr().accept(v)
        }

        pub visit fn literal(_v, _literal: &LiteralExpr) {
            Ok(())
        }

        pub visit fn identifier(_v, _identifier: &IdentifierExpr) {
            Ok(())
        }

        pub visit fn unary(v, unary: &UnaryExpr) {
            unary.operand().accept(v)
        }

        pub visit fn binary(v, binary: &BinaryExpr) {
            binary.left().accept(v)?;
            binary.right().accept(v)
        }

        pub visit fn call(v, call: &CallExpr) {
            call.callee().accept(v)?;
            for argument in call.arguments() {
                argument.accept(v)?;
            }
            Ok(())
        }
    }
}

/// Visits every function definition in order.
///
/// Stops at the first failure, which is returned attributed to the node that was being visited
/// when it was raised.
pub fn traverse<V: Visitor + ?Sized>(
    visitor: &mut V,
    functions: &[FunctionDefinition],
) -> Result<(), TraversalError> {
    for function in functions {
        trace!("traversing function {}", function.name());
        function
            .accept(visitor)
            .map_err(|e| e.into_traversal_error(NodeLevel::Statement, function.location()))?;
    }
    Ok(())
}
