//! Dumps the tree in an indented, human readable form

use crate::block::Block;
use crate::error::VisitResult;
use crate::expr::{BinaryExpr, CallExpr, IdentifierExpr, LiteralExpr, UnaryExpr};
use crate::function::{FunctionDefinition, Parameter};
use crate::statements::{AssignStmt, ExprStmt, IfStmt, ReturnStmt, VarDeclStmt, WhileStmt};
use crate::visitor::*;
use itertools::Itertools as _;
use oberon_tokens::Located;
use std::fmt::Arguments;
use std::io::Write;

/// A [Visitor] that writes one line per node, indented by depth.
///
/// ```text
/// FunctionDefinition add(x, y)
///   Parameter x
///   Parameter y
///   Block
///     Return
///       Binary +
///         Identifier x
///         Identifier y
/// ```
#[derive(Debug)]
pub struct AstPrinter<W: Write> {
    out: W,
    depth: usize,
    indent: usize,
    show_locations: bool,
}

impl<W: Write> AstPrinter<W> {
    /// Creates a new printer writing into `out`
    pub fn new(out: W) -> Self {
        Self {
            out,
            depth: 0,
            indent: 2,
            show_locations: false,
        }
    }

    /// Sets how many spaces each level of nesting is indented by
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Appends ` @ file:line:column` to every line
    pub fn show_locations(mut self, show: bool) -> Self {
        self.show_locations = show;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, node: &impl Located, args: Arguments<'_>) -> VisitResult {
        write!(self.out, "{:width$}{args}", "", width = self.depth * self.indent)?;
        if self.show_locations {
            write!(self.out, " @ {}", node.location())?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn nested<F>(&mut self, func: F) -> VisitResult
    where
        F: FnOnce(&mut Self) -> VisitResult,
    {
        self.depth += 1;
        let ret = func(self);
        self.depth -= 1;
        ret
    }
}

impl<W: Write> Visitor for AstPrinter<W> {
    fn visit_function_definition(&mut self, function: &FunctionDefinition) -> VisitResult {
        let parameters = function.parameters().iter().map(Parameter::name).join(", ");
        self.line(
            function,
            format_args!("FunctionDefinition {}({parameters})", function.name()),
        )?;
        self.nested(|p| walk_function_definition(p, function))
    }

    fn visit_parameter(&mut self, parameter: &Parameter) -> VisitResult {
        self.line(parameter, format_args!("Parameter {}", parameter.name()))
    }

    fn visit_block(&mut self, block: &Block) -> VisitResult {
        self.line(block, format_args!("Block"))?;
        self.nested(|p| walk_block(p, block))
    }

    fn visit_var_decl(&mut self, decl: &VarDeclStmt) -> VisitResult {
        self.line(decl, format_args!("VariableDeclaration {}", decl.name()))?;
        self.nested(|p| walk_var_decl(p, decl))
    }

    fn visit_assign(&mut self, assign: &AssignStmt) -> VisitResult {
        self.line(assign, format_args!("Assignment {}", assign.target()))?;
        self.nested(|p| walk_assign(p, assign))
    }

    fn visit_if_stmt(&mut self, if_stmt: &IfStmt) -> VisitResult {
        self.line(if_stmt, format_args!("If"))?;
        self.nested(|p| walk_if_stmt(p, if_stmt))
    }

    fn visit_while_stmt(&mut self, while_stmt: &WhileStmt) -> VisitResult {
        self.line(while_stmt, format_args!("While"))?;
        self.nested(|p| walk_while_stmt(p, while_stmt))
    }

    fn visit_return_stmt(&mut self, return_stmt: &ReturnStmt) -> VisitResult {
        self.line(return_stmt, format_args!("Return"))?;
        self.nested(|p| walk_return_stmt(p, return_stmt))
    }

    fn visit_expr_stmt(&mut self, expr_stmt: &ExprStmt) -> VisitResult {
        self.line(expr_stmt, format_args!("ExpressionStatement"))?;
        self.nested(|p| walk_expr_stmt(p, expr_stmt))
    }

    fn visit_literal(&mut self, literal: &LiteralExpr) -> VisitResult {
        self.line(literal, format_args!("Literal {}", literal.value()))
    }

    fn visit_identifier(&mut self, identifier: &IdentifierExpr) -> VisitResult {
        self.line(identifier, format_args!("Identifier {}", identifier.name()))
    }

    fn visit_unary(&mut self, unary: &UnaryExpr) -> VisitResult {
        self.line(unary, format_args!("Unary {}", unary.op()))?;
        self.nested(|p| walk_unary(p, unary))
    }

    fn visit_binary(&mut self, binary: &BinaryExpr) -> VisitResult {
        self.line(binary, format_args!("Binary {}", binary.op()))?;
        self.nested(|p| walk_binary(p, binary))
    }

    fn visit_call(&mut self, call: &CallExpr) -> VisitResult {
        self.line(call, format_args!("Call"))?;
        self.nested(|p| walk_call(p, call))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{BinOp, Expr, Literal};
    use crate::statements::Stmt;
    use crate::traverse;
    use oberon_tokens::SourceLocation;

    fn loc(line: usize, column: usize) -> SourceLocation {
        SourceLocation::new("add.ob", line, column)
    }

    fn add_function() -> FunctionDefinition {
        let body = Block::new(
            [Stmt::Return(ReturnStmt::new(
                Expr::Binary(BinaryExpr::new(
                    Expr::Identifier(IdentifierExpr::new("x", loc(1, 29))),
                    BinOp::Add,
                    Expr::Identifier(IdentifierExpr::new("y", loc(1, 33))),
                    loc(1, 31),
                )),
                loc(1, 22),
            ))],
            loc(1, 20),
        );
        FunctionDefinition::new(
            "add",
            [Parameter::new("x", loc(1, 14)), Parameter::new("y", loc(1, 17))],
            body,
            loc(1, 1),
        )
    }

    #[test]
    fn test_print_tree() {
        let mut printer = AstPrinter::new(Vec::new());
        traverse(&mut printer, &[add_function()]).unwrap();
        let printed = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(
            printed,
            "FunctionDefinition add(x, y)\n\
             \x20 Parameter x\n\
             \x20 Parameter y\n\
             \x20 Block\n\
             \x20   Return\n\
             \x20     Binary +\n\
             \x20       Identifier x\n\
             \x20       Identifier y\n"
        );
    }

    #[test]
    fn test_print_with_locations() {
        let function = FunctionDefinition::new(
            "f",
            [],
            Block::new(
                [Stmt::Expr(ExprStmt::new(
                    Expr::Literal(LiteralExpr::new(Literal::Integer(1), loc(2, 5))),
                    loc(2, 5),
                ))],
                loc(1, 14),
            ),
            loc(1, 1),
        );
        let mut printer = AstPrinter::new(Vec::new()).indent(1).show_locations(true);
        traverse(&mut printer, &[function]).unwrap();
        let printed = String::from_utf8(printer.into_inner()).unwrap();
        let lines = printed.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "FunctionDefinition f() @ add.ob:1:1");
        assert_eq!(lines[1], " Block @ add.ob:1:14");
        assert_eq!(lines[2], "  ExpressionStatement @ add.ob:2:5");
        assert_eq!(lines[3], "   Literal 1 @ add.ob:2:5");
    }
}
