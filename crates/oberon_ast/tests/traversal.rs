use oberon_ast::block::Block;
use oberon_ast::error::{ExpressionException, StatementException, TraversalError, VisitError, VisitResult};
use oberon_ast::expr::{
    BinOp, BinaryExpr, CallExpr, Expr, IdentifierExpr, Literal, LiteralExpr, UnaryExpr, UnaryOp,
};
use oberon_ast::function::{FunctionDefinition, Parameter};
use oberon_ast::statements::{IfStmt, ReturnStmt, Stmt, VarDeclStmt, WhileStmt};
use oberon_ast::visitor::*;
use oberon_tokens::{Diagnostic, DiagnosticKind, Located, SourceLocation};

fn loc(line: usize, column: usize) -> SourceLocation {
    SourceLocation::new("unit.ob", line, column)
}

fn ident(name: &str, line: usize, column: usize) -> Expr {
    Expr::Identifier(IdentifierExpr::new(name, loc(line, column)))
}

fn int(value: i64, line: usize, column: usize) -> Expr {
    Expr::Literal(LiteralExpr::new(Literal::Integer(value), loc(line, column)))
}

/// ```text
/// function f(a) {
///     if (a) { return 1; } else { return -a; }
/// }
/// ```
fn if_else_function() -> FunctionDefinition {
    let then_block = Block::new(
        [Stmt::Return(ReturnStmt::new(int(1, 2, 21), loc(2, 14)))],
        loc(2, 12),
    );
    let else_block = Block::new(
        [Stmt::Return(ReturnStmt::new(
            Expr::Unary(UnaryExpr::new(UnaryOp::Neg, ident("a", 2, 44), loc(2, 43))),
            loc(2, 36),
        ))],
        loc(2, 34),
    );
    FunctionDefinition::new(
        "f",
        [Parameter::new("a", loc(1, 12))],
        Block::new(
            [Stmt::If(IfStmt::new(
                ident("a", 2, 9),
                then_block,
                else_block,
                loc(2, 5),
            ))],
            loc(1, 15),
        ),
        loc(1, 1),
    )
}

/// ```text
/// function g() {
///     var x = h(1, y);
///     while (x < 3) { }
/// }
/// ```
fn call_function() -> FunctionDefinition {
    let call = Expr::Call(CallExpr::new(
        ident("h", 2, 13),
        [int(1, 2, 15), ident("y", 2, 18)],
        loc(2, 13),
    ));
    let condition = Expr::Binary(BinaryExpr::new(
        ident("x", 3, 12),
        BinOp::Lt,
        int(3, 3, 16),
        loc(3, 14),
    ));
    FunctionDefinition::new(
        "g",
        [],
        Block::new(
            [
                Stmt::VarDecl(VarDeclStmt::new("x", call, loc(2, 5))),
                Stmt::While(WhileStmt::new(condition, Block::empty(loc(3, 19)), loc(3, 5))),
            ],
            loc(1, 14),
        ),
        loc(1, 1),
    )
}

/// Records the name of every node in the order it is visited
#[derive(Default)]
struct Recorder {
    visited: Vec<String>,
}

impl Visitor for Recorder {
    fn visit_function_definition(&mut self, function: &FunctionDefinition) -> VisitResult {
        self.visited.push(format!("function {}", function.name()));
        walk_function_definition(self, function)
    }

    fn visit_parameter(&mut self, parameter: &Parameter) -> VisitResult {
        self.visited.push(format!("parameter {}", parameter.name()));
        Ok(())
    }

    fn visit_block(&mut self, block: &Block) -> VisitResult {
        self.visited.push("block".to_string());
        walk_block(self, block)
    }

    fn visit_var_decl(&mut self, decl: &VarDeclStmt) -> VisitResult {
        self.visited.push(format!("var {}", decl.name()));
        walk_var_decl(self, decl)
    }

    fn visit_if_stmt(&mut self, if_stmt: &IfStmt) -> VisitResult {
        self.visited.push("if".to_string());
        walk_if_stmt(self, if_stmt)
    }

    fn visit_while_stmt(&mut self, while_stmt: &WhileStmt) -> VisitResult {
        self.visited.push("while".to_string());
        walk_while_stmt(self, while_stmt)
    }

    fn visit_return_stmt(&mut self, return_stmt: &ReturnStmt) -> VisitResult {
        self.visited.push("return".to_string());
        walk_return_stmt(self, return_stmt)
    }

    fn visit_literal(&mut self, literal: &LiteralExpr) -> VisitResult {
        self.visited.push(format!("literal {}", literal.value()));
        Ok(())
    }

    fn visit_identifier(&mut self, identifier: &IdentifierExpr) -> VisitResult {
        self.visited.push(format!("identifier {}", identifier.name()));
        Ok(())
    }

    fn visit_unary(&mut self, unary: &UnaryExpr) -> VisitResult {
        self.visited.push(format!("unary {}", unary.op()));
        walk_unary(self, unary)
    }

    fn visit_binary(&mut self, binary: &BinaryExpr) -> VisitResult {
        self.visited.push(format!("binary {}", binary.op()));
        walk_binary(self, binary)
    }

    fn visit_call(&mut self, call: &CallExpr) -> VisitResult {
        self.visited.push("call".to_string());
        walk_call(self, call)
    }
}

#[test_log::test]
fn if_else_visits_condition_then_else() {
    let mut recorder = Recorder::default();
    oberon_ast::traverse(&mut recorder, &[if_else_function()]).unwrap();
    assert_eq!(
        recorder.visited,
        [
            "function f",
            "parameter a",
            "block",
            "if",
            "identifier a",
            "block",
            "return",
            "literal 1",
            "block",
            "return",
            "unary -",
            "identifier a",
        ]
    );
}

#[test_log::test]
fn call_visits_callee_then_arguments() {
    let mut recorder = Recorder::default();
    oberon_ast::traverse(&mut recorder, &[call_function()]).unwrap();
    assert_eq!(
        recorder.visited,
        [
            "function g",
            "block",
            "var x",
            "call",
            "identifier h",
            "literal 1",
            "identifier y",
            "while",
            "binary <",
            "identifier x",
            "literal 3",
            "block",
        ]
    );
}

#[test_log::test]
fn traversal_is_repeatable() {
    let functions = [if_else_function(), call_function()];
    let mut first = Recorder::default();
    let mut second = Recorder::default();
    oberon_ast::traverse(&mut first, &functions).unwrap();
    oberon_ast::traverse(&mut second, &functions).unwrap();
    assert_eq!(first.visited, second.visited);
}

#[test_log::test]
fn overridden_operation_can_skip_children() {
    struct SkipBlocks(usize);
    impl Visitor for SkipBlocks {
        fn visit_block(&mut self, _block: &Block) -> VisitResult {
            Ok(())
        }

        fn visit_identifier(&mut self, _identifier: &IdentifierExpr) -> VisitResult {
            self.0 += 1;
            Ok(())
        }
    }

    let mut visitor = SkipBlocks(0);
    oberon_ast::traverse(&mut visitor, &[if_else_function(), call_function()]).unwrap();
    assert_eq!(visitor.0, 0);
}

/// Fails on the first identifier with the given name
struct FailOnIdentifier(&'static str);

impl Visitor for FailOnIdentifier {
    fn visit_identifier(&mut self, identifier: &IdentifierExpr) -> VisitResult {
        if identifier.name() == self.0 {
            Err(VisitError::raise(format!("undefined name {}", identifier.name())))
        } else {
            Ok(())
        }
    }
}

#[test_log::test]
fn expression_failure_is_located_at_expression() {
    let error = oberon_ast::traverse(&mut FailOnIdentifier("y"), &[call_function()]).unwrap_err();
    assert_eq!(
        error,
        TraversalError::Expression(ExpressionException::new("undefined name y", loc(2, 18)))
    );
    assert_eq!(error.kind(), DiagnosticKind::Expression);
    assert_eq!(error.to_string(), "unit.ob:2:18: undefined name y");
}

#[test_log::test]
fn statement_failure_is_located_at_statement() {
    struct NoReturns;
    impl Visitor for NoReturns {
        fn visit_return_stmt(&mut self, _return_stmt: &ReturnStmt) -> VisitResult {
            Err(VisitError::raise("return not allowed"))
        }
    }

    let error = oberon_ast::traverse(&mut NoReturns, &[if_else_function()]).unwrap_err();
    assert_eq!(
        error,
        TraversalError::Statement(StatementException::new("return not allowed", loc(2, 14)))
    );
    assert_eq!(error.kind(), DiagnosticKind::Statement);
}

#[test_log::test]
fn parameter_failure_is_statement_level() {
    struct NoParameters;
    impl Visitor for NoParameters {
        fn visit_parameter(&mut self, parameter: &Parameter) -> VisitResult {
            Err(VisitError::raise(format!("unexpected parameter {}", parameter.name())))
        }
    }

    let error = oberon_ast::traverse(&mut NoParameters, &[if_else_function()]).unwrap_err();
    assert_eq!(error.kind(), DiagnosticKind::Statement);
    assert_eq!(error.location(), &loc(1, 12));
}

#[test_log::test]
fn traversal_stops_at_first_failure() {
    struct CountingFailure {
        functions: Vec<String>,
    }
    impl Visitor for CountingFailure {
        fn visit_function_definition(&mut self, function: &FunctionDefinition) -> VisitResult {
            self.functions.push(function.name().to_string());
            walk_function_definition(self, function)
        }

        fn visit_identifier(&mut self, _identifier: &IdentifierExpr) -> VisitResult {
            Err(VisitError::raise("stop"))
        }
    }

    let mut visitor = CountingFailure { functions: vec![] };
    let error =
        oberon_ast::traverse(&mut visitor, &[if_else_function(), call_function()]).unwrap_err();
    assert_eq!(visitor.functions, ["f"]);
    assert_eq!(error.location(), &loc(2, 9));
}
