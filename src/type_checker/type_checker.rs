use log::{debug, trace};

use crate::{
    ast::{
        ast::{Expr, NodeId, Stmt},
        expressions::{BinaryExpr, CompareExpr, SymbolExpr, UnaryExpr},
        statements::{AssignmentStmt, BlockStmt, IfStmt},
    },
    errors::errors::{Error, ErrorImpl},
    symbol_table::symbol_table::SymbolTable,
    types::types::Type,
};

use super::typed_ast::TypeAnnotations;

const TYPE_MISMATCH: &str = "Type mismatch";
const CONDITION_NOT_LOGICAL: &str = "If condition must be of type logical.";

#[derive(Debug)]
pub struct TypeChecker<'a> {
    pub symbol_table: &'a SymbolTable,
    pub annotations: TypeAnnotations,
}

impl<'a> TypeChecker<'a> {
    pub fn new(symbol_table: &'a SymbolTable) -> Self {
        TypeChecker {
            symbol_table,
            annotations: TypeAnnotations::new(),
        }
    }

    pub fn fetch_variable_type(&self, symbol: &SymbolExpr) -> Result<Type, Error> {
        self.symbol_table
            .get_type(&symbol.name)
            .cloned()
            .ok_or_else(|| {
                Error::new(
                    ErrorImpl::UndeclaredVariable {
                        variable: symbol.name.clone(),
                    },
                    symbol.id,
                )
            })
    }
}

fn mismatch(message: &str, expected: Type, received: Type, node: NodeId) -> Error {
    Error::new(
        ErrorImpl::TypeMismatch {
            message: String::from(message),
            expected,
            received,
        },
        node,
    )
}

/// Resolves both operands left to right and requires them to be equal.
/// A mismatch is reported on the operation node.
fn type_check_operands(type_checker: &mut TypeChecker, operation: NodeId, left: &Expr, right: &Expr) -> Result<Type, Error> {
    let left_type = type_check_expr(type_checker, left)?;
    let right_type = type_check_expr(type_checker, right)?;

    if left_type != right_type {
        return Err(mismatch(TYPE_MISMATCH, left_type, right_type, operation));
    }

    Ok(left_type)
}

fn type_check_binary(type_checker: &mut TypeChecker, binary: &BinaryExpr) -> Result<Type, Error> {
    type_check_operands(type_checker, binary.id, &binary.left, &binary.right)
}

fn type_check_unary(type_checker: &mut TypeChecker, unary: &UnaryExpr) -> Result<Type, Error> {
    type_check_expr(type_checker, &unary.operand)
}

fn type_check_compare(type_checker: &mut TypeChecker, compare: &CompareExpr) -> Result<Type, Error> {
    // TODO: accept mixed integer/real comparisons once numeric promotion rules exist
    type_check_operands(type_checker, compare.id, &compare.left, &compare.right)?;
    Ok(Type::logical())
}

pub fn type_check_expr(type_checker: &mut TypeChecker, ast: &Expr) -> Result<Type, Error> {
    trace!("Checking {} {}", ast.get_kind_name(), ast.get_id());

    let ty = match ast {
        // Every numeric literal is an integer, there is no separate real literal
        Expr::Number(_) => Type::integer(),
        Expr::Constant(_) => Type::logical(),
        Expr::Symbol(symbol) => type_checker.fetch_variable_type(symbol)?,
        Expr::Binary(binary) => type_check_binary(type_checker, binary)?,
        Expr::Unary(unary) => type_check_unary(type_checker, unary)?,
        Expr::Compare(compare) => type_check_compare(type_checker, compare)?,
    };

    type_checker.annotations.annotate(ast.get_id(), ty.clone());
    Ok(ty)
}

fn type_check_if(type_checker: &mut TypeChecker, if_stmt: &IfStmt) -> Result<(), Error> {
    let test_type = type_check_expr(type_checker, &if_stmt.test)?;
    if !test_type.is_logical() {
        return Err(mismatch(CONDITION_NOT_LOGICAL, Type::logical(), test_type, if_stmt.test.get_id()));
    }

    type_check_stmts(type_checker, &if_stmt.body)?;
    type_check_stmts(type_checker, &if_stmt.orelse)
}

fn type_check_assignment(type_checker: &mut TypeChecker, assignment: &AssignmentStmt) -> Result<(), Error> {
    let target = match &assignment.target {
        Expr::Symbol(symbol) => symbol,
        other => {
            return Err(Error::new(
                ErrorImpl::MalformedTarget {
                    found: String::from(other.get_kind_name()),
                },
                other.get_id(),
            ))
        }
    };

    let target_type = type_checker.fetch_variable_type(target)?;
    type_checker.annotations.annotate(assignment.id, target_type.clone());

    let value_type = type_check_expr(type_checker, &assignment.value)?;
    if value_type != target_type {
        return Err(mismatch(TYPE_MISMATCH, target_type, value_type, assignment.id));
    }

    Ok(())
}

pub fn type_check_stmt(type_checker: &mut TypeChecker, ast: &Stmt) -> Result<(), Error> {
    match ast {
        // Declarations were consumed when the symbol table was built
        Stmt::Declaration(_) => Ok(()),
        Stmt::If(if_stmt) => type_check_if(type_checker, if_stmt),
        Stmt::Assignment(assignment) => type_check_assignment(type_checker, assignment),
        Stmt::Expression(expression) => type_check_expr(type_checker, &expression.expression).map(|_| ()),
    }
}

pub fn type_check_stmts(type_checker: &mut TypeChecker, stmts: &[Stmt]) -> Result<(), Error> {
    for stmt in stmts.iter() {
        type_check_stmt(type_checker, stmt)?;
    }

    Ok(())
}

/// Checks every statement of `ast` against `symbol_table` and returns the
/// resolved type of each checked node.
///
/// Traversal is left to right, operands before operators and tests before
/// branches. The first error aborts the pass.
pub fn type_check(ast: &BlockStmt, symbol_table: &SymbolTable) -> Result<TypeAnnotations, Error> {
    let mut type_checker = TypeChecker::new(symbol_table);
    type_check_stmts(&mut type_checker, &ast.body)?;

    debug!("Type checked {} nodes", type_checker.annotations.len());
    Ok(type_checker.annotations)
}

/// Alias of [`type_check`].
pub fn annotate_tree(ast: &BlockStmt, symbol_table: &SymbolTable) -> Result<TypeAnnotations, Error> {
    type_check(ast, symbol_table)
}
