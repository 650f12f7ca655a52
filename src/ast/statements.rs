use std::slice::Iter;

use super::ast::{Expr, NodeId, NodeIdAllocator, Stmt};

/// Root of a tree: an ordered statement sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub id: NodeId,
    pub body: Vec<Stmt>,
}

impl BlockStmt {
    pub fn new(ids: &mut NodeIdAllocator, body: Vec<Stmt>) -> Self {
        BlockStmt {
            id: ids.next_id(),
            body,
        }
    }

    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

/// One declared variable: its name and the type name written for it.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: String,
    pub type_name: String,
}

impl VarDecl {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        VarDecl {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeclarationStmt {
    pub id: NodeId,
    pub vars: Vec<VarDecl>,
}

/// `if` statement. An empty `orelse` means there was no `else` branch.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub id: NodeId,
    pub test: Expr,
    pub body: Vec<Stmt>,
    pub orelse: Vec<Stmt>,
}

/// Assignment statement. The parser only ever produces a symbol target,
/// the type checker rejects anything else as malformed.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub id: NodeId,
    pub target: Expr,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub id: NodeId,
    pub expression: Expr,
}

impl Stmt {
    pub fn declaration(ids: &mut NodeIdAllocator, vars: Vec<VarDecl>) -> Self {
        Stmt::Declaration(DeclarationStmt {
            id: ids.next_id(),
            vars,
        })
    }

    pub fn if_stmt(ids: &mut NodeIdAllocator, test: Expr, body: Vec<Stmt>, orelse: Vec<Stmt>) -> Self {
        Stmt::If(IfStmt {
            id: ids.next_id(),
            test,
            body,
            orelse,
        })
    }

    pub fn assignment(ids: &mut NodeIdAllocator, target: Expr, value: Expr) -> Self {
        Stmt::Assignment(AssignmentStmt {
            id: ids.next_id(),
            target,
            value,
        })
    }

    pub fn expression(ids: &mut NodeIdAllocator, expression: Expr) -> Self {
        Stmt::Expression(ExpressionStmt {
            id: ids.next_id(),
            expression,
        })
    }
}
