use std::fmt::Display;

use super::{
    expressions::{BinaryExpr, CompareExpr, ConstantExpr, NumberExpr, SymbolExpr, UnaryExpr},
    statements::{AssignmentStmt, DeclarationStmt, ExpressionStmt, IfStmt},
};

/// Identity of a node within one tree.
///
/// Ids are assigned by whoever builds the tree and must be unique within it.
/// Type annotations are keyed by them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out sequential node ids.
#[derive(Debug, Default)]
pub struct NodeIdAllocator {
    next: u32,
}

impl NodeIdAllocator {
    pub fn new() -> Self {
        NodeIdAllocator { next: 0 }
    }

    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        id
    }
}

/// Expression node kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    Constant(ConstantExpr),
    Symbol(SymbolExpr),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Compare(CompareExpr),
}

impl Expr {
    pub fn get_id(&self) -> NodeId {
        match self {
            Expr::Number(expr) => expr.id,
            Expr::Constant(expr) => expr.id,
            Expr::Symbol(expr) => expr.id,
            Expr::Binary(expr) => expr.id,
            Expr::Unary(expr) => expr.id,
            Expr::Compare(expr) => expr.id,
        }
    }

    /// Short name of the node kind, used in diagnostics.
    pub fn get_kind_name(&self) -> &'static str {
        match self {
            Expr::Number(_) => "number",
            Expr::Constant(_) => "constant",
            Expr::Symbol(_) => "symbol",
            Expr::Binary(_) => "binary operation",
            Expr::Unary(_) => "unary operation",
            Expr::Compare(_) => "comparison",
        }
    }
}

/// Statement node kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Declaration(DeclarationStmt),
    If(IfStmt),
    Assignment(AssignmentStmt),
    Expression(ExpressionStmt),
}

impl Stmt {
    pub fn get_id(&self) -> NodeId {
        match self {
            Stmt::Declaration(stmt) => stmt.id,
            Stmt::If(stmt) => stmt.id,
            Stmt::Assignment(stmt) => stmt.id,
            Stmt::Expression(stmt) => stmt.id,
        }
    }
}

// Conversions so builders can write `stmt.into()`
impl From<DeclarationStmt> for Stmt {
    fn from(stmt: DeclarationStmt) -> Self {
        Stmt::Declaration(stmt)
    }
}

impl From<IfStmt> for Stmt {
    fn from(stmt: IfStmt) -> Self {
        Stmt::If(stmt)
    }
}

impl From<AssignmentStmt> for Stmt {
    fn from(stmt: AssignmentStmt) -> Self {
        Stmt::Assignment(stmt)
    }
}

impl From<ExpressionStmt> for Stmt {
    fn from(stmt: ExpressionStmt) -> Self {
        Stmt::Expression(stmt)
    }
}
