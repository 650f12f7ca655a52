use std::fmt::Display;

use super::ast::{Expr, NodeId, NodeIdAllocator};

// OPERATORS

/// Two-operand arithmetic and logical operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    And,
    Or,
    Eqv,
    Neqv,
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Pow => "**",
            BinaryOperator::And => ".and.",
            BinaryOperator::Or => ".or.",
            BinaryOperator::Eqv => ".eqv.",
            BinaryOperator::Neqv => ".neqv.",
        };
        write!(f, "{}", symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Plus,
    Minus,
    Not,
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            UnaryOperator::Plus => "+",
            UnaryOperator::Minus => "-",
            UnaryOperator::Not => ".not.",
        };
        write!(f, "{}", symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOperator {
    Eq,
    NotEq,
    Less,
    LessEq,
    Greater,
    GreaterEq,
}

impl Display for CompareOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            CompareOperator::Eq => "==",
            CompareOperator::NotEq => "/=",
            CompareOperator::Less => "<",
            CompareOperator::LessEq => "<=",
            CompareOperator::Greater => ">",
            CompareOperator::GreaterEq => ">=",
        };
        write!(f, "{}", symbol)
    }
}

// LITERALS

/// Number Expression
/// Represents a numeric literal. The literal text is kept as written.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub id: NodeId,
    pub value: String,
}

/// Constant Expression
/// Represents a `.true.` / `.false.` literal.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantExpr {
    pub id: NodeId,
    pub value: bool,
}

// REFERENCES

/// Symbol Expression
/// A reference to a declared variable by name.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub id: NodeId,
    pub name: String,
}

// OPERATIONS

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub id: NodeId,
    pub left: Box<Expr>,
    pub operator: BinaryOperator,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub id: NodeId,
    pub operator: UnaryOperator,
    pub operand: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompareExpr {
    pub id: NodeId,
    pub left: Box<Expr>,
    pub operator: CompareOperator,
    pub right: Box<Expr>,
}

// Builders allocating fresh ids
impl Expr {
    pub fn number(ids: &mut NodeIdAllocator, value: impl Into<String>) -> Self {
        Expr::Number(NumberExpr {
            id: ids.next_id(),
            value: value.into(),
        })
    }

    pub fn constant(ids: &mut NodeIdAllocator, value: bool) -> Self {
        Expr::Constant(ConstantExpr {
            id: ids.next_id(),
            value,
        })
    }

    pub fn symbol(ids: &mut NodeIdAllocator, name: impl Into<String>) -> Self {
        Expr::Symbol(SymbolExpr {
            id: ids.next_id(),
            name: name.into(),
        })
    }

    pub fn binary(ids: &mut NodeIdAllocator, left: Expr, operator: BinaryOperator, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            id: ids.next_id(),
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    pub fn unary(ids: &mut NodeIdAllocator, operator: UnaryOperator, operand: Expr) -> Self {
        Expr::Unary(UnaryExpr {
            id: ids.next_id(),
            operator,
            operand: Box::new(operand),
        })
    }

    pub fn compare(ids: &mut NodeIdAllocator, left: Expr, operator: CompareOperator, right: Expr) -> Self {
        Expr::Compare(CompareExpr {
            id: ids.next_id(),
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }
}
