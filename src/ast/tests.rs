//! Unit tests for tree construction.

use super::ast::{Expr, NodeId, NodeIdAllocator, Stmt};
use super::expressions::{BinaryOperator, CompareOperator, UnaryOperator};
use super::statements::{BlockStmt, VarDecl};

#[test]
fn test_allocator_hands_out_sequential_ids() {
    let mut ids = NodeIdAllocator::new();
    assert_eq!(ids.next_id(), NodeId(0));
    assert_eq!(ids.next_id(), NodeId(1));
    assert_eq!(ids.next_id(), NodeId(2));
}

#[test]
fn test_builders_assign_unique_ids() {
    let mut ids = NodeIdAllocator::new();
    let left = Expr::symbol(&mut ids, "x");
    let right = Expr::number(&mut ids, "1");
    let sum = Expr::binary(&mut ids, left.clone(), BinaryOperator::Add, right.clone());

    assert_ne!(left.get_id(), right.get_id());
    assert_ne!(sum.get_id(), left.get_id());
    assert_ne!(sum.get_id(), right.get_id());
}

#[test]
fn test_children_are_built_before_parents() {
    let mut ids = NodeIdAllocator::new();
    let operand = Expr::constant(&mut ids, true);
    let negated = Expr::unary(&mut ids, UnaryOperator::Not, operand);

    match &negated {
        Expr::Unary(unary) => assert!(unary.operand.get_id() < unary.id),
        other => panic!("Expected unary expression, found {:?}", other),
    }
}

#[test]
fn test_statement_ids() {
    let mut ids = NodeIdAllocator::new();
    let decl = Stmt::declaration(&mut ids, vec![VarDecl::new("x", "integer")]);
    let x = Expr::symbol(&mut ids, "x");
    let three = Expr::number(&mut ids, "3");
    let test = Expr::compare(&mut ids, x, CompareOperator::Less, three);
    let if_stmt = Stmt::if_stmt(&mut ids, test, vec![], vec![]);
    let block = BlockStmt::new(&mut ids, vec![decl.clone(), if_stmt.clone()]);

    assert_eq!(decl.get_id(), NodeId(0));
    assert_eq!(if_stmt.get_id(), NodeId(4));
    assert_eq!(block.id, NodeId(5));
    assert_eq!(block.iter().count(), 2);
}

#[test]
fn test_kind_names() {
    let mut ids = NodeIdAllocator::new();
    assert_eq!(Expr::number(&mut ids, "1").get_kind_name(), "number");
    assert_eq!(Expr::symbol(&mut ids, "a").get_kind_name(), "symbol");
}

#[test]
fn test_operator_display() {
    assert_eq!(BinaryOperator::Pow.to_string(), "**");
    assert_eq!(UnaryOperator::Not.to_string(), ".not.");
    assert_eq!(CompareOperator::NotEq.to_string(), "/=");
}
