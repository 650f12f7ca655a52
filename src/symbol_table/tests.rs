//! Unit tests for symbol table construction.

use crate::ast::ast::{Expr, NodeIdAllocator, Stmt};
use crate::ast::statements::{BlockStmt, VarDecl};
use crate::errors::errors::ErrorImpl;
use crate::types::types::Type;

use super::symbol_table::{build_symbol_table, create_symbol_table, SymbolTable, TypeVocabulary};

fn declarations(ids: &mut NodeIdAllocator, vars: &[(&str, &str)]) -> Stmt {
    Stmt::declaration(
        ids,
        vars.iter().map(|(name, type_name)| VarDecl::new(*name, *type_name)).collect(),
    )
}

#[test]
fn test_every_intrinsic_name_resolves() {
    let mut ids = NodeIdAllocator::new();
    let decl = declarations(
        &mut ids,
        &[
            ("i", "integer"),
            ("r", "real"),
            ("c", "complex"),
            ("s", "character"),
            ("l", "logical"),
        ],
    );
    let ast = BlockStmt::new(&mut ids, vec![decl]);

    let symbols = create_symbol_table(&ast).unwrap();

    assert_eq!(symbols.len(), 5);
    assert_eq!(symbols.get_type("i"), Some(&Type::integer()));
    assert_eq!(symbols.get_type("r"), Some(&Type::real()));
    assert_eq!(symbols.get_type("c"), Some(&Type::complex()));
    assert_eq!(symbols.get_type("s"), Some(&Type::character()));
    assert_eq!(symbols.get_type("l"), Some(&Type::logical()));
}

#[test]
fn test_symbol_keeps_its_name() {
    let mut ids = NodeIdAllocator::new();
    let decl = declarations(&mut ids, &[("x", "integer")]);
    let ast = BlockStmt::new(&mut ids, vec![decl]);

    let symbols = create_symbol_table(&ast).unwrap();
    let symbol = symbols.get("x").unwrap();

    assert_eq!(symbol.name, "x");
    assert_eq!(symbol.ty, Type::integer());
}

#[test]
fn test_redeclaration_overwrites() {
    let mut ids = NodeIdAllocator::new();
    let first = declarations(&mut ids, &[("x", "integer")]);
    let second = declarations(&mut ids, &[("x", "real")]);
    let ast = BlockStmt::new(&mut ids, vec![first, second]);

    let symbols = create_symbol_table(&ast).unwrap();

    assert_eq!(symbols.len(), 1);
    assert_eq!(symbols.get_type("x"), Some(&Type::real()));
}

#[test]
fn test_redeclaration_within_one_statement_overwrites() {
    let mut ids = NodeIdAllocator::new();
    let decl = declarations(&mut ids, &[("x", "logical"), ("x", "character")]);
    let ast = BlockStmt::new(&mut ids, vec![decl]);

    let symbols = create_symbol_table(&ast).unwrap();

    assert_eq!(symbols.get_type("x"), Some(&Type::character()));
}

#[test]
fn test_nested_declarations_are_collected() {
    let mut ids = NodeIdAllocator::new();
    let inner_then = declarations(&mut ids, &[("y", "integer")]);
    let inner_else = declarations(&mut ids, &[("z", "real")]);
    let test = Expr::constant(&mut ids, true);
    let if_stmt = Stmt::if_stmt(&mut ids, test, vec![inner_then], vec![inner_else]);
    let ast = BlockStmt::new(&mut ids, vec![if_stmt]);

    let symbols = create_symbol_table(&ast).unwrap();

    assert_eq!(symbols.get_type("y"), Some(&Type::integer()));
    assert_eq!(symbols.get_type("z"), Some(&Type::real()));
}

#[test]
fn test_unsupported_type_is_fatal() {
    let mut ids = NodeIdAllocator::new();
    let good = declarations(&mut ids, &[("x", "integer")]);
    let bad = declarations(&mut ids, &[("y", "double")]);
    let bad_id = bad.get_id();
    let ast = BlockStmt::new(&mut ids, vec![good, bad]);

    let error = create_symbol_table(&ast).unwrap_err();

    assert!(error.is_internal());
    assert_eq!(error.get_node(), bad_id);
    assert_eq!(
        error.kind(),
        &ErrorImpl::UnsupportedType {
            type_name: "double".to_string()
        }
    );
}

#[test]
fn test_type_names_are_case_sensitive() {
    let mut ids = NodeIdAllocator::new();
    let decl = declarations(&mut ids, &[("x", "INTEGER")]);
    let ast = BlockStmt::new(&mut ids, vec![decl]);

    assert!(create_symbol_table(&ast).is_err());
}

#[test]
fn test_non_declarations_bind_nothing() {
    let mut ids = NodeIdAllocator::new();
    let value = Expr::number(&mut ids, "1");
    let stmt = Stmt::expression(&mut ids, value);
    let ast = BlockStmt::new(&mut ids, vec![stmt]);

    let symbols = create_symbol_table(&ast).unwrap();

    assert!(symbols.is_empty());
}

#[test]
fn test_source_tree_is_untouched() {
    let mut ids = NodeIdAllocator::new();
    let decl = declarations(&mut ids, &[("x", "integer")]);
    let ast = BlockStmt::new(&mut ids, vec![decl]);
    let before = ast.clone();

    create_symbol_table(&ast).unwrap();

    assert_eq!(ast, before);
}

#[test]
fn test_custom_vocabulary() {
    let vocabulary = TypeVocabulary::empty()
        .with("int", Type::integer)
        .with("bool", Type::logical);

    let mut ids = NodeIdAllocator::new();
    let decl = declarations(&mut ids, &[("a", "int"), ("b", "bool")]);
    let ast = BlockStmt::new(&mut ids, vec![decl]);

    let symbols = build_symbol_table(&ast, &vocabulary).unwrap();

    assert_eq!(symbols.get_type("a"), Some(&Type::integer()));
    assert_eq!(symbols.get_type("b"), Some(&Type::logical()));

    let mut ids = NodeIdAllocator::new();
    let decl = declarations(&mut ids, &[("c", "integer")]);
    let ast = BlockStmt::new(&mut ids, vec![decl]);

    assert!(build_symbol_table(&ast, &vocabulary).is_err());
}

#[test]
fn test_vocabulary_override() {
    let vocabulary = TypeVocabulary::intrinsic().with("real", Type::complex);

    assert_eq!(vocabulary.resolve("real"), Some(Type::complex()));
    assert_eq!(vocabulary.resolve("integer"), Some(Type::integer()));
    assert!(vocabulary.contains("logical"));
    assert!(!vocabulary.contains("double"));
}

#[test]
fn test_default_vocabulary_is_intrinsic() {
    let vocabulary = TypeVocabulary::default();

    for name in ["integer", "real", "complex", "character", "logical"] {
        assert!(vocabulary.contains(name), "missing {}", name);
    }
    assert_eq!(vocabulary.resolve("derived"), None);
}

#[test]
fn test_declare_returns_previous_binding() {
    let mut symbols = SymbolTable::new();

    assert!(symbols.declare("x", Type::integer()).is_none());
    let previous = symbols.declare("x", Type::real()).unwrap();

    assert_eq!(previous.ty, Type::integer());
    assert_eq!(symbols.get_type("x"), Some(&Type::real()));
    assert!(symbols.contains("x"));
    assert_eq!(symbols.iter().count(), 1);
}
