#![allow(clippy::module_inception)]

//! Semantic analysis for a small statically typed language.
//!
//! Two passes run over a parsed tree, in order:
//!
//! 1. [`symbol_table::symbol_table::build_symbol_table`] binds every declared
//!    name to its type.
//! 2. [`type_checker::type_checker::type_check`] resolves the type of every
//!    expression and assignment against that table, stopping at the first
//!    incompatibility.
//!
//! [`analyze`] runs both.

use log::debug;

use crate::{
    ast::statements::BlockStmt,
    errors::errors::Error,
    symbol_table::symbol_table::{build_symbol_table, SymbolTable, TypeVocabulary},
    type_checker::{type_checker::type_check, typed_ast::TypeAnnotations},
};

pub mod ast;
pub mod errors;
pub mod symbol_table;
pub mod type_checker;
pub mod types;

/// Output of a successful analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub symbols: SymbolTable,
    pub annotations: TypeAnnotations,
}

/// Builds the symbol table with the intrinsic type names, then type checks.
pub fn analyze(ast: &BlockStmt) -> Result<Analysis, Error> {
    analyze_with(ast, &TypeVocabulary::intrinsic())
}

pub fn analyze_with(ast: &BlockStmt, vocabulary: &TypeVocabulary) -> Result<Analysis, Error> {
    let symbols = build_symbol_table(ast, vocabulary)?;
    let annotations = type_check(ast, &symbols)?;

    debug!(
        "Analysis finished: {} symbols, {} annotated nodes",
        symbols.len(),
        annotations.len()
    );

    Ok(Analysis { symbols, annotations })
}
