//! Type checking and annotation module.
//!
//! This module walks statements and expressions and resolves the type of
//! every node it visits while:
//!
//! - Looking variable references up in the closed symbol table
//! - Requiring both operands of binary operations and comparisons to match
//! - Requiring `if` conditions to be logical
//! - Requiring assigned values to match the target's declared type
//!
//! Resolved types are returned as a side table keyed by node id. The pass
//! stops at the first error.

pub mod type_checker;
pub mod typed_ast;
