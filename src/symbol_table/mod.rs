//! Symbol table construction.
//!
//! This module walks every declaration in a tree and binds each declared
//! name to the type its type name resolves to. Type names are resolved
//! against a `TypeVocabulary`, by default the five intrinsic types.
//!
//! The table is closed once built: the type checker only ever reads it.

pub mod symbol_table;

#[cfg(test)]
mod tests;
