/// AST (Abstract Syntax Tree) module
/// Contains the tree shapes the semantic passes consume
///
/// Submodules:
/// - ast: Node ids and the closed `Expr` / `Stmt` enums
/// - expressions: Definitions for the expression node kinds
/// - statements: Definitions for the statement node kinds
pub mod ast;
pub mod expressions;
pub mod statements;

#[cfg(test)]
mod tests;
