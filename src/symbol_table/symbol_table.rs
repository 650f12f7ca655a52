use std::collections::{hash_map::Iter, HashMap};

use lazy_static::lazy_static;
use log::{debug, trace};

use crate::{
    ast::{
        ast::Stmt,
        statements::{BlockStmt, DeclarationStmt},
    },
    errors::errors::{Error, ErrorImpl},
    types::types::Type,
};

pub type TypeConstructor = fn() -> Type;

lazy_static! {
    pub static ref INTRINSIC_TYPES: HashMap<&'static str, TypeConstructor> = {
        let mut map: HashMap<&'static str, TypeConstructor> = HashMap::new();
        map.insert("integer", Type::integer);
        map.insert("real", Type::real);
        map.insert("complex", Type::complex);
        map.insert("character", Type::character);
        map.insert("logical", Type::logical);
        map
    };
}

/// Type names the builder recognises, each mapped to a constructor.
#[derive(Debug, Clone)]
pub struct TypeVocabulary {
    constructors: HashMap<String, TypeConstructor>,
}

impl TypeVocabulary {
    pub fn empty() -> Self {
        TypeVocabulary {
            constructors: HashMap::new(),
        }
    }

    /// The five intrinsic type names.
    pub fn intrinsic() -> Self {
        TypeVocabulary {
            constructors: INTRINSIC_TYPES
                .iter()
                .map(|(name, constructor)| (name.to_string(), *constructor))
                .collect(),
        }
    }

    /// Adds `name`, replacing any constructor already registered for it.
    pub fn with(mut self, name: impl Into<String>, constructor: TypeConstructor) -> Self {
        self.constructors.insert(name.into(), constructor);
        self
    }

    pub fn resolve(&self, type_name: &str) -> Option<Type> {
        self.constructors.get(type_name).map(|constructor| constructor())
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.constructors.contains_key(type_name)
    }
}

impl Default for TypeVocabulary {
    fn default() -> Self {
        TypeVocabulary::intrinsic()
    }
}

/// A declared name and the type it is bound to.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub ty: Type,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            symbols: HashMap::new(),
        }
    }

    /// Binds `name` to `ty`. A previous binding is overwritten and returned.
    pub fn declare(&mut self, name: impl Into<String>, ty: Type) -> Option<Symbol> {
        let name = name.into();
        let previous = self.symbols.insert(name.clone(), Symbol { name, ty });

        if let Some(previous) = &previous {
            debug!("Redeclaration of `{}` overwrites type {}", previous.name, previous.ty);
        }

        previous
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn get_type(&self, name: &str) -> Option<&Type> {
        self.symbols.get(name).map(|symbol| &symbol.ty)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, Symbol> {
        self.symbols.iter()
    }
}

fn declare_vars(
    symbol_table: &mut SymbolTable,
    vocabulary: &TypeVocabulary,
    declaration: &DeclarationStmt,
) -> Result<(), Error> {
    for var in declaration.vars.iter() {
        // The parser validates type names, so a miss here is a broken tree
        let ty = vocabulary.resolve(&var.type_name).ok_or_else(|| {
            Error::new(
                ErrorImpl::UnsupportedType {
                    type_name: var.type_name.clone(),
                },
                declaration.id,
            )
        })?;

        trace!("Declaring `{}` as {}", var.name, ty);
        symbol_table.declare(var.name.clone(), ty);
    }

    Ok(())
}

fn collect_stmts(
    symbol_table: &mut SymbolTable,
    vocabulary: &TypeVocabulary,
    stmts: &[Stmt],
) -> Result<(), Error> {
    for stmt in stmts.iter() {
        match stmt {
            Stmt::Declaration(declaration) => declare_vars(symbol_table, vocabulary, declaration)?,
            Stmt::If(if_stmt) => {
                collect_stmts(symbol_table, vocabulary, &if_stmt.body)?;
                collect_stmts(symbol_table, vocabulary, &if_stmt.orelse)?;
            }
            Stmt::Assignment(_) | Stmt::Expression(_) => {}
        }
    }

    Ok(())
}

/// Builds the symbol table for `ast`, resolving type names with `vocabulary`.
///
/// Declarations are collected from every statement sequence in the tree,
/// including nested `if` branches, in source order. The first unknown type
/// name aborts the pass with `UnsupportedType`.
pub fn build_symbol_table(ast: &BlockStmt, vocabulary: &TypeVocabulary) -> Result<SymbolTable, Error> {
    let mut symbol_table = SymbolTable::new();
    collect_stmts(&mut symbol_table, vocabulary, &ast.body)?;

    debug!("Symbol table built with {} symbols", symbol_table.len());
    Ok(symbol_table)
}

/// Builds the symbol table using the intrinsic type names.
pub fn create_symbol_table(ast: &BlockStmt) -> Result<SymbolTable, Error> {
    build_symbol_table(ast, &TypeVocabulary::intrinsic())
}
