use std::collections::{hash_map::Iter, HashMap};

use crate::{ast::ast::NodeId, types::types::Type};

/// Resolved types of checked nodes, keyed by node id.
///
/// Kept beside the tree rather than inside it, so the tree stays read-only
/// and can be shared while its annotations are consumed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeAnnotations {
    types: HashMap<NodeId, Type>,
}

impl TypeAnnotations {
    pub fn new() -> Self {
        TypeAnnotations {
            types: HashMap::new(),
        }
    }

    /// Records the type of `node`. Each node is annotated exactly once.
    pub(crate) fn annotate(&mut self, node: NodeId, ty: Type) {
        let previous = self.types.insert(node, ty);
        debug_assert!(previous.is_none(), "node {} annotated twice", node);
    }

    pub fn get(&self, node: NodeId) -> Option<&Type> {
        self.types.get(&node)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.types.contains_key(&node)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, NodeId, Type> {
        self.types.iter()
    }
}
