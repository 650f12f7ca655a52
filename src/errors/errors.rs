use std::fmt::Display;

use thiserror::Error;

use crate::{ast::ast::NodeId, types::types::Type};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    node: NodeId,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, node: NodeId) -> Self {
        Error {
            internal_error: error_impl,
            node,
        }
    }

    /// The node the error was raised on.
    pub fn get_node(&self) -> NodeId {
        self.node
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnsupportedType { .. } => "UnsupportedType",
            ErrorImpl::UndeclaredVariable { .. } => "UndeclaredVariable",
            ErrorImpl::TypeMismatch { .. } => "TypeMismatch",
            ErrorImpl::MalformedTarget { .. } => "MalformedTarget",
        }
    }

    /// Internal errors mean the tree broke the parser's contract; the rest
    /// are diagnostics about the user's program.
    pub fn is_internal(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::UnsupportedType { .. } | ErrorImpl::MalformedTarget { .. }
        )
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnsupportedType { type_name } => ErrorTip::Suggestion(format!(
                "Type `{}` is not implemented, the parser should have rejected it",
                type_name
            )),
            ErrorImpl::UndeclaredVariable { variable } => {
                ErrorTip::Suggestion(format!("Declare `{}` before using it", variable))
            }
            ErrorImpl::TypeMismatch { expected, received, .. } => ErrorTip::Suggestion(format!(
                "Expected type `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::MalformedTarget { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (at node {})", self.internal_error, self.node)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Type not implemented: {type_name:?}")]
    UnsupportedType { type_name: String },
    #[error("Variable '{variable}' not declared.")]
    UndeclaredVariable { variable: String },
    #[error("{message}")]
    TypeMismatch {
        message: String,
        expected: Type,
        received: Type,
    },
    #[error("assignment target must be a variable name, found {found}")]
    MalformedTarget { found: String },
}
