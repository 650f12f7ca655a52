//! Error types and error handling for semantic analysis.
//!
//! This module defines the errors the two passes can raise. It includes:
//!
//! - An error structure locating the offending node
//! - One variant per failure kind (unsupported type, undeclared variable,
//!   type mismatch, malformed assignment target)
//! - A split between internal-consistency failures and user diagnostics
//! - Helpful error messages and suggestions

pub mod errors;
