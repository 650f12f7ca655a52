//! Type model shared by both semantic passes.
//!
//! This module defines the types a declared variable or an expression can
//! resolve to:
//!
//! - Intrinsic scalar types (integer, real, complex, character, logical)
//! - Derived (user defined) types
//! - Array types wrapping an element type with a rank and shape
//!
//! All types are immutable once constructed and compare structurally.
//! There is no implicit widening: an integer is never equal to a real.

pub mod types;
