//! Conditional declarations and condition tree assembly.
//!
//! A definition collects [`ConditionDecl`]s in declaration order; at
//! execution time [`ConditionTreeBuilder`] combines the included ones
//! into a single parenthesized [`SimpleExpr`]. Declarations gated by an
//! inclusion predicate are skipped entirely when the predicate is false,
//! so their deferred operands are never resolved.

mod builder;
mod decl;

pub use builder::ConditionTreeBuilder;
pub use decl::{ConditionDecl, ConditionGroup, ConditionLeaf, GroupBuilder};
