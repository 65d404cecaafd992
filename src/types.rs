//! Type definitions for identifiers, column references, and operators.
//!
//! This module provides the core type system for identifying SQL entities:
//!
//! - [`Iden`]: Trait for SQL identifiers (tables, columns)
//! - [`Alias`]: Dynamic identifier for runtime-determined names
//! - [`DynIden`]: Type-erased identifier for heterogeneous collections
//! - [`ColumnRef`]: Reference to a column (simple, table-qualified, asterisk)
//! - [`BinOper`] / [`LogicalChainOper`]: Expression and chaining operators
//! - [`Order`] / [`OrderExpr`]: ORDER BY terms
//! - [`JoinType`] / [`JoinExpr`]: JOIN clauses

mod column_ref;
mod iden;
mod join;
mod operators;
mod order;

pub use column_ref::{ColumnRef, IntoColumnRef};
pub use iden::{Alias, DynIden, Iden, IntoIden};
pub use join::{JoinExpr, JoinType};
pub use operators::{BinOper, LogicalChainOper};
pub use order::{Order, OrderExpr};
