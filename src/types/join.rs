//! JOIN clause types.

use super::column_ref::ColumnRef;
use super::iden::DynIden;

/// Type of JOIN clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
	/// INNER JOIN
	Inner,
	/// LEFT OUTER JOIN
	LeftOuter,
}

impl JoinType {
	/// Returns the SQL representation of this join type.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Inner => "INNER JOIN",
			Self::LeftOuter => "LEFT OUTER JOIN",
		}
	}
}

/// A JOIN clause: join type, target table, and the ON column pair.
#[derive(Debug, Clone)]
pub struct JoinExpr {
	/// The kind of join
	pub join: JoinType,
	/// The table being joined
	pub table: DynIden,
	/// The `left = right` equality the join is ON
	pub on: (ColumnRef, ColumnRef),
}

impl JoinExpr {
	/// Create a join expression.
	pub fn new(join: JoinType, table: DynIden, on: (ColumnRef, ColumnRef)) -> Self {
		Self { join, table, on }
	}
}
