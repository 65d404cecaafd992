//! ORDER BY terms.

use crate::expr::SimpleExpr;

/// Sort direction for an ORDER BY term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
	/// Ascending order
	Asc,
	/// Descending order
	Desc,
}

impl Order {
	/// Returns the SQL representation of this direction.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Asc => "ASC",
			Self::Desc => "DESC",
		}
	}
}

/// A single ORDER BY term: an expression and its direction.
#[derive(Debug, Clone)]
pub struct OrderExpr {
	/// The expression to order by
	pub expr: SimpleExpr,
	/// Sort direction
	pub order: Order,
}

impl OrderExpr {
	/// Create an order term from an expression and a direction.
	pub fn new<E: Into<SimpleExpr>>(expr: E, order: Order) -> Self {
		Self {
			expr: expr.into(),
			order,
		}
	}
}
