//! Select statement.
//!
//! [`SelectStatement`] is the backend-neutral output of query assembly.
//! It is a plain data structure built fluently and handed to a
//! [`QueryBuilder`](crate::backend::QueryBuilder) for rendering.

use crate::expr::{ExprTrait, SimpleExpr};
use crate::types::{ColumnRef, DynIden, IntoColumnRef, IntoIden, JoinExpr, JoinType, Order, OrderExpr};

/// A SELECT statement under construction.
///
/// ```rust
/// use querydef::query::SelectStatement;
/// use querydef::expr::{Expr, ExprTrait};
/// use querydef::types::Order;
///
/// let mut stmt = SelectStatement::new();
/// stmt.from("posts")
/// 	.column("title")
/// 	.and_where(Expr::col("hits").gt(100))
/// 	.order_by("id", Order::Asc)
/// 	.limit(10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SelectStatement {
	pub(crate) selects: Vec<SimpleExpr>,
	pub(crate) from: Option<DynIden>,
	pub(crate) joins: Vec<JoinExpr>,
	pub(crate) r#where: Option<SimpleExpr>,
	pub(crate) groups: Vec<SimpleExpr>,
	pub(crate) having: Option<SimpleExpr>,
	pub(crate) orders: Vec<OrderExpr>,
	pub(crate) limit: Option<u64>,
	pub(crate) offset: Option<u64>,
}

impl SelectStatement {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from<T: IntoIden>(&mut self, table: T) -> &mut Self {
		self.from = Some(table.into_iden());
		self
	}

	pub fn column<C: IntoColumnRef>(&mut self, col: C) -> &mut Self {
		self.selects.push(SimpleExpr::Column(col.into_column_ref()));
		self
	}

	pub fn columns<I, C>(&mut self, cols: I) -> &mut Self
	where
		I: IntoIterator<Item = C>,
		C: IntoColumnRef,
	{
		self.selects
			.extend(cols.into_iter().map(|c| SimpleExpr::Column(c.into_column_ref())));
		self
	}

	pub fn expr<E: Into<SimpleExpr>>(&mut self, expr: E) -> &mut Self {
		self.selects.push(expr.into());
		self
	}

	pub fn join<T: IntoIden>(
		&mut self,
		join: JoinType,
		table: T,
		on: (ColumnRef, ColumnRef),
	) -> &mut Self {
		self.joins.push(JoinExpr::new(join, table.into_iden(), on));
		self
	}

	/// AND-merge a condition into the WHERE clause.
	pub fn and_where<E: Into<SimpleExpr>>(&mut self, expr: E) -> &mut Self {
		let expr = expr.into();
		self.r#where = Some(match self.r#where.take() {
			Some(prev) => prev.and(expr),
			None => expr,
		});
		self
	}

	pub fn group_by<C: IntoColumnRef>(&mut self, col: C) -> &mut Self {
		self.groups.push(SimpleExpr::Column(col.into_column_ref()));
		self
	}

	/// AND-merge a condition into the HAVING clause.
	pub fn and_having<E: Into<SimpleExpr>>(&mut self, expr: E) -> &mut Self {
		let expr = expr.into();
		self.having = Some(match self.having.take() {
			Some(prev) => prev.and(expr),
			None => expr,
		});
		self
	}

	pub fn order_by<C: IntoColumnRef>(&mut self, col: C, order: Order) -> &mut Self {
		self.orders
			.push(OrderExpr::new(SimpleExpr::Column(col.into_column_ref()), order));
		self
	}

	pub fn order_by_expr<E: Into<SimpleExpr>>(&mut self, expr: E, order: Order) -> &mut Self {
		self.orders.push(OrderExpr::new(expr, order));
		self
	}

	pub fn limit(&mut self, limit: u64) -> &mut Self {
		self.limit = Some(limit);
		self
	}

	pub fn offset(&mut self, offset: u64) -> &mut Self {
		self.offset = Some(offset);
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::expr::Expr;
	use crate::types::BinOper;
	use rstest::rstest;

	#[rstest]
	fn test_and_where_merges_with_and() {
		let mut stmt = SelectStatement::new();
		stmt.and_where(Expr::col("a").eq(1))
			.and_where(Expr::col("b").eq(2));
		let Some(SimpleExpr::Binary(_, op, _)) = &stmt.r#where else {
			panic!("Expected merged Binary condition");
		};
		assert_eq!(*op, BinOper::And);
	}

	#[rstest]
	fn test_fluent_accumulation() {
		let mut stmt = SelectStatement::new();
		stmt.from("posts")
			.columns(["id", "title"])
			.order_by("id", Order::Asc)
			.limit(10)
			.offset(5);
		assert_eq!(stmt.selects.len(), 2);
		assert_eq!(stmt.orders.len(), 1);
		assert_eq!(stmt.limit, Some(10));
		assert_eq!(stmt.offset, Some(5));
	}
}
