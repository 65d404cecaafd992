use super::SimpleExpr;
use crate::types::BinOper;

/// Comparison, logical and arithmetic chaining for expressions.
///
/// Implemented by [`Expr`](super::Expr) and [`SimpleExpr`] so both can be
/// combined fluently:
///
/// ```rust
/// use querydef::expr::{Expr, ExprTrait};
///
/// let cond = Expr::col("hits").gt(100).and(Expr::col("draft").eq(false));
/// ```
pub trait ExprTrait: Sized {
	fn into_simple_expr(self) -> SimpleExpr;

	fn binary<E>(self, op: BinOper, rhs: E) -> SimpleExpr
	where
		E: Into<SimpleExpr>,
	{
		self.into_simple_expr().binary(op, rhs)
	}

	fn eq<E>(self, rhs: E) -> SimpleExpr
	where
		E: Into<SimpleExpr>,
	{
		self.binary(BinOper::Equal, rhs)
	}

	fn ne<E>(self, rhs: E) -> SimpleExpr
	where
		E: Into<SimpleExpr>,
	{
		self.binary(BinOper::NotEqual, rhs)
	}

	fn gt<E>(self, rhs: E) -> SimpleExpr
	where
		E: Into<SimpleExpr>,
	{
		self.binary(BinOper::GreaterThan, rhs)
	}

	fn gte<E>(self, rhs: E) -> SimpleExpr
	where
		E: Into<SimpleExpr>,
	{
		self.binary(BinOper::GreaterThanOrEqual, rhs)
	}

	fn lt<E>(self, rhs: E) -> SimpleExpr
	where
		E: Into<SimpleExpr>,
	{
		self.binary(BinOper::SmallerThan, rhs)
	}

	fn lte<E>(self, rhs: E) -> SimpleExpr
	where
		E: Into<SimpleExpr>,
	{
		self.binary(BinOper::SmallerThanOrEqual, rhs)
	}

	fn like<E>(self, rhs: E) -> SimpleExpr
	where
		E: Into<SimpleExpr>,
	{
		self.binary(BinOper::Like, rhs)
	}

	fn not_like<E>(self, rhs: E) -> SimpleExpr
	where
		E: Into<SimpleExpr>,
	{
		self.binary(BinOper::NotLike, rhs)
	}

	/// `expr IN (...)`.
	fn is_in<E, I>(self, values: I) -> SimpleExpr
	where
		E: Into<SimpleExpr>,
		I: IntoIterator<Item = E>,
	{
		let items = values.into_iter().map(Into::into).collect();
		self.binary(BinOper::In, SimpleExpr::Tuple(items))
	}

	/// `expr NOT IN (...)`.
	fn is_not_in<E, I>(self, values: I) -> SimpleExpr
	where
		E: Into<SimpleExpr>,
		I: IntoIterator<Item = E>,
	{
		let items = values.into_iter().map(Into::into).collect();
		self.binary(BinOper::NotIn, SimpleExpr::Tuple(items))
	}

	fn and<E>(self, rhs: E) -> SimpleExpr
	where
		E: Into<SimpleExpr>,
	{
		self.binary(BinOper::And, rhs)
	}

	fn or<E>(self, rhs: E) -> SimpleExpr
	where
		E: Into<SimpleExpr>,
	{
		self.binary(BinOper::Or, rhs)
	}

	#[allow(clippy::should_implement_trait)]
	fn add<E>(self, rhs: E) -> SimpleExpr
	where
		E: Into<SimpleExpr>,
	{
		self.binary(BinOper::Add, rhs)
	}

	#[allow(clippy::should_implement_trait)]
	fn sub<E>(self, rhs: E) -> SimpleExpr
	where
		E: Into<SimpleExpr>,
	{
		self.binary(BinOper::Sub, rhs)
	}

	#[allow(clippy::should_implement_trait)]
	fn mul<E>(self, rhs: E) -> SimpleExpr
	where
		E: Into<SimpleExpr>,
	{
		self.binary(BinOper::Mul, rhs)
	}

	#[allow(clippy::should_implement_trait)]
	fn div<E>(self, rhs: E) -> SimpleExpr
	where
		E: Into<SimpleExpr>,
	{
		self.binary(BinOper::Div, rhs)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::expr::Expr;
	use crate::value::Value;
	use rstest::rstest;

	#[rstest]
	#[case(Expr::col("id").eq(1), BinOper::Equal)]
	#[case(Expr::col("id").ne(1), BinOper::NotEqual)]
	#[case(Expr::col("id").gt(1), BinOper::GreaterThan)]
	#[case(Expr::col("id").gte(1), BinOper::GreaterThanOrEqual)]
	#[case(Expr::col("id").lt(1), BinOper::SmallerThan)]
	#[case(Expr::col("id").lte(1), BinOper::SmallerThanOrEqual)]
	fn test_comparison_oper(#[case] expr: SimpleExpr, #[case] expected: BinOper) {
		let SimpleExpr::Binary(_, op, _) = expr else {
			panic!("Expected Binary variant");
		};
		assert_eq!(op, expected);
	}

	#[rstest]
	fn test_is_in_builds_tuple() {
		let expr = Expr::col("id").is_in([1, 2, 3]);
		let SimpleExpr::Binary(_, op, rhs) = expr else {
			panic!("Expected Binary variant");
		};
		assert_eq!(op, BinOper::In);
		let SimpleExpr::Tuple(items) = *rhs else {
			panic!("Expected Tuple on the right");
		};
		assert_eq!(items.len(), 3);
		assert!(matches!(items[0], SimpleExpr::Value(Value::Int(Some(1)))));
	}

	#[rstest]
	fn test_and_chains_left_to_right() {
		let expr = Expr::col("a").eq(1).and(Expr::col("b").eq(2));
		let SimpleExpr::Binary(lhs, op, _) = expr else {
			panic!("Expected Binary variant");
		};
		assert_eq!(op, BinOper::And);
		assert!(matches!(*lhs, SimpleExpr::Binary(_, BinOper::Equal, _)));
	}
}
