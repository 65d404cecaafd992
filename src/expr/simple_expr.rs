use super::DeferredValue;
use crate::types::{BinOper, ColumnRef, DynIden};
use crate::value::{IntoValue, Value};

/// SQL keyword constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
	Null,
	True,
	False,
}

/// Expression AST.
///
/// Every operand and condition in a query definition is a `SimpleExpr`.
/// The [`Deferred`](SimpleExpr::Deferred) variant carries an operand that
/// is only resolved at execution time; the resolver must replace it with
/// a concrete [`Value`](SimpleExpr::Value) before rendering.
#[derive(Debug, Clone)]
pub enum SimpleExpr {
	/// A column reference, optionally table-qualified.
	Column(ColumnRef),
	/// A concrete value, rendered as a bind parameter.
	Value(Value),
	/// An operand resolved against the execution context.
	Deferred(DeferredValue),
	/// A binary operation.
	Binary(Box<SimpleExpr>, BinOper, Box<SimpleExpr>),
	/// A function call, e.g. `COUNT(id)`.
	FunctionCall(DynIden, Vec<SimpleExpr>),
	/// A parenthesized list, e.g. the right side of `IN (...)`.
	Tuple(Vec<SimpleExpr>),
	/// A parenthesized sub-expression.
	Grouping(Box<SimpleExpr>),
	/// A keyword constant.
	Constant(Keyword),
	/// `*`.
	Asterisk,
}

impl SimpleExpr {
	/// Wrap this expression in parentheses.
	#[must_use]
	pub fn grouped(self) -> Self {
		Self::Grouping(Box::new(self))
	}

	/// Combine with another expression via a binary operator.
	#[must_use]
	pub fn binary<E>(self, op: BinOper, rhs: E) -> Self
	where
		E: Into<SimpleExpr>,
	{
		Self::Binary(Box::new(self), op, Box::new(rhs.into()))
	}

	/// Whether any [`Deferred`](SimpleExpr::Deferred) operand remains in
	/// this expression tree.
	pub fn has_deferred(&self) -> bool {
		match self {
			Self::Deferred(_) => true,
			Self::Binary(lhs, _, rhs) => lhs.has_deferred() || rhs.has_deferred(),
			Self::FunctionCall(_, args) => args.iter().any(Self::has_deferred),
			Self::Tuple(items) => items.iter().any(Self::has_deferred),
			Self::Grouping(inner) => inner.has_deferred(),
			Self::Column(_) | Self::Value(_) | Self::Constant(_) | Self::Asterisk => false,
		}
	}
}

impl From<Value> for SimpleExpr {
	fn from(v: Value) -> Self {
		Self::Value(v)
	}
}

impl From<ColumnRef> for SimpleExpr {
	fn from(c: ColumnRef) -> Self {
		Self::Column(c)
	}
}

macro_rules! impl_simple_expr_from {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for SimpleExpr {
				fn from(v: $ty) -> Self {
					Self::Value(v.into_value())
				}
			}
		)*
	};
}

impl_simple_expr_from!(bool, i32, i64, u64, f32, f64, &str, String);

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_grouped_wraps() {
		let expr = SimpleExpr::from(1).grouped();
		assert!(matches!(expr, SimpleExpr::Grouping(_)));
	}

	#[rstest]
	fn test_binary_structure() {
		let expr = SimpleExpr::from(1).binary(BinOper::Add, 2);
		let SimpleExpr::Binary(lhs, op, rhs) = expr else {
			panic!("Expected Binary variant");
		};
		assert!(matches!(*lhs, SimpleExpr::Value(Value::Int(Some(1)))));
		assert_eq!(op, BinOper::Add);
		assert!(matches!(*rhs, SimpleExpr::Value(Value::Int(Some(2)))));
	}

	#[rstest]
	fn test_has_deferred_nested() {
		let deferred = SimpleExpr::Deferred(DeferredValue::Named("date".into()));
		let expr = SimpleExpr::from(1).binary(BinOper::Equal, deferred).grouped();
		assert!(expr.has_deferred());
	}

	#[rstest]
	fn test_has_deferred_absent() {
		let expr = SimpleExpr::from(1).binary(BinOper::Equal, 2);
		assert!(!expr.has_deferred());
	}
}
