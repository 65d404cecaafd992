use super::SimpleExpr;
use crate::types::Alias;
use crate::types::IntoIden;

/// Aggregate function helpers.
///
/// ```rust
/// use querydef::expr::{Expr, Func};
///
/// let agg = Func::count(Expr::col("id"));
/// ```
#[derive(Debug, Clone)]
pub struct Func;

impl Func {
	fn call<E>(name: &str, arg: E) -> SimpleExpr
	where
		E: Into<SimpleExpr>,
	{
		SimpleExpr::FunctionCall(Alias::new(name).into_iden(), vec![arg.into()])
	}

	pub fn count<E: Into<SimpleExpr>>(expr: E) -> SimpleExpr {
		Self::call("COUNT", expr)
	}

	pub fn sum<E: Into<SimpleExpr>>(expr: E) -> SimpleExpr {
		Self::call("SUM", expr)
	}

	pub fn avg<E: Into<SimpleExpr>>(expr: E) -> SimpleExpr {
		Self::call("AVG", expr)
	}

	pub fn min<E: Into<SimpleExpr>>(expr: E) -> SimpleExpr {
		Self::call("MIN", expr)
	}

	pub fn max<E: Into<SimpleExpr>>(expr: E) -> SimpleExpr {
		Self::call("MAX", expr)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::expr::Expr;
	use rstest::rstest;

	#[rstest]
	#[case(Func::count(Expr::col("id")), "COUNT")]
	#[case(Func::sum(Expr::col("hits")), "SUM")]
	#[case(Func::avg(Expr::col("hits")), "AVG")]
	#[case(Func::min(Expr::col("id")), "MIN")]
	#[case(Func::max(Expr::col("id")), "MAX")]
	fn test_function_name(#[case] expr: SimpleExpr, #[case] expected: &str) {
		let SimpleExpr::FunctionCall(name, args) = expr else {
			panic!("Expected FunctionCall variant");
		};
		assert_eq!(name.unquoted(), expected);
		assert_eq!(args.len(), 1);
	}
}
