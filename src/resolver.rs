//! Deferred operand resolution.
//!
//! [`ExpressionResolver`] walks an expression tree and replaces every
//! [`SimpleExpr::Deferred`] operand with a concrete value drawn from the
//! execution context. Resolution happens once per execution, after
//! condition trees are assembled and before rendering.

use tracing::debug;

use crate::context::QueryContext;
use crate::error::Result;
use crate::expr::{DeferredValue, SimpleExpr};

/// Resolves deferred operands against an execution context.
pub struct ExpressionResolver<'a> {
	context: &'a QueryContext,
}

impl<'a> ExpressionResolver<'a> {
	pub fn new(context: &'a QueryContext) -> Self {
		Self { context }
	}

	/// Resolve every deferred operand in `expr`, returning a tree with
	/// only concrete operands.
	///
	/// # Errors
	///
	/// Returns [`Error::UnresolvedReference`](crate::Error::UnresolvedReference)
	/// when a named deferred operand has no registered helper.
	pub fn resolve(&self, expr: &SimpleExpr) -> Result<SimpleExpr> {
		match expr {
			SimpleExpr::Deferred(DeferredValue::Named(name)) => {
				debug!(helper = %name, "resolving deferred operand");
				Ok(SimpleExpr::Value(self.context.invoke(name)?))
			}
			SimpleExpr::Deferred(DeferredValue::Callback(f)) => {
				Ok(SimpleExpr::Value(f(self.context)))
			}
			SimpleExpr::Binary(lhs, op, rhs) => Ok(SimpleExpr::Binary(
				Box::new(self.resolve(lhs)?),
				*op,
				Box::new(self.resolve(rhs)?),
			)),
			SimpleExpr::FunctionCall(name, args) => Ok(SimpleExpr::FunctionCall(
				name.clone(),
				self.resolve_slice(args)?,
			)),
			SimpleExpr::Tuple(items) => Ok(SimpleExpr::Tuple(self.resolve_slice(items)?)),
			SimpleExpr::Grouping(inner) => {
				Ok(SimpleExpr::Grouping(Box::new(self.resolve(inner)?)))
			}
			SimpleExpr::Column(_)
			| SimpleExpr::Value(_)
			| SimpleExpr::Constant(_)
			| SimpleExpr::Asterisk => Ok(expr.clone()),
		}
	}

	/// Resolve a slice of expressions in order.
	pub fn resolve_slice(&self, exprs: &[SimpleExpr]) -> Result<Vec<SimpleExpr>> {
		exprs.iter().map(|e| self.resolve(e)).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::context::{HelperFn, Options};
	use crate::error::Error;
	use crate::expr::{Expr, ExprTrait};
	use crate::value::Value;
	use std::collections::HashMap;
	use std::sync::Arc;

	use rstest::rstest;

	fn context(helpers: Vec<(&str, HelperFn)>) -> QueryContext {
		QueryContext::new(
			Options::new().set("date", "2024-01-01"),
			helpers
				.into_iter()
				.map(|(k, v)| (k.to_owned(), v))
				.collect(),
			HashMap::new(),
		)
	}

	#[rstest]
	fn test_resolves_named_deferred() {
		let ctx = context(vec![(
			"date",
			Arc::new(|ctx: &QueryContext| ctx.option_or_null("date")) as HelperFn,
		)]);
		let expr = Expr::col("created_at").gte(Expr::deferred("date"));
		let resolved = ExpressionResolver::new(&ctx).resolve(&expr).unwrap();
		assert!(!resolved.has_deferred());
		let SimpleExpr::Binary(_, _, rhs) = resolved else {
			panic!("Expected Binary variant");
		};
		assert!(matches!(*rhs, SimpleExpr::Value(Value::String(Some(_)))));
	}

	#[rstest]
	fn test_resolves_callback_deferred() {
		let ctx = context(vec![]);
		let expr = Expr::from_context(|_| Value::Int(Some(7))).into_simple_expr();
		let resolved = ExpressionResolver::new(&ctx).resolve(&expr).unwrap();
		assert!(matches!(resolved, SimpleExpr::Value(Value::Int(Some(7)))));
	}

	#[rstest]
	fn test_unregistered_helper_fails() {
		let ctx = context(vec![]);
		let expr = Expr::col("created_at").gte(Expr::deferred("missing"));
		let err = ExpressionResolver::new(&ctx).resolve(&expr).unwrap_err();
		assert!(matches!(err, Error::UnresolvedReference(name) if name == "missing"));
	}

	#[rstest]
	fn test_concrete_tree_passes_through() {
		let ctx = context(vec![]);
		let expr = Expr::col("a").eq(1).and(Expr::col("b").eq(2)).grouped();
		let resolved = ExpressionResolver::new(&ctx).resolve(&expr).unwrap();
		assert!(!resolved.has_deferred());
		assert!(matches!(resolved, SimpleExpr::Grouping(_)));
	}

	#[rstest]
	fn test_resolves_inside_tuple() {
		let ctx = context(vec![(
			"date",
			Arc::new(|ctx: &QueryContext| ctx.option_or_null("date")) as HelperFn,
		)]);
		let expr = Expr::col("created_at").is_in([
			Expr::deferred("date").into_simple_expr(),
			SimpleExpr::from("2024-02-01"),
		]);
		let resolved = ExpressionResolver::new(&ctx).resolve(&expr).unwrap();
		assert!(!resolved.has_deferred());
	}
}
