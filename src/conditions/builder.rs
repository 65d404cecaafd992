use tracing::debug;

use super::{ConditionDecl, ConditionGroup};
use crate::context::QueryContext;
use crate::error::Result;
use crate::expr::SimpleExpr;
use crate::resolver::ExpressionResolver;

/// Assembles condition declarations into a single expression tree.
///
/// Declarations are combined strictly left to right: each included
/// declaration attaches to everything before it via its own combinator,
/// so `a WOR b AND c` reads `(a OR b) AND c`. Nested groups are built
/// recursively and parenthesized; the whole result is parenthesized too.
///
/// Declarations whose inclusion predicate evaluates false are skipped
/// entirely, and their deferred operands are never resolved.
pub struct ConditionTreeBuilder<'a> {
	context: &'a QueryContext,
}

impl<'a> ConditionTreeBuilder<'a> {
	pub fn new(context: &'a QueryContext) -> Self {
		Self { context }
	}

	/// Build the condition tree for `decls`.
	///
	/// Returns `Ok(None)` when no declaration is included.
	///
	/// # Errors
	///
	/// Fails when an inclusion predicate or a deferred operand names an
	/// unregistered helper.
	pub fn build(&self, decls: &[ConditionDecl]) -> Result<Option<SimpleExpr>> {
		let mut acc: Option<SimpleExpr> = None;
		for decl in decls {
			if let Some(predicate) = decl.include_if() {
				if !self.context.check(predicate)? {
					debug!(predicate, "skipping excluded condition");
					continue;
				}
			}
			let piece = match decl {
				ConditionDecl::Leaf(leaf) => {
					ExpressionResolver::new(self.context).resolve(&leaf.expr)?
				}
				ConditionDecl::Group(group) => match self.build_group(group)? {
					Some(expr) => expr,
					None => continue,
				},
			};
			acc = Some(match acc {
				None => piece,
				Some(prev) => prev.binary(decl.combinator().into(), piece),
			});
		}
		Ok(acc.map(SimpleExpr::grouped))
	}

	// a group's members combine exactly like top-level declarations,
	// and the result arrives already parenthesized
	fn build_group(&self, group: &ConditionGroup) -> Result<Option<SimpleExpr>> {
		self.build(&group.decls)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::context::{HelperFn, Options, PredicateFn};
	use crate::error::Error;
	use crate::expr::{Expr, ExprTrait};
	use crate::types::BinOper;
	use crate::value::Value;
	use std::collections::HashMap;
	use std::sync::Arc;

	use crate::conditions::GroupBuilder;
	use rstest::rstest;

	fn context(options: Options, predicates: Vec<(&str, PredicateFn)>) -> QueryContext {
		let helpers: HashMap<String, HelperFn> = HashMap::from([(
			"date".to_owned(),
			Arc::new(|ctx: &QueryContext| ctx.option_or_null("date")) as HelperFn,
		)]);
		QueryContext::new(
			options,
			helpers,
			predicates
				.into_iter()
				.map(|(k, v)| (k.to_owned(), v))
				.collect(),
		)
	}

	fn unwrap_grouping(expr: SimpleExpr) -> SimpleExpr {
		let SimpleExpr::Grouping(inner) = expr else {
			panic!("Expected outer Grouping");
		};
		*inner
	}

	#[rstest]
	fn test_empty_declarations_build_none() {
		let ctx = context(Options::new(), vec![]);
		let tree = ConditionTreeBuilder::new(&ctx).build(&[]).unwrap();
		assert!(tree.is_none());
	}

	#[rstest]
	fn test_single_condition_is_parenthesized() {
		let ctx = context(Options::new(), vec![]);
		let group = {
			let mut g = GroupBuilder::new();
			g.where_(Expr::col("a").eq(1));
			g
		};
		let tree = ConditionTreeBuilder::new(&ctx)
			.build(&group.into_decls())
			.unwrap()
			.unwrap();
		let inner = unwrap_grouping(tree);
		assert!(matches!(inner, SimpleExpr::Binary(_, BinOper::Equal, _)));
	}

	#[rstest]
	fn test_left_to_right_combination() {
		// a WOR b AND c reads (a OR b) AND c
		let ctx = context(Options::new(), vec![]);
		let group = {
			let mut g = GroupBuilder::new();
			g.where_(Expr::col("a").eq(1))
				.wor(Expr::col("b").eq(2))
				.where_(Expr::col("c").eq(3));
			g
		};
		let tree = ConditionTreeBuilder::new(&ctx)
			.build(&group.into_decls())
			.unwrap()
			.unwrap();
		let SimpleExpr::Binary(lhs, BinOper::And, _) = unwrap_grouping(tree) else {
			panic!("Expected AND at the top");
		};
		assert!(matches!(*lhs, SimpleExpr::Binary(_, BinOper::Or, _)));
	}

	#[rstest]
	fn test_excluded_condition_is_skipped() {
		let ctx = context(
			Options::new(),
			vec![(
				"with_date",
				Arc::new(|ctx: &QueryContext| ctx.option("date").is_some()) as PredicateFn,
			)],
		);
		let group = {
			let mut g = GroupBuilder::new();
			g.where_(Expr::col("a").eq(1))
				// deferred operand must never resolve when excluded
				.where_if(Expr::col("created_at").gte(Expr::deferred("missing")), "with_date");
			g
		};
		let tree = ConditionTreeBuilder::new(&ctx)
			.build(&group.into_decls())
			.unwrap()
			.unwrap();
		assert!(matches!(
			unwrap_grouping(tree),
			SimpleExpr::Binary(_, BinOper::Equal, _)
		));
	}

	#[rstest]
	fn test_included_condition_resolves_deferred() {
		let ctx = context(
			Options::new().set("date", "2024-01-01"),
			vec![(
				"with_date",
				Arc::new(|ctx: &QueryContext| ctx.option("date").is_some()) as PredicateFn,
			)],
		);
		let group = {
			let mut g = GroupBuilder::new();
			g.where_if(Expr::col("created_at").gte(Expr::deferred("date")), "with_date");
			g
		};
		let tree = ConditionTreeBuilder::new(&ctx)
			.build(&group.into_decls())
			.unwrap()
			.unwrap();
		assert!(!tree.has_deferred());
	}

	#[rstest]
	fn test_all_excluded_builds_none() {
		let ctx = context(
			Options::new(),
			vec![("never", Arc::new(|_: &QueryContext| false) as PredicateFn)],
		);
		let group = {
			let mut g = GroupBuilder::new();
			g.where_if(Expr::col("a").eq(1), "never")
				.wor_if(Expr::col("b").eq(2), "never");
			g
		};
		let tree = ConditionTreeBuilder::new(&ctx)
			.build(&group.into_decls())
			.unwrap();
		assert!(tree.is_none());
	}

	#[rstest]
	fn test_nested_group_is_parenthesized() {
		let ctx = context(Options::new(), vec![]);
		let group = {
			let mut g = GroupBuilder::new();
			g.where_(Expr::col("a").eq(1)).wor_group(|inner| {
				inner.where_(Expr::col("b").eq(2)).wor(Expr::col("c").eq(3));
			});
			g
		};
		let tree = ConditionTreeBuilder::new(&ctx)
			.build(&group.into_decls())
			.unwrap()
			.unwrap();
		let SimpleExpr::Binary(_, BinOper::Or, rhs) = unwrap_grouping(tree) else {
			panic!("Expected OR at the top");
		};
		assert!(matches!(*rhs, SimpleExpr::Grouping(_)));
	}

	#[rstest]
	fn test_empty_nested_group_is_skipped() {
		let ctx = context(
			Options::new(),
			vec![("never", Arc::new(|_: &QueryContext| false) as PredicateFn)],
		);
		let group = {
			let mut g = GroupBuilder::new();
			g.where_(Expr::col("a").eq(1)).wor_group(|inner| {
				inner.where_if(Expr::col("b").eq(2), "never");
			});
			g
		};
		let tree = ConditionTreeBuilder::new(&ctx)
			.build(&group.into_decls())
			.unwrap()
			.unwrap();
		assert!(matches!(
			unwrap_grouping(tree),
			SimpleExpr::Binary(_, BinOper::Equal, _)
		));
	}

	#[rstest]
	fn test_unregistered_predicate_fails() {
		let ctx = context(Options::new(), vec![]);
		let group = {
			let mut g = GroupBuilder::new();
			g.where_if(Expr::col("a").eq(1), "missing");
			g
		};
		let err = ConditionTreeBuilder::new(&ctx)
			.build(&group.into_decls())
			.unwrap_err();
		assert!(matches!(err, Error::UnresolvedReference(_)));
	}

	#[rstest]
	fn test_excluded_group_members_never_evaluated() {
		let ctx = context(
			Options::new(),
			vec![("never", Arc::new(|_: &QueryContext| false) as PredicateFn)],
		);
		let group = {
			let mut g = GroupBuilder::new();
			g.where_(Expr::col("a").eq(Value::Int(Some(1))))
				.where_group_if(
					|inner| {
						inner.where_(Expr::col("x").eq(Expr::deferred("missing")));
					},
					"never",
				);
			g
		};
		assert!(
			ConditionTreeBuilder::new(&ctx)
				.build(&group.into_decls())
				.is_ok()
		);
	}
}
