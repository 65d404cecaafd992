use crate::expr::SimpleExpr;
use crate::types::LogicalChainOper;

/// A single conditional expression declaration.
#[derive(Debug, Clone)]
pub struct ConditionLeaf {
	pub expr: SimpleExpr,
	pub combinator: LogicalChainOper,
	pub include_if: Option<String>,
}

/// A nested group of conditional declarations, rendered parenthesized.
#[derive(Debug, Clone)]
pub struct ConditionGroup {
	pub decls: Vec<ConditionDecl>,
	pub combinator: LogicalChainOper,
	pub include_if: Option<String>,
}

/// One entry in a definition's condition list.
///
/// Each declaration carries the combinator that attaches it to the
/// conditions before it, and optionally the name of an inclusion
/// predicate that gates it at execution time.
#[derive(Debug, Clone)]
pub enum ConditionDecl {
	Leaf(ConditionLeaf),
	Group(ConditionGroup),
}

impl ConditionDecl {
	pub fn leaf<E>(expr: E, combinator: LogicalChainOper) -> Self
	where
		E: Into<SimpleExpr>,
	{
		Self::Leaf(ConditionLeaf {
			expr: expr.into(),
			combinator,
			include_if: None,
		})
	}

	pub fn leaf_if<E, S>(expr: E, combinator: LogicalChainOper, predicate: S) -> Self
	where
		E: Into<SimpleExpr>,
		S: Into<String>,
	{
		Self::Leaf(ConditionLeaf {
			expr: expr.into(),
			combinator,
			include_if: Some(predicate.into()),
		})
	}

	pub fn combinator(&self) -> LogicalChainOper {
		match self {
			Self::Leaf(leaf) => leaf.combinator,
			Self::Group(group) => group.combinator,
		}
	}

	pub fn include_if(&self) -> Option<&str> {
		match self {
			Self::Leaf(leaf) => leaf.include_if.as_deref(),
			Self::Group(group) => group.include_if.as_deref(),
		}
	}
}

/// Builder for a nested condition group.
///
/// Handed to the closure of a `where_group` / `wor_group` declaration to
/// collect the group's members in order.
///
/// ```rust
/// use querydef::conditions::GroupBuilder;
/// use querydef::expr::{Expr, ExprTrait};
///
/// let mut group = GroupBuilder::new();
/// group
/// 	.where_(Expr::col("hits").gt(100))
/// 	.wor(Expr::col("pinned").eq(true));
/// ```
#[derive(Debug, Default)]
pub struct GroupBuilder {
	decls: Vec<ConditionDecl>,
}

impl GroupBuilder {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// AND-attach a condition.
	pub fn where_<E>(&mut self, expr: E) -> &mut Self
	where
		E: Into<SimpleExpr>,
	{
		self.decls
			.push(ConditionDecl::leaf(expr, LogicalChainOper::And));
		self
	}

	/// OR-attach a condition.
	pub fn wor<E>(&mut self, expr: E) -> &mut Self
	where
		E: Into<SimpleExpr>,
	{
		self.decls
			.push(ConditionDecl::leaf(expr, LogicalChainOper::Or));
		self
	}

	/// AND-attach a condition gated by a named inclusion predicate.
	pub fn where_if<E, S>(&mut self, expr: E, predicate: S) -> &mut Self
	where
		E: Into<SimpleExpr>,
		S: Into<String>,
	{
		self.decls
			.push(ConditionDecl::leaf_if(expr, LogicalChainOper::And, predicate));
		self
	}

	/// OR-attach a condition gated by a named inclusion predicate.
	pub fn wor_if<E, S>(&mut self, expr: E, predicate: S) -> &mut Self
	where
		E: Into<SimpleExpr>,
		S: Into<String>,
	{
		self.decls
			.push(ConditionDecl::leaf_if(expr, LogicalChainOper::Or, predicate));
		self
	}

	/// AND-attach a nested group.
	pub fn where_group<F>(&mut self, f: F) -> &mut Self
	where
		F: FnOnce(&mut GroupBuilder),
	{
		self.push_group(f, LogicalChainOper::And, None);
		self
	}

	/// OR-attach a nested group.
	pub fn wor_group<F>(&mut self, f: F) -> &mut Self
	where
		F: FnOnce(&mut GroupBuilder),
	{
		self.push_group(f, LogicalChainOper::Or, None);
		self
	}

	/// AND-attach a nested group gated by a named inclusion predicate.
	pub fn where_group_if<F, S>(&mut self, f: F, predicate: S) -> &mut Self
	where
		F: FnOnce(&mut GroupBuilder),
		S: Into<String>,
	{
		self.push_group(f, LogicalChainOper::And, Some(predicate.into()));
		self
	}

	/// OR-attach a nested group gated by a named inclusion predicate.
	pub fn wor_group_if<F, S>(&mut self, f: F, predicate: S) -> &mut Self
	where
		F: FnOnce(&mut GroupBuilder),
		S: Into<String>,
	{
		self.push_group(f, LogicalChainOper::Or, Some(predicate.into()));
		self
	}

	fn push_group<F>(&mut self, f: F, combinator: LogicalChainOper, include_if: Option<String>)
	where
		F: FnOnce(&mut GroupBuilder),
	{
		let mut inner = GroupBuilder::new();
		f(&mut inner);
		self.decls.push(ConditionDecl::Group(ConditionGroup {
			decls: inner.decls,
			combinator,
			include_if,
		}));
	}

	pub(crate) fn into_decls(self) -> Vec<ConditionDecl> {
		self.decls
	}
}
