//! Query definitions.
//!
//! A [`QueryDef`] collects declarations (selects, orders, joins,
//! conditions and so on) against a [`Resource`] and assembles them into a
//! [`SelectStatement`] at execution time. Definitions use interior
//! mutability so they can be built inside lazily-initialized statics and
//! shared across threads; a definition can extend a parent, inheriting
//! all of its declarations.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::backend::QueryBuilder;
use crate::collector::DeclarationStack;
use crate::conditions::{ConditionDecl, ConditionTreeBuilder, GroupBuilder};
use crate::context::{HelperFn, Options, PredicateFn, QueryContext};
use crate::error::Result;
use crate::expr::{Expr, SimpleExpr};
use crate::query::SelectStatement;
use crate::resolver::ExpressionResolver;
use crate::resource::Resource;
use crate::types::{ColumnRef, JoinType, LogicalChainOper, Order, OrderExpr};
use crate::value::{Value, Values};

/// A declarative query definition.
///
/// Declarations accumulate in the order they are made; assembly applies
/// them in a fixed feature order regardless of declaration order, with
/// LIMIT and OFFSET taking the most recent declaration across the
/// inheritance chain.
///
/// ```rust
/// use querydef::definition::QueryDef;
/// use querydef::resource::Resource;
/// use querydef::types::Order;
///
/// # fn demo() -> querydef::Result<()> {
/// let posts = Resource::new("posts").columns(["id", "title", "hits"]);
/// let query = QueryDef::from_resource(posts)?;
/// query
/// 	.select(["id", "title"])?
/// 	.order_by("id", Order::Desc)?
/// 	.limit(10);
/// # Ok(())
/// # }
/// ```
pub struct QueryDef {
	resource: Resource,
	parent: Option<Arc<QueryDef>>,
	selects: DeclarationStack<SimpleExpr>,
	orders: DeclarationStack<OrderExpr>,
	limits: DeclarationStack<u64>,
	offsets: DeclarationStack<u64>,
	joins: DeclarationStack<String>,
	left_joins: DeclarationStack<String>,
	groups: DeclarationStack<SimpleExpr>,
	havings: DeclarationStack<SimpleExpr>,
	conditions: DeclarationStack<ConditionDecl>,
	helpers: RwLock<HashMap<String, HelperFn>>,
	predicates: RwLock<HashMap<String, PredicateFn>>,
}

impl QueryDef {
	/// Create a definition over a resource.
	///
	/// # Errors
	///
	/// Fails when the resource description is invalid.
	pub fn from_resource(resource: Resource) -> Result<Self> {
		resource.validate()?;
		Ok(Self::empty(resource, None))
	}

	/// Create a definition extending a parent.
	///
	/// The child inherits every declaration of the parent chain; its own
	/// declarations apply after inherited ones.
	pub fn extending(parent: Arc<QueryDef>) -> Self {
		let resource = parent.resource.clone();
		Self::empty(resource, Some(parent))
	}

	fn empty(resource: Resource, parent: Option<Arc<QueryDef>>) -> Self {
		Self {
			resource,
			parent,
			selects: DeclarationStack::new(),
			orders: DeclarationStack::new(),
			limits: DeclarationStack::new(),
			offsets: DeclarationStack::new(),
			joins: DeclarationStack::new(),
			left_joins: DeclarationStack::new(),
			groups: DeclarationStack::new(),
			havings: DeclarationStack::new(),
			conditions: DeclarationStack::new(),
			helpers: RwLock::new(HashMap::new()),
			predicates: RwLock::new(HashMap::new()),
		}
	}

	pub fn resource(&self) -> &Resource {
		&self.resource
	}

	/// A table-qualified column expression, checked against the resource.
	///
	/// # Errors
	///
	/// Fails when the column is not registered on the resource.
	pub fn col(&self, name: &str) -> Result<Expr> {
		let column = self.resource.column(name)?;
		Ok(Expr::tbl(self.resource.table(), column))
	}

	/// A column expression on a joined association's table.
	///
	/// # Errors
	///
	/// Fails when the association is not registered on the resource.
	pub fn joined_col(&self, association: &str, name: &str) -> Result<Expr> {
		let assoc = self.resource.find_association(association)?;
		Ok(Expr::tbl(assoc.target_table.as_str(), name))
	}

	/// Declare selected columns, checked against the resource.
	///
	/// # Errors
	///
	/// Fails when a column is not registered on the resource.
	pub fn select<'a, I>(&self, columns: I) -> Result<&Self>
	where
		I: IntoIterator<Item = &'a str>,
	{
		let mut batch = Vec::new();
		for name in columns {
			batch.push(self.col(name)?.into_simple_expr());
		}
		self.selects.add(batch);
		Ok(self)
	}

	/// Declare a selected expression, e.g. an aggregate or arithmetic.
	pub fn select_expr<E: Into<SimpleExpr>>(&self, expr: E) -> &Self {
		self.selects.add_one(expr.into());
		self
	}

	/// Declare an ordering on a resource column.
	///
	/// # Errors
	///
	/// Fails when the column is not registered on the resource.
	pub fn order_by(&self, column: &str, order: Order) -> Result<&Self> {
		let expr = self.col(column)?;
		self.orders.add_one(OrderExpr::new(expr, order));
		Ok(self)
	}

	/// Declare an ordering on an arbitrary expression.
	pub fn order_by_expr<E: Into<SimpleExpr>>(&self, expr: E, order: Order) -> &Self {
		self.orders.add_one(OrderExpr::new(expr, order));
		self
	}

	/// Declare a row limit. The most recent declaration wins.
	pub fn limit(&self, limit: u64) -> &Self {
		self.limits.add_one(limit);
		self
	}

	/// Declare a row offset. The most recent declaration wins.
	pub fn offset(&self, offset: u64) -> &Self {
		self.offsets.add_one(offset);
		self
	}

	/// Declare an inner join through an association.
	///
	/// # Errors
	///
	/// Fails when the association is not registered on the resource.
	pub fn join(&self, association: &str) -> Result<&Self> {
		self.resource.find_association(association)?;
		self.joins.add_one(association.to_owned());
		Ok(self)
	}

	/// Declare a left outer join through an association.
	///
	/// # Errors
	///
	/// Fails when the association is not registered on the resource.
	pub fn left_outer_join(&self, association: &str) -> Result<&Self> {
		self.resource.find_association(association)?;
		self.left_joins.add_one(association.to_owned());
		Ok(self)
	}

	/// Declare a grouping on a resource column.
	///
	/// # Errors
	///
	/// Fails when the column is not registered on the resource.
	pub fn group_by(&self, column: &str) -> Result<&Self> {
		let expr = self.col(column)?;
		self.groups.add_one(expr.into_simple_expr());
		Ok(self)
	}

	/// Declare a HAVING condition.
	pub fn having<E: Into<SimpleExpr>>(&self, expr: E) -> &Self {
		self.havings.add_one(expr.into());
		self
	}

	/// AND-attach a condition.
	pub fn where_<E: Into<SimpleExpr>>(&self, expr: E) -> &Self {
		self.conditions
			.add_one(ConditionDecl::leaf(expr, LogicalChainOper::And));
		self
	}

	/// OR-attach a condition.
	pub fn wor<E: Into<SimpleExpr>>(&self, expr: E) -> &Self {
		self.conditions
			.add_one(ConditionDecl::leaf(expr, LogicalChainOper::Or));
		self
	}

	/// AND-attach a condition gated by a named inclusion predicate.
	pub fn where_if<E, S>(&self, expr: E, predicate: S) -> &Self
	where
		E: Into<SimpleExpr>,
		S: Into<String>,
	{
		self.conditions
			.add_one(ConditionDecl::leaf_if(expr, LogicalChainOper::And, predicate));
		self
	}

	/// OR-attach a condition gated by a named inclusion predicate.
	pub fn wor_if<E, S>(&self, expr: E, predicate: S) -> &Self
	where
		E: Into<SimpleExpr>,
		S: Into<String>,
	{
		self.conditions
			.add_one(ConditionDecl::leaf_if(expr, LogicalChainOper::Or, predicate));
		self
	}

	/// AND-attach a parenthesized group of conditions.
	pub fn where_group<F>(&self, f: F) -> &Self
	where
		F: FnOnce(&mut GroupBuilder),
	{
		let mut group = GroupBuilder::new();
		group.where_group(f);
		self.conditions.add(group.into_decls());
		self
	}

	/// OR-attach a parenthesized group of conditions.
	pub fn wor_group<F>(&self, f: F) -> &Self
	where
		F: FnOnce(&mut GroupBuilder),
	{
		let mut group = GroupBuilder::new();
		group.wor_group(f);
		self.conditions.add(group.into_decls());
		self
	}

	/// AND-attach a condition group gated by a named inclusion predicate.
	pub fn where_group_if<F, S>(&self, f: F, predicate: S) -> &Self
	where
		F: FnOnce(&mut GroupBuilder),
		S: Into<String>,
	{
		let mut group = GroupBuilder::new();
		group.where_group_if(f, predicate);
		self.conditions.add(group.into_decls());
		self
	}

	/// OR-attach a condition group gated by a named inclusion predicate.
	pub fn wor_group_if<F, S>(&self, f: F, predicate: S) -> &Self
	where
		F: FnOnce(&mut GroupBuilder),
		S: Into<String>,
	{
		let mut group = GroupBuilder::new();
		group.wor_group_if(f, predicate);
		self.conditions.add(group.into_decls());
		self
	}

	/// Register a named helper for deferred operands.
	///
	/// A helper registered on a child shadows one of the same name on
	/// the parent chain.
	pub fn helper<S, F>(&self, name: S, f: F) -> &Self
	where
		S: Into<String>,
		F: Fn(&QueryContext) -> Value + Send + Sync + 'static,
	{
		self.helpers.write().insert(name.into(), Arc::new(f));
		self
	}

	/// Register a named inclusion predicate.
	pub fn predicate<S, F>(&self, name: S, f: F) -> &Self
	where
		S: Into<String>,
		F: Fn(&QueryContext) -> bool + Send + Sync + 'static,
	{
		self.predicates.write().insert(name.into(), Arc::new(f));
		self
	}

	/// Assemble the definition into a statement for one execution.
	///
	/// Features apply in a fixed order regardless of declaration order:
	/// select, order, limit, joins, left outer joins, group, offset,
	/// having, conditions.
	///
	/// # Errors
	///
	/// Fails when a deferred operand or inclusion predicate names an
	/// unregistered helper.
	pub fn assemble(&self, options: Options) -> Result<SelectStatement> {
		let context = self.build_context(options);
		let resolver = ExpressionResolver::new(&context);
		let mut stmt = SelectStatement::new();
		stmt.from(self.resource.table());

		for select in resolver.resolve_slice(&self.inherited(|d| d.selects.own()))? {
			stmt.expr(select);
		}
		for order in self.inherited(|d| d.orders.own()) {
			stmt.order_by_expr(resolver.resolve(&order.expr)?, order.order);
		}
		if let Some(limit) = self.inherited_last(|d| d.limits.own_last()) {
			stmt.limit(limit);
		}
		for name in self.inherited(|d| d.joins.own()) {
			stmt.join(JoinType::Inner, self.resource.find_association(&name)?.target_table.as_str(), self.join_on(&name)?);
		}
		for name in self.inherited(|d| d.left_joins.own()) {
			stmt.join(JoinType::LeftOuter, self.resource.find_association(&name)?.target_table.as_str(), self.join_on(&name)?);
		}
		for group in resolver.resolve_slice(&self.inherited(|d| d.groups.own()))? {
			stmt.groups.push(group);
		}
		if let Some(offset) = self.inherited_last(|d| d.offsets.own_last()) {
			stmt.offset(offset);
		}
		for having in resolver.resolve_slice(&self.inherited(|d| d.havings.own()))? {
			stmt.and_having(having);
		}
		let conditions = self.inherited(|d| d.conditions.own());
		if let Some(tree) = ConditionTreeBuilder::new(&context).build(&conditions)? {
			stmt.and_where(tree);
		}
		Ok(stmt)
	}

	/// Assemble and render with the given backend.
	///
	/// # Errors
	///
	/// Same failure modes as [`assemble`](Self::assemble).
	pub fn execute<B: QueryBuilder>(&self, options: Options, builder: &B) -> Result<(String, Values)> {
		let stmt = self.assemble(options)?;
		let (sql, values) = builder.build_select(&stmt);
		debug!(table = %self.resource.table(), %sql, params = values.len(), "assembled query");
		Ok((sql, values))
	}

	fn join_on(&self, association: &str) -> Result<(ColumnRef, ColumnRef)> {
		let assoc = self.resource.find_association(association)?;
		Ok((
			ColumnRef::table_column(self.resource.table(), assoc.owner_key.as_str()),
			ColumnRef::table_column(assoc.target_table.as_str(), assoc.target_key.as_str()),
		))
	}

	// walk the inheritance chain root-first so inherited declarations
	// come before the child's own
	fn chain(&self) -> Vec<&QueryDef> {
		let mut chain = Vec::new();
		let mut current = Some(self);
		while let Some(def) = current {
			chain.push(def);
			current = def.parent.as_deref();
		}
		chain.reverse();
		chain
	}

	fn inherited<T, F>(&self, f: F) -> Vec<T>
	where
		F: Fn(&QueryDef) -> Vec<T>,
	{
		self.chain().into_iter().flat_map(|d| f(d)).collect()
	}

	// last-wins kinds: the most derived definition with a declaration
	// provides the value
	fn inherited_last<T, F>(&self, f: F) -> Option<T>
	where
		F: Fn(&QueryDef) -> Option<T>,
	{
		let mut current = Some(self);
		while let Some(def) = current {
			if let Some(value) = f(def) {
				return Some(value);
			}
			current = def.parent.as_deref();
		}
		None
	}

	fn build_context(&self, options: Options) -> QueryContext {
		let mut helpers = HashMap::new();
		let mut predicates = HashMap::new();
		for def in self.chain() {
			helpers.extend(def.helpers.read().iter().map(|(k, v)| (k.clone(), v.clone())));
			predicates.extend(def.predicates.read().iter().map(|(k, v)| (k.clone(), v.clone())));
		}
		QueryContext::new(options, helpers, predicates)
	}
}

impl std::fmt::Debug for QueryDef {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("QueryDef")
			.field("table", &self.resource.table())
			.field("parent", &self.parent.as_ref().map(|p| p.resource.table().to_owned()))
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::backend::PostgresQueryBuilder;
	use crate::error::Error;
	use crate::expr::ExprTrait;
	use rstest::rstest;

	fn posts() -> Resource {
		Resource::new("posts")
			.columns(["id", "user_id", "title", "hits", "created_at"])
			.belongs_to("user", "users")
	}

	#[rstest]
	fn test_unknown_column_fails_at_declaration() {
		let query = QueryDef::from_resource(posts()).unwrap();
		assert!(matches!(
			query.select(["body"]),
			Err(Error::UnknownColumn { .. })
		));
	}

	#[rstest]
	fn test_unknown_association_fails_at_declaration() {
		let query = QueryDef::from_resource(posts()).unwrap();
		assert!(matches!(
			query.join("comments"),
			Err(Error::UnknownAssociation(_))
		));
	}

	#[rstest]
	fn test_limit_last_declaration_wins() {
		let query = QueryDef::from_resource(posts()).unwrap();
		query.limit(10).limit(25);
		let stmt = query.assemble(Options::new()).unwrap();
		assert_eq!(stmt.limit, Some(25));
	}

	#[rstest]
	fn test_child_limit_overrides_parent() {
		let parent = Arc::new(QueryDef::from_resource(posts()).unwrap());
		parent.limit(10);
		let child = QueryDef::extending(parent);
		child.limit(3);
		let stmt = child.assemble(Options::new()).unwrap();
		assert_eq!(stmt.limit, Some(3));
	}

	#[rstest]
	fn test_child_inherits_parent_declarations_first() {
		let parent = Arc::new(QueryDef::from_resource(posts()).unwrap());
		parent.select(["id"]).unwrap();
		let child = QueryDef::extending(parent);
		child.select(["title"]).unwrap();
		let stmt = child.assemble(Options::new()).unwrap();
		assert_eq!(stmt.selects.len(), 2);
	}

	#[rstest]
	fn test_join_on_association_keys() {
		let query = QueryDef::from_resource(posts()).unwrap();
		query.join("user").unwrap();
		let (sql, _) = query
			.execute(Options::new(), &PostgresQueryBuilder)
			.unwrap();
		assert!(sql.contains(
			"INNER JOIN \"users\" ON \"posts\".\"user_id\" = \"users\".\"id\""
		));
	}

	#[rstest]
	fn test_conditions_render_parenthesized() {
		let query = QueryDef::from_resource(posts()).unwrap();
		query.where_(query.col("hits").unwrap().gt(100));
		let (sql, values) = query
			.execute(Options::new(), &PostgresQueryBuilder)
			.unwrap();
		assert!(sql.ends_with("WHERE (\"posts\".\"hits\" > $1)"));
		assert_eq!(values.len(), 1);
	}

	#[rstest]
	fn test_helper_shadowing_child_wins() {
		let parent = Arc::new(QueryDef::from_resource(posts()).unwrap());
		parent.helper("marker", |_| Value::Int(Some(1)));
		let child = QueryDef::extending(parent);
		child.helper("marker", |_| Value::Int(Some(2)));
		child.where_(child.col("hits").unwrap().eq(Expr::deferred("marker")));
		let (_, values) = child
			.execute(Options::new(), &PostgresQueryBuilder)
			.unwrap();
		assert_eq!(values.0, vec![Value::Int(Some(2))]);
	}
}
