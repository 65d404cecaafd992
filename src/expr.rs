//! Expression building.
//!
//! This module provides the expression AST ([`SimpleExpr`]), the fluent
//! builder ([`Expr`]) with comparison and arithmetic methods
//! ([`ExprTrait`]), deferred operands ([`DeferredValue`]) whose concrete
//! value is only known at execution time, and aggregate function helpers
//! ([`Func`]).

mod deferred;
mod expr_trait;
mod func;
mod simple_expr;

pub use deferred::{DeferredFn, DeferredValue};
pub use expr_trait::ExprTrait;
pub use func::Func;
pub use simple_expr::{Keyword, SimpleExpr};

use crate::context::QueryContext;
use crate::types::{IntoColumnRef, IntoIden};
use crate::value::{IntoValue, Value};

/// Expression builder.
///
/// `Expr` provides static constructors for expressions; comparison and
/// arithmetic chaining comes from [`ExprTrait`].
///
/// # Example
///
/// ```rust
/// use querydef::expr::{Expr, ExprTrait};
///
/// // posts.title = 'test'
/// let cond = Expr::tbl("posts", "title").eq("test");
///
/// // id + id
/// let math = Expr::col("id").add(Expr::col("id"));
/// ```
#[derive(Debug, Clone)]
pub struct Expr(SimpleExpr);

impl Expr {
	/// Create an expression from a column reference.
	pub fn col<C>(col: C) -> Self
	where
		C: IntoColumnRef,
	{
		Self(SimpleExpr::Column(col.into_column_ref()))
	}

	/// Create a table-qualified column expression.
	pub fn tbl<T, C>(table: T, col: C) -> Self
	where
		T: IntoIden,
		C: IntoIden,
	{
		Self(SimpleExpr::Column(crate::types::ColumnRef::TableColumn(
			table.into_iden(),
			col.into_iden(),
		)))
	}

	/// Create a value expression.
	pub fn val<V>(val: V) -> Self
	where
		V: IntoValue,
	{
		Self(SimpleExpr::Value(val.into_value()))
	}

	/// Create a deferred named reference.
	///
	/// The name is looked up as a registered helper on the execution
	/// context when the containing condition is included in a tree —
	/// never at declaration time.
	///
	/// # Example
	///
	/// ```rust
	/// use querydef::expr::{Expr, ExprTrait};
	///
	/// // resolved by invoking the `date` helper at execution time
	/// let cond = Expr::tbl("posts", "created_at").gte(Expr::deferred("date"));
	/// ```
	pub fn deferred<S: Into<String>>(name: S) -> Self {
		Self(SimpleExpr::Deferred(DeferredValue::Named(name.into())))
	}

	/// Create a deferred callback evaluated against the execution context.
	///
	/// The callback runs when the containing condition is included in a
	/// tree, with access to the runtime options.
	///
	/// # Example
	///
	/// ```rust
	/// use querydef::expr::{Expr, ExprTrait};
	/// use querydef::value::Value;
	///
	/// let cond = Expr::tbl("posts", "created_at")
	/// 	.gte(Expr::from_context(|ctx| ctx.option_or_null("date")));
	/// ```
	pub fn from_context<F>(f: F) -> Self
	where
		F: Fn(&QueryContext) -> Value + Send + Sync + 'static,
	{
		Self(SimpleExpr::Deferred(DeferredValue::callback(f)))
	}

	/// Create an asterisk expression (`*`).
	pub fn asterisk() -> Self {
		Self(SimpleExpr::Asterisk)
	}

	/// Create a NULL constant expression.
	pub fn null() -> Self {
		Self(SimpleExpr::Constant(Keyword::Null))
	}

	/// Convert this `Expr` into a [`SimpleExpr`].
	#[must_use]
	pub fn into_simple_expr(self) -> SimpleExpr {
		self.0
	}

	/// Get a reference to the underlying [`SimpleExpr`].
	#[must_use]
	pub fn as_simple_expr(&self) -> &SimpleExpr {
		&self.0
	}
}

impl From<Expr> for SimpleExpr {
	fn from(e: Expr) -> Self {
		e.0
	}
}

impl From<SimpleExpr> for Expr {
	fn from(e: SimpleExpr) -> Self {
		Self(e)
	}
}

impl ExprTrait for Expr {
	fn into_simple_expr(self) -> SimpleExpr {
		self.0
	}
}

impl ExprTrait for SimpleExpr {
	fn into_simple_expr(self) -> SimpleExpr {
		self
	}
}
