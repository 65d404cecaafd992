//! Declarative query definitions.
//!
//! `querydef` lets applications describe SQL SELECT queries as reusable
//! definitions: ordered declarations of selected columns, orderings,
//! joins, groupings and conditions against a described resource, with
//! operands that stay symbolic until execution time. A definition is
//! built once (typically in a lazily-initialized static), optionally
//! extends a parent definition, and renders per execution with runtime
//! options through a dialect backend.
//!
//! # Example
//!
//! ```rust
//! use querydef::backend::PostgresQueryBuilder;
//! use querydef::context::Options;
//! use querydef::definition::QueryDef;
//! use querydef::expr::{Expr, ExprTrait};
//! use querydef::resource::Resource;
//! use querydef::types::Order;
//!
//! # fn demo() -> querydef::Result<()> {
//! let posts = Resource::new("posts").columns(["id", "title", "hits", "created_at"]);
//! let query = QueryDef::from_resource(posts)?;
//! query
//! 	.select(["id", "title"])?
//! 	.order_by("id", Order::Desc)?
//! 	.where_(query.col("hits")?.gt(100))
//! 	.where_if(
//! 		query.col("created_at")?.gte(Expr::deferred("date")),
//! 		"with_date",
//! 	)
//! 	.helper("date", |ctx| ctx.option_or_null("date"))
//! 	.predicate("with_date", |ctx| ctx.option("date").is_some());
//!
//! let (sql, params) = query.execute(
//! 	Options::new().set("date", "2024-01-01"),
//! 	&PostgresQueryBuilder,
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod collector;
pub mod conditions;
pub mod context;
pub mod definition;
pub mod error;
pub mod expr;
pub mod query;
pub mod resolver;
pub mod resource;
pub mod types;
pub mod value;

pub use error::{Error, Result};

/// Commonly used items.
pub mod prelude {
	pub use crate::backend::{PostgresQueryBuilder, QueryBuilder, SqliteQueryBuilder};
	pub use crate::conditions::GroupBuilder;
	pub use crate::context::{Options, QueryContext};
	pub use crate::definition::QueryDef;
	pub use crate::error::{Error, Result};
	pub use crate::expr::{Expr, ExprTrait, Func, SimpleExpr};
	pub use crate::query::SelectStatement;
	pub use crate::resource::{Association, Resource};
	pub use crate::types::{Alias, ColumnRef, Order};
	pub use crate::value::{IntoValue, Value, Values};
}
