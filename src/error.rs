//! Error types for query definition and execution.

/// Errors raised while declaring or executing a query definition.
///
/// Declaration-time errors ([`Error::InvalidResource`], [`Error::UnknownColumn`],
/// [`Error::UnknownAssociation`]) fail fast while the definition is being
/// built. Execution-time errors ([`Error::UnresolvedReference`]) surface out
/// of [`QueryDef::execute`](crate::definition::QueryDef::execute).
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The declared primary resource is not a valid queryable entity.
	#[error("invalid resource `{table}`: {reason}")]
	InvalidResource {
		/// Table name of the offending resource
		table: String,
		/// Why the resource was rejected
		reason: String,
	},

	/// A column accessor referenced a column the resource does not have.
	#[error("unknown column `{column}` on table `{table}`")]
	UnknownColumn {
		/// Table the lookup ran against
		table: String,
		/// The missing column name
		column: String,
	},

	/// A join or joined-column accessor referenced an association that was
	/// never registered on the resource.
	#[error("unknown association `{0}`")]
	UnknownAssociation(String),

	/// A deferred reference or inclusion predicate named a helper that is
	/// not registered on the execution context.
	#[error("no `{0}` helper is registered on the execution context")]
	UnresolvedReference(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
