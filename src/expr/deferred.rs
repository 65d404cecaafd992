use std::fmt;
use std::sync::Arc;

use crate::context::QueryContext;
use crate::value::Value;

/// Callback resolved against the execution context.
pub type DeferredFn = Arc<dyn Fn(&QueryContext) -> Value + Send + Sync>;

/// A value operand whose concrete value is only known at execution time.
///
/// Deferred operands stay symbolic through declaration and condition tree
/// construction; the resolver replaces them with concrete [`Value`]s by
/// consulting the execution context.
#[derive(Clone)]
pub enum DeferredValue {
	/// Resolved by invoking the registered helper of this name.
	Named(String),
	/// Resolved by running the callback with the execution context.
	Callback(DeferredFn),
}

impl DeferredValue {
	pub fn callback<F>(f: F) -> Self
	where
		F: Fn(&QueryContext) -> Value + Send + Sync + 'static,
	{
		Self::Callback(Arc::new(f))
	}
}

impl fmt::Debug for DeferredValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Named(name) => f.debug_tuple("Named").field(name).finish(),
			Self::Callback(_) => f.debug_tuple("Callback").field(&"<fn>").finish(),
		}
	}
}
