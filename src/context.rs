//! Execution context.
//!
//! A [`QueryContext`] carries the per-execution [`Options`] plus the
//! helper and predicate registries a definition exposes to its deferred
//! operands and inclusion predicates. Every name is resolved through an
//! explicit registry; an unregistered name is an
//! [`Error::UnresolvedReference`] rather than a silent fallback.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::value::{IntoValue, Value};

/// Helper resolved by name at execution time.
pub type HelperFn = Arc<dyn Fn(&QueryContext) -> Value + Send + Sync>;

/// Inclusion predicate gating a conditional declaration.
pub type PredicateFn = Arc<dyn Fn(&QueryContext) -> bool + Send + Sync>;

/// Per-execution options.
///
/// ```rust
/// use querydef::context::Options;
///
/// let opts = Options::new().set("date", "2024-01-01").set("with_drafts", true);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Options(HashMap<String, Value>);

impl Options {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn set<K, V>(mut self, key: K, value: V) -> Self
	where
		K: Into<String>,
		V: IntoValue,
	{
		self.0.insert(key.into(), value.into_value());
		self
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	pub fn contains(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}
}

/// Execution-time context handed to deferred operands and predicates.
pub struct QueryContext {
	options: Options,
	helpers: HashMap<String, HelperFn>,
	predicates: HashMap<String, PredicateFn>,
}

impl QueryContext {
	pub(crate) fn new(
		options: Options,
		helpers: HashMap<String, HelperFn>,
		predicates: HashMap<String, PredicateFn>,
	) -> Self {
		Self {
			options,
			helpers,
			predicates,
		}
	}

	/// Look up an option by key.
	pub fn option(&self, key: &str) -> Option<&Value> {
		self.options.get(key)
	}

	/// Look up an option, falling back to SQL NULL when absent.
	pub fn option_or_null(&self, key: &str) -> Value {
		self.options.get(key).cloned().unwrap_or(Value::Int(None))
	}

	/// Invoke a registered helper by name.
	///
	/// # Errors
	///
	/// Returns [`Error::UnresolvedReference`] when no helper of this name
	/// is registered.
	pub fn invoke(&self, name: &str) -> Result<Value> {
		let helper = self
			.helpers
			.get(name)
			.ok_or_else(|| Error::UnresolvedReference(name.to_owned()))?;
		Ok(helper(self))
	}

	/// Evaluate a registered inclusion predicate by name.
	///
	/// # Errors
	///
	/// Returns [`Error::UnresolvedReference`] when no predicate of this
	/// name is registered.
	pub fn check(&self, name: &str) -> Result<bool> {
		let predicate = self
			.predicates
			.get(name)
			.ok_or_else(|| Error::UnresolvedReference(name.to_owned()))?;
		Ok(predicate(self))
	}
}

impl std::fmt::Debug for QueryContext {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("QueryContext")
			.field("options", &self.options)
			.field("helpers", &self.helpers.keys().collect::<Vec<_>>())
			.field("predicates", &self.predicates.keys().collect::<Vec<_>>())
			.finish()
	}
}
