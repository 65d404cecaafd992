//! SQL identifier types.

use std::fmt;
use std::sync::Arc;

/// An SQL identifier (a table or column name).
///
/// Implementors return the raw, unquoted name; quoting is the rendering
/// backend's responsibility.
pub trait Iden: Send + Sync {
	/// The raw identifier text, without any quoting.
	fn unquoted(&self) -> &str;
}

/// Type-erased identifier, shared between expression nodes.
pub type DynIden = Arc<dyn Iden>;

impl fmt::Display for dyn Iden {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.unquoted())
	}
}

impl fmt::Debug for dyn Iden {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Iden({})", self.unquoted())
	}
}

/// Dynamic identifier for runtime-determined names.
///
/// # Example
///
/// ```rust
/// use querydef::types::{Alias, Iden};
///
/// let alias = Alias::new("posts");
/// assert_eq!(alias.unquoted(), "posts");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias(String);

impl Alias {
	/// Create a new alias from any string-like value.
	pub fn new<S: Into<String>>(name: S) -> Self {
		Self(name.into())
	}
}

impl Iden for Alias {
	fn unquoted(&self) -> &str {
		&self.0
	}
}

/// Conversion trait for identifier types.
pub trait IntoIden {
	/// Convert this value into a type-erased identifier.
	fn into_iden(self) -> DynIden;
}

impl IntoIden for DynIden {
	fn into_iden(self) -> DynIden {
		self
	}
}

impl IntoIden for Alias {
	fn into_iden(self) -> DynIden {
		Arc::new(self)
	}
}

impl IntoIden for &str {
	fn into_iden(self) -> DynIden {
		Arc::new(Alias::new(self))
	}
}

impl IntoIden for String {
	fn into_iden(self) -> DynIden {
		Arc::new(Alias(self))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_alias_unquoted() {
		let alias = Alias::new("users");
		assert_eq!(alias.unquoted(), "users");
	}

	#[rstest]
	fn test_into_iden_from_str() {
		let iden = "name".into_iden();
		assert_eq!(iden.to_string(), "name");
	}

	#[rstest]
	fn test_into_iden_from_string() {
		let iden = String::from("title").into_iden();
		assert_eq!(iden.to_string(), "title");
	}

	#[rstest]
	fn test_dyn_iden_roundtrip() {
		let iden = "posts".into_iden();
		let same = iden.clone().into_iden();
		assert_eq!(same.to_string(), "posts");
	}
}
