//! Resource descriptions.
//!
//! A [`Resource`] names the table a definition reads from, the columns it
//! may reference, and the associations it may join through. Everything is
//! registered explicitly; referencing an unknown column or association is
//! an error rather than a guess.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// How one resource joins to another.
#[derive(Debug, Clone)]
pub struct Association {
	/// Table on the other side of the join.
	pub target_table: String,
	/// Join key on the owning table.
	pub owner_key: String,
	/// Join key on the target table.
	pub target_key: String,
}

/// A queryable table with its known columns and associations.
///
/// ```rust
/// use querydef::resource::Resource;
///
/// let posts = Resource::new("posts")
/// 	.columns(["id", "user_id", "title", "created_at"])
/// 	.belongs_to("user", "users")
/// 	.has_many("comments", "comments", "post_id");
/// ```
#[derive(Debug, Clone)]
pub struct Resource {
	table: String,
	columns: Vec<String>,
	associations: HashMap<String, Association>,
}

impl Resource {
	pub fn new<S: Into<String>>(table: S) -> Self {
		Self {
			table: table.into(),
			columns: Vec::new(),
			associations: HashMap::new(),
		}
	}

	#[must_use]
	pub fn columns<I, S>(mut self, columns: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.columns.extend(columns.into_iter().map(Into::into));
		self
	}

	/// Register a `belongs_to` association: the owning table carries
	/// `{name}_id`, joined to the target's `id`.
	#[must_use]
	pub fn belongs_to<N, T>(mut self, name: N, target_table: T) -> Self
	where
		N: Into<String>,
		T: Into<String>,
	{
		let name = name.into();
		let owner_key = format!("{name}_id");
		self.associations.insert(
			name,
			Association {
				target_table: target_table.into(),
				owner_key,
				target_key: "id".to_owned(),
			},
		);
		self
	}

	/// Register a `has_many` association: the target table carries the
	/// foreign key, joined to the owner's `id`.
	#[must_use]
	pub fn has_many<N, T, K>(mut self, name: N, target_table: T, foreign_key: K) -> Self
	where
		N: Into<String>,
		T: Into<String>,
		K: Into<String>,
	{
		self.associations.insert(
			name.into(),
			Association {
				target_table: target_table.into(),
				owner_key: "id".to_owned(),
				target_key: foreign_key.into(),
			},
		);
		self
	}

	/// Register an association with explicit join keys.
	#[must_use]
	pub fn association<N>(mut self, name: N, association: Association) -> Self
	where
		N: Into<String>,
	{
		self.associations.insert(name.into(), association);
		self
	}

	pub fn table(&self) -> &str {
		&self.table
	}

	pub fn has_column(&self, name: &str) -> bool {
		self.columns.iter().any(|c| c == name)
	}

	/// Look up a column by name.
	///
	/// # Errors
	///
	/// Returns [`Error::UnknownColumn`] when the column is not registered.
	pub fn column(&self, name: &str) -> Result<&str> {
		self.columns
			.iter()
			.find(|c| c.as_str() == name)
			.map(String::as_str)
			.ok_or_else(|| Error::UnknownColumn {
				table: self.table.clone(),
				column: name.to_owned(),
			})
	}

	/// Look up an association by name.
	///
	/// # Errors
	///
	/// Returns [`Error::UnknownAssociation`] when no association of this
	/// name is registered.
	pub fn find_association(&self, name: &str) -> Result<&Association> {
		self.associations
			.get(name)
			.ok_or_else(|| Error::UnknownAssociation(name.to_owned()))
	}

	/// Validate the description is usable as a query source.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidResource`] when the table name or column
	/// list is empty.
	pub fn validate(&self) -> Result<()> {
		if self.table.is_empty() {
			return Err(Error::InvalidResource {
				table: self.table.clone(),
				reason: "table name is empty".to_owned(),
			});
		}
		if self.columns.is_empty() {
			return Err(Error::InvalidResource {
				table: self.table.clone(),
				reason: "no columns registered".to_owned(),
			});
		}
		Ok(())
	}
}
