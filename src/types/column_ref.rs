//! Column reference types.

use super::iden::{DynIden, IntoIden};

/// Reference to a column in a query.
///
/// This enum represents different ways to reference a column, from simple
/// column names to table-qualified references.
#[derive(Debug, Clone)]
pub enum ColumnRef {
	/// Simple column reference (e.g., `name`)
	Column(DynIden),
	/// Table-qualified column reference (e.g., `posts.title`)
	TableColumn(DynIden, DynIden),
	/// Asterisk for selecting all columns (`*`)
	Asterisk,
	/// Table-qualified asterisk (e.g., `posts.*`)
	TableAsterisk(DynIden),
}

impl ColumnRef {
	/// Create a simple column reference.
	pub fn column<C: IntoIden>(column: C) -> Self {
		Self::Column(column.into_iden())
	}

	/// Create a table-qualified column reference.
	///
	/// # Example
	///
	/// ```rust
	/// use querydef::types::ColumnRef;
	///
	/// let col = ColumnRef::table_column("posts", "title");
	/// ```
	pub fn table_column<T: IntoIden, C: IntoIden>(table: T, column: C) -> Self {
		Self::TableColumn(table.into_iden(), column.into_iden())
	}

	/// Create an asterisk reference for all columns.
	pub fn asterisk() -> Self {
		Self::Asterisk
	}

	/// Create a table-qualified asterisk reference.
	pub fn table_asterisk<T: IntoIden>(table: T) -> Self {
		Self::TableAsterisk(table.into_iden())
	}
}

/// Conversion trait for column references.
pub trait IntoColumnRef {
	/// Convert this type into a `ColumnRef`.
	fn into_column_ref(self) -> ColumnRef;
}

impl IntoColumnRef for ColumnRef {
	fn into_column_ref(self) -> ColumnRef {
		self
	}
}

// Blanket implementation for all types that can be converted to an
// identifier: DynIden, &str, String, Alias.
impl<T: IntoIden> IntoColumnRef for T {
	fn into_column_ref(self) -> ColumnRef {
		ColumnRef::Column(self.into_iden())
	}
}

impl<T, C> IntoColumnRef for (T, C)
where
	T: IntoIden,
	C: IntoIden,
{
	fn into_column_ref(self) -> ColumnRef {
		ColumnRef::TableColumn(self.0.into_iden(), self.1.into_iden())
	}
}
