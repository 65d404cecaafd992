use super::QueryBuilder;

/// SQLite dialect: double-quoted identifiers, `?` placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteQueryBuilder;

impl QueryBuilder for SqliteQueryBuilder {
	fn escape_identifier(&self, ident: &str) -> String {
		format!("\"{}\"", ident.replace('"', "\"\""))
	}

	fn format_placeholder(&self, _index: usize) -> String {
		"?".to_owned()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::expr::{Expr, ExprTrait};
	use crate::query::SelectStatement;
	use rstest::rstest;

	#[rstest]
	fn test_positional_placeholders() {
		let mut stmt = SelectStatement::new();
		stmt.from("posts")
			.and_where(Expr::col("a").eq(1))
			.and_where(Expr::col("b").eq(2));
		let (sql, values) = SqliteQueryBuilder.build_select(&stmt);
		assert_eq!(sql, "SELECT * FROM \"posts\" WHERE \"a\" = ? AND \"b\" = ?");
		assert_eq!(values.len(), 2);
	}
}
