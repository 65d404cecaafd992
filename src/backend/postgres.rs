use super::QueryBuilder;

/// PostgreSQL dialect: double-quoted identifiers, `$n` placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresQueryBuilder;

impl QueryBuilder for PostgresQueryBuilder {
	fn escape_identifier(&self, ident: &str) -> String {
		format!("\"{}\"", ident.replace('"', "\"\""))
	}

	fn format_placeholder(&self, index: usize) -> String {
		format!("${index}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("title", "\"title\"")]
	#[case("weird\"name", "\"weird\"\"name\"")]
	fn test_escape_identifier(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(PostgresQueryBuilder.escape_identifier(input), expected);
	}

	#[rstest]
	fn test_placeholder() {
		assert_eq!(PostgresQueryBuilder.format_placeholder(3), "$3");
	}
}
