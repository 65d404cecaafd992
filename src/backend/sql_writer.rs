use crate::value::{Value, Values};

/// Accumulates a SQL string together with its bind parameters.
///
/// Placeholder indexes are 1-based. NULL values are inlined as `NULL`
/// without consuming a parameter index, so parameterized drivers never
/// see an untyped NULL bind.
#[derive(Debug, Clone)]
pub struct SqlWriter {
	sql: String,
	values: Values,
	param_index: usize,
}

impl SqlWriter {
	pub fn new() -> Self {
		Self {
			sql: String::new(),
			values: Values::default(),
			param_index: 1,
		}
	}

	pub fn push(&mut self, s: &str) {
		self.sql.push_str(s);
	}

	pub fn push_space(&mut self) {
		if !self.sql.is_empty() && !self.sql.ends_with(' ') {
			self.sql.push(' ');
		}
	}

	/// Push a keyword preceded by a space.
	pub fn push_keyword(&mut self, keyword: &str) {
		self.push_space();
		self.sql.push_str(keyword);
	}

	pub fn push_comma(&mut self) {
		self.sql.push_str(", ");
	}

	pub fn push_identifier<F>(&mut self, ident: &str, escape_fn: F)
	where
		F: FnOnce(&str) -> String,
	{
		self.sql.push_str(&escape_fn(ident));
	}

	/// Push a value placeholder and collect the value.
	///
	/// Returns the parameter index used, or `None` when the value was
	/// NULL and written inline.
	pub fn push_value<F>(&mut self, value: Value, format_fn: F) -> Option<usize>
	where
		F: FnOnce(usize) -> String,
	{
		if value.is_null() {
			self.sql.push_str("NULL");
			return None;
		}
		let index = self.param_index;
		self.sql.push_str(&format_fn(index));
		self.values.push(value);
		self.param_index += 1;
		Some(index)
	}

	pub fn sql(&self) -> &str {
		&self.sql
	}

	pub fn values(&self) -> &Values {
		&self.values
	}

	pub fn finish(self) -> (String, Values) {
		(self.sql, self.values)
	}
}

impl Default for SqlWriter {
	fn default() -> Self {
		Self::new()
	}
}
