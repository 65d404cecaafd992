//! SQL rendering backends.
//!
//! [`QueryBuilder`] renders a [`SelectStatement`] into a SQL string plus
//! collected bind parameters. Rendering is shared through default trait
//! methods; backends supply only identifier escaping and placeholder
//! formatting.

mod postgres;
mod sql_writer;
mod sqlite;

pub use postgres::PostgresQueryBuilder;
pub use sql_writer::SqlWriter;
pub use sqlite::SqliteQueryBuilder;

use crate::expr::{Keyword, SimpleExpr};
use crate::query::SelectStatement;
use crate::types::{BinOper, ColumnRef};
use crate::value::Values;

fn precedence(op: BinOper) -> u8 {
	match op {
		BinOper::Or => 1,
		BinOper::And => 2,
		BinOper::Equal
		| BinOper::NotEqual
		| BinOper::SmallerThan
		| BinOper::SmallerThanOrEqual
		| BinOper::GreaterThan
		| BinOper::GreaterThanOrEqual
		| BinOper::Like
		| BinOper::NotLike
		| BinOper::In
		| BinOper::NotIn => 3,
		BinOper::Add | BinOper::Sub => 4,
		BinOper::Mul | BinOper::Div => 5,
	}
}

/// Renders statements for one SQL dialect.
pub trait QueryBuilder: Send + Sync {
	/// Escape an identifier, e.g. `name` into `"name"`.
	fn escape_identifier(&self, ident: &str) -> String;

	/// Format the placeholder for the 1-based parameter `index`.
	fn format_placeholder(&self, index: usize) -> String;

	/// Render a SELECT statement into SQL and bind parameters.
	fn build_select(&self, stmt: &SelectStatement) -> (String, Values) {
		let mut writer = SqlWriter::new();
		writer.push("SELECT ");
		if stmt.selects.is_empty() {
			writer.push("*");
		} else {
			for (i, select) in stmt.selects.iter().enumerate() {
				if i > 0 {
					writer.push_comma();
				}
				self.write_simple_expr(&mut writer, select);
			}
		}
		if let Some(from) = &stmt.from {
			writer.push_keyword("FROM");
			writer.push_space();
			writer.push_identifier(&from.to_string(), |s| self.escape_identifier(s));
		}
		for join in &stmt.joins {
			writer.push_keyword(join.join.as_str());
			writer.push_space();
			writer.push_identifier(&join.table.to_string(), |s| self.escape_identifier(s));
			writer.push_keyword("ON");
			writer.push_space();
			self.write_column_ref(&mut writer, &join.on.0);
			writer.push(" = ");
			self.write_column_ref(&mut writer, &join.on.1);
		}
		if let Some(cond) = &stmt.r#where {
			writer.push_keyword("WHERE");
			writer.push_space();
			self.write_simple_expr(&mut writer, cond);
		}
		for (i, group) in stmt.groups.iter().enumerate() {
			if i == 0 {
				writer.push_keyword("GROUP BY");
				writer.push_space();
			} else {
				writer.push_comma();
			}
			self.write_simple_expr(&mut writer, group);
		}
		if let Some(cond) = &stmt.having {
			writer.push_keyword("HAVING");
			writer.push_space();
			self.write_simple_expr(&mut writer, cond);
		}
		for (i, order) in stmt.orders.iter().enumerate() {
			if i == 0 {
				writer.push_keyword("ORDER BY");
				writer.push_space();
			} else {
				writer.push_comma();
			}
			self.write_simple_expr(&mut writer, &order.expr);
			writer.push(" ");
			writer.push(order.order.as_str());
		}
		if let Some(limit) = stmt.limit {
			writer.push_keyword("LIMIT");
			writer.push(" ");
			writer.push(&limit.to_string());
		}
		if let Some(offset) = stmt.offset {
			writer.push_keyword("OFFSET");
			writer.push(" ");
			writer.push(&offset.to_string());
		}
		writer.finish()
	}

	fn write_simple_expr(&self, writer: &mut SqlWriter, expr: &SimpleExpr) {
		match expr {
			SimpleExpr::Column(col) => self.write_column_ref(writer, col),
			SimpleExpr::Value(value) => {
				writer.push_value(value.clone(), |i| self.format_placeholder(i));
			}
			SimpleExpr::Deferred(_) => {
				// the resolver must have run before rendering
				panic!("deferred operand reached the SQL renderer unresolved")
			}
			SimpleExpr::Binary(lhs, op, rhs) => {
				self.write_binary_operand(writer, lhs, *op, false);
				writer.push(" ");
				writer.push(op.as_str());
				writer.push(" ");
				self.write_binary_operand(writer, rhs, *op, true);
			}
			SimpleExpr::FunctionCall(name, args) => {
				writer.push(&name.to_string());
				writer.push("(");
				for (i, arg) in args.iter().enumerate() {
					if i > 0 {
						writer.push_comma();
					}
					self.write_simple_expr(writer, arg);
				}
				writer.push(")");
			}
			SimpleExpr::Tuple(items) => {
				writer.push("(");
				for (i, item) in items.iter().enumerate() {
					if i > 0 {
						writer.push_comma();
					}
					self.write_simple_expr(writer, item);
				}
				writer.push(")");
			}
			SimpleExpr::Grouping(inner) => {
				writer.push("(");
				self.write_simple_expr(writer, inner);
				writer.push(")");
			}
			SimpleExpr::Constant(keyword) => {
				writer.push(match keyword {
					Keyword::Null => "NULL",
					Keyword::True => "TRUE",
					Keyword::False => "FALSE",
				});
			}
			SimpleExpr::Asterisk => writer.push("*"),
		}
	}

	fn write_column_ref(&self, writer: &mut SqlWriter, col: &ColumnRef) {
		match col {
			ColumnRef::Column(name) => {
				writer.push_identifier(&name.to_string(), |s| self.escape_identifier(s));
			}
			ColumnRef::TableColumn(table, name) => {
				writer.push_identifier(&table.to_string(), |s| self.escape_identifier(s));
				writer.push(".");
				writer.push_identifier(&name.to_string(), |s| self.escape_identifier(s));
			}
			ColumnRef::Asterisk => writer.push("*"),
			ColumnRef::TableAsterisk(table) => {
				writer.push_identifier(&table.to_string(), |s| self.escape_identifier(s));
				writer.push(".*");
			}
		}
	}

	/// Write one operand of a binary expression, parenthesizing nested
	/// binaries that would otherwise bind differently.
	fn write_binary_operand(
		&self,
		writer: &mut SqlWriter,
		operand: &SimpleExpr,
		parent: BinOper,
		is_rhs: bool,
	) {
		let needs_paren = match operand {
			SimpleExpr::Binary(_, inner, _) => {
				let (inner, outer) = (precedence(*inner), precedence(parent));
				inner < outer || (is_rhs && inner == outer)
			}
			_ => false,
		};
		if needs_paren {
			writer.push("(");
			self.write_simple_expr(writer, operand);
			writer.push(")");
		} else {
			self.write_simple_expr(writer, operand);
		}
	}
}
