//! SQL operators for expressions.

/// Binary operators.
///
/// These operators take two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOper {
	// Logical operators
	/// Logical AND
	And,
	/// Logical OR
	Or,

	// Comparison operators
	/// Equal (=)
	Equal,
	/// Not equal (<>)
	NotEqual,
	/// Less than (<)
	SmallerThan,
	/// Less than or equal (<=)
	SmallerThanOrEqual,
	/// Greater than (>)
	GreaterThan,
	/// Greater than or equal (>=)
	GreaterThanOrEqual,

	// Pattern matching
	/// LIKE
	Like,
	/// NOT LIKE
	NotLike,

	// Set membership
	/// IN
	In,
	/// NOT IN
	NotIn,

	// Arithmetic operators
	/// Addition (+)
	Add,
	/// Subtraction (-)
	Sub,
	/// Multiplication (*)
	Mul,
	/// Division (/)
	Div,
}

impl BinOper {
	/// Returns the SQL representation of this operator.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::And => "AND",
			Self::Or => "OR",
			Self::Equal => "=",
			Self::NotEqual => "<>",
			Self::SmallerThan => "<",
			Self::SmallerThanOrEqual => "<=",
			Self::GreaterThan => ">",
			Self::GreaterThanOrEqual => ">=",
			Self::Like => "LIKE",
			Self::NotLike => "NOT LIKE",
			Self::In => "IN",
			Self::NotIn => "NOT IN",
			Self::Add => "+",
			Self::Sub => "-",
			Self::Mul => "*",
			Self::Div => "/",
		}
	}
}

/// Logical operators for chaining conditions.
///
/// A condition declaration carries one of these to describe how it combines
/// with the expression accumulated from its preceding siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalChainOper {
	/// Logical AND
	And,
	/// Logical OR
	Or,
}

impl LogicalChainOper {
	/// Returns the SQL representation of this operator.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::And => "AND",
			Self::Or => "OR",
		}
	}
}

impl From<LogicalChainOper> for BinOper {
	fn from(op: LogicalChainOper) -> Self {
		match op {
			LogicalChainOper::And => BinOper::And,
			LogicalChainOper::Or => BinOper::Or,
		}
	}
}
