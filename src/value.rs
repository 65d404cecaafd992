//! Core value types for SQL parameters.

/// Core value representation for SQL parameters.
///
/// All variants use `Option<T>` to represent nullable values; a `None` is
/// rendered as SQL `NULL`. Strings are boxed to keep the enum small.
///
/// # Example
///
/// ```rust
/// use querydef::value::Value;
///
/// let int_val = Value::Int(Some(42));
/// let null_int = Value::Int(None);
/// assert!(null_int.is_null());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Boolean value
	Bool(Option<bool>),
	/// 32-bit signed integer
	Int(Option<i32>),
	/// 64-bit signed integer
	BigInt(Option<i64>),
	/// 64-bit unsigned integer
	BigUnsigned(Option<u64>),
	/// 32-bit floating point
	Float(Option<f32>),
	/// 64-bit floating point
	Double(Option<f64>),
	/// String value (boxed)
	String(Option<Box<String>>),

	/// Chrono NaiveDate
	#[cfg(feature = "with-chrono")]
	ChronoDate(Option<Box<chrono::NaiveDate>>),
	/// Chrono NaiveDateTime
	#[cfg(feature = "with-chrono")]
	ChronoDateTime(Option<Box<chrono::NaiveDateTime>>),
}

impl Value {
	/// Returns `true` if this value is null.
	#[must_use]
	pub fn is_null(&self) -> bool {
		match self {
			Self::Bool(v) => v.is_none(),
			Self::Int(v) => v.is_none(),
			Self::BigInt(v) => v.is_none(),
			Self::BigUnsigned(v) => v.is_none(),
			Self::Float(v) => v.is_none(),
			Self::Double(v) => v.is_none(),
			Self::String(v) => v.is_none(),
			#[cfg(feature = "with-chrono")]
			Self::ChronoDate(v) => v.is_none(),
			#[cfg(feature = "with-chrono")]
			Self::ChronoDateTime(v) => v.is_none(),
		}
	}
}

/// Conversion trait for parameter values.
pub trait IntoValue {
	/// Convert this type into a [`Value`].
	fn into_value(self) -> Value;
}

impl IntoValue for Value {
	fn into_value(self) -> Value {
		self
	}
}

impl IntoValue for bool {
	fn into_value(self) -> Value {
		Value::Bool(Some(self))
	}
}

impl IntoValue for i32 {
	fn into_value(self) -> Value {
		Value::Int(Some(self))
	}
}

impl IntoValue for i64 {
	fn into_value(self) -> Value {
		Value::BigInt(Some(self))
	}
}

impl IntoValue for u64 {
	fn into_value(self) -> Value {
		Value::BigUnsigned(Some(self))
	}
}

impl IntoValue for f32 {
	fn into_value(self) -> Value {
		Value::Float(Some(self))
	}
}

impl IntoValue for f64 {
	fn into_value(self) -> Value {
		Value::Double(Some(self))
	}
}

impl IntoValue for &str {
	fn into_value(self) -> Value {
		Value::String(Some(Box::new(self.to_string())))
	}
}

impl IntoValue for String {
	fn into_value(self) -> Value {
		Value::String(Some(Box::new(self)))
	}
}

#[cfg(feature = "with-chrono")]
impl IntoValue for chrono::NaiveDate {
	fn into_value(self) -> Value {
		Value::ChronoDate(Some(Box::new(self)))
	}
}

#[cfg(feature = "with-chrono")]
impl IntoValue for chrono::NaiveDateTime {
	fn into_value(self) -> Value {
		Value::ChronoDateTime(Some(Box::new(self)))
	}
}

/// An ordered collection of parameter values, as collected during SQL
/// generation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Values(pub Vec<Value>);

impl Values {
	/// Append a value.
	pub fn push(&mut self, value: Value) {
		self.0.push(value);
	}

	/// Number of collected values.
	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` if no values have been collected.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterate over the collected values.
	pub fn iter(&self) -> std::slice::Iter<'_, Value> {
		self.0.iter()
	}
}
