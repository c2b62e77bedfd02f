use std::fmt;

use gauge_engine::EndCapStyle;
use geo::Geometry;
use wkt::ToWkt;

use crate::InvokeError;

/// Declared type of a parameter or result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
	Boolean,
	Double,
	Integer,
	Geometry,
	/// Argument-only: buffer end cap style parsed from its integer code.
	EndCapStyle,
}

impl ValueType {
	/// Returns the human-readable type name.
	pub const fn name(self) -> &'static str {
		match self {
			Self::Boolean => "boolean",
			Self::Double => "double",
			Self::Integer => "integer",
			Self::Geometry => "geometry",
			Self::EndCapStyle => "end cap style",
		}
	}

	/// Returns true when a [`ResultValue`] can carry this type.
	pub const fn is_result_type(self) -> bool {
		!matches!(self, Self::EndCapStyle)
	}
}

impl fmt::Display for ValueType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// An argument as supplied by the caller, before conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum RawArg {
	/// Textual value, parsed according to the declared parameter type.
	Text(String),
	/// Floating point value.
	Number(f64),
	/// Integer value.
	Int(i64),
	/// An already-parsed geometry, such as the second operand of a predicate.
	Geometry(Geometry<f64>),
}

impl RawArg {
	/// Renders the argument for diagnostics.
	pub fn describe(&self) -> String {
		match self {
			Self::Text(text) => text.clone(),
			Self::Number(n) => n.to_string(),
			Self::Int(n) => n.to_string(),
			Self::Geometry(geometry) => geometry.wkt_string(),
		}
	}
}

impl From<&str> for RawArg {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}

impl From<String> for RawArg {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl From<f64> for RawArg {
	fn from(n: f64) -> Self {
		Self::Number(n)
	}
}

impl From<i64> for RawArg {
	fn from(n: i64) -> Self {
		Self::Int(n)
	}
}

impl From<Geometry<f64>> for RawArg {
	fn from(geometry: Geometry<f64>) -> Self {
		Self::Geometry(geometry)
	}
}

/// A converted, typed argument (or handler return value).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	Boolean(bool),
	Double(f64),
	Integer(i64),
	Geometry(Geometry<f64>),
	EndCapStyle(EndCapStyle),
}

impl Value {
	/// Returns the type tag of this value.
	pub fn value_type(&self) -> ValueType {
		match self {
			Self::Boolean(_) => ValueType::Boolean,
			Self::Double(_) => ValueType::Double,
			Self::Integer(_) => ValueType::Integer,
			Self::Geometry(_) => ValueType::Geometry,
			Self::EndCapStyle(_) => ValueType::EndCapStyle,
		}
	}

	pub fn as_double(&self) -> Option<f64> {
		match self {
			Self::Double(n) => Some(*n),
			_ => None,
		}
	}

	pub fn as_integer(&self) -> Option<i64> {
		match self {
			Self::Integer(n) => Some(*n),
			_ => None,
		}
	}

	pub fn as_geometry(&self) -> Option<&Geometry<f64>> {
		match self {
			Self::Geometry(geometry) => Some(geometry),
			_ => None,
		}
	}

	pub fn as_end_cap(&self) -> Option<EndCapStyle> {
		match self {
			Self::EndCapStyle(style) => Some(*style),
			_ => None,
		}
	}
}

/// The uniform result of any operation.
///
/// The tag always equals the declared return type of the operation that
/// produced it; [`ResultValue::wrap`] is the only checked way in.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultValue {
	Boolean(bool),
	Double(f64),
	Integer(i64),
	Geometry(Geometry<f64>),
}

impl ResultValue {
	/// Tags `value` with the `declared` return type.
	///
	/// Fails with [`InvokeError::UnsupportedReturnType`] when `declared` cannot
	/// be carried by a result, and with [`InvokeError::ReturnTypeMismatch`]
	/// when `value` is of a different type.
	pub fn wrap(declared: ValueType, value: Value) -> Result<Self, InvokeError> {
		if !declared.is_result_type() {
			return Err(InvokeError::UnsupportedReturnType { ty: declared });
		}
		let actual = value.value_type();
		match (declared, value) {
			(ValueType::Boolean, Value::Boolean(b)) => Ok(Self::Boolean(b)),
			(ValueType::Double, Value::Double(n)) => Ok(Self::Double(n)),
			(ValueType::Integer, Value::Integer(n)) => Ok(Self::Integer(n)),
			(ValueType::Geometry, Value::Geometry(g)) => Ok(Self::Geometry(g)),
			_ => Err(InvokeError::ReturnTypeMismatch { declared, actual }),
		}
	}

	/// Returns the type tag of this result.
	pub fn value_type(&self) -> ValueType {
		match self {
			Self::Boolean(_) => ValueType::Boolean,
			Self::Double(_) => ValueType::Double,
			Self::Integer(_) => ValueType::Integer,
			Self::Geometry(_) => ValueType::Geometry,
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Boolean(b) => Some(*b),
			_ => None,
		}
	}

	pub fn as_double(&self) -> Option<f64> {
		match self {
			Self::Double(n) => Some(*n),
			_ => None,
		}
	}

	pub fn as_integer(&self) -> Option<i64> {
		match self {
			Self::Integer(n) => Some(*n),
			_ => None,
		}
	}

	pub fn as_geometry(&self) -> Option<&Geometry<f64>> {
		match self {
			Self::Geometry(geometry) => Some(geometry),
			_ => None,
		}
	}

	pub fn into_geometry(self) -> Option<Geometry<f64>> {
		match self {
			Self::Geometry(geometry) => Some(geometry),
			_ => None,
		}
	}
}

impl fmt::Display for ResultValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Boolean(b) => write!(f, "{b}"),
			Self::Double(n) => write!(f, "{n}"),
			Self::Integer(n) => write!(f, "{n}"),
			Self::Geometry(geometry) => f.write_str(&geometry.wkt_string()),
		}
	}
}
