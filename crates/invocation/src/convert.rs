//! Positional conversion of raw arguments into typed values.
//!
//! Conversion is driven entirely by the declared parameter types, so the same
//! raw text can become a double for one operation and an integer for another.

use gauge_engine::EndCapStyle;
use geo::Geometry;
use wkt::TryFromWkt;

use crate::{InvokeError, RawArg, Value, ValueType};

/// Converts `raw` against the `declared` parameter types, position by position.
///
/// A length mismatch reports the first position where one side ran out.
pub fn convert(declared: &[ValueType], raw: &[RawArg]) -> Result<Vec<Value>, InvokeError> {
	if declared.len() != raw.len() {
		let index = declared.len().min(raw.len());
		return Err(InvokeError::ArgumentConversion {
			index,
			declared: declared.get(index).copied(),
			raw: raw.get(index).map(RawArg::describe),
			reason: format!("expected {} arguments, got {}", declared.len(), raw.len()),
		});
	}

	declared
		.iter()
		.zip(raw)
		.enumerate()
		.map(|(index, (&ty, arg))| convert_at(index, ty, arg))
		.collect()
}

/// Converts the argument at position `index`, reporting failures against that position.
pub fn convert_at(index: usize, ty: ValueType, arg: &RawArg) -> Result<Value, InvokeError> {
	convert_one(ty, arg).map_err(|reason| InvokeError::ArgumentConversion {
		index,
		declared: Some(ty),
		raw: Some(arg.describe()),
		reason,
	})
}

/// Converts a single raw argument to `ty`.
pub fn convert_one(ty: ValueType, arg: &RawArg) -> Result<Value, String> {
	match ty {
		ValueType::Boolean => to_bool(arg).map(Value::Boolean),
		ValueType::Double => to_double(arg).map(Value::Double),
		ValueType::Integer => to_integer(arg).map(Value::Integer),
		ValueType::Geometry => to_geometry(arg).map(Value::Geometry),
		ValueType::EndCapStyle => to_integer(arg)
			.and_then(|code| parse_end_cap(code).ok_or_else(|| format!("unknown end cap code {code}")))
			.map(Value::EndCapStyle),
	}
}

/// Parse a boolean from `true`/`false`/`1`/`0`, ignoring case.
pub fn parse_bool(value: &str) -> Result<bool, String> {
	match value.trim().to_lowercase().as_str() {
		"true" | "1" => Ok(true),
		"false" | "0" => Ok(false),
		_ => Err(format!("invalid boolean: '{value}' (expected true/false or 1/0)")),
	}
}

/// Decodes an end cap style from its integer code.
pub fn parse_end_cap(code: i64) -> Option<EndCapStyle> {
	EndCapStyle::from_code(code)
}

/// Parses WKT text into a geometry.
pub fn parse_geometry(text: &str) -> Result<Geometry<f64>, InvokeError> {
	Geometry::try_from_wkt_str(text.trim()).map_err(|err| InvokeError::Wkt {
		reason: err.to_string(),
	})
}

/// Returns the geometry at `index` of already-converted `args`.
pub fn geometry_arg(args: &[Value], index: usize) -> Result<&Geometry<f64>, InvokeError> {
	args.get(index)
		.and_then(Value::as_geometry)
		.ok_or_else(|| missing_arg(args, index, ValueType::Geometry))
}

/// Returns the double at `index` of already-converted `args`.
pub fn double_arg(args: &[Value], index: usize) -> Result<f64, InvokeError> {
	args.get(index)
		.and_then(Value::as_double)
		.ok_or_else(|| missing_arg(args, index, ValueType::Double))
}

/// Returns the integer at `index` of already-converted `args`.
pub fn integer_arg(args: &[Value], index: usize) -> Result<i64, InvokeError> {
	args.get(index)
		.and_then(Value::as_integer)
		.ok_or_else(|| missing_arg(args, index, ValueType::Integer))
}

/// Returns the end cap style at `index` of already-converted `args`.
pub fn end_cap_arg(args: &[Value], index: usize) -> Result<EndCapStyle, InvokeError> {
	args.get(index)
		.and_then(Value::as_end_cap)
		.ok_or_else(|| missing_arg(args, index, ValueType::EndCapStyle))
}

fn missing_arg(args: &[Value], index: usize, expected: ValueType) -> InvokeError {
	let found = args.get(index).map(Value::value_type);
	InvokeError::ArgumentConversion {
		index,
		declared: Some(expected),
		raw: found.map(|ty| ty.to_string()),
		reason: match found {
			Some(ty) => format!("handler expected {expected}, got {ty}"),
			None => "missing argument".to_string(),
		},
	}
}

fn to_bool(arg: &RawArg) -> Result<bool, String> {
	match arg {
		RawArg::Text(text) => parse_bool(text),
		RawArg::Int(0) => Ok(false),
		RawArg::Int(1) => Ok(true),
		other => Err(format!("not a boolean: {}", other.describe())),
	}
}

fn to_double(arg: &RawArg) -> Result<f64, String> {
	match arg {
		RawArg::Text(text) => text
			.trim()
			.parse::<f64>()
			.map_err(|err| format!("invalid number '{text}': {err}")),
		RawArg::Number(n) => Ok(*n),
		RawArg::Int(n) => Ok(*n as f64),
		RawArg::Geometry(_) => Err("expected a number, got a geometry".to_string()),
	}
}

fn to_integer(arg: &RawArg) -> Result<i64, String> {
	match arg {
		RawArg::Text(text) => text
			.trim()
			.parse::<i64>()
			.map_err(|err| format!("invalid integer '{text}': {err}")),
		RawArg::Int(n) => Ok(*n),
		RawArg::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64 => Ok(*n as i64),
		RawArg::Number(n) => Err(format!("{n} is not integral")),
		RawArg::Geometry(_) => Err("expected an integer, got a geometry".to_string()),
	}
}

fn to_geometry(arg: &RawArg) -> Result<Geometry<f64>, String> {
	match arg {
		RawArg::Text(text) => parse_geometry(text).map_err(|err| err.to_string()),
		RawArg::Geometry(geometry) => Ok(geometry.clone()),
		other => Err(format!("expected a WKT geometry, got {}", other.describe())),
	}
}
