use gauge_engine::{BufferParams, EndCapStyle};
use gauge_invocation::{Arity, InvokeError, RawArg, Value, ValueType, convert, double_arg};

/// Parameter types of the recognised buffer arguments, in position order.
const PARAMS: [ValueType; 3] = [ValueType::Double, ValueType::Integer, ValueType::EndCapStyle];

/// Arguments of one buffer call, decoded once and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BufferInvocation {
	/// Number of arguments supplied, including ignored extras.
	pub arg_count: usize,
	pub distance: f64,
	pub quadrant_segments: Option<i64>,
	pub end_cap: Option<EndCapStyle>,
}

impl BufferInvocation {
	/// Decodes `distance [, quadrant_segments [, end_cap]]`. Arguments past the third are ignored.
	pub fn parse(args: &[RawArg]) -> Result<Self, InvokeError> {
		if args.is_empty() {
			return Err(InvokeError::ArgumentCount {
				expected: Arity::AtLeast(1),
				got: 0,
			});
		}
		let used = args.len().min(PARAMS.len());
		let values = convert(&PARAMS[..used], &args[..used])?;
		let distance = double_arg(&values, 0)?;
		if !distance.is_finite() {
			return Err(InvokeError::ArgumentConversion {
				index: 0,
				declared: Some(ValueType::Double),
				raw: Some(args[0].describe()),
				reason: "buffer distance must be finite".to_string(),
			});
		}
		Ok(Self {
			arg_count: args.len(),
			distance,
			quadrant_segments: values.get(1).and_then(Value::as_integer),
			end_cap: values.get(2).and_then(Value::as_end_cap),
		})
	}

	/// Engine parameters for this call; omitted arguments take engine defaults.
	pub fn params(&self) -> BufferParams {
		let mut params = BufferParams::new(self.distance);
		if let Some(segments) = self.quadrant_segments {
			params = params.quadrant_segments(segments);
		}
		if let Some(end_cap) = self.end_cap {
			params = params.end_cap(end_cap);
		}
		params
	}
}
