use gauge_engine::{BufferParams, EndCapStyle, covers, is_polygonal, measure};
use gauge_invocation::InvokeError;
use geo::{BoundingRect, Coord, Geometry, HasDimensions, Rect, coord};

use super::distance::BufferDistanceValidator;
use crate::config::BufferOracleConfig;

/// Envelope padding used when the scaled padding would be zero.
const MIN_ENVELOPE_PADDING: f64 = 0.001;

/// Proves a computed buffer against invariants derivable from its input.
///
/// Checks run in a fixed order and stop at the first failure.
#[derive(Debug, Clone, Default)]
pub struct BufferCorrectnessOracle {
	config: BufferOracleConfig,
}

impl BufferCorrectnessOracle {
	pub fn new(config: BufferOracleConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &BufferOracleConfig {
		&self.config
	}

	/// Validates `result` as the buffer of `input` computed with `params`.
	///
	/// Envelope and distance bounds assume round caps, so they are skipped for
	/// other cap styles unless the input is purely areal.
	pub fn validate(
		&self,
		input: &Geometry<f64>,
		params: &BufferParams,
		result: &Geometry<f64>,
	) -> Result<(), InvokeError> {
		let distance = params.distance;
		if measure::dimension(input) < 2 && distance <= 0.0 {
			return check_expected_empty(result);
		}
		check_containment(input, distance, result)?;
		if self.config.check_validity && !measure::is_valid(result) {
			return Err(InvokeError::validation("buffer result is invalid"));
		}
		if !result.is_empty() && !is_polygonal(result) {
			return Err(InvokeError::validation("buffer result is not polygonal"));
		}
		let round_bounds = params.end_cap == EndCapStyle::Round || is_polygonal(input);
		if round_bounds {
			self.check_envelope(input, distance, result)?;
		}
		check_area(input, distance, result)?;
		if !round_bounds {
			return Ok(());
		}
		BufferDistanceValidator::new(&self.config, input, distance, result).validate()
	}

	fn check_envelope(&self, input: &Geometry<f64>, distance: f64, result: &Geometry<f64>) -> Result<(), InvokeError> {
		if distance < 0.0 {
			return Ok(());
		}
		let (Some(input_env), Some(result_env)) = (input.bounding_rect(), result.bounding_rect()) else {
			return Ok(());
		};
		let mut padding = distance * self.config.max_envelope_diff_frac;
		if padding == 0.0 {
			padding = MIN_ENVELOPE_PADDING;
		}
		let expected = expand(input_env, distance);
		let allowed = expand(result_env, padding);

		let contained = allowed.min().x <= expected.min().x
			&& allowed.min().y <= expected.min().y
			&& allowed.max().x >= expected.max().x
			&& allowed.max().y >= expected.max().y;
		if !contained {
			return Err(InvokeError::validation_at("buffer envelope is incorrect", allowed.center()));
		}
		Ok(())
	}
}

/// Non-areal input buffered by a non-positive distance has nothing left.
fn check_expected_empty(result: &Geometry<f64>) -> Result<(), InvokeError> {
	if result.is_empty() {
		Ok(())
	} else {
		Err(InvokeError::validation("expected empty buffer result"))
	}
}

fn check_containment(input: &Geometry<f64>, distance: f64, result: &Geometry<f64>) -> Result<(), InvokeError> {
	if distance > 0.0 && !input.is_empty() && !covers(result, input) {
		return Err(InvokeError::validation("geometry not covered by positive buffer"));
	}
	if distance < 0.0 && !result.is_empty() && !covers(input, result) {
		return Err(InvokeError::validation("geometry does not cover negative buffer"));
	}
	Ok(())
}

fn check_area(input: &Geometry<f64>, distance: f64, result: &Geometry<f64>) -> Result<(), InvokeError> {
	let input_area = measure::area(input);
	let result_area = measure::area(result);
	if distance > 0.0 && input_area > result_area {
		return Err(InvokeError::validation("area of positive buffer is smaller than input"));
	}
	if distance < 0.0 && input_area < result_area {
		return Err(InvokeError::validation("area of negative buffer is larger than input"));
	}
	Ok(())
}

fn expand(rect: Rect<f64>, by: f64) -> Rect<f64> {
	let delta: Coord<f64> = coord! { x: by, y: by };
	Rect::new(rect.min() - delta, rect.max() + delta)
}

#[cfg(test)]
mod tests;
