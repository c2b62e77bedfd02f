use gauge_engine::{boundary, is_polygonal, nearest_points, oriented_hausdorff, ring_lines};
use gauge_invocation::InvokeError;
use geo::{Geometry, HasDimensions};
use tracing::trace;

use crate::config::BufferOracleConfig;

/// Checks that the buffer curve lies at the requested distance from the input, within tolerance.
///
/// For positive distances the curve is the boundary of the result and is
/// compared with the input. For negative distances only areal inputs are
/// checked: the input is reduced to its rings and compared with the result.
pub(super) struct BufferDistanceValidator<'a> {
	input: &'a Geometry<f64>,
	distance: f64,
	result: &'a Geometry<f64>,
	densify_fraction: f64,
	min_valid: f64,
	max_valid: f64,
}

impl<'a> BufferDistanceValidator<'a> {
	pub(super) fn new(
		config: &BufferOracleConfig,
		input: &'a Geometry<f64>,
		distance: f64,
		result: &'a Geometry<f64>,
	) -> Self {
		let magnitude = distance.abs();
		let delta = config.max_distance_diff_frac * magnitude;
		Self {
			input,
			distance,
			result,
			densify_fraction: config.densify_fraction,
			min_valid: magnitude - delta,
			max_valid: magnitude + delta,
		}
	}

	pub(super) fn validate(&self) -> Result<(), InvokeError> {
		// A zero distance leaves no tolerance band to measure against.
		if self.distance == 0.0 || self.input.is_empty() || self.result.is_empty() {
			return Ok(());
		}
		if self.distance > 0.0 {
			let curve = boundary(self.result)?;
			self.check_minimum(self.input, &curve)?;
			self.check_maximum(&curve, self.input)
		} else {
			if !is_polygonal(self.input) && !matches!(self.input, Geometry::GeometryCollection(_)) {
				return Ok(());
			}
			let rings = ring_lines(self.input);
			if rings.is_empty() {
				return Ok(());
			}
			self.check_minimum(&rings, self.result)?;
			self.check_maximum(self.result, &rings)
		}
	}

	fn check_minimum(&self, input: &Geometry<f64>, curve: &Geometry<f64>) -> Result<(), InvokeError> {
		let Some(nearest) = nearest_points(input, curve) else {
			return Ok(());
		};
		trace!(found = nearest.distance, min = self.min_valid, "buffer minimum distance");
		if nearest.distance < self.min_valid {
			return Err(InvokeError::validation_at(
				format!("distance between buffer curve and input is too small ({})", nearest.distance),
				nearest.points[1],
			));
		}
		Ok(())
	}

	fn check_maximum(&self, curve: &Geometry<f64>, input: &Geometry<f64>) -> Result<(), InvokeError> {
		let Some(furthest) = oriented_hausdorff(curve, input, self.densify_fraction) else {
			return Ok(());
		};
		trace!(found = furthest.distance, max = self.max_valid, "buffer maximum distance");
		if furthest.distance > self.max_valid {
			return Err(InvokeError::validation_at(
				format!("distance between buffer curve and input is too large ({})", furthest.distance),
				furthest.points[1],
			));
		}
		Ok(())
	}
}
