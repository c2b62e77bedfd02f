use std::f64::consts::FRAC_PI_2;

use geo::algorithm::buffer::{Buffer, BufferStyle, LineCap, LineJoin};
use geo::algorithm::dimensions::Dimensions;
use geo::{Geometry, HasDimensions, MultiPolygon};

/// Quarter-circle segment count used when the caller does not pick one.
pub const DEFAULT_QUADRANT_SEGMENTS: i64 = 8;

/// Largest quarter-circle segment count honoured; larger requests are clamped.
pub const MAX_QUADRANT_SEGMENTS: i64 = 1024;

/// Shape of the buffer at the free ends of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EndCapStyle {
	/// Semicircular cap.
	#[default]
	Round,
	/// Cap cut flush with the line end.
	Flat,
	/// Square cap extending past the line end by the buffer distance.
	Square,
}

impl EndCapStyle {
	/// Decodes the integer code used in test files (`1` round, `2` flat, `3` square).
	pub fn from_code(code: i64) -> Option<Self> {
		match code {
			1 => Some(Self::Round),
			2 => Some(Self::Flat),
			3 => Some(Self::Square),
			_ => None,
		}
	}

	/// Returns the integer code of this style.
	pub fn code(self) -> i64 {
		match self {
			Self::Round => 1,
			Self::Flat => 2,
			Self::Square => 3,
		}
	}

	/// Returns the lowercase name of this style.
	pub fn name(self) -> &'static str {
		match self {
			Self::Round => "round",
			Self::Flat => "flat",
			Self::Square => "square",
		}
	}
}

/// Parameters of a single buffer computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BufferParams {
	/// Signed offset distance.
	pub distance: f64,
	/// Segments per quarter circle, clamped to `1..=MAX_QUADRANT_SEGMENTS`.
	pub quadrant_segments: i64,
	/// End cap style for line ends.
	pub end_cap: EndCapStyle,
}

impl BufferParams {
	/// Creates parameters with the default segment count and round caps.
	pub fn new(distance: f64) -> Self {
		Self {
			distance,
			quadrant_segments: DEFAULT_QUADRANT_SEGMENTS,
			end_cap: EndCapStyle::Round,
		}
	}

	/// Sets the quarter-circle segment count.
	pub fn quadrant_segments(mut self, segments: i64) -> Self {
		self.quadrant_segments = segments;
		self
	}

	/// Sets the end cap style.
	pub fn end_cap(mut self, end_cap: EndCapStyle) -> Self {
		self.end_cap = end_cap;
		self
	}

	/// Angle in radians between consecutive vertices of an approximated arc.
	pub fn arc_step(&self) -> f64 {
		FRAC_PI_2 / self.quadrant_segments.clamp(1, MAX_QUADRANT_SEGMENTS) as f64
	}

	fn style(&self) -> BufferStyle<f64> {
		let step = self.arc_step();
		let cap = match self.end_cap {
			EndCapStyle::Round => LineCap::Round(step),
			EndCapStyle::Flat => LineCap::Butt,
			EndCapStyle::Square => LineCap::Square,
		};
		BufferStyle::new(self.distance).line_join(LineJoin::Round(step)).line_cap(cap)
	}
}

/// Buffers `geometry` by the signed distance in `params`.
///
/// The result is always areal (possibly empty). Points and lines buffered by a
/// non-positive distance produce an empty result.
pub fn buffer(geometry: &Geometry<f64>, params: &BufferParams) -> Geometry<f64> {
	tracing::trace!(
		distance = params.distance,
		quadrant_segments = params.quadrant_segments,
		end_cap = params.end_cap.name(),
		"buffer"
	);
	if params.distance <= 0.0 && geometry.dimensions() != Dimensions::TwoDimensional {
		return Geometry::MultiPolygon(MultiPolygon::new(Vec::new()));
	}
	Geometry::MultiPolygon(geometry.buffer_with_style(params.style()))
}

#[cfg(test)]
mod tests;
