//! Distance measurement between geometries.
//!
//! Both measures work on the linework of their operands: points, segments and
//! polygon rings. [`nearest_points`] additionally treats the interior of an
//! areal operand as being at distance zero, [`oriented_hausdorff`] does not,
//! which is what buffer-curve checks need.

use geo::algorithm::dimensions::Dimensions;
use geo::algorithm::line_intersection::{LineIntersection, line_intersection};
use geo::{Closest, ClosestPoint, Coord, CoordsIter, Distance, Euclidean, Geometry, HasDimensions, Intersects, Line, Point};

/// A distance together with the pair of locations realising it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestPoints {
	/// Distance between the two locations.
	pub distance: f64,
	/// Location on the first operand, then on the second.
	pub points: [Coord<f64>; 2],
}

impl NearestPoints {
	fn between(a: Coord<f64>, b: Coord<f64>) -> Self {
		Self {
			distance: Euclidean.distance(Point::from(a), Point::from(b)),
			points: [a, b],
		}
	}

	fn swapped(self) -> Self {
		Self {
			distance: self.distance,
			points: [self.points[1], self.points[0]],
		}
	}

	fn closer(self, other: Self) -> Self {
		if other.distance < self.distance { other } else { self }
	}
}

#[derive(Debug, Clone, Copy)]
enum Facet {
	Point(Coord<f64>),
	Segment(Line<f64>),
}

/// Minimum distance between `a` and `b`, with the locations where it occurs.
///
/// Returns `None` when either operand is empty.
pub fn nearest_points(a: &Geometry<f64>, b: &Geometry<f64>) -> Option<NearestPoints> {
	if a.is_empty() || b.is_empty() {
		return None;
	}
	let lhs = facets(a);
	let rhs = facets(b);

	let mut best: Option<NearestPoints> = None;
	'outer: for x in &lhs {
		for y in &rhs {
			let candidate = facet_nearest(x, y);
			best = Some(best.map_or(candidate, |current| current.closer(candidate)));
			if candidate.distance == 0.0 {
				break 'outer;
			}
		}
	}
	let best = best?;
	if best.distance == 0.0 {
		return Some(best);
	}

	// Disjoint linework can still overlap when one operand lies inside the other's area.
	if let Some(inside) = vertex_inside(b, a) {
		return Some(NearestPoints::between(inside, inside));
	}
	if let Some(inside) = vertex_inside(a, b) {
		return Some(NearestPoints::between(inside, inside));
	}
	Some(best)
}

/// Discrete oriented Hausdorff distance from `from` to the linework of `to`.
///
/// `from` is sampled at its vertices and, for every segment, at evenly spaced
/// points splitting it into `round(1 / densify_fraction)` pieces. The sample
/// furthest from `to` is reported as the first location. Returns `None` when
/// either operand is empty.
pub fn oriented_hausdorff(from: &Geometry<f64>, to: &Geometry<f64>, densify_fraction: f64) -> Option<NearestPoints> {
	if from.is_empty() || to.is_empty() {
		return None;
	}
	let targets = facets(to);
	let pieces = if densify_fraction > 0.0 && densify_fraction < 1.0 {
		(1.0 / densify_fraction).round().max(1.0) as usize
	} else {
		1
	};

	let mut worst: Option<NearestPoints> = None;
	for sample in samples(&facets(from), pieces) {
		let nearest = targets
			.iter()
			.map(|facet| facet_nearest(&Facet::Point(sample), facet))
			.reduce(NearestPoints::closer);
		if let Some(nearest) = nearest
			&& worst.is_none_or(|w| nearest.distance > w.distance)
		{
			worst = Some(nearest);
		}
	}
	worst
}

fn samples(facets: &[Facet], pieces: usize) -> Vec<Coord<f64>> {
	let mut out = Vec::new();
	for facet in facets {
		match *facet {
			Facet::Point(coord) => out.push(coord),
			Facet::Segment(line) => {
				let delta = line.delta();
				for i in 0..=pieces {
					let t = i as f64 / pieces as f64;
					out.push(line.start + delta * t);
				}
			}
		}
	}
	out
}

fn facets(geometry: &Geometry<f64>) -> Vec<Facet> {
	let mut out = Vec::new();
	collect_facets(geometry, &mut out);
	out
}

fn collect_facets(geometry: &Geometry<f64>, out: &mut Vec<Facet>) {
	match geometry {
		Geometry::Point(point) => out.push(Facet::Point(point.0)),
		Geometry::MultiPoint(points) => out.extend(points.0.iter().map(|p| Facet::Point(p.0))),
		Geometry::Line(line) => out.push(Facet::Segment(*line)),
		Geometry::GeometryCollection(collection) => collection.0.iter().for_each(|g| collect_facets(g, out)),
		_ => {
			for line in crate::linear_components(geometry) {
				match line.0.as_slice() {
					[] => {}
					[single] => out.push(Facet::Point(*single)),
					_ => out.extend(line.lines().map(Facet::Segment)),
				}
			}
		}
	}
}

fn facet_nearest(a: &Facet, b: &Facet) -> NearestPoints {
	match (*a, *b) {
		(Facet::Point(p), Facet::Point(q)) => NearestPoints::between(p, q),
		(Facet::Point(p), Facet::Segment(s)) => NearestPoints::between(p, closest_on_segment(&s, p)),
		(Facet::Segment(s), Facet::Point(p)) => NearestPoints::between(p, closest_on_segment(&s, p)).swapped(),
		(Facet::Segment(s), Facet::Segment(t)) => segment_nearest(&s, &t),
	}
}

fn segment_nearest(s: &Line<f64>, t: &Line<f64>) -> NearestPoints {
	match line_intersection(*s, *t) {
		Some(LineIntersection::SinglePoint { intersection, .. }) => NearestPoints::between(intersection, intersection),
		Some(LineIntersection::Collinear { intersection }) => {
			NearestPoints::between(intersection.start, intersection.start)
		}
		None => [
			NearestPoints::between(s.start, closest_on_segment(t, s.start)),
			NearestPoints::between(s.end, closest_on_segment(t, s.end)),
			NearestPoints::between(t.start, closest_on_segment(s, t.start)).swapped(),
			NearestPoints::between(t.end, closest_on_segment(s, t.end)).swapped(),
		]
		.into_iter()
		.reduce(NearestPoints::closer)
		.unwrap_or_else(|| NearestPoints::between(s.start, t.start)),
	}
}

fn closest_on_segment(segment: &Line<f64>, coord: Coord<f64>) -> Coord<f64> {
	match segment.closest_point(&Point::from(coord)) {
		Closest::Intersection(point) | Closest::SinglePoint(point) => point.0,
		Closest::Indeterminate => segment.start,
	}
}

/// First vertex of `inner` that lies in the area of `outer`, if `outer` is areal.
fn vertex_inside(inner: &Geometry<f64>, outer: &Geometry<f64>) -> Option<Coord<f64>> {
	if outer.dimensions() != Dimensions::TwoDimensional {
		return None;
	}
	inner.coords_iter().find(|coord| outer.intersects(&Point::from(*coord)))
}

#[cfg(test)]
mod tests;
