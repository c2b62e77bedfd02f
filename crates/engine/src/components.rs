use geo::{Coord, Geometry, LineString, MultiLineString, MultiPoint, Point, Polygon};

use crate::{EngineError, empty_collection, kind_name};

/// Returns every linear component of `geometry`, polygon rings included.
pub fn linear_components(geometry: &Geometry<f64>) -> Vec<LineString<f64>> {
	let mut out = Vec::new();
	collect_lines(geometry, &mut out);
	out
}

/// Returns the rings of the polygonal components of `geometry` as linework.
///
/// Non-areal components are ignored.
pub fn ring_lines(geometry: &Geometry<f64>) -> Geometry<f64> {
	let mut rings = Vec::new();
	collect_rings(geometry, &mut rings);
	Geometry::MultiLineString(MultiLineString::new(rings))
}

/// Splits `geometry` into its atomic (non-collection) components.
pub fn atomic_components(geometry: &Geometry<f64>) -> Vec<Geometry<f64>> {
	let mut out = Vec::new();
	collect_atoms(geometry, &mut out);
	out
}

/// Computes the topological boundary of `geometry`.
///
/// Puntal geometries have an empty boundary, lineal ones the endpoints that
/// occur an odd number of times, areal ones their rings.
pub fn boundary(geometry: &Geometry<f64>) -> Result<Geometry<f64>, EngineError> {
	let boundary = match geometry {
		Geometry::Point(_) | Geometry::MultiPoint(_) => empty_collection(),
		Geometry::Line(line) => line_boundary(&[LineString::from(vec![line.start, line.end])]),
		Geometry::LineString(line) => line_boundary(std::slice::from_ref(line)),
		Geometry::MultiLineString(lines) => line_boundary(&lines.0),
		Geometry::Polygon(_) | Geometry::MultiPolygon(_) | Geometry::Rect(_) | Geometry::Triangle(_) => {
			let mut rings = linear_components(geometry);
			if rings.len() == 1 {
				Geometry::LineString(rings.remove(0))
			} else {
				Geometry::MultiLineString(MultiLineString::new(rings))
			}
		}
		Geometry::GeometryCollection(_) => {
			return Err(EngineError::Unsupported {
				op: "boundary",
				kind: kind_name(geometry),
			});
		}
	};
	Ok(boundary)
}

fn line_boundary(lines: &[LineString<f64>]) -> Geometry<f64> {
	let mut ends: Vec<(Coord<f64>, usize)> = Vec::new();
	for line in lines {
		let (Some(first), Some(last)) = (line.0.first(), line.0.last()) else {
			continue;
		};
		if line.is_closed() {
			continue;
		}
		for end in [*first, *last] {
			match ends.iter_mut().find(|(coord, _)| *coord == end) {
				Some((_, count)) => *count += 1,
				None => ends.push((end, 1)),
			}
		}
	}
	// Mod-2 rule: only ends shared by an odd number of lines are on the boundary.
	let points: MultiPoint<f64> = ends
		.into_iter()
		.filter(|(_, count)| count % 2 == 1)
		.map(|(coord, _)| Point::from(coord))
		.collect();
	Geometry::MultiPoint(points)
}

fn collect_lines(geometry: &Geometry<f64>, out: &mut Vec<LineString<f64>>) {
	match geometry {
		Geometry::Point(_) | Geometry::MultiPoint(_) => {}
		Geometry::Line(line) => out.push(LineString::from(vec![line.start, line.end])),
		Geometry::LineString(line) => out.push(line.clone()),
		Geometry::MultiLineString(lines) => out.extend(lines.0.iter().cloned()),
		Geometry::GeometryCollection(collection) => collection.0.iter().for_each(|g| collect_lines(g, out)),
		Geometry::Polygon(_) | Geometry::MultiPolygon(_) | Geometry::Rect(_) | Geometry::Triangle(_) => {
			collect_rings(geometry, out)
		}
	}
}

fn collect_rings(geometry: &Geometry<f64>, out: &mut Vec<LineString<f64>>) {
	match geometry {
		Geometry::Polygon(polygon) => push_rings(polygon, out),
		Geometry::MultiPolygon(polygons) => polygons.0.iter().for_each(|p| push_rings(p, out)),
		Geometry::Rect(rect) => push_rings(&rect.to_polygon(), out),
		Geometry::Triangle(triangle) => push_rings(&triangle.to_polygon(), out),
		Geometry::GeometryCollection(collection) => collection.0.iter().for_each(|g| collect_rings(g, out)),
		_ => {}
	}
}

fn push_rings(polygon: &Polygon<f64>, out: &mut Vec<LineString<f64>>) {
	if !polygon.exterior().0.is_empty() {
		out.push(polygon.exterior().clone());
	}
	out.extend(polygon.interiors().iter().cloned());
}

fn collect_atoms(geometry: &Geometry<f64>, out: &mut Vec<Geometry<f64>>) {
	match geometry {
		Geometry::MultiPoint(points) => out.extend(points.0.iter().copied().map(Geometry::Point)),
		Geometry::MultiLineString(lines) => out.extend(lines.0.iter().cloned().map(Geometry::LineString)),
		Geometry::MultiPolygon(polygons) => out.extend(polygons.0.iter().cloned().map(Geometry::Polygon)),
		Geometry::GeometryCollection(collection) => collection.0.iter().for_each(|g| collect_atoms(g, out)),
		atom => out.push(atom.clone()),
	}
}
