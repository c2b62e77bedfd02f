use geo::algorithm::relate::IntersectionMatrix;
use geo::{Geometry, PreparedGeometry, Relate};

use crate::EngineError;

/// DE-9IM pattern of the "contains properly" relationship.
const CONTAINS_PROPERLY: &str = "T**FF*FF*";

/// Named spatial predicates between a subject and a second geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
	Contains,
	ContainsProperly,
	CoveredBy,
	Covers,
	Crosses,
	Disjoint,
	EqualsTopo,
	Intersects,
	Overlaps,
	Touches,
	Within,
}

impl Predicate {
	/// Every predicate, in name order.
	pub const ALL: [Predicate; 11] = [
		Self::Contains,
		Self::ContainsProperly,
		Self::CoveredBy,
		Self::Covers,
		Self::Crosses,
		Self::Disjoint,
		Self::EqualsTopo,
		Self::Intersects,
		Self::Overlaps,
		Self::Touches,
		Self::Within,
	];

	/// Operation name as used in test files.
	pub fn name(self) -> &'static str {
		match self {
			Self::Contains => "contains",
			Self::ContainsProperly => "containsProperly",
			Self::CoveredBy => "coveredBy",
			Self::Covers => "covers",
			Self::Crosses => "crosses",
			Self::Disjoint => "disjoint",
			Self::EqualsTopo => "equalsTopo",
			Self::Intersects => "intersects",
			Self::Overlaps => "overlaps",
			Self::Touches => "touches",
			Self::Within => "within",
		}
	}

	/// Looks a predicate up by name, ignoring case.
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|p| p.name().eq_ignore_ascii_case(name))
	}

	/// Reads this predicate off a computed intersection matrix.
	pub fn test(self, matrix: &IntersectionMatrix) -> Result<bool, EngineError> {
		Ok(match self {
			Self::Contains => matrix.is_contains(),
			Self::ContainsProperly => matrix.matches(CONTAINS_PROPERLY).map_err(|err| EngineError::RelatePattern {
				pattern: CONTAINS_PROPERLY,
				reason: format!("{err:?}"),
			})?,
			Self::CoveredBy => matrix.is_coveredby(),
			Self::Covers => matrix.is_covers(),
			Self::Crosses => matrix.is_crosses(),
			Self::Disjoint => matrix.is_disjoint(),
			Self::EqualsTopo => matrix.is_equal_topo(),
			Self::Intersects => matrix.is_intersects(),
			Self::Overlaps => matrix.is_overlaps(),
			Self::Touches => matrix.is_touches(),
			Self::Within => matrix.is_within(),
		})
	}
}

/// Evaluates `predicate` between `a` and `b` with the plain relate algorithm.
pub fn evaluate(predicate: Predicate, a: &Geometry<f64>, b: &Geometry<f64>) -> Result<bool, EngineError> {
	predicate.test(&a.relate(b))
}

/// Evaluates `predicate` against a prepared (indexed) form of `subject`.
///
/// The prepared form is built for this call only and dropped on return.
pub fn evaluate_prepared(predicate: Predicate, subject: &Geometry<f64>, other: &Geometry<f64>) -> Result<bool, EngineError> {
	let prepared = PreparedGeometry::from(subject);
	predicate.test(&prepared.relate(other))
}

/// Returns true when every point of `b` lies in `a`.
pub fn covers(a: &Geometry<f64>, b: &Geometry<f64>) -> bool {
	a.relate(b).is_covers()
}
