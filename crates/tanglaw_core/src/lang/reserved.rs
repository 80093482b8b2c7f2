//! Reserved-word vocabulary: the geometry and measurement domain of TanglawPL.
//!
//! Reserved words look like identifiers but each one has a fixed parse form when followed by `(`:
//! `areaOf(circle(5))`, `cm(12)`, `setprecision(x, 2)`. Used without a call they behave as plain names (e.g. the
//! `radius` in `c.radius`).
//!
//! ## Notes
//! - Each entry records its [`ReservedCategory`] (which parse form it dispatches to) and the accepted argument
//!   count for that form.
//! - Several units are very short (`m`, `l`, `in`); they are still reserved and cannot name variables.
//!
//! ## Examples
//! ```rust
//! use tanglaw_core::lang::reserved::{self, ReservedCategory, ReservedWordId};
//!
//! assert_eq!(reserved::from_str("areaOf"), Some(ReservedWordId::AreaOf));
//! assert_eq!(reserved::category(ReservedWordId::Kilogram), ReservedCategory::Unit);
//! assert_eq!(reserved::arity(ReservedWordId::Triangle), (2, 3));
//! ```

/// Which parse form a reserved word dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservedCategory {
    /// `areaOf`, `perimeterOf`, `volumeOf`.
    Geometry,
    Shape,
    Measurement,
    Unit,
    /// `sq`, which squares a following unit.
    UnitModifier,
    Fetch,
    SetPrecision,
    Cubic,
}

/// Stable identifier for every reserved word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservedWordId {
    // Geometry calculations
    AreaOf,
    PerimeterOf,
    VolumeOf,

    // Shapes
    Circle,
    Square,
    Rectangle,
    Triangle,
    Sphere,
    Cube,

    // Measurements
    Radius,
    Circumference,
    Length,
    Height,
    Width,
    Side,
    Base,
    Distance,

    // Units
    Centimeter,
    Meter,
    Kilometer,
    Millimeter,
    Inch,
    Foot,
    Kilogram,
    Pound,
    Milligram,
    Liter,
    Sq,

    // Builtin operations
    Fetch,
    SetPrecision,
    Cubic,
}

/// Metadata for a reserved word.
#[derive(Debug, Clone, Copy)]
pub struct ReservedWordInfo {
    pub id: ReservedWordId,
    pub canonical: &'static str,
    pub category: ReservedCategory,
    /// Inclusive `(min, max)` argument count of the call form.
    pub arity: (usize, usize),
}

/// Registry of all reserved words.
pub const RESERVED_WORDS: &[ReservedWordInfo] = &[
    // Geometry calculations
    info(ReservedWordId::AreaOf, "areaOf", ReservedCategory::Geometry, (1, 1)),
    info(ReservedWordId::PerimeterOf, "perimeterOf", ReservedCategory::Geometry, (1, 1)),
    info(ReservedWordId::VolumeOf, "volumeOf", ReservedCategory::Geometry, (1, 1)),
    // Shapes
    info(ReservedWordId::Circle, "circle", ReservedCategory::Shape, (1, 1)),
    info(ReservedWordId::Square, "square", ReservedCategory::Shape, (1, 1)),
    info(ReservedWordId::Rectangle, "rectangle", ReservedCategory::Shape, (2, 2)),
    info(ReservedWordId::Triangle, "triangle", ReservedCategory::Shape, (2, 3)),
    info(ReservedWordId::Sphere, "sphere", ReservedCategory::Shape, (1, 1)),
    info(ReservedWordId::Cube, "cube", ReservedCategory::Shape, (1, 1)),
    // Measurements
    info(ReservedWordId::Radius, "radius", ReservedCategory::Measurement, (1, 1)),
    info(ReservedWordId::Circumference, "circumference", ReservedCategory::Measurement, (1, 1)),
    info(ReservedWordId::Length, "length", ReservedCategory::Measurement, (1, 1)),
    info(ReservedWordId::Height, "height", ReservedCategory::Measurement, (1, 1)),
    info(ReservedWordId::Width, "width", ReservedCategory::Measurement, (1, 1)),
    info(ReservedWordId::Side, "side", ReservedCategory::Measurement, (1, 1)),
    info(ReservedWordId::Base, "base", ReservedCategory::Measurement, (1, 1)),
    info(ReservedWordId::Distance, "distance", ReservedCategory::Measurement, (2, 2)),
    // Units
    info(ReservedWordId::Centimeter, "cm", ReservedCategory::Unit, (1, 1)),
    info(ReservedWordId::Meter, "m", ReservedCategory::Unit, (1, 1)),
    info(ReservedWordId::Kilometer, "km", ReservedCategory::Unit, (1, 1)),
    info(ReservedWordId::Millimeter, "mm", ReservedCategory::Unit, (1, 1)),
    info(ReservedWordId::Inch, "in", ReservedCategory::Unit, (1, 1)),
    info(ReservedWordId::Foot, "ft", ReservedCategory::Unit, (1, 1)),
    info(ReservedWordId::Kilogram, "kg", ReservedCategory::Unit, (1, 1)),
    info(ReservedWordId::Pound, "lbs", ReservedCategory::Unit, (1, 1)),
    info(ReservedWordId::Milligram, "mg", ReservedCategory::Unit, (1, 1)),
    info(ReservedWordId::Liter, "l", ReservedCategory::Unit, (1, 1)),
    info(ReservedWordId::Sq, "sq", ReservedCategory::UnitModifier, (1, 1)),
    // Builtin operations
    info(ReservedWordId::Fetch, "fetch", ReservedCategory::Fetch, (0, 1)),
    info(ReservedWordId::SetPrecision, "setprecision", ReservedCategory::SetPrecision, (2, 2)),
    info(ReservedWordId::Cubic, "cubic", ReservedCategory::Cubic, (1, 1)),
];

/// Return the full metadata entry for a reserved word.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: ReservedWordId) -> &'static ReservedWordInfo {
    RESERVED_WORDS
        .iter()
        .find(|r| r.id == id)
        .expect("reserved word info missing")
}

/// Canonical spelling.
pub fn as_str(id: ReservedWordId) -> &'static str {
    info_for(id).canonical
}

/// Parse-form category.
pub fn category(id: ReservedWordId) -> ReservedCategory {
    info_for(id).category
}

/// Inclusive `(min, max)` argument count of the call form.
pub fn arity(id: ReservedWordId) -> (usize, usize) {
    info_for(id).arity
}

/// Return `true` if `id` names a unit that may follow a declarator (`float d cm = 2.5;`).
pub fn is_unit(id: ReservedWordId) -> bool {
    category(id) == ReservedCategory::Unit
}

/// Lookup by spelling.
pub fn from_str(s: &str) -> Option<ReservedWordId> {
    RESERVED_WORDS.iter().find(|r| r.canonical == s).map(|r| r.id)
}

impl std::fmt::Display for ReservedWordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(as_str(*self))
    }
}

const fn info(
    id: ReservedWordId,
    canonical: &'static str,
    category: ReservedCategory,
    arity: (usize, usize),
) -> ReservedWordInfo {
    ReservedWordInfo {
        id,
        canonical,
        category,
        arity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_bounds_are_ordered() {
        for r in RESERVED_WORDS {
            assert!(r.arity.0 <= r.arity.1, "bad arity for {}", r.canonical);
        }
    }

    #[test]
    fn test_sq_is_not_a_unit() {
        assert!(!is_unit(ReservedWordId::Sq));
        assert!(is_unit(ReservedWordId::Centimeter));
    }
}
