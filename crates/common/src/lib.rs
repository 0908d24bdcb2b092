// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Geometry shared by the quadmeasure crates: the tracked [`Point`] type, distance helpers, and the
//! [`Link`] drawn between two points.

mod link;

pub use link::{Link, LinkKind};

/// The tracked location of a placed anchor.  Single precision, matching the vectors reported by
/// the tracking runtime.
pub type Point = ultraviolet::Vec3;

/// Largest number of decimal places used when formatting lengths and areas.
pub const MAX_LABEL_PRECISION: usize = 9;

/// Formats a length or area with `precision` decimal places, capped at
/// [`MAX_LABEL_PRECISION`].
pub fn format_measure(value: f32, precision: usize) -> String {
    format!("{:.*}", precision.min(MAX_LABEL_PRECISION), value)
}

/// Euclidean distance between `a` and `b`.
#[inline]
pub fn distance(a: Point, b: Point) -> f32 {
    (a - b).mag()
}

/// Squared Euclidean distance between `a` and `b`.  Cheaper than [`distance`] and preserves
/// ordering, so it is what nearest-neighbour searches compare.
#[inline]
pub fn distance_sq(a: Point, b: Point) -> f32 {
    (a - b).mag_sq()
}

/// Returns true if every component of `point` is finite.
pub fn is_finite(point: Point) -> bool {
    point.x.is_finite() && point.y.is_finite() && point.z.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(3.0, 4.0, 12.0);
        assert_eq!(distance(a, b), 13.0);
        assert_eq!(distance_sq(a, b), 169.0);
        assert_eq!(distance(b, a), distance(a, b));
    }

    #[test]
    fn precision_is_capped() {
        assert_eq!(format_measure(1.5, 2), "1.50");
        assert_eq!(format_measure(1.0, 70_000), "1.000000000");
    }

    #[test]
    fn non_finite_points_are_detected() {
        assert!(is_finite(Point::new(1.0, -2.0, 0.5)));
        assert!(!is_finite(Point::new(f32::NAN, 0.0, 0.0)));
        assert!(!is_finite(Point::new(0.0, f32::INFINITY, 0.0)));
    }
}

// End of File
