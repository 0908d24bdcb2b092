// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{MeasureError, PointSet, SHAPE_CORNERS};
use common::{Point, distance};

/// Area proxy for a quadrilateral whose corners are given in loop order.
///
/// Opposite sides are averaged and the two averages multiplied, treating the shape as a
/// rectangle.  This is exact for rectangles and only an approximation for anything else; it is not
/// the polygon area.
pub fn shape_area(corners: &[Point; SHAPE_CORNERS]) -> f32 {
    let [p0, p1, p2, p3] = *corners;
    let x = distance(p0, p1);
    let y = distance(p2, p3);
    let z = distance(p1, p2);
    let w = distance(p0, p3);

    ((z + w) / 2.0) * ((x + y) / 2.0)
}

/// Mean of the distances between every point of `a` and every point of `b`.  Returns zero when
/// either side is empty.
pub fn mean_cross_distance(a: &[Point], b: &[Point]) -> f32 {
    let count = a.len() * b.len();
    if count == 0 {
        return 0.0;
    }

    let total: f32 = a
        .iter()
        .flat_map(|&from| b.iter().map(move |&to| distance(from, to)))
        .sum();
    total / count as f32
}

/// Every intermediate value of the area computation, kept for reporting.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AreaEstimate {
    pub primary_shape_area: f32,
    pub secondary_shape_area: f32,
    pub mean_cross_distance: f32,
    /// `((primary + secondary) / 2) * mean_cross_distance`
    pub area: f32,
}

impl AreaEstimate {
    /// Estimates the area spanned by two complete shapes.
    pub fn compute(primary: &PointSet, secondary: &PointSet) -> Result<Self, MeasureError> {
        let (Some(a), Some(b)) = (primary.corners(), secondary.corners()) else {
            return Err(MeasureError::PreconditionViolation {
                expected: SHAPE_CORNERS,
                primary: primary.len(),
                secondary: secondary.len(),
            });
        };

        let primary_shape_area = shape_area(a);
        let secondary_shape_area = shape_area(b);
        let mean_cross_distance = mean_cross_distance(a, b);

        Ok(Self {
            primary_shape_area,
            secondary_shape_area,
            mean_cross_distance,
            area: ((primary_shape_area + secondary_shape_area) / 2.0) * mean_cross_distance,
        })
    }
}

/// Shorthand for [`AreaEstimate::compute`] when only the final value is needed.
pub fn area(primary: &PointSet, secondary: &PointSet) -> Result<f32, MeasureError> {
    AreaEstimate::compute(primary, secondary).map(|estimate| estimate.area)
}


// End of File
