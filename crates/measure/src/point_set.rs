// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::MeasureError;
use common::{Link, LinkKind, Point};

/// Number of corners in each measured shape.
pub const SHAPE_CORNERS: usize = 4;

/// An ordered collection of up to [`SHAPE_CORNERS`] points.  Insertion order defines the loop
/// `p0 -> p1 -> p2 -> p3 -> p0` that outlines the shape.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
}

/// The links produced by a single [`PointSet::add_point`] call.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Appended {
    /// Link from the previous last point to the new one; `None` for the first point of a shape.
    pub sequential: Option<Link>,
    /// Link from the fourth point back to the first; only present when the shape was just
    /// completed.
    pub closing: Option<Link>,
}

impl Appended {
    /// The emitted links, sequential first.
    pub fn links(&self) -> impl Iterator<Item = Link> {
        self.sequential.into_iter().chain(self.closing)
    }
}

impl PointSet {
    pub fn new() -> Self {
        Self {
            points: Vec::with_capacity(SHAPE_CORNERS),
        }
    }

    /// Appends `point`, returning the links this placement creates.  A full set rejects the point
    /// and is left unchanged.
    pub fn add_point(&mut self, point: Point) -> Result<Appended, MeasureError> {
        if self.is_full() {
            return Err(MeasureError::SetFull {
                capacity: SHAPE_CORNERS,
            });
        }

        let sequential = self
            .points
            .last()
            .map(|&previous| Link::new(LinkKind::Sequential, previous, point));
        self.points.push(point);

        // The loop is closed exactly once, on the placement that fills the set.
        let closing = if self.is_full() {
            Some(Link::new(LinkKind::Closing, point, self.points[0]))
        } else {
            None
        };

        Ok(Appended {
            sequential,
            closing,
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.points.len() == SHAPE_CORNERS
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The four corners in insertion order, or `None` while the shape is incomplete.
    pub fn corners(&self) -> Option<&[Point; SHAPE_CORNERS]> {
        self.points.as_slice().try_into().ok()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}


// End of File
