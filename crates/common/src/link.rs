// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{Point, distance, format_measure};
use std::fmt;

/// Why a [`Link`] was created.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// Joins a newly placed point to the point placed before it in the same shape.
    Sequential,
    /// Joins the fourth point of a shape back to its first point.
    Closing,
    /// Joins a point of the primary shape to its nearest unused point of the secondary shape.
    Paired,
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkKind::Sequential => f.pad("sequential"),
            LinkKind::Closing => f.pad("closing"),
            LinkKind::Paired => f.pad("paired"),
        }
    }
}

/// A labelled connection between two points.  The pair is unordered: `from` and `to` only record
/// the order in which the link was emitted.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Link {
    pub kind: LinkKind,
    pub from: Point,
    pub to: Point,
    /// Euclidean distance between `from` and `to`, computed once on creation.
    pub distance: f32,
}

impl Link {
    pub fn new(kind: LinkKind, from: Point, to: Point) -> Self {
        Self {
            kind,
            from,
            to,
            distance: distance(from, to),
        }
    }

    /// Where a host should draw the distance label: halfway between the two endpoints.
    pub fn label_anchor(&self) -> Point {
        (self.from - self.to) / 2.0 + self.to
    }

    /// The distance label, rounded to `precision` decimal places (see [`format_measure`]).
    pub fn label(&self, precision: usize) -> String {
        format_measure(self.distance, precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_anchor_is_midpoint() {
        let link = Link::new(
            LinkKind::Sequential,
            Point::new(2.0, 0.0, 4.0),
            Point::new(0.0, 2.0, 0.0),
        );
        assert_eq!(link.label_anchor(), Point::new(1.0, 1.0, 2.0));
    }

    #[test]
    fn label_uses_requested_precision() {
        let link = Link::new(
            LinkKind::Closing,
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 1.0, 0.0),
        );
        assert_eq!(link.label(3), "1.414");
        assert_eq!(link.label(0), "1");
    }

    #[test]
    fn oversized_precision_does_not_panic() {
        let link = Link::new(LinkKind::Sequential, Point::zero(), Point::unit_x());
        assert_eq!(link.label(70_000), "1.000000000");
    }

    #[test]
    fn kind_honours_width() {
        assert_eq!(format!("{:<10}|", LinkKind::Paired), "paired    |");
        assert_eq!(format!("{:>8}", LinkKind::Closing), " closing");
        assert_eq!(LinkKind::Sequential.to_string(), "sequential");
    }
}

// End of File
