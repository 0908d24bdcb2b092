// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{MeasureError, PointSet, SHAPE_CORNERS};
use common::{Link, LinkKind, distance_sq};

/// Index correspondence between the corners of two complete shapes, and the links it produced.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pairing {
    /// `assignment[i]` is the secondary index paired with primary index `i`.
    assignment: [usize; SHAPE_CORNERS],
    links: [Link; SHAPE_CORNERS],
}

impl Pairing {
    pub fn assignment(&self) -> &[usize; SHAPE_CORNERS] {
        &self.assignment
    }

    /// Secondary index paired with `primary_index`.
    pub fn partner(&self, primary_index: usize) -> Option<usize> {
        self.assignment.get(primary_index).copied()
    }

    /// Paired links in primary order.
    pub fn links(&self) -> &[Link; SHAPE_CORNERS] {
        &self.links
    }
}

/// Pairs each corner of `primary`, in insertion order, with the closest corner of `secondary` not
/// already claimed by an earlier one.
///
/// The assignment is greedy rather than globally optimal: an early corner may take the best match
/// of a later one.  Ties go to the lowest secondary index.
pub fn pair(primary: &PointSet, secondary: &PointSet) -> Result<Pairing, MeasureError> {
    let precondition = MeasureError::PreconditionViolation {
        expected: SHAPE_CORNERS,
        primary: primary.len(),
        secondary: secondary.len(),
    };
    let (Some(a), Some(b)) = (primary.corners(), secondary.corners()) else {
        return Err(precondition);
    };

    let mut picked = [false; SHAPE_CORNERS];
    let mut assignment = [0; SHAPE_CORNERS];
    let mut links = [Link::new(LinkKind::Paired, a[0], b[0]); SHAPE_CORNERS];

    for (i, &from) in a.iter().enumerate() {
        let mut nearest: Option<(usize, f32)> = None;
        for (j, &to) in b.iter().enumerate() {
            if picked[j] {
                continue;
            }

            let candidate = distance_sq(from, to);
            if nearest.map_or(true, |(_, best)| candidate < best) {
                nearest = Some((j, candidate));
            }
        }

        // Four candidates for four corners, so an unclaimed index always remains.
        let (j, _) = nearest.ok_or(precondition)?;
        picked[j] = true;
        assignment[i] = j;
        links[i] = Link::new(LinkKind::Paired, from, b[j]);
    }

    log::debug!("paired corners {:?}", assignment);
    Ok(Pairing { assignment, links })
}


// End of File
