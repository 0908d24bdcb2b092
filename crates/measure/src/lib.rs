// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # Quadrilateral pairing and area estimation
//!
//! Points arrive one at a time, as the user places anchors.  The first four fill the primary
//! [`PointSet`], the next four fill the secondary one.  Every placement emits a [`Link`] back to the
//! previous point of the same shape, and the fourth point of a shape also closes the loop.  Once
//! the secondary shape is complete, the two shapes are [`pair`]ed greedily by nearest neighbour and
//! an [`AreaEstimate`] is computed from the shapes and the distances between them.
//!
//! [`MeasureSession`] drives the whole sequence and reports links and the final area to a
//! [`MeasureObserver`] supplied by the host.
//!
//! [`Link`]: common::Link

mod area;
mod error;
mod observer;
mod pairing;
mod point_set;
mod session;

pub use area::{AreaEstimate, area, mean_cross_distance, shape_area};
pub use error::MeasureError;
pub use observer::{LinkRecorder, LogObserver, MeasureObserver};
pub use pairing::{Pairing, pair};
pub use point_set::{Appended, PointSet, SHAPE_CORNERS};
pub use session::{MeasureSession, Measurement, Phase, Shape};

/// Most commonly used types, suitable for glob import.
pub mod prelude {
    pub use super::{MeasureError, MeasureObserver, MeasureSession, Phase, PointSet, Shape};
    pub use common::{Link, LinkKind, Point};
}

// End of File
