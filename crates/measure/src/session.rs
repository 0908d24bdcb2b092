// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{AreaEstimate, MeasureError, MeasureObserver, Pairing, PointSet, pair};
use common::Point;
use log::{debug, info, warn};

/// Selects one of the two shapes of a session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Primary,
    Secondary,
}

/// Where a session is in its lifecycle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Phase {
    /// `placed` points of the primary shape so far.
    CollectingPrimary { placed: usize },
    /// The primary shape is complete; `placed` points of the secondary shape so far.
    CollectingSecondary { placed: usize },
    /// Both shapes are complete and the area has been reported.
    Complete { area: f32 },
}

/// The one-shot result of a session, computed when the secondary shape is completed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Measurement {
    pub pairing: Pairing,
    pub estimate: AreaEstimate,
}

/// Collects two quadrilaterals one point at a time and measures the area between them.
///
/// The host calls [`MeasureSession::add_point`] once per placed anchor.  Points go to the primary
/// shape until it holds four, then to the secondary shape.  Completing the secondary shape pairs
/// the two and computes the area, exactly once; later points are rejected until
/// [`MeasureSession::reset`].
#[derive(Clone, Debug, Default)]
pub struct MeasureSession {
    primary: PointSet,
    secondary: PointSet,
    measurement: Option<Measurement>,
}

impl MeasureSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shape the next point will be added to, or `None` once the measurement is complete.
    pub fn active_shape(&self) -> Option<Shape> {
        if !self.primary.is_full() {
            Some(Shape::Primary)
        } else if !self.secondary.is_full() {
            Some(Shape::Secondary)
        } else {
            None
        }
    }

    pub fn shape(&self, shape: Shape) -> &PointSet {
        match shape {
            Shape::Primary => &self.primary,
            Shape::Secondary => &self.secondary,
        }
    }

    pub fn phase(&self) -> Phase {
        match (&self.measurement, self.active_shape()) {
            (Some(measurement), _) => Phase::Complete {
                area: measurement.estimate.area,
            },
            (None, Some(Shape::Primary)) => Phase::CollectingPrimary {
                placed: self.primary.len(),
            },
            // Not reached through `add_point`, which measures as soon as the secondary shape fills.
            (None, Some(Shape::Secondary) | None) => Phase::CollectingSecondary {
                placed: self.secondary.len(),
            },
        }
    }

    pub fn measurement(&self) -> Option<&Measurement> {
        self.measurement.as_ref()
    }

    /// Records a newly placed anchor and reports the links it creates to `observer`.  Completing
    /// the secondary shape additionally reports the paired links and then the area.
    pub fn add_point<O>(&mut self, point: Point, observer: &mut O) -> Result<Phase, MeasureError>
    where
        O: MeasureObserver + ?Sized,
    {
        let Some(shape) = self.active_shape() else {
            warn!(
                "Ignoring point ({}, {}, {}): measurement is already complete",
                point.x, point.y, point.z
            );
            return Err(MeasureError::SessionComplete);
        };

        let set = match shape {
            Shape::Primary => &mut self.primary,
            Shape::Secondary => &mut self.secondary,
        };
        let appended = set.add_point(point)?;
        debug!("{:?} shape now holds {} points", shape, set.len());

        for link in appended.links() {
            debug!("{} link of length {}", link.kind, link.distance);
            observer.on_link_created(&link);
        }

        if shape == Shape::Secondary && self.secondary.is_full() {
            let pairing = pair(&self.primary, &self.secondary)?;
            for link in pairing.links() {
                observer.on_link_created(link);
            }

            let estimate = AreaEstimate::compute(&self.primary, &self.secondary)?;
            info!(
                "Measured area {} (shape areas {} and {}, mean distance {})",
                estimate.area,
                estimate.primary_shape_area,
                estimate.secondary_shape_area,
                estimate.mean_cross_distance
            );
            observer.on_area_computed(estimate.area);
            self.measurement = Some(Measurement { pairing, estimate });
        }

        Ok(self.phase())
    }

    /// Forgets both shapes and any computed measurement.
    pub fn reset(&mut self) {
        self.primary.clear();
        self.secondary.clear();
        self.measurement = None;
    }
}


// End of File
