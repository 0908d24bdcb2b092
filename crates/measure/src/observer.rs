// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use common::Link;

/// Receives the output of a [`MeasureSession`](crate::MeasureSession).  A rendering host would draw
/// a labelled line for each link and show the area once.
pub trait MeasureObserver {
    /// Called for every sequential, closing and paired link, in creation order.
    fn on_link_created(&mut self, link: &Link);

    /// Called exactly once per measurement, after the paired links.
    fn on_area_computed(&mut self, area: f32);
}

/// Keeps everything it observes.  Handy for hosts that render in a later pass, and for tests.
#[derive(Clone, Debug, Default)]
pub struct LinkRecorder {
    pub links: Vec<Link>,
    pub area: Option<f32>,
}

impl MeasureObserver for LinkRecorder {
    fn on_link_created(&mut self, link: &Link) {
        self.links.push(*link);
    }

    fn on_area_computed(&mut self, area: f32) {
        self.area = Some(area);
    }
}

/// Reports links at `debug` level and the final area at `info` level through the `log` facade.
#[derive(Copy, Clone, Debug)]
pub struct LogObserver {
    /// Decimal places used for distance labels.
    pub precision: usize,
}

impl MeasureObserver for LogObserver {
    fn on_link_created(&mut self, link: &Link) {
        let anchor = link.label_anchor();
        log::debug!(
            "{} link: {} at ({:.3}, {:.3}, {:.3})",
            link.kind,
            link.label(self.precision),
            anchor.x,
            anchor.y,
            anchor.z
        );
    }

    fn on_area_computed(&mut self, area: f32) {
        log::info!("Final area is: {}", common::format_measure(area, self.precision));
    }
}

/// Observers are often borrowed by the host for the lifetime of a session.
impl<T: MeasureObserver + ?Sized> MeasureObserver for &mut T {
    fn on_link_created(&mut self, link: &Link) {
        (**self).on_link_created(link);
    }

    fn on_area_computed(&mut self, area: f32) {
        (**self).on_area_computed(area);
    }
}

/// Fans every event out to both observers, left first.
impl<A: MeasureObserver, B: MeasureObserver> MeasureObserver for (A, B) {
    fn on_link_created(&mut self, link: &Link) {
        self.0.on_link_created(link);
        self.1.on_link_created(link);
    }

    fn on_area_computed(&mut self, area: f32) {
        self.0.on_area_computed(area);
        self.1.on_area_computed(area);
    }
}


// End of File
