// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # quadmeasure
//!
//! Replays recorded anchor placements through a [`MeasureSession`] and reports the resulting links
//! and area.  This stands in for an AR host: each tap of the recording is one placed anchor.
//!
//! [`MeasureSession`]: measure::MeasureSession

pub mod cli;
mod replay;

pub use replay::{ReplayError, Tap, load_taps, parse_taps, replay, write_report};

// End of File
