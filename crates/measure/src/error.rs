// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MeasureError {
    /// Pairing or area estimation was requested before both shapes were complete.
    #[error(
        "both shapes must hold exactly {expected} points (primary has {primary}, secondary has {secondary})"
    )]
    PreconditionViolation {
        expected: usize,
        primary: usize,
        secondary: usize,
    },

    #[error("shape already holds {capacity} points")]
    SetFull { capacity: usize },

    #[error("measurement is already complete, reset the session to start a new one")]
    SessionComplete,
}

// End of File
