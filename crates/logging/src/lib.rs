// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # quadmeasure's Logging Setup
//!
//! Logging goes through the [`log`] facade, with [`env_logger`] writing to the terminal.  Only the
//! crates passed to [`Logging::new`] are captured.
//!
//! By default, the logging level is set to [`Info`](log::Level::Info) for debug builds, and
//! [`Warn`](log::Level::Warn) for release builds. This can be overridden by setting the `RUST_LOG`
//! environment variable, like so:
//!
//! ```sh
//! $> RUST_LOG=quadmeasure_measure=debug cargo run -- taps.toml
//! ```

use log::{LevelFilter, SetLoggerError};

/// Builder for the process-wide logger.
pub struct Logging {
    crates: Vec<String>,
    level: LevelFilter,
}

impl Logging {
    /// Captures logs from `crates` at the build profile's default level.
    pub fn new<I, S>(crates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            crates: crates.into_iter().map(Into::into).collect(),
            level: default_level(),
        }
    }

    /// Replaces the default level.  `RUST_LOG` still takes precedence.
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// The filter that applies when `RUST_LOG` is unset, in `RUST_LOG` syntax.
    pub fn filter(&self) -> String {
        filter_string(&self.crates, self.level)
    }

    /// Installs the logger.  Fails if a logger was already installed.
    pub fn init(self) -> Result<(), SetLoggerError> {
        let filter = self.filter();
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
            .try_init()
    }
}

/// [`Info`](LevelFilter::Info) in debug builds, [`Warn`](LevelFilter::Warn) in release.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    }
}

/// Builds the filter string that would have been set in `RUST_LOG`.
fn filter_string<S: AsRef<str>>(crates: &[S], level: LevelFilter) -> String {
    let level = level.as_str().to_lowercase();
    crates
        .iter()
        .map(|name| format!("{}={}", name.as_ref().replace('-', "_"), level))
        .collect::<Vec<_>>()
        .join(",")
}


// End of File
