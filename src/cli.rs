// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::path::PathBuf;
use thiserror::Error;

pub const USAGE: &str = "usage: quadmeasure [--config <path>] <taps.toml>
       quadmeasure [--config <path>] --init-config";

/// Parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    /// Write the default configuration to `config`, or to the platform location.
    InitConfig { config: Option<PathBuf> },
    Replay {
        config: Option<PathBuf>,
        taps: PathBuf,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("missing value for {0}")]
    MissingValue(&'static str),

    #[error("unexpected argument \"{0}\"")]
    Unexpected(String),

    #[error("no taps file given")]
    MissingTaps,
}

/// Parses the arguments following the program name.
pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = None;
    let mut taps = None;
    let mut init_config = false;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-c" | "--config" => {
                let value = args.next().ok_or(CliError::MissingValue("--config"))?;
                config = Some(PathBuf::from(value));
            }
            "--init-config" => init_config = true,
            _ if arg.starts_with('-') => return Err(CliError::Unexpected(arg)),
            _ if taps.is_none() => taps = Some(PathBuf::from(arg)),
            _ => return Err(CliError::Unexpected(arg)),
        }
    }

    if init_config {
        return match taps {
            Some(taps) => Err(CliError::Unexpected(taps.display().to_string())),
            None => Ok(Command::InitConfig { config }),
        };
    }

    Ok(Command::Replay {
        config,
        taps: taps.ok_or(CliError::MissingTaps)?,
    })
}


// End of File
