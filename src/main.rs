// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use anyhow::{Context, Result, anyhow};
use app_config::AppConfig;
use logging::Logging;
use measure::{LinkRecorder, LogObserver};
use quadmeasure::cli::{self, Command};
use std::path::{Path, PathBuf};

fn run() -> Result<()> {
    let (config_path, taps_path) = match cli::parse_args(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            println!("{}", cli::USAGE);
            return Ok(());
        }
        Ok(Command::InitConfig { config }) => return init_config(config),
        Ok(Command::Replay { config, taps }) => (config, taps),
        Err(err) => {
            eprintln!("{}", cli::USAGE);
            return Err(err.into());
        }
    };

    let config = AppConfig::load(config_path.as_deref())?;
    let mut logging = Logging::new(config.log_crates.iter().cloned());
    if let Some(level) = config.log_level_filter()? {
        logging = logging.with_level(level);
    }
    logging.init()?;

    replay_file(&taps_path, &config)
}

fn init_config(path: Option<PathBuf>) -> Result<()> {
    let path = path
        .or_else(AppConfig::default_path)
        .ok_or_else(|| anyhow!("no configuration directory available, pass --config <path>"))?;
    AppConfig::default().save(&path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

fn replay_file(path: &Path, config: &AppConfig) -> Result<()> {
    let taps = quadmeasure::load_taps(path)?;
    log::info!("Replaying {} taps from {}", taps.len(), path.display());

    let mut observers = (
        LinkRecorder::default(),
        LogObserver {
            precision: config.label_precision,
        },
    );
    let session = quadmeasure::replay(&taps, &mut observers)
        .with_context(|| format!("replaying {}", path.display()))?;

    let stdout = std::io::stdout();
    quadmeasure::write_report(
        &mut stdout.lock(),
        &observers.0.links,
        &session,
        config.label_precision,
    )?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        for cause in err.chain().skip(1) {
            eprintln!("because: {}", cause);
        }
        std::process::exit(1);
    }
}

// End of File
