// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use common::{Link, Point};
use measure::{MeasureError, MeasureObserver, MeasureSession, Phase, SHAPE_CORNERS};
use serde::Deserialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read taps file {}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid taps file {}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("tap #{index} has a non-finite coordinate")]
    NonFinite { index: usize },

    #[error("tap #{index} was rejected")]
    Rejected {
        index: usize,
        #[source]
        source: MeasureError,
    },
}

/// One recorded anchor placement.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tap {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Tap> for Point {
    fn from(tap: Tap) -> Self {
        Point::new(tap.x, tap.y, tap.z)
    }
}

/// Layout of a taps file: an array of `[[tap]]` tables.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TapFile {
    #[serde(default, rename = "tap")]
    taps: Vec<Tap>,
}

/// Parses the contents of the taps file at `path`.  Taps are numbered from zero in errors.
pub fn parse_taps(content: &str, path: &Path) -> Result<Vec<Point>, ReplayError> {
    let file: TapFile = toml::from_str(content).map_err(|source| ReplayError::Parse {
        path: path.to_owned(),
        source,
    })?;
    file.taps
        .into_iter()
        .enumerate()
        .map(|(index, tap)| {
            let point = Point::from(tap);
            if common::is_finite(point) {
                Ok(point)
            } else {
                Err(ReplayError::NonFinite { index })
            }
        })
        .collect()
}

pub fn load_taps(path: &Path) -> Result<Vec<Point>, ReplayError> {
    let content = std::fs::read_to_string(path).map_err(|source| ReplayError::Read {
        path: path.to_owned(),
        source,
    })?;
    parse_taps(&content, path)
}

/// Feeds `taps` into a fresh session in order.  Stops at the first rejected tap.
pub fn replay<O>(taps: &[Point], observer: &mut O) -> Result<MeasureSession, ReplayError>
where
    O: MeasureObserver + ?Sized,
{
    let mut session = MeasureSession::new();
    for (index, &tap) in taps.iter().enumerate() {
        session
            .add_point(tap, observer)
            .map_err(|source| ReplayError::Rejected { index, source })?;
    }
    Ok(session)
}

/// Writes one line per link followed by the final area, or a progress line when the recording
/// ended before both shapes were complete.
pub fn write_report<W: Write>(
    out: &mut W,
    links: &[Link],
    session: &MeasureSession,
    precision: usize,
) -> io::Result<()> {
    for link in links {
        let anchor = link.label_anchor();
        writeln!(
            out,
            "{:<10} {:>10}  at ({:.3}, {:.3}, {:.3})",
            link.kind,
            link.label(precision),
            anchor.x,
            anchor.y,
            anchor.z
        )?;
    }

    match session.phase() {
        Phase::Complete { area } => {
            writeln!(out, "Final area is: {}", common::format_measure(area, precision))
        }
        Phase::CollectingPrimary { placed } => writeln!(
            out,
            "Measurement incomplete: {} of {} points placed",
            placed,
            2 * SHAPE_CORNERS
        ),
        Phase::CollectingSecondary { placed } => writeln!(
            out,
            "Measurement incomplete: {} of {} points placed",
            SHAPE_CORNERS + placed,
            2 * SHAPE_CORNERS
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tap_tables() {
        let taps = parse_taps(
            r#"
            [[tap]]
            x = 0.0
            y = 1.5
            z = -2.0

            [[tap]]
            x = 1
            y = 2
            z = 3
            "#,
            Path::new("taps.toml"),
        )
        .unwrap();
        assert_eq!(
            taps,
            vec![Point::new(0.0, 1.5, -2.0), Point::new(1.0, 2.0, 3.0)]
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            parse_taps(
                "[[tap]]\nx = 0.0\ny = 0.0\nz = 0.0\nw = 1.0\n",
                Path::new("taps.toml")
            ),
            Err(ReplayError::Parse { .. })
        ));
    }

    #[test]
    fn empty_file_has_no_taps() {
        assert!(parse_taps("", Path::new("empty.toml")).unwrap().is_empty());
    }

    #[test]
    fn non_finite_taps_are_reported_by_index() {
        let content = "[[tap]]\nx = 0.0\ny = 0.0\nz = 0.0\n\n[[tap]]\nx = nan\ny = 0.0\nz = 0.0\n";
        assert!(matches!(
            parse_taps(content, Path::new("taps.toml")),
            Err(ReplayError::NonFinite { index: 1 })
        ));
    }

    #[test]
    fn missing_coordinate_is_a_parse_error() {
        let err =
            parse_taps("[[tap]]\nx = 0.0\ny = 0.0\n", Path::new("broken.toml")).unwrap_err();
        assert!(matches!(
            &err,
            ReplayError::Parse { path, .. } if path == Path::new("broken.toml")
        ));
        assert_eq!(err.to_string(), "invalid taps file broken.toml");
    }

    #[test]
    fn incomplete_recording_reports_progress() {
        let mut recorder = measure::LinkRecorder::default();
        let taps = [
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(1.0, 1.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(0.0, 0.0, 1.0),
        ];
        let session = replay(&taps, &mut recorder).unwrap();

        let mut out = Vec::new();
        write_report(&mut out, &recorder.links, &session, 2).unwrap();
        let report = String::from_utf8(out).unwrap();
        assert_eq!(report.lines().count(), 5);
        assert!(report.starts_with("sequential "));
        // Kinds are padded to a fixed column.
        let closing = report.lines().nth(3).unwrap();
        assert!(closing.starts_with("closing    "), "{closing}");
        assert!(report.ends_with("Measurement incomplete: 5 of 8 points placed\n"));
    }
}

// End of File
