use common::{LinkKind, Point};
use measure::{LinkRecorder, LogObserver, MeasureError, Phase};
use quadmeasure::{ReplayError, load_taps, replay, write_report};
use std::fmt::Write as _;

const EPSILON: f32 = 1e-5;

fn taps_toml(points: &[(f32, f32, f32)]) -> String {
    let mut content = String::new();
    for (x, y, z) in points {
        writeln!(content, "[[tap]]\nx = {:?}\ny = {:?}\nz = {:?}\n", x, y, z).unwrap();
    }
    content
}

fn two_squares() -> Vec<(f32, f32, f32)> {
    vec![
        (0.0, 0.0, 0.0),
        (1.0, 0.0, 0.0),
        (1.0, 1.0, 0.0),
        (0.0, 1.0, 0.0),
        (0.0, 0.0, 5.0),
        (1.0, 0.0, 5.0),
        (1.0, 1.0, 5.0),
        (0.0, 1.0, 5.0),
    ]
}

#[test]
fn test_replay_two_squares_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taps.toml");
    std::fs::write(&path, taps_toml(&two_squares())).unwrap();

    let taps = load_taps(&path).unwrap();
    assert_eq!(taps.len(), 8);

    let mut recorder = LinkRecorder::default();
    let session = replay(&taps, &mut recorder).unwrap();

    let kinds: Vec<LinkKind> = recorder.links.iter().map(|link| link.kind).collect();
    assert_eq!(
        kinds,
        vec![
            LinkKind::Sequential,
            LinkKind::Sequential,
            LinkKind::Sequential,
            LinkKind::Closing,
            LinkKind::Sequential,
            LinkKind::Sequential,
            LinkKind::Sequential,
            LinkKind::Closing,
            LinkKind::Paired,
            LinkKind::Paired,
            LinkKind::Paired,
            LinkKind::Paired,
        ]
    );

    let paired: Vec<_> = recorder.links[8..].iter().collect();
    for (i, link) in paired.iter().enumerate() {
        assert_eq!(link.from, taps[i]);
        assert_eq!(link.to, taps[i + 4]);
        assert_eq!(link.distance, 5.0);
    }

    let expected_mean = (5.0 + 2.0 * 26.0_f32.sqrt() + 27.0_f32.sqrt()) / 4.0;
    let area = recorder.area.unwrap();
    assert!((area - expected_mean).abs() < EPSILON);
    assert_eq!(session.phase(), Phase::Complete { area });
}

#[test]
fn test_report_ends_with_final_area() {
    let taps: Vec<Point> = two_squares()
        .into_iter()
        .map(|(x, y, z)| Point::new(x, y, z))
        .collect();
    let mut observers = (LinkRecorder::default(), LogObserver { precision: 2 });
    let session = replay(&taps, &mut observers).unwrap();

    let mut out = Vec::new();
    write_report(&mut out, &observers.0.links, &session, 2).unwrap();
    let report = String::from_utf8(out).unwrap();

    assert_eq!(report.lines().count(), 13);
    assert_eq!(report.lines().last(), Some("Final area is: 5.10"));
    assert!(report.lines().next().unwrap().contains("1.00"));
}

#[test]
fn test_ninth_tap_is_rejected() {
    let mut points = two_squares();
    points.push((3.0, 3.0, 3.0));
    let taps: Vec<Point> = points
        .into_iter()
        .map(|(x, y, z)| Point::new(x, y, z))
        .collect();

    let mut recorder = LinkRecorder::default();
    let err = replay(&taps, &mut recorder).unwrap_err();
    assert!(matches!(
        err,
        ReplayError::Rejected {
            index: 8,
            source: MeasureError::SessionComplete
        }
    ));
    assert_eq!(recorder.links.len(), 12);
    assert!(recorder.area.is_some());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_taps(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ReplayError::Read { .. }));
}
