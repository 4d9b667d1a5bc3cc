use std::path::PathBuf;

use formats::{PathKind, read_gpx_file};
use pretty_assertions::assert_eq;
use runtime::FlightState;
use scene::Session;

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../apps/viewer_web/assets/sample.gpx")
}

#[test]
fn bundled_sample_parses_as_one_track() {
    let path = read_gpx_file(sample_path()).expect("sample.gpx");
    assert_eq!(path.kind, PathKind::Track);
    assert_eq!(path.name.as_deref(), Some("Tai Mo Shan loop"));
    assert_eq!(path.samples.len(), 8);
    assert_eq!(path.elevation.max_m, Some(210.5));
    assert_eq!(path.elevation.min_m, Some(120.0));
    assert!(path.total_distance_m > 1000.0 && path.total_distance_m < 2500.0);
}

#[test]
fn sample_flies_from_first_to_last_point() {
    let path = read_gpx_file(sample_path()).expect("sample.gpx");
    let first = (path.samples[0].lon, path.samples[0].lat);
    let last = path.samples.last().map(|s| (s.lon, s.lat)).expect("last");

    let mut session = Session::default();
    session
        .load_route(0.0, &path.samples, path.name.clone())
        .expect("load");
    let marker = session.view().current_position.expect("marker");
    assert_eq!((marker.lon, marker.lat), first);
    assert_eq!(session.view().elevation_profile.len(), 8);

    session.fly(0.0);
    let flight = session.coordinator().config().flight.clone();
    let start_ms = flight.start_delay_ms();
    let end_ms = start_ms + flight.duration_ms(path.total_distance_m);

    let mut now = start_ms;
    while now < end_ms {
        session.tick(now);
        now += 1000.0 / 60.0;
    }
    session.tick(end_ms + 1.0);

    assert_eq!(session.coordinator().flight_state(), FlightState::Idle);
    assert!(!session.view().flying);
    let marker = session.view().current_position.expect("marker");
    assert_eq!((marker.lon, marker.lat), last);
}
