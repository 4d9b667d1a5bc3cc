//! Headless commands behind the `trackfly` binary.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use foundation::LonLatBounds;
use foundation::math::LonLat;
use formats::{ElevationStats, GpxPath, PathKind, read_gpx_file};
use layers::{MapScene, build_map_scene};
use runtime::Frame;
use scene::{ProfileRow, Session, ViewerConfig, build_from_points, elevation_profile};
use serde::Serialize;
use tracing::{debug, info};

/// Upper bound on simulated frames, so a misconfigured flight cannot spin
/// forever.
pub const MAX_SIMULATED_FRAMES: u64 = 10_000_000;

/// Config file (or defaults) with environment overrides applied.
pub fn load_config(path: Option<&Path>) -> Result<ViewerConfig> {
    let config = match path {
        Some(p) => ViewerConfig::load(p).with_context(|| format!("load config {}", p.display()))?,
        None => ViewerConfig::default(),
    };
    Ok(config.with_env_overrides())
}

fn read_path(path: &Path) -> Result<GpxPath> {
    read_gpx_file(path).with_context(|| format!("read gpx {}", path.display()))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectReport {
    pub name: Option<String>,
    pub kind: PathKind,
    pub points: usize,
    pub total_distance_m: f64,
    pub bounds: Option<LonLatBounds>,
    pub elevation: ElevationStats,
}

pub fn inspect(path: &Path) -> Result<InspectReport> {
    let gpx = read_path(path)?;
    let bounds = LonLatBounds::from_points(gpx.samples.iter().map(|s| LonLat::new(s.lon, s.lat)));
    Ok(InspectReport {
        name: gpx.name,
        kind: gpx.kind,
        points: gpx.samples.len(),
        total_distance_m: gpx.total_distance_m,
        bounds,
        elevation: gpx.elevation,
    })
}

pub fn profile(path: &Path) -> Result<Vec<ProfileRow>> {
    let gpx = read_path(path)?;
    let route = build_from_points(&gpx.samples).context("build route")?;
    Ok(elevation_profile(&route)?)
}

/// Writes pretty JSON to `out`, or stdout when `out` is `None`.
pub fn write_json<T: Serialize>(value: &T, out: Option<&Path>) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    match out {
        Some(p) => {
            fs::write(p, text).with_context(|| format!("write {}", p.display()))?;
            info!(path = %p.display(), "wrote output");
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn loaded_session(path: &Path, config: ViewerConfig) -> Result<Session> {
    let gpx = read_path(path)?;
    let mut session = Session::new(config);
    session
        .load_route(0.0, &gpx.samples, gpx.name)
        .context("load route")?;
    Ok(session)
}

pub fn map_scene(path: &Path, config: ViewerConfig, satellite: bool) -> Result<MapScene> {
    let mut session = loaded_session(path, config)?;
    if satellite {
        session.toggle_style(0.0);
    }
    let coordinator = session.coordinator();
    Ok(build_map_scene(
        session.view(),
        coordinator.route(),
        coordinator.config(),
    ))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub frames: u64,
    pub end_time_ms: f64,
    pub final_position: Option<LonLat>,
    pub events: usize,
}

/// Loads at t=0, presses fly and steps a fixed-fps clock until the
/// flythrough is over.
pub fn simulate(path: &Path, config: ViewerConfig, fps: f64) -> Result<SimulationReport> {
    let mut session = loaded_session(path, config)?;
    session.fly(0.0);
    if !session.coordinator().is_busy() {
        bail!("route has no distances to fly along");
    }

    let mut frame = Frame::at_fps(fps);
    let mut events = 0;
    loop {
        session.tick(frame.time_ms);
        for event in session.coordinator_mut().events_mut().drain() {
            info!(t_ms = event.time_ms, kind = event.kind, "{}", event.message);
            events += 1;
        }
        if !session.coordinator().is_busy() {
            break;
        }
        if frame.index >= MAX_SIMULATED_FRAMES {
            bail!("flight did not finish within {MAX_SIMULATED_FRAMES} frames");
        }
        frame = frame.next();
    }
    debug!(frames = frame.index + 1, "simulation done");

    Ok(SimulationReport {
        frames: frame.index + 1,
        end_time_ms: frame.time_ms,
        final_position: session.view().current_position,
        events,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use std::path::PathBuf;

    fn sample() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../apps/viewer_web/assets/sample.gpx")
    }

    #[test]
    fn inspect_reports_sample() {
        let report = inspect(&sample()).expect("inspect");
        assert_eq!(report.points, 8);
        assert_eq!(report.kind, PathKind::Track);
        let bounds = report.bounds.expect("bounds");
        assert_eq!(bounds.min_lon, 114.1);
        assert_eq!(bounds.max_lat, 22.416);
    }

    #[test]
    fn profile_has_one_row_per_point() {
        let rows = profile(&sample()).expect("profile");
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0].distance_km, 0.0);
        assert_eq!(rows[0].ele, Some(120.0));
    }

    #[test]
    fn profile_written_to_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("profile.json");
        let rows = profile(&sample()).expect("profile");
        write_json(&rows, Some(&out)).expect("write");
        let back: Vec<ProfileRow> =
            serde_json::from_str(&fs::read_to_string(&out).expect("read")).expect("json");
        assert_eq!(back, rows);
    }

    #[test]
    fn satellite_scene_uses_satellite_style() {
        let scene = map_scene(&sample(), ViewerConfig::default(), true).expect("scene");
        assert_eq!(scene.style_url, "mapbox://styles/mapbox/satellite-v9");
        assert_eq!(scene.layers.len(), 3);
    }

    #[test]
    fn simulation_ends_on_last_point() {
        let report = simulate(&sample(), ViewerConfig::default(), 60.0).expect("simulate");
        let last = report.final_position.expect("position");
        assert_eq!((last.lon, last.lat), (114.109, 22.4131));
        assert!(report.end_time_ms >= ViewerConfig::default().flight.start_delay_ms());
        assert!(report.events >= 3);
    }

    #[test]
    fn config_file_changes_timing() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(file, r#"{{"flight": {{"ms_per_meter": 0.5}}}}"#).expect("write");
        let config = load_config(Some(file.path())).expect("config");
        assert_eq!(config.flight.ms_per_meter, 0.5);

        let fast = simulate(&sample(), config, 60.0).expect("fast");
        let slow = simulate(&sample(), ViewerConfig::default(), 60.0).expect("slow");
        assert!(fast.frames < slow.frames);
    }

    #[test]
    fn non_gpx_path_is_an_error() {
        let err = inspect(Path::new("track.kml")).expect_err("rejected");
        assert!(format!("{err:#}").contains("not a GPX file"));
    }
}
