//! GPX ingestion.
//!
//! Wraps the `gpx` crate and reduces a document to the one path the viewer
//! shows: the first `<rte>` if there is any, otherwise the first `<trk>`
//! with all of its segments joined. Cumulative distances are computed here
//! so the route model never has to.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use foundation::math::{LonLat, cumulative_distances_m};
use scene::RouteSample;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::elevation::ElevationStats;

pub const GPX_EXTENSION: &str = ".gpx";

#[derive(Debug, Error)]
pub enum GpxError {
    #[error("not a GPX file: {name}")]
    NotGpxFile { name: String },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("GPX parse error: {0}")]
    Parse(#[from] ::gpx::errors::GpxError),
    #[error("GPX document has no routes or tracks")]
    NoPaths,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathKind {
    Route,
    Track,
}

/// The path picked out of a GPX document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GpxPath {
    pub name: Option<String>,
    pub kind: PathKind,
    pub samples: Vec<RouteSample>,
    pub total_distance_m: f64,
    pub elevation: ElevationStats,
}

/// File picker filter: the name must end in `.gpx`. Content type is not
/// checked.
pub fn is_gpx_file_name(name: &str) -> bool {
    name.ends_with(GPX_EXTENSION)
}

pub fn parse_gpx_str(text: &str) -> Result<GpxPath, GpxError> {
    let doc = ::gpx::read(Cursor::new(text.as_bytes()))?;

    let (name, kind, waypoints) = if let Some(route) = doc.routes.first() {
        (route.name.clone(), PathKind::Route, route.points.iter().collect::<Vec<_>>())
    } else if let Some(track) = doc.tracks.first() {
        let points = track
            .segments
            .iter()
            .flat_map(|seg| seg.points.iter())
            .collect::<Vec<_>>();
        (track.name.clone(), PathKind::Track, points)
    } else {
        return Err(GpxError::NoPaths);
    };

    let positions: Vec<LonLat> = waypoints
        .iter()
        .map(|w| {
            let p = w.point();
            LonLat::new(p.x(), p.y())
        })
        .collect();
    let distances = cumulative_distances_m(&positions);
    let samples: Vec<RouteSample> = waypoints
        .iter()
        .zip(positions.iter().zip(&distances))
        .map(|(w, (p, d))| RouteSample {
            lon: p.lon,
            lat: p.lat,
            elevation_m: w.elevation,
            cumulative_distance_m: Some(*d),
        })
        .collect();

    let total_distance_m = distances.last().copied().unwrap_or(0.0);
    let elevation = ElevationStats::from_samples(&samples);
    debug!(
        ?kind,
        points = samples.len(),
        total_distance_m,
        "parsed gpx path"
    );

    Ok(GpxPath {
        name,
        kind,
        samples,
        total_distance_m,
        elevation,
    })
}

/// Parses a picked file, rejecting names without the `.gpx` extension.
pub fn parse_gpx_named(name: &str, text: &str) -> Result<GpxPath, GpxError> {
    if !is_gpx_file_name(name) {
        return Err(GpxError::NotGpxFile {
            name: name.to_string(),
        });
    }
    parse_gpx_str(text)
}

pub fn read_gpx_file(path: impl AsRef<Path>) -> Result<GpxPath, GpxError> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    if !is_gpx_file_name(name) {
        return Err(GpxError::NotGpxFile {
            name: path.display().to_string(),
        });
    }
    let text = fs::read_to_string(path).map_err(|source| GpxError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_gpx_str(&text)
}
