use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::route::Route;

/// One row of the elevation chart dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRow {
    pub lat: f64,
    pub lon: f64,
    pub ele: Option<f64>,
    pub distance_km: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("route has no cumulative distances; elevation profile unavailable")]
pub struct ProfileUnavailable;

/// Chart dataset for a route: one row per point, distance in kilometers.
pub fn elevation_profile(route: &Route) -> Result<Vec<ProfileRow>, ProfileUnavailable> {
    let distances = route.cumulative_distances_m().ok_or(ProfileUnavailable)?;
    Ok(route
        .points()
        .iter()
        .zip(distances)
        .map(|(p, d)| ProfileRow {
            lat: p.position.lat,
            lon: p.position.lon,
            ele: p.elevation_m,
            distance_km: d / 1000.0,
        })
        .collect())
}

/// Row closest to `distance_km` on the chart's x axis.
pub fn nearest_row(rows: &[ProfileRow], distance_km: f64) -> Option<&ProfileRow> {
    let upper = rows.partition_point(|r| r.distance_km < distance_km);
    let after = rows.get(upper);
    let before = upper.checked_sub(1).and_then(|i| rows.get(i));
    match (before, after) {
        (Some(b), Some(a)) => {
            if distance_km - b.distance_km <= a.distance_km - distance_km {
                Some(b)
            } else {
                Some(a)
            }
        }
        (b, a) => b.or(a),
    }
}
