use foundation::math::{AlongError, LonLat, point_at_distance};
use foundation::{Generation, LonLatBounds};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One parsed GPX sample, as handed over by the GPX reader.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSample {
    pub lon: f64,
    pub lat: f64,
    #[serde(default)]
    pub elevation_m: Option<f64>,
    /// Distance from the first sample along the path (meters).
    #[serde(default)]
    pub cumulative_distance_m: Option<f64>,
}

impl RouteSample {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self {
            lon,
            lat,
            elevation_m: None,
            cumulative_distance_m: None,
        }
    }

    pub fn with_elevation(mut self, elevation_m: f64) -> Self {
        self.elevation_m = Some(elevation_m);
        self
    }

    pub fn with_distance(mut self, cumulative_distance_m: f64) -> Self {
        self.cumulative_distance_m = Some(cumulative_distance_m);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoutePoint {
    pub position: LonLat,
    pub elevation_m: Option<f64>,
    pub cumulative_distance_m: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("route has no points")]
pub struct EmptyRouteError;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RouteSamplingError {
    #[error("route has no cumulative distances")]
    NoDistances,
    #[error(transparent)]
    Along(#[from] AlongError),
}

/// An immutable loaded route.
///
/// Always holds at least one point. Cumulative distances are either known
/// for every point or for none; a partially-measured input is treated as
/// unmeasured.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    name: Option<String>,
    generation: Generation,
    points: Vec<RoutePoint>,
    geometry: Vec<LonLat>,
    distances: Option<Vec<f64>>,
    bounds: LonLatBounds,
}

/// Builds a route from parsed samples, keeping their order.
pub fn build_from_points(samples: &[RouteSample]) -> Result<Route, EmptyRouteError> {
    let geometry: Vec<LonLat> = samples.iter().map(|s| LonLat::new(s.lon, s.lat)).collect();
    let Some(bounds) = LonLatBounds::from_points(geometry.iter().copied()) else {
        return Err(EmptyRouteError);
    };

    let distances: Option<Vec<f64>> = samples.iter().map(|s| s.cumulative_distance_m).collect();
    let points = samples
        .iter()
        .zip(&geometry)
        .map(|(s, p)| RoutePoint {
            position: *p,
            elevation_m: s.elevation_m,
            cumulative_distance_m: distances.as_ref().and(s.cumulative_distance_m),
        })
        .collect();

    Ok(Route {
        name: None,
        generation: Generation::default(),
        points,
        geometry,
        distances,
        bounds,
    })
}

impl Route {
    pub fn build_from_points(samples: &[RouteSample]) -> Result<Self, EmptyRouteError> {
        build_from_points(samples)
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn with_generation(mut self, generation: Generation) -> Self {
        self.generation = generation;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn points(&self) -> &[RoutePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Line geometry, one `(lon, lat)` per point, in route order.
    pub fn geometry(&self) -> &[LonLat] {
        &self.geometry
    }

    pub fn first_position(&self) -> LonLat {
        self.geometry[0]
    }

    pub fn last_position(&self) -> LonLat {
        self.geometry[self.geometry.len() - 1]
    }

    pub fn cumulative_distances_m(&self) -> Option<&[f64]> {
        self.distances.as_deref()
    }

    /// Last point's cumulative distance (meters), when distances are known.
    pub fn total_distance_m(&self) -> Option<f64> {
        self.distances.as_ref().and_then(|d| d.last().copied())
    }

    pub fn bounds(&self) -> LonLatBounds {
        self.bounds
    }

    /// Position `distance_m` meters along the route.
    pub fn point_at_distance(&self, distance_m: f64) -> Result<LonLat, RouteSamplingError> {
        let distances = self
            .distances
            .as_deref()
            .ok_or(RouteSamplingError::NoDistances)?;
        Ok(point_at_distance(&self.geometry, distances, distance_m)?)
    }
}
