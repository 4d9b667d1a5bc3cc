use foundation::math::LonLat;
use serde::Serialize;

use crate::layer::{Layer, LayerId, LayerKind, LayerSpec};
use crate::symbology::{
    CirclePaint, LinePaint, Paint, ROUTE_BACKGROUND_OPACITY, ROUTE_DASHED_OPACITY,
};

pub const ROUTE_SOURCE_ID: &str = "routeSource";
pub const MARKER_SOURCE_ID: &str = "point";

/// GeoJSON geometry, coordinates as `[lon, lat]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Geometry {
    LineString { coordinates: Vec<LonLat> },
    Point { coordinates: LonLat },
}

/// Route line under the animated dash.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RouteBackgroundLayer;

#[derive(Debug, Clone, PartialEq)]
pub struct RouteDashedLayer {
    pub pattern: Vec<f64>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MarkerLayer;

impl Layer for RouteBackgroundLayer {
    fn id(&self) -> LayerId {
        LayerId("line-background")
    }

    fn spec(&self) -> LayerSpec {
        LayerSpec {
            id: self.id(),
            kind: LayerKind::Line,
            source: ROUTE_SOURCE_ID,
            paint: Paint::Line(LinePaint::route(ROUTE_BACKGROUND_OPACITY)),
        }
    }
}

impl Layer for RouteDashedLayer {
    fn id(&self) -> LayerId {
        LayerId("line-dashed")
    }

    fn spec(&self) -> LayerSpec {
        LayerSpec {
            id: self.id(),
            kind: LayerKind::Line,
            source: ROUTE_SOURCE_ID,
            paint: Paint::Line(LinePaint::route(ROUTE_DASHED_OPACITY).with_dasharray(&self.pattern)),
        }
    }
}

impl Layer for MarkerLayer {
    fn id(&self) -> LayerId {
        LayerId("point")
    }

    fn spec(&self) -> LayerSpec {
        LayerSpec {
            id: self.id(),
            kind: LayerKind::Circle,
            source: MARKER_SOURCE_ID,
            paint: Paint::Circle(CirclePaint::default()),
        }
    }
}
