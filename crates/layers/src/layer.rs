use serde::Serialize;

use crate::symbology::Paint;
use crate::terrain::DemSource;
use crate::vector::Geometry;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LayerId(pub &'static str);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Line,
    Circle,
}

/// One style layer as the map widget declares it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerSpec {
    pub id: LayerId,
    #[serde(rename = "type")]
    pub kind: LayerKind,
    pub source: &'static str,
    pub paint: Paint,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Source {
    #[serde(rename = "geojson")]
    GeoJson {
        #[serde(rename = "lineMetrics", skip_serializing_if = "std::ops::Not::not")]
        line_metrics: bool,
        data: Geometry,
    },
    #[serde(rename = "raster-dem")]
    RasterDem(DemSource),
}

pub trait Layer {
    fn id(&self) -> LayerId;
    fn spec(&self) -> LayerSpec;
}
