use scene::TerrainConfig;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemSource {
    pub url: String,
    #[serde(rename = "tileSize")]
    pub tile_size: u32,
    pub maxzoom: u32,
}

/// The map's `terrain` property: which DEM source drapes the style, and how
/// much it is exaggerated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TerrainLayer {
    pub source: String,
    pub exaggeration: f64,
}

impl TerrainLayer {
    /// `None` when terrain is switched off.
    pub fn from_config(config: &TerrainConfig) -> Option<(Self, DemSource)> {
        if !config.enabled {
            return None;
        }
        let layer = Self {
            source: config.source_id.clone(),
            exaggeration: config.exaggeration,
        };
        let dem = DemSource {
            url: config.url.clone(),
            tile_size: config.tile_size,
            maxzoom: config.max_zoom,
        };
        Some((layer, dem))
    }
}
