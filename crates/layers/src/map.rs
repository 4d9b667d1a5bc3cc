use std::collections::BTreeMap;

use scene::{MapStyleVariant, Route, StyleConfig, ViewState, ViewerConfig};
use serde::Serialize;

use crate::layer::{Layer, LayerSpec, Source};
use crate::terrain::TerrainLayer;
use crate::vector::{
    Geometry, MARKER_SOURCE_ID, MarkerLayer, ROUTE_SOURCE_ID, RouteBackgroundLayer,
    RouteDashedLayer,
};

/// Declarative description of everything on the map for one view state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapScene {
    pub style_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terrain: Option<TerrainLayer>,
    pub sources: BTreeMap<String, Source>,
    pub layers: Vec<LayerSpec>,
}

impl MapScene {
    pub fn layer_ids(&self) -> Vec<&'static str> {
        self.layers.iter().map(|l| l.id.0).collect()
    }
}

pub fn style_url(styles: &StyleConfig, variant: MapStyleVariant) -> &str {
    match variant {
        MapStyleVariant::Default => &styles.default_url,
        MapStyleVariant::Satellite => &styles.satellite_url,
    }
}

/// Builds the scene for `view`. Route and marker only appear once a route
/// is loaded; the marker sits on the first point until a position is known.
pub fn build_map_scene(view: &ViewState, route: Option<&Route>, config: &ViewerConfig) -> MapScene {
    let mut sources = BTreeMap::new();
    let mut layers = Vec::new();

    let terrain = TerrainLayer::from_config(&config.terrain).map(|(layer, dem)| {
        sources.insert(layer.source.clone(), Source::RasterDem(dem));
        layer
    });

    if let Some(route) = route {
        let marker = view.current_position.unwrap_or(route.first_position());
        sources.insert(
            MARKER_SOURCE_ID.to_string(),
            Source::GeoJson {
                line_metrics: false,
                data: Geometry::Point { coordinates: marker },
            },
        );
        sources.insert(
            ROUTE_SOURCE_ID.to_string(),
            Source::GeoJson {
                line_metrics: true,
                data: Geometry::LineString {
                    coordinates: route.geometry().to_vec(),
                },
            },
        );
        layers.push(MarkerLayer.spec());
        layers.push(RouteBackgroundLayer.spec());
        layers.push(
            RouteDashedLayer {
                pattern: view.dash_pattern.clone(),
            }
            .spec(),
        );
    }

    MapScene {
        style_url: style_url(&config.styles, view.style).to_string(),
        access_token: config.access_token.clone(),
        terrain,
        sources,
        layers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foundation::math::LonLat;
    use pretty_assertions::assert_eq;
    use scene::RouteSample;
    use serde_json::json;

    fn route() -> Route {
        Route::build_from_points(&[
            RouteSample::new(114.0, 22.4).with_distance(0.0),
            RouteSample::new(114.01, 22.41).with_distance(1500.0),
        ])
        .expect("route")
    }

    #[test]
    fn empty_view_has_only_terrain() {
        let config = ViewerConfig::default();
        let scene = build_map_scene(&ViewState::default(), None, &config);
        assert_eq!(
            scene.style_url,
            "mapbox://styles/edwardonionc/clhbgbxbk000901pvgwba9sp0"
        );
        assert!(scene.layers.is_empty());
        assert_eq!(scene.sources.keys().collect::<Vec<_>>(), vec!["mapbox-dem"]);
        assert_eq!(
            serde_json::to_value(&scene.sources["mapbox-dem"]).expect("json"),
            json!({
                "type": "raster-dem",
                "url": "mapbox://mapbox.mapbox-terrain-dem-v1",
                "tileSize": 512,
                "maxzoom": 14
            })
        );
        let terrain = scene.terrain.expect("terrain");
        assert_eq!(terrain.exaggeration, 1.5);
    }

    #[test]
    fn satellite_variant_switches_style() {
        let view = ViewState {
            style: MapStyleVariant::Satellite,
            ..ViewState::default()
        };
        let scene = build_map_scene(&view, None, &ViewerConfig::default());
        assert_eq!(scene.style_url, "mapbox://styles/mapbox/satellite-v9");
    }

    #[test]
    fn loaded_route_adds_route_and_marker() {
        let route = route();
        let view = ViewState {
            current_position: Some(LonLat::new(114.005, 22.405)),
            ..ViewState::default()
        };
        let scene = build_map_scene(&view, Some(&route), &ViewerConfig::default());
        assert_eq!(scene.layer_ids(), vec!["point", "line-background", "line-dashed"]);

        let sources = serde_json::to_value(&scene.sources).expect("json");
        assert_eq!(
            sources["point"],
            json!({"type": "geojson", "data": {"type": "Point", "coordinates": [114.005, 22.405]}})
        );
        assert_eq!(sources["routeSource"]["lineMetrics"], json!(true));
        assert_eq!(
            sources["routeSource"]["data"]["coordinates"],
            json!([[114.0, 22.4], [114.01, 22.41]])
        );
    }

    #[test]
    fn terrain_can_be_disabled_and_token_is_passed_through() {
        let mut config = ViewerConfig::default();
        config.terrain.enabled = false;
        config.access_token = Some("pk.test".to_string());
        let scene = build_map_scene(&ViewState::default(), None, &config);
        assert!(scene.terrain.is_none());
        assert!(scene.sources.is_empty());

        let v = serde_json::to_value(&scene).expect("json");
        assert_eq!(v["accessToken"], json!("pk.test"));
        assert!(v.get("terrain").is_none());
    }
}
