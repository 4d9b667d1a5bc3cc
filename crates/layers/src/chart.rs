use serde::Serialize;

/// Line chart declaration for the elevation profile. The dataset rows are
/// [`scene::ProfileRow`]; the keys here name their fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub mark: &'static str,
    pub x_key: &'static str,
    pub y_key: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// Hovering a row reports it back to the viewer as an index.
    pub hover: &'static str,
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self {
            mark: "line",
            x_key: "distanceKm",
            y_key: "ele",
            x_label: "Distance (km)",
            y_label: "Elevation (m)",
            hover: "row",
        }
    }
}
