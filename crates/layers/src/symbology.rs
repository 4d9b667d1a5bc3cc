use serde::Serialize;

pub const ROUTE_COLOR: &str = "yellow";
pub const ROUTE_WIDTH: f64 = 4.0;
pub const ROUTE_BACKGROUND_OPACITY: f64 = 0.4;
pub const ROUTE_DASHED_OPACITY: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct LinePaint {
    pub line_color: &'static str,
    pub line_width: f64,
    pub line_opacity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_dasharray: Option<Vec<f64>>,
}

impl LinePaint {
    pub fn route(opacity: f64) -> Self {
        Self {
            line_color: ROUTE_COLOR,
            line_width: ROUTE_WIDTH,
            line_opacity: opacity,
            line_dasharray: None,
        }
    }

    pub fn with_dasharray(mut self, pattern: &[f64]) -> Self {
        self.line_dasharray = Some(pattern.to_vec());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CirclePaint {
    pub circle_color: &'static str,
    pub circle_radius: f64,
    pub circle_stroke_color: &'static str,
    pub circle_stroke_width: f64,
    pub circle_stroke_opacity: f64,
}

impl Default for CirclePaint {
    /// Position marker.
    fn default() -> Self {
        Self {
            circle_color: "#8deafc",
            circle_radius: 14.0,
            circle_stroke_color: "#EEEEEE",
            circle_stroke_width: 5.0,
            circle_stroke_opacity: 0.75,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Paint {
    Line(LinePaint),
    Circle(CirclePaint),
}
