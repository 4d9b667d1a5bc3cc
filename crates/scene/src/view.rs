use foundation::LonLatBounds;
use foundation::math::LonLat;
use serde::{Deserialize, Serialize};

use crate::profile::ProfileRow;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapStyleVariant {
    #[default]
    Default,
    Satellite,
}

impl MapStyleVariant {
    pub fn toggled(self) -> Self {
        match self {
            MapStyleVariant::Default => MapStyleVariant::Satellite,
            MapStyleVariant::Satellite => MapStyleVariant::Default,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraPose {
    pub center: LonLat,
    pub pitch_deg: f64,
    pub bearing_deg: f64,
    pub zoom: f64,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            center: LonLat::new(114.0, 22.4),
            pitch_deg: 20.0,
            bearing_deg: 0.0,
            zoom: 14.0,
        }
    }
}

/// Imperative camera request for the map widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum CameraCommand {
    #[serde(rename_all = "camelCase")]
    FlyTo { pose: CameraPose, duration_ms: f64 },
    #[serde(rename_all = "camelCase")]
    EaseTo { pose: CameraPose, duration_ms: f64 },
    #[serde(rename_all = "camelCase")]
    FitBounds {
        bounds: [[f64; 2]; 2],
        padding_px: f64,
        duration_ms: f64,
    },
}

impl CameraCommand {
    pub fn fit_bounds(bounds: LonLatBounds, padding_px: f64, duration_ms: f64) -> Self {
        CameraCommand::FitBounds {
            bounds: bounds.corners(),
            padding_px,
            duration_ms,
        }
    }
}

/// Everything the map and chart widgets render from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub current_position: Option<LonLat>,
    pub camera: CameraPose,
    pub dash_pattern: Vec<f64>,
    pub style: MapStyleVariant,
    pub elevation_profile: Vec<ProfileRow>,
    /// Set from the fly request until the flythrough ends.
    pub flying: bool,
}

impl ViewState {
    pub fn new(camera: CameraPose) -> Self {
        Self {
            current_position: None,
            camera,
            dash_pattern: runtime::DASH_SEQUENCE[0].to_vec(),
            style: MapStyleVariant::Default,
            elevation_profile: Vec::new(),
            flying: false,
        }
    }

    /// Applies a patch. Camera commands move the recorded pose; a bounds fit
    /// only recenters since the widget picks the zoom.
    pub fn apply(&mut self, patch: &ViewPatch) {
        if let Some(p) = patch.current_position {
            self.current_position = Some(p);
        }
        for cmd in &patch.camera_commands {
            match cmd {
                CameraCommand::FlyTo { pose, .. } | CameraCommand::EaseTo { pose, .. } => {
                    self.camera = *pose;
                }
                CameraCommand::FitBounds { bounds, .. } => {
                    self.camera.center = LonLat::new(
                        (bounds[0][0] + bounds[1][0]) * 0.5,
                        (bounds[0][1] + bounds[1][1]) * 0.5,
                    );
                }
            }
        }
        if let Some(d) = &patch.dash_pattern {
            self.dash_pattern.clone_from(d);
        }
        if let Some(s) = patch.style {
            self.style = s;
        }
        if let Some(rows) = &patch.elevation_profile {
            self.elevation_profile.clone_from(rows);
        }
        if let Some(f) = patch.flying {
            self.flying = f;
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(CameraPose::default())
    }
}

/// Changes a handler wants applied to the [`ViewState`].
///
/// `None` fields leave state untouched. Camera commands are both applied to
/// the recorded pose and forwarded to the map widget by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_position: Option<LonLat>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub camera_commands: Vec<CameraCommand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_pattern: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<MapStyleVariant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation_profile: Option<Vec<ProfileRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flying: Option<bool>,
}

impl ViewPatch {
    pub fn is_empty(&self) -> bool {
        *self == ViewPatch::default()
    }
}
