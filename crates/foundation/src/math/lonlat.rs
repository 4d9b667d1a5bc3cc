use serde::{Deserialize, Serialize};

/// Geographic position in degrees, longitude first (GeoJSON order).
///
/// Serialized as a `[lon, lat]` pair so it can drop straight into GeoJSON
/// coordinates and camera commands.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Linear interpolation in degree space.
    ///
    /// Exact at both ends: `t == 0` yields `self`, `t == 1` yields `other`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let s = 1.0 - t;
        Self::new(self.lon * s + other.lon * t, self.lat * s + other.lat * t)
    }

    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }
}

impl From<[f64; 2]> for LonLat {
    fn from(v: [f64; 2]) -> Self {
        LonLat::new(v[0], v[1])
    }
}

impl From<LonLat> for [f64; 2] {
    fn from(p: LonLat) -> Self {
        [p.lon, p.lat]
    }
}

#[cfg(test)]
mod tests {
    use super::LonLat;

    #[test]
    fn lerp_hits_endpoints_exactly() {
        let a = LonLat::new(0.1, 22.3);
        let b = LonLat::new(0.3, 22.7);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let mid = a.lerp(b, 0.5);
        assert!((mid.lon - 0.2).abs() < 1e-12);
        assert!((mid.lat - 22.5).abs() < 1e-12);
    }

    #[test]
    fn serializes_as_position_pair() {
        let json = serde_json::to_string(&LonLat::new(114.0, 22.4)).expect("json");
        assert_eq!(json, "[114.0,22.4]");
        let back: LonLat = serde_json::from_str(&json).expect("parse");
        assert_eq!(back, LonLat::new(114.0, 22.4));
    }
}
