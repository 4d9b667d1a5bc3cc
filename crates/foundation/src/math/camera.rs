//! Camera-offset helpers for pitched map views.
//!
//! A pitched camera looking at `target` sits behind it on the ground plane.
//! These helpers use a flat-earth approximation with fixed degree lengths,
//! which is good enough for city-scale flythroughs and nothing more.

use thiserror::Error;

use super::LonLat;

/// Approximate meters per degree of longitude (~70 km, mid latitudes).
pub const METERS_PER_DEGREE_LON: f64 = 70_000.0;

/// Approximate meters per degree of latitude (~110 km).
pub const METERS_PER_DEGREE_LAT: f64 = 110_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CameraTargetError {
    /// A camera pitched to the horizon never meets the ground plane.
    #[error("camera pitch {pitch_deg} deg has no ground intersection")]
    DegeneratePitch { pitch_deg: f64 },
}

/// Ground position the camera must look at so that `target` ends up under
/// a camera at `altitude_m`, pitched by `pitch_deg` and turned by
/// `bearing_deg`.
///
/// `pitch_deg == 90` is a singularity (`tan(0)` in the denominator); it is
/// reported as [`CameraTargetError::DegeneratePitch`] rather than returning
/// a non-finite coordinate.
pub fn corrected_camera_target(
    pitch_deg: f64,
    bearing_deg: f64,
    target: LonLat,
    altitude_m: f64,
) -> Result<LonLat, CameraTargetError> {
    let bearing = bearing_deg.to_radians();
    let incline = (90.0 - pitch_deg).to_radians();

    let ground_offset_m = altitude_m / incline.tan();
    if !ground_offset_m.is_finite() {
        return Err(CameraTargetError::DegeneratePitch { pitch_deg });
    }

    let lon_diff = ground_offset_m * (-bearing).sin() / METERS_PER_DEGREE_LON;
    let lat_diff = ground_offset_m * (-bearing).cos() / METERS_PER_DEGREE_LAT;

    Ok(LonLat::new(target.lon + lon_diff, target.lat - lat_diff))
}

#[cfg(test)]
mod tests {
    use super::{CameraTargetError, corrected_camera_target};
    use crate::math::LonLat;

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn north_facing_camera_shifts_south() {
        let target = LonLat::new(114.0, 22.4);
        let p = corrected_camera_target(45.0, 0.0, target, 1000.0).expect("finite");
        assert_close(p.lon, 114.0, 1e-12);
        assert_close(p.lat, 22.4 - 1000.0 / 110_000.0, 1e-9);
    }

    #[test]
    fn east_facing_camera_shifts_west() {
        let target = LonLat::new(114.0, 22.4);
        let p = corrected_camera_target(45.0, 90.0, target, 1000.0).expect("finite");
        assert_close(p.lon, 114.0 - 1000.0 / 70_000.0, 1e-9);
        assert_close(p.lat, 22.4, 1e-9);
    }

    #[test]
    fn straight_down_keeps_target() {
        let target = LonLat::new(10.0, 50.0);
        let p = corrected_camera_target(0.0, 30.0, target, 1000.0).expect("finite");
        assert_close(p.lon, target.lon, 1e-9);
        assert_close(p.lat, target.lat, 1e-9);
    }

    #[test]
    fn horizon_pitch_is_rejected_not_nan() {
        let target = LonLat::new(10.0, 50.0);
        let err = corrected_camera_target(90.0, 0.0, target, 1000.0).unwrap_err();
        assert_eq!(err, CameraTargetError::DegeneratePitch { pitch_deg: 90.0 });

        // Zero altitude at the horizon would be 0/0.
        assert!(corrected_camera_target(90.0, 45.0, target, 0.0).is_err());
    }
}
