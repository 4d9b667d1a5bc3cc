use super::LonLat;

/// Mean earth radius (meters) used for track distances.
///
/// Matches the radius GPX tooling conventionally uses for cumulative
/// distances, so totals line up with what users see elsewhere.
pub const EARTH_MEAN_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two positions (meters).
pub fn haversine_m(a: LonLat, b: LonLat) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat * 0.5).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);
    2.0 * EARTH_MEAN_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Running haversine distance along a path, starting at 0 (meters).
pub fn cumulative_distances_m(path: &[LonLat]) -> Vec<f64> {
    let mut out = Vec::with_capacity(path.len());
    let mut total = 0.0;
    let mut prev: Option<LonLat> = None;
    for &p in path {
        if let Some(q) = prev {
            total += haversine_m(q, p);
        }
        out.push(total);
        prev = Some(p);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{EARTH_MEAN_RADIUS_M, cumulative_distances_m, haversine_m};
    use crate::math::LonLat;

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn same_point_is_zero() {
        let p = LonLat::new(114.0, 22.4);
        assert_eq!(haversine_m(p, p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        let d = haversine_m(LonLat::new(0.0, 0.0), LonLat::new(0.0, 1.0));
        assert_close(d, EARTH_MEAN_RADIUS_M * 1f64.to_radians(), 1e-6);
    }

    #[test]
    fn cumulative_is_running_sum() {
        let path = [
            LonLat::new(0.0, 0.0),
            LonLat::new(0.0, 1.0),
            LonLat::new(0.0, 1.0),
            LonLat::new(0.0, 2.0),
        ];
        let cum = cumulative_distances_m(&path);
        let step = EARTH_MEAN_RADIUS_M * 1f64.to_radians();
        assert_eq!(cum.len(), 4);
        assert_eq!(cum[0], 0.0);
        assert_close(cum[1], step, 1e-6);
        assert_eq!(cum[1], cum[2]);
        assert_close(cum[3], 2.0 * step, 1e-6);
    }

    #[test]
    fn empty_path_has_no_distances() {
        assert!(cumulative_distances_m(&[]).is_empty());
    }
}
