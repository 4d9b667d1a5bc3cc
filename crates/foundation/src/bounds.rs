use serde::Serialize;

use crate::math::LonLat;

/// Axis-aligned lon/lat bounding box (degrees).
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct LonLatBounds {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl LonLatBounds {
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        LonLatBounds {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Smallest box containing every point, or `None` for an empty input.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = LonLat>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut b = LonLatBounds::new(first.lon, first.lat, first.lon, first.lat);
        for p in iter {
            b.min_lon = b.min_lon.min(p.lon);
            b.min_lat = b.min_lat.min(p.lat);
            b.max_lon = b.max_lon.max(p.lon);
            b.max_lat = b.max_lat.max(p.lat);
        }
        Some(b)
    }

    /// `[minLon, minLat, maxLon, maxLat]`, the GeoJSON bbox order.
    pub fn to_array(&self) -> [f64; 4] {
        [self.min_lon, self.min_lat, self.max_lon, self.max_lat]
    }

    /// South-west and north-east corners, the shape camera fits expect.
    pub fn corners(&self) -> [[f64; 2]; 2] {
        [[self.min_lon, self.min_lat], [self.max_lon, self.max_lat]]
    }

    pub fn center(&self) -> LonLat {
        LonLat::new(
            (self.min_lon + self.max_lon) * 0.5,
            (self.min_lat + self.max_lat) * 0.5,
        )
    }

    pub fn contains(&self, p: LonLat) -> bool {
        p.lon >= self.min_lon && p.lon <= self.max_lon && p.lat >= self.min_lat && p.lat <= self.max_lat
    }
}

#[cfg(test)]
mod tests {
    use super::LonLatBounds;
    use crate::math::LonLat;

    #[test]
    fn empty_input_has_no_bounds() {
        assert_eq!(LonLatBounds::from_points(Vec::<LonLat>::new()), None);
    }

    #[test]
    fn covers_all_points() {
        let pts = vec![
            LonLat::new(114.1, 22.3),
            LonLat::new(113.9, 22.5),
            LonLat::new(114.0, 22.4),
        ];
        let b = LonLatBounds::from_points(pts.iter().copied()).expect("bounds");
        assert_eq!(b.to_array(), [113.9, 22.3, 114.1, 22.5]);
        assert!(pts.iter().all(|p| b.contains(*p)));
        assert_eq!(b.corners(), [[113.9, 22.3], [114.1, 22.5]]);
    }

    #[test]
    fn single_point_is_degenerate_box() {
        let b = LonLatBounds::from_points([LonLat::new(1.0, 2.0)]).expect("bounds");
        assert_eq!(b.center(), LonLat::new(1.0, 2.0));
        assert_eq!(b.to_array(), [1.0, 2.0, 1.0, 2.0]);
    }
}
