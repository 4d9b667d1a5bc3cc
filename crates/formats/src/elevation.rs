use scene::RouteSample;
use serde::Serialize;

/// Elevation summary over the samples that carry an elevation.
///
/// Gain and loss are summed between consecutive known elevations; loss is
/// reported as a positive number.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize)]
pub struct ElevationStats {
    pub max_m: Option<f64>,
    pub min_m: Option<f64>,
    pub avg_m: Option<f64>,
    pub gain_m: f64,
    pub loss_m: f64,
}

impl ElevationStats {
    pub fn from_samples(samples: &[RouteSample]) -> Self {
        let known: Vec<f64> = samples.iter().filter_map(|s| s.elevation_m).collect();
        if known.is_empty() {
            return Self::default();
        }

        let mut stats = Self {
            max_m: known.iter().copied().reduce(f64::max),
            min_m: known.iter().copied().reduce(f64::min),
            avg_m: Some(known.iter().sum::<f64>() / known.len() as f64),
            ..Self::default()
        };
        for w in known.windows(2) {
            let diff = w[1] - w[0];
            if diff > 0.0 {
                stats.gain_m += diff;
            } else {
                stats.loss_m -= diff;
            }
        }
        stats
    }
}
