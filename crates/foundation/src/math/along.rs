use thiserror::Error;

use super::LonLat;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AlongError {
    #[error("cannot sample an empty path")]
    EmptyPath,
    #[error("path has {vertices} vertices but {distances} distances")]
    LengthMismatch { vertices: usize, distances: usize },
    #[error("distance {distance_m} m is outside the path (0..={total_m} m)")]
    OutOfRange { distance_m: f64, total_m: f64 },
}

/// Position `distance_m` along a path whose vertices carry cumulative
/// distances (meters, non-decreasing).
///
/// Interpolates linearly between the two bracketing vertices. Distances past
/// the end (beyond a 1e-9 relative tolerance) fail; callers clamp first.
pub fn point_at_distance(
    vertices: &[LonLat],
    cumulative_m: &[f64],
    distance_m: f64,
) -> Result<LonLat, AlongError> {
    if vertices.len() != cumulative_m.len() {
        return Err(AlongError::LengthMismatch {
            vertices: vertices.len(),
            distances: cumulative_m.len(),
        });
    }
    let (Some(&first), Some(&last), Some(&start_m), Some(&total_m)) = (
        vertices.first(),
        vertices.last(),
        cumulative_m.first(),
        cumulative_m.last(),
    ) else {
        return Err(AlongError::EmptyPath);
    };

    let tolerance = total_m.abs().max(1.0) * 1e-9;
    if !distance_m.is_finite() || distance_m < start_m - tolerance || distance_m > total_m + tolerance
    {
        return Err(AlongError::OutOfRange {
            distance_m,
            total_m,
        });
    }

    if distance_m <= start_m {
        return Ok(first);
    }
    if distance_m >= total_m {
        return Ok(last);
    }

    // First vertex at or beyond the requested distance; never 0 here.
    let upper = cumulative_m.partition_point(|&c| c < distance_m);
    let lower = upper - 1;
    let span = cumulative_m[upper] - cumulative_m[lower];
    if span <= 0.0 {
        return Ok(vertices[upper]);
    }
    let t = (distance_m - cumulative_m[lower]) / span;
    Ok(vertices[lower].lerp(vertices[upper], t))
}
