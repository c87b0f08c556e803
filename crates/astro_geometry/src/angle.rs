//! Angle normalization and shortest-arc separation on the ecliptic circle.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid rounds up to exactly 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Shortest angular separation between two ecliptic longitudes, in [0, 180].
///
/// The absolute difference is folded across the 0°/360° wrap so the
/// result is always the minor arc. Symmetric in its arguments.
pub fn angular_distance(lon1: f64, lon2: f64) -> f64 {
    let d = (lon1 - lon2).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}
