use crate::domain::model::GeoPoint;

pub const MEAN_EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers on a sphere of mean earth radius.
pub fn distance(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    distance_with_radius(p1, p2, MEAN_EARTH_RADIUS_KM)
}

/// Great-circle distance in the unit of `radius`.
///
/// Uses the Vincenty form of the central angle, which stays accurate for
/// both nearly identical and nearly antipodal points. Identical points give
/// exactly `0.0`: the numerator cancels to zero and the angle is `atan2(0, 1)`.
pub fn distance_with_radius(p1: &GeoPoint, p2: &GeoPoint, radius: f64) -> f64 {
    let (phi1, lambda1) = (p1.lat().to_radians(), p1.long().to_radians());
    let (phi2, lambda2) = (p2.lat().to_radians(), p2.long().to_radians());
    let delta_lambda = lambda2 - lambda1;

    let (sin_phi1, cos_phi1) = phi1.sin_cos();
    let (sin_phi2, cos_phi2) = phi2.sin_cos();
    let (sin_dl, cos_dl) = delta_lambda.sin_cos();

    let left = (cos_phi2 * sin_dl).powi(2);
    let right = (cos_phi1 * sin_phi2 - sin_phi1 * cos_phi2 * cos_dl).powi(2);
    let numerator = (left + right).sqrt();
    let denominator = sin_phi1 * sin_phi2 + cos_phi1 * cos_phi2 * cos_dl;

    radius * numerator.atan2(denominator)
}
