//! Great-circle distance and walking-time model.
//!
//! Distances are measured along a spherical Earth of radius
//! [`EARTH_RADIUS_KM`] with the haversine formula and converted to walking
//! time at a constant [`WALKING_SPEED_KMH`]. Coordinates follow the `geo`
//! convention: `x = longitude`, `y = latitude`, both in decimal degrees.
//!
//! Invalid coordinates are not rejected; NaN inputs yield NaN outputs and
//! callers are expected to filter ineligible points first.

use geo::Coord;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Average walking pace used to convert distance into time.
pub const WALKING_SPEED_KMH: f64 = 5.0;

/// Dwell time assumed at each stop when the caller does not supply one.
pub const DEFAULT_VISIT_MINUTES: f64 = 5.0;

/// Build a coordinate from latitude and longitude, in that order.
///
/// # Examples
/// ```
/// use ramble_core::distance::lat_lng;
///
/// let market_place = lat_lng(54.4025, -1.7367);
/// assert_eq!(market_place.y, 54.4025);
/// assert_eq!(market_place.x, -1.7367);
/// ```
#[must_use]
pub const fn lat_lng(lat: f64, lng: f64) -> Coord<f64> {
    Coord { x: lng, y: lat }
}

/// Great-circle distance between `a` and `b` in kilometres.
///
/// The result is symmetric and zero when both points coincide.
///
/// # Examples
/// ```
/// use ramble_core::distance::{haversine_km, lat_lng};
///
/// let castle = lat_lng(54.4039, -1.7394);
/// let market = lat_lng(54.4025, -1.7367);
/// let km = haversine_km(castle, market);
/// assert!(km > 0.2 && km < 0.3);
/// assert_eq!(haversine_km(castle, castle), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn haversine_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let lat_a = a.y.to_radians();
    let lat_b = b.y.to_radians();
    let delta_lat = (b.y - a.y).to_radians();
    let delta_lng = (b.x - a.x).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lng / 2.0).sin().powi(2);
    let central_angle = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_KM * central_angle
}

/// Minutes needed to walk `distance_km` at [`WALKING_SPEED_KMH`].
///
/// # Examples
/// ```
/// use ramble_core::distance::walking_time_minutes;
///
/// assert_eq!(walking_time_minutes(5.0), 60.0);
/// assert_eq!(walking_time_minutes(0.0), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "walking time is a linear conversion of distance"
)]
pub fn walking_time_minutes(distance_km: f64) -> f64 {
    distance_km / WALKING_SPEED_KMH * 60.0
}

#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    reason = "tests compare against tolerances"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(lat_lng(54.4025, -1.7367), lat_lng(54.4039, -1.7394))]
    #[case(lat_lng(0.0, 0.0), lat_lng(0.0, 1.0))]
    #[case(lat_lng(-33.8688, 151.2093), lat_lng(51.5074, -0.1278))]
    fn distance_is_symmetric(#[case] a: Coord<f64>, #[case] b: Coord<f64>) {
        assert_eq!(haversine_km(a, b), haversine_km(b, a));
    }

    #[rstest]
    fn one_degree_of_longitude_at_the_equator() {
        let km = haversine_km(lat_lng(0.0, 0.0), lat_lng(0.0, 1.0));
        assert!((km - 111.194_926_6).abs() < 1e-6, "got {km}");
    }

    #[rstest]
    fn nan_coordinates_propagate() {
        let km = haversine_km(lat_lng(f64::NAN, 0.0), lat_lng(0.0, 0.0));
        assert!(km.is_nan());
    }

    #[rstest]
    #[case(1.0, 12.0)]
    #[case(0.5, 6.0)]
    #[case(2.5, 30.0)]
    fn walking_time_is_linear(#[case] km: f64, #[case] minutes: f64) {
        assert!((walking_time_minutes(km) - minutes).abs() < 1e-9);
    }
}
