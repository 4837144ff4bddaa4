//! Test-only utilities for `ramble-planner`.
//!
//! The helpers in this module are available to unit tests, behaviour tests
//! and benchmarks. They are gated behind the `test-support` feature (and
//! `cfg(test)`).

use ramble_core::distance::{haversine_km, lat_lng, walking_time_minutes};
use ramble_core::{PointOfInterest, RouteResult};

/// Sum of walking and visit minutes recomputed from a route's stops.
///
/// Useful for checking that the planner's running totals agree with the
/// stops it reports.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "totals are recomputed from per-stop minutes"
)]
pub fn recomputed_stop_minutes(route: &RouteResult, visit_minutes: f64) -> f64 {
    route
        .stops
        .iter()
        .map(|stop| stop.walking_time_minutes + visit_minutes)
        .sum()
}

/// A row of POIs due east of `(lat, lng)`, `step_km` apart, with
/// alternating tag clusters.
///
/// Odd-numbered POIs are tagged `history`, even-numbered ones `nature`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "coordinates are offset by fractions of a degree"
)]
pub fn eastward_row(lat: f64, lng: f64, count: u32, step_km: f64) -> Vec<PointOfInterest> {
    let one_degree_km = haversine_km(lat_lng(lat, lng), lat_lng(lat, lng + 1.0));
    (1..=count)
        .map(|index| {
            let offset = f64::from(index) * step_km / one_degree_km;
            let tag = if index.is_multiple_of(2) { "nature" } else { "history" };
            PointOfInterest::new(
                format!("row-{index}"),
                format!("Row {index}"),
                lat_lng(lat, lng + offset),
            )
            .with_tags([tag])
        })
        .collect()
}

/// Budget that exactly covers walking out to `poi`, visiting it and walking
/// back to `start`, computed the way the planner accumulates it.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the budget sums leg and visit minutes"
)]
pub fn out_and_back_minutes(
    start: geo::Coord<f64>,
    poi: &PointOfInterest,
    visit_minutes: f64,
) -> f64 {
    let outbound = walking_time_minutes(haversine_km(start, poi.location)) + visit_minutes;
    outbound + walking_time_minutes(haversine_km(poi.location, start))
}
