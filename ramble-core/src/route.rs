//! Planned walking routes.
//!
//! A [`RouteResult`] is built once per planning call and never mutated
//! afterwards. Downstream collaborators (narration, map rendering,
//! persistence) read it or serialise it.

use geo::Coord;

use crate::PointOfInterest;

/// One selected stop plus the leg walked to reach it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteStop {
    /// The point of interest visited at this stop.
    pub poi: PointOfInterest,
    /// Great-circle distance from the previous position.
    pub distance_from_previous_km: f64,
    /// Minutes spent walking from the previous position.
    pub walking_time_minutes: f64,
}

/// An ordered itinerary and its aggregate metrics.
///
/// # Examples
/// ```
/// use ramble_core::RouteResult;
/// use ramble_core::distance::lat_lng;
///
/// let route = RouteResult::empty(lat_lng(54.4025, -1.7367), 30.0, false);
/// assert!(route.stops.is_empty());
/// assert_eq!(route.visited_count, 0);
/// assert_eq!(route.time_remaining_minutes, 30.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteResult {
    /// Stops in visiting order.
    pub stops: Vec<RouteStop>,
    /// Walking distance including the return leg when it fitted.
    pub total_distance_km: f64,
    /// Walking time including the return leg when it fitted.
    pub walking_time_minutes: f64,
    /// Dwell time summed over all stops.
    pub visit_time_minutes: f64,
    /// Walking plus dwell time.
    pub total_time_minutes: f64,
    /// Unused part of the duration budget.
    pub time_remaining_minutes: f64,
    /// Number of stops.
    pub visited_count: usize,
    /// Where the walk starts.
    pub start: Coord<f64>,
    /// Whether a closing leg back to the start was requested.
    pub return_to_start: bool,
    /// Length of the closing leg, or `0.0` when it was not requested or did
    /// not fit the budget.
    pub return_distance_km: f64,
    /// Interest profile used for preference routing.
    pub profile: Option<String>,
    /// Per-stop scores aligned with `stops`; empty for distance-only routing.
    pub scores: Vec<f64>,
}

impl RouteResult {
    /// Construct a route with no stops.
    #[must_use]
    pub const fn empty(start: Coord<f64>, duration_minutes: f64, return_to_start: bool) -> Self {
        Self {
            stops: Vec::new(),
            total_distance_km: 0.0,
            walking_time_minutes: 0.0,
            visit_time_minutes: 0.0,
            total_time_minutes: 0.0,
            time_remaining_minutes: duration_minutes,
            visited_count: 0,
            start,
            return_to_start,
            return_distance_km: 0.0,
            profile: None,
            scores: Vec::new(),
        }
    }

    /// Points of interest in visiting order.
    pub fn pois(&self) -> impl Iterator<Item = &PointOfInterest> {
        self.stops.iter().map(|stop| &stop.poi)
    }

    /// Identifiers of the visited POIs in order.
    #[must_use]
    pub fn poi_ids(&self) -> Vec<&str> {
        self.pois().map(|poi| poi.id.as_str()).collect()
    }

    /// Render the route as a human-readable report.
    #[must_use]
    pub const fn summary(&self) -> crate::RouteSummary<'_> {
        crate::RouteSummary::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::lat_lng;
    use rstest::rstest;

    #[rstest]
    fn poi_ids_preserve_order() {
        let mut route = RouteResult::empty(lat_lng(0.0, 0.0), 60.0, false);
        for id in ["b", "a", "c"] {
            route.stops.push(RouteStop {
                poi: PointOfInterest::new(id, id.to_uppercase(), lat_lng(0.0, 0.0)),
                distance_from_previous_km: 0.0,
                walking_time_minutes: 0.0,
            });
        }
        assert_eq!(route.poi_ids(), vec!["b", "a", "c"]);
    }

    #[rstest]
    #[expect(clippy::float_cmp, reason = "empty routes carry exact zeroes")]
    fn empty_route_reports_whole_budget_remaining() {
        let route = RouteResult::empty(lat_lng(1.0, 2.0), -5.0, true);
        assert_eq!(route.time_remaining_minutes, -5.0);
        assert_eq!(route.return_distance_km, 0.0);
        assert!(route.return_to_start);
    }
}
