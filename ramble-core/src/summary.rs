//! Human-readable route reports.
//!
//! [`RouteSummary`] borrows a [`RouteResult`] and renders it through
//! `Display`, leaving the result untouched.

use std::fmt;

use crate::RouteResult;

const RULE: &str = "============================================================";
// Tags are a sorted set, so these are the alphabetically first three.
const TAGS_PER_STOP: usize = 3;

/// Display adapter rendering aggregate totals followed by per-stop detail.
///
/// # Examples
/// ```
/// use ramble_core::RouteResult;
/// use ramble_core::distance::lat_lng;
///
/// let route = RouteResult::empty(lat_lng(54.4025, -1.7367), 30.0, false);
/// let text = route.summary().to_string();
/// assert!(text.contains("POIs visited: 0"));
/// assert!(text.contains("Time remaining: 30.0 minutes"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RouteSummary<'a> {
    route: &'a RouteResult,
}

impl<'a> RouteSummary<'a> {
    /// Wrap a route for rendering.
    #[must_use]
    pub const fn new(route: &'a RouteResult) -> Self {
        Self { route }
    }

    fn write_totals(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let route = self.route;
        writeln!(f, "{RULE}")?;
        writeln!(f, "ROUTE SUMMARY")?;
        writeln!(f, "{RULE}")?;
        if let Some(profile) = &route.profile {
            writeln!(f, "Profile: {profile}")?;
        }
        writeln!(f, "POIs visited: {}", route.visited_count)?;
        writeln!(f, "Total distance: {:.2} km", route.total_distance_km)?;
        writeln!(f, "Walking time: {:.1} minutes", route.walking_time_minutes)?;
        writeln!(f, "Visit time: {:.1} minutes", route.visit_time_minutes)?;
        writeln!(f, "Total time: {:.1} minutes", route.total_time_minutes)?;
        writeln!(
            f,
            "Time remaining: {:.1} minutes",
            route.time_remaining_minutes
        )?;
        if route.return_to_start {
            writeln!(f, "Return distance: {:.2} km", route.return_distance_km)?;
        }
        Ok(())
    }

    fn write_stops(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "ROUTE DETAILS")?;
        write!(f, "{RULE}")?;
        for (position, stop) in self.route.stops.iter().enumerate() {
            writeln!(f)?;
            writeln!(f)?;
            write!(f, "{}. {}", position.saturating_add(1), stop.poi.name)?;
            write!(
                f,
                "\n   Distance from previous: {:.2} km",
                stop.distance_from_previous_km
            )?;
            write!(
                f,
                "\n   Walking time: {:.1} minutes",
                stop.walking_time_minutes
            )?;
            if let Some(score) = self.route.scores.get(position) {
                write!(f, "\n   Score: {score:.3}")?;
            }
            if !stop.poi.tags.is_empty() {
                let tags: Vec<&str> = stop
                    .poi
                    .tags
                    .iter()
                    .take(TAGS_PER_STOP)
                    .map(String::as_str)
                    .collect();
                write!(f, "\n   Tags: {}", tags.join(", "))?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for RouteSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_totals(f)?;
        self.write_stops(f)
    }
}
