//! `GreedyPlanner` implementation.
//!
//! Both selection policies share one loop; they differ only in how the next
//! stop is picked from the remaining pool.

use std::fmt;

use geo::Coord;
use ramble_core::distance::{haversine_km, walking_time_minutes};
use ramble_core::{
    InterestProfile, PlanError, PlanRequest, Planner, PointOfInterest, RouteResult, RouteStop,
    Scorer, ScoringWeights, SelectionPolicy,
};

/// Greedy planner selecting one stop at a time.
///
/// The scorer is optional: a planner built with [`GreedyPlanner::new`] can
/// only route by proximity and reports [`PlanError::ScorerUnavailable`] for
/// preference requests.
///
/// # Examples
/// ```
/// use ramble_core::distance::lat_lng;
/// use ramble_core::{PlanRequest, Planner, PointOfInterest};
/// use ramble_planner::GreedyPlanner;
///
/// let pois = vec![
///     PointOfInterest::new("castle", "Richmond Castle", lat_lng(54.4039, -1.7394)),
///     PointOfInterest::new("greyfriars", "Greyfriars Tower", lat_lng(54.4028, -1.735)),
/// ];
/// let request = PlanRequest::new(lat_lng(54.4025, -1.7367), 30.0);
/// let route = GreedyPlanner::new().plan(&pois, &request)?;
/// assert_eq!(route.poi_ids().first(), Some(&"greyfriars"));
/// assert!(route.total_time_minutes <= 30.0);
/// # Ok::<(), ramble_core::PlanError>(())
/// ```
#[derive(Default)]
pub struct GreedyPlanner {
    scorer: Option<Box<dyn Scorer>>,
}

impl GreedyPlanner {
    /// Construct a planner without a scorer.
    #[must_use]
    pub const fn new() -> Self {
        Self { scorer: None }
    }

    /// Construct a planner able to route by preference.
    #[must_use]
    pub fn with_scorer(scorer: impl Scorer + 'static) -> Self {
        Self {
            scorer: Some(Box::new(scorer)),
        }
    }

    /// Report whether preference routing is available.
    #[must_use]
    pub const fn has_scorer(&self) -> bool {
        self.scorer.is_some()
    }

    fn selector<'p>(&'p self, policy: &'p SelectionPolicy) -> Result<Selector<'p>, PlanError> {
        match policy {
            SelectionPolicy::NearestNeighbour => Ok(Selector::Nearest),
            SelectionPolicy::Preference { profile, weights } => {
                let scorer = self.scorer.as_deref().ok_or(PlanError::ScorerUnavailable)?;
                Ok(Selector::Preference {
                    scorer,
                    profile,
                    weights: *weights,
                })
            }
        }
    }
}

impl fmt::Debug for GreedyPlanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GreedyPlanner")
            .field("has_scorer", &self.has_scorer())
            .finish()
    }
}

impl Planner for GreedyPlanner {
    fn plan(
        &self,
        candidates: &[PointOfInterest],
        request: &PlanRequest,
    ) -> Result<RouteResult, PlanError> {
        let selector = self.selector(&request.policy)?;
        let mut pool: Vec<&PointOfInterest> =
            candidates.iter().filter(|poi| poi.is_routable()).collect();
        log::debug!(
            "planning {} route over {} of {} candidates with a {} minute budget",
            selector.label(),
            pool.len(),
            candidates.len(),
            request.duration_minutes
        );

        let mut builder = RouteBuilder::new(request, selector.profile_name());
        if !builder.has_budget() {
            log::debug!("budget exhausted before the first stop");
            return Ok(builder.finish());
        }
        while let Some(pick) = selector.pick(&pool, builder.position) {
            let Some(poi) = pool.get(pick.index).copied() else {
                break;
            };
            if !builder.try_visit(poi, pick) {
                log::debug!("next stop '{}' does not fit the remaining budget", poi.id);
                break;
            }
            pool.remove(pick.index);
        }
        builder.close_loop();
        Ok(builder.finish())
    }
}

/// The next stop chosen by a selector.
#[derive(Debug, Clone, Copy)]
struct Pick {
    index: usize,
    distance_km: f64,
    score: Option<f64>,
}

enum Selector<'p> {
    Nearest,
    Preference {
        scorer: &'p dyn Scorer,
        profile: &'p InterestProfile,
        weights: ScoringWeights,
    },
}

impl Selector<'_> {
    const fn label(&self) -> &'static str {
        match self {
            Self::Nearest => "nearest-neighbour",
            Self::Preference { .. } => "preference",
        }
    }

    fn profile_name(&self) -> Option<String> {
        match self {
            Self::Nearest => None,
            Self::Preference { profile, .. } => Some(profile.name().to_owned()),
        }
    }

    fn pick(&self, pool: &[&PointOfInterest], position: Coord<f64>) -> Option<Pick> {
        match self {
            Self::Nearest => nearest(pool, position),
            Self::Preference {
                scorer,
                profile,
                weights,
            } => best_scoring(*scorer, profile, *weights, pool, position),
        }
    }
}

fn nearest(pool: &[&PointOfInterest], position: Coord<f64>) -> Option<Pick> {
    let mut best: Option<Pick> = None;
    for (index, poi) in pool.iter().enumerate() {
        let distance_km = haversine_km(position, poi.location);
        if best.is_none_or(|current| distance_km < current.distance_km) {
            best = Some(Pick {
                index,
                distance_km,
                score: None,
            });
        }
    }
    best
}

fn best_scoring(
    scorer: &dyn Scorer,
    profile: &InterestProfile,
    weights: ScoringWeights,
    pool: &[&PointOfInterest],
    position: Coord<f64>,
) -> Option<Pick> {
    let mut best: Option<(usize, f64)> = None;
    for (index, poi) in pool.iter().enumerate() {
        let score = scorer.score(poi, profile, position, weights).score;
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((index, score));
        }
    }
    best.and_then(|(index, score)| {
        pool.get(index).map(|poi| Pick {
            index,
            distance_km: haversine_km(position, poi.location),
            score: Some(score),
        })
    })
}

/// Accumulates stops and running totals for a single planning call.
struct RouteBuilder<'r> {
    request: &'r PlanRequest,
    route: RouteResult,
    position: Coord<f64>,
    time_used: f64,
}

impl<'r> RouteBuilder<'r> {
    fn new(request: &'r PlanRequest, profile: Option<String>) -> Self {
        let mut route = RouteResult::empty(
            request.start,
            request.duration_minutes,
            request.return_to_start,
        );
        route.profile = profile;
        Self {
            request,
            route,
            position: request.start,
            time_used: 0.0,
        }
    }

    const fn has_budget(&self) -> bool {
        self.request.duration_minutes > 0.0
    }

    /// Commit `poi` when its leg and visit fit the budget.
    #[expect(
        clippy::float_arithmetic,
        reason = "route totals accumulate floating-point minutes and kilometres"
    )]
    fn try_visit(&mut self, poi: &PointOfInterest, pick: Pick) -> bool {
        let walking = walking_time_minutes(pick.distance_km);
        let step = walking + self.request.visit_minutes;
        if !self.fits(step) {
            return false;
        }
        self.time_used += step;
        self.route.total_distance_km += pick.distance_km;
        self.route.walking_time_minutes += walking;
        self.route.visit_time_minutes += self.request.visit_minutes;
        if let Some(score) = pick.score {
            self.route.scores.push(score);
        }
        self.route.stops.push(RouteStop {
            poi: poi.clone(),
            distance_from_previous_km: pick.distance_km,
            walking_time_minutes: walking,
        });
        self.position = poi.location;
        true
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "budget checks add minutes to the running total"
    )]
    const fn fits(&self, minutes: f64) -> bool {
        self.time_used + minutes <= self.request.duration_minutes
    }

    /// Walk back to the start when requested and affordable.
    #[expect(
        clippy::float_arithmetic,
        reason = "the closing leg extends floating-point totals"
    )]
    fn close_loop(&mut self) {
        if !self.request.return_to_start || self.route.stops.is_empty() {
            return;
        }
        let leg_km = haversine_km(self.position, self.request.start);
        let leg_minutes = walking_time_minutes(leg_km);
        if !self.fits(leg_minutes) {
            log::warn!(
                "return leg of {leg_km:.2} km does not fit the remaining budget; ending away from the start"
            );
            return;
        }
        self.time_used += leg_minutes;
        self.route.total_distance_km += leg_km;
        self.route.walking_time_minutes += leg_minutes;
        self.route.return_distance_km = leg_km;
        self.position = self.request.start;
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "remaining time is the budget minus time used"
    )]
    fn finish(mut self) -> RouteResult {
        self.route.visited_count = self.route.stops.len();
        self.route.total_time_minutes = self.time_used;
        self.route.time_remaining_minutes = self.request.duration_minutes - self.time_used;
        log::debug!(
            "planned {} stops using {:.1} of {} minutes",
            self.route.visited_count,
            self.time_used,
            self.request.duration_minutes
        );
        self.route
    }
}
