//! Planning requests, selection policies and the `Planner` capability.

use geo::Coord;
use thiserror::Error;

use crate::distance::DEFAULT_VISIT_MINUTES;
use crate::{InterestProfile, PointOfInterest, RouteResult, ScoringWeights};

/// How the planner chooses the next stop.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SelectionPolicy {
    /// Always walk to the closest unvisited POI.
    #[default]
    NearestNeighbour,
    /// Walk to the highest-scoring unvisited POI as seen from the current
    /// position.
    Preference {
        /// Visitor interests guiding the score.
        profile: InterestProfile,
        /// Relative weights of the score components.
        weights: ScoringWeights,
    },
}

/// Parameters for a planning call.
///
/// # Examples
/// ```rust
/// use ramble_core::{PlanRequest, SelectionPolicy};
/// use ramble_core::distance::lat_lng;
///
/// let request = PlanRequest::new(lat_lng(54.4025, -1.7367), 30.0).with_return_to_start(true);
/// assert_eq!(request.visit_minutes, 5.0);
/// assert!(request.return_to_start);
/// assert_eq!(request.policy, SelectionPolicy::NearestNeighbour);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    /// Start location for the walk.
    pub start: Coord<f64>,
    /// Time budget in minutes; zero or negative budgets yield empty routes.
    pub duration_minutes: f64,
    /// Dwell time assumed at every stop.
    pub visit_minutes: f64,
    /// Close the loop back to `start` when the budget allows.
    pub return_to_start: bool,
    /// Stop selection policy.
    pub policy: SelectionPolicy,
}

impl PlanRequest {
    /// Build a nearest-neighbour request with the default visit time.
    #[must_use]
    pub const fn new(start: Coord<f64>, duration_minutes: f64) -> Self {
        Self {
            start,
            duration_minutes,
            visit_minutes: DEFAULT_VISIT_MINUTES,
            return_to_start: false,
            policy: SelectionPolicy::NearestNeighbour,
        }
    }

    /// Override the dwell time per stop.
    #[must_use]
    pub fn with_visit_minutes(mut self, visit_minutes: f64) -> Self {
        self.visit_minutes = visit_minutes;
        self
    }

    /// Request a closing leg back to the start.
    #[must_use]
    pub fn with_return_to_start(mut self, return_to_start: bool) -> Self {
        self.return_to_start = return_to_start;
        self
    }

    /// Switch to preference-scored selection.
    #[must_use]
    pub fn with_preferences(mut self, profile: InterestProfile, weights: ScoringWeights) -> Self {
        self.policy = SelectionPolicy::Preference { profile, weights };
        self
    }
}

/// Errors returned by [`Planner::plan`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// Preference routing was requested from a planner built without a
    /// scorer.
    #[error("preference routing requires a scorer, but none was configured")]
    ScorerUnavailable,
}

/// Build a walking route over a set of candidate POIs.
///
/// Implementations degrade to empty or short routes for empty inputs and
/// tight budgets; errors are reserved for wiring mistakes. Planners must be
/// `Send + Sync` so independent calls can run on separate threads.
pub trait Planner: Send + Sync {
    /// Plan a route through `candidates` according to `request`.
    ///
    /// # Errors
    /// Returns [`PlanError`] when the planner cannot honour the requested
    /// policy.
    fn plan(
        &self,
        candidates: &[PointOfInterest],
        request: &PlanRequest,
    ) -> Result<RouteResult, PlanError>;
}
