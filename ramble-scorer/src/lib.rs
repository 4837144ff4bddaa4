//! Preference scoring for Ramble points of interest.
//!
//! [`PreferenceScorer`] combines three signals into a single desirability
//! score for a visitor standing at a given position:
//!
//! - **interest match**: Jaccard similarity between the POI's tags and the
//!   profile's interests;
//! - **popularity**: a heuristic rewarding enriched POIs, lifted by any
//!   external quality hint;
//! - **distance penalty**: the walk to the POI as a fraction of a penalty
//!   radius, capped at one.
//!
//! The composite is `alpha * interest + beta * popularity - delta * penalty`.
//! [`rank_pois`] orders a candidate pool by that score and
//! [`RankingReport`] renders the result for people.
//!
//! # Examples
//!
//! ```
//! use ramble_core::distance::lat_lng;
//! use ramble_core::{InterestProfile, PointOfInterest, Scorer, ScoringWeights};
//! use ramble_scorer::PreferenceScorer;
//!
//! let castle = PointOfInterest::new("castle", "Richmond Castle", lat_lng(54.4039, -1.7394))
//!     .with_tags(["history", "ruins"]);
//! let profile = InterestProfile::custom(["history"]);
//! let scored = PreferenceScorer::default().score(
//!     &castle,
//!     &profile,
//!     lat_lng(54.4025, -1.7367),
//!     ScoringWeights::default(),
//! );
//! assert!(scored.components.interest_match > 0.0);
//! ```

#![forbid(unsafe_code)]

use geo::Coord;
use ramble_core::distance::haversine_km;
use ramble_core::{
    InterestProfile, PointOfInterest, ScoreComponents, ScoredPoi, Scorer, ScoringWeights, Tags,
};

mod rank;
mod report;

pub use rank::rank_pois;
pub use report::RankingReport;

/// Distance beyond which the penalty saturates.
pub const DEFAULT_PENALTY_RADIUS_KM: f64 = 2.0;

const BASE_POPULARITY: f64 = 0.5;
const FACTS_BONUS: f64 = 0.3;
const VISUAL_CUES_BONUS: f64 = 0.1;

/// Production [`Scorer`] blending interest match, popularity and distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreferenceScorer {
    penalty_radius_km: f64,
}

impl PreferenceScorer {
    /// Construct a scorer with [`DEFAULT_PENALTY_RADIUS_KM`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            penalty_radius_km: DEFAULT_PENALTY_RADIUS_KM,
        }
    }

    /// Use a different penalty radius.
    ///
    /// Radii that are not strictly positive make every non-zero distance
    /// fully penalised.
    #[must_use]
    pub const fn with_penalty_radius(mut self, radius_km: f64) -> Self {
        self.penalty_radius_km = radius_km;
        self
    }

    /// Radius at which the distance penalty reaches one.
    #[must_use]
    pub const fn penalty_radius_km(&self) -> f64 {
        self.penalty_radius_km
    }
}

impl Default for PreferenceScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for PreferenceScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "the composite score is a weighted sum"
    )]
    fn score<'a>(
        &self,
        poi: &'a PointOfInterest,
        profile: &InterestProfile,
        position: Coord<f64>,
        weights: ScoringWeights,
    ) -> ScoredPoi<'a> {
        let distance_km = haversine_km(position, poi.location);
        let components = ScoreComponents {
            interest_match: interest_match(&poi.tags, profile.interests()),
            popularity: popularity(poi),
            distance_km,
            distance_penalty: distance_penalty(distance_km, self.penalty_radius_km),
        };
        let score = weights.alpha * components.interest_match + weights.beta * components.popularity
            - weights.delta * components.distance_penalty;
        ScoredPoi {
            poi,
            score,
            components,
        }
    }
}

/// Jaccard similarity of two tag sets; zero when either is empty.
///
/// # Examples
/// ```
/// use ramble_core::poi::normalise_tags;
/// use ramble_scorer::interest_match;
///
/// let tags = normalise_tags(["history", "ruins"]);
/// let interests = normalise_tags(["history", "scenic"]);
/// assert!((interest_match(&tags, &interests) - 1.0 / 3.0).abs() < 1e-12);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "Jaccard similarity is a ratio of set sizes"
)]
pub fn interest_match(tags: &Tags, interests: &Tags) -> f64 {
    if tags.is_empty() || interests.is_empty() {
        return 0.0;
    }
    let shared = tags.intersection(interests).count();
    let union = tags.union(interests).count();
    count_as_f64(shared) / count_as_f64(union)
}

/// Heuristic popularity in `0.0..=1.0`.
///
/// Every POI starts at one half; facts add `0.3` and visual cues `0.1`. A
/// larger external quality hint replaces the heuristic.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "popularity accumulates fixed bonuses"
)]
pub fn popularity(poi: &PointOfInterest) -> f64 {
    let mut score = BASE_POPULARITY;
    if poi.has_enriched_content() {
        score += FACTS_BONUS;
    }
    if poi.has_visual_cues() {
        score += VISUAL_CUES_BONUS;
    }
    if let Some(hint) = poi.quality_hint {
        score = score.max(hint);
    }
    score.min(1.0)
}

/// Fraction of `max_distance_km` covered by `distance_km`, capped at one.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the penalty is a normalised distance"
)]
pub fn distance_penalty(distance_km: f64, max_distance_km: f64) -> f64 {
    if max_distance_km.is_nan() || max_distance_km <= 0.0 {
        return if distance_km > 0.0 { 1.0 } else { 0.0 };
    }
    (distance_km / max_distance_km).clamp(0.0, 1.0)
}

fn count_as_f64(count: usize) -> f64 {
    u32::try_from(count).map_or(f64::from(u32::MAX), f64::from)
}

#[cfg(test)]
mod tests;
