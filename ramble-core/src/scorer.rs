//! Score points of interest for a visitor at a given position.
//!
//! The `Scorer` trait is the optional capability the planner needs for
//! preference-driven routing. A score is an unbounded real used only for
//! relative ranking, so implementations may return negative values.

use geo::Coord;
use thiserror::Error;

use crate::{InterestProfile, PointOfInterest};

/// Relative influence of interest match, popularity and distance.
///
/// The weights need not sum to one.
///
/// # Examples
/// ```
/// use ramble_core::ScoringWeights;
///
/// let weights = ScoringWeights::default();
/// assert_eq!((weights.alpha, weights.beta, weights.delta), (0.6, 0.3, 0.1));
/// assert!(ScoringWeights::new(1.0, 0.0, -0.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoringWeights {
    /// Weight applied to the interest match.
    pub alpha: f64,
    /// Weight applied to popularity.
    pub beta: f64,
    /// Weight applied to the distance penalty.
    pub delta: f64,
}

/// Errors returned by [`ScoringWeights::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WeightsError {
    /// A weight was NaN or infinite.
    #[error("scoring weight {name} must be finite")]
    NonFinite {
        /// Name of the offending weight.
        name: &'static str,
    },
    /// A weight was below zero.
    #[error("scoring weight {name} must not be negative")]
    Negative {
        /// Name of the offending weight.
        name: &'static str,
    },
}

impl ScoringWeights {
    /// Validate and construct a set of weights.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when any weight is non-finite or negative.
    pub fn new(alpha: f64, beta: f64, delta: f64) -> Result<Self, WeightsError> {
        for (name, value) in [("alpha", alpha), ("beta", beta), ("delta", delta)] {
            if !value.is_finite() {
                return Err(WeightsError::NonFinite { name });
            }
            if value < 0.0 {
                return Err(WeightsError::Negative { name });
            }
        }
        Ok(Self { alpha, beta, delta })
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            alpha: 0.6,
            beta: 0.3,
            delta: 0.1,
        }
    }
}

/// Individual signals behind a composite score.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreComponents {
    /// Jaccard similarity between POI tags and visitor interests.
    pub interest_match: f64,
    /// Heuristic popularity in `0.0..=1.0`.
    pub popularity: f64,
    /// Great-circle distance from the scoring position.
    pub distance_km: f64,
    /// Normalised distance penalty in `0.0..=1.0`.
    pub distance_penalty: f64,
}

/// A point of interest together with its score and the signals behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPoi<'a> {
    /// The scored point of interest.
    pub poi: &'a PointOfInterest,
    /// Composite score; compare relatively, never against a threshold.
    pub score: f64,
    /// Diagnostic breakdown of the score.
    pub components: ScoreComponents,
}

/// Calculate a desirability score for a point of interest.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so independent
/// planning calls can share one scorer. Scoring is infallible; callers are
/// expected to pass only routable POIs.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use ramble_core::{
///     InterestProfile, PointOfInterest, ScoreComponents, ScoredPoi, Scorer, ScoringWeights,
/// };
///
/// struct FlatScorer;
///
/// impl Scorer for FlatScorer {
///     fn score<'a>(
///         &self,
///         poi: &'a PointOfInterest,
///         _profile: &InterestProfile,
///         _position: Coord<f64>,
///         _weights: ScoringWeights,
///     ) -> ScoredPoi<'a> {
///         ScoredPoi {
///             poi,
///             score: 1.0,
///             components: ScoreComponents {
///                 interest_match: 0.0,
///                 popularity: 1.0,
///                 distance_km: 0.0,
///                 distance_penalty: 0.0,
///             },
///         }
///     }
/// }
///
/// let poi = PointOfInterest::new("p", "P", Coord { x: 0.0, y: 0.0 });
/// let profile = InterestProfile::custom(["history"]);
/// let scored = FlatScorer.score(&poi, &profile, Coord { x: 0.0, y: 0.0 }, ScoringWeights::default());
/// assert_eq!(scored.score, 1.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Score `poi` for `profile` as seen from `position`.
    fn score<'a>(
        &self,
        poi: &'a PointOfInterest,
        profile: &InterestProfile,
        position: Coord<f64>,
        weights: ScoringWeights,
    ) -> ScoredPoi<'a>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0, 0.0)]
    #[case(1.0, 2.0, 3.0)]
    fn weights_accept_non_negative_values(#[case] a: f64, #[case] b: f64, #[case] d: f64) {
        assert!(ScoringWeights::new(a, b, d).is_ok());
    }

    #[rstest]
    #[case(f64::NAN, 0.3, 0.1, WeightsError::NonFinite { name: "alpha" })]
    #[case(0.6, f64::INFINITY, 0.1, WeightsError::NonFinite { name: "beta" })]
    #[case(0.6, 0.3, -0.1, WeightsError::Negative { name: "delta" })]
    fn weights_reject_invalid_values(
        #[case] a: f64,
        #[case] b: f64,
        #[case] d: f64,
        #[case] expected: WeightsError,
    ) {
        let err = ScoringWeights::new(a, b, d).expect_err("weights should be rejected");
        assert_eq!(err, expected);
    }
}
