//! Ordering candidate pools by preference score.

use geo::Coord;
use ramble_core::{InterestProfile, PointOfInterest, ScoredPoi, Scorer, ScoringWeights};

/// Score every routable candidate and return them best first.
///
/// The sort is stable, so equal scores keep their input order. Candidates
/// without finite coordinates are skipped, as are candidates whose score is
/// NaN or infinite (possible when weights are set directly). `top_n` truncates the ranking;
/// `None` keeps every scored candidate.
///
/// # Examples
/// ```
/// use ramble_core::distance::lat_lng;
/// use ramble_core::{InterestProfile, PointOfInterest, ScoringWeights};
/// use ramble_scorer::{PreferenceScorer, rank_pois};
///
/// let pois = vec![
///     PointOfInterest::new("falls", "Richmond Falls", lat_lng(54.4015, -1.7375))
///         .with_tags(["scenic", "nature"]),
///     PointOfInterest::new("castle", "Richmond Castle", lat_lng(54.4039, -1.7394))
///         .with_tags(["history", "medieval"]),
/// ];
/// let profile = InterestProfile::custom(["history", "medieval"]);
/// let ranked = rank_pois(
///     &PreferenceScorer::default(),
///     &pois,
///     &profile,
///     lat_lng(54.4025, -1.7367),
///     ScoringWeights::default(),
///     Some(1),
/// );
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].poi.id, "castle");
/// ```
pub fn rank_pois<'a, S>(
    scorer: &S,
    candidates: &'a [PointOfInterest],
    profile: &InterestProfile,
    position: Coord<f64>,
    weights: ScoringWeights,
    top_n: Option<usize>,
) -> Vec<ScoredPoi<'a>>
where
    S: Scorer + ?Sized,
{
    let mut ranked: Vec<ScoredPoi<'a>> = candidates
        .iter()
        .filter(|poi| poi.is_routable())
        .map(|poi| scorer.score(poi, profile, position, weights))
        .filter(|scored| scored.score.is_finite())
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    if let Some(limit) = top_n {
        ranked.truncate(limit);
    }
    log::debug!(
        "ranked {} of {} candidates for profile '{}'",
        ranked.len(),
        candidates.len(),
        profile.name()
    );
    ranked
}
