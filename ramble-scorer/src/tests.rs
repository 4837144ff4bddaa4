//! Unit coverage for the preference scoring signals.
#![expect(
    clippy::expect_used,
    clippy::float_arithmetic,
    reason = "tests compare floating-point scores and fail fast on setup"
)]

use ramble_core::distance::lat_lng;
use ramble_core::poi::normalise_tags;
use ramble_core::test_support::{RICHMOND_MARKET, poi, richmond_pois};
use geo::Coord;
use ramble_core::{
    Enrichment, InterestProfile, PointOfInterest, ScoredPoi, Scorer, ScoringWeights,
};
use rstest::{fixture, rstest};

use crate::{
    DEFAULT_PENALTY_RADIUS_KM, PreferenceScorer, RankingReport, distance_penalty, interest_match,
    popularity, rank_pois,
};

const TOLERANCE: f64 = 1e-12;

#[fixture]
fn scorer() -> PreferenceScorer {
    PreferenceScorer::default()
}

fn enriched(facts: bool, cues: bool) -> PointOfInterest {
    let enrichment = Enrichment {
        facts: if facts { vec!["fact".to_owned()] } else { Vec::new() },
        visual_cues: if cues { vec!["cue".to_owned()] } else { Vec::new() },
    };
    PointOfInterest::new("p", "P", lat_lng(0.0, 0.0)).with_enrichment(enrichment)
}

#[rstest]
#[case(&["history", "ruins"], &["history", "ruins"], 1.0)]
#[case(&["history", "ruins"], &["history", "scenic"], 1.0 / 3.0)]
#[case(&["history"], &["scenic"], 0.0)]
#[case(&[], &["scenic"], 0.0)]
#[case(&["scenic"], &[], 0.0)]
fn interest_match_is_jaccard(#[case] tags: &[&str], #[case] interests: &[&str], #[case] expected: f64) {
    let value = interest_match(&normalise_tags(tags), &normalise_tags(interests));
    assert!((value - expected).abs() < TOLERANCE, "got {value}");
}

#[rstest]
#[case(false, false, 0.5)]
#[case(true, false, 0.8)]
#[case(false, true, 0.6)]
#[case(true, true, 0.9)]
fn popularity_rewards_enrichment(#[case] facts: bool, #[case] cues: bool, #[case] expected: f64) {
    let value = popularity(&enriched(facts, cues));
    assert!((value - expected).abs() < TOLERANCE, "got {value}");
}

#[rstest]
#[case(0.95, 0.95)]
#[case(0.2, 0.9)]
#[case(1.7, 1.0)]
fn quality_hint_lifts_popularity_up_to_one(#[case] hint: f64, #[case] expected: f64) {
    let value = popularity(&enriched(true, true).with_quality_hint(hint));
    assert!((value - expected).abs() < TOLERANCE, "got {value}");
}

#[rstest]
#[case(0.0, 0.0)]
#[case(0.5, 0.25)]
#[case(2.0, 1.0)]
#[case(5.0, 1.0)]
fn distance_penalty_saturates_at_radius(#[case] km: f64, #[case] expected: f64) {
    let value = distance_penalty(km, DEFAULT_PENALTY_RADIUS_KM);
    assert!((value - expected).abs() < TOLERANCE, "got {value}");
}

#[rstest]
#[case(0.0, 0.0)]
#[case(0.1, 1.0)]
fn degenerate_radius_penalises_any_distance(#[case] km: f64, #[case] expected: f64) {
    assert!((distance_penalty(km, 0.0) - expected).abs() < TOLERANCE);
}

#[rstest]
fn composite_score_combines_weighted_signals(scorer: PreferenceScorer) {
    let candidate = poi("here", 54.4025, -1.7367, ["history"]);
    let profile = InterestProfile::custom(["history"]);
    let weights = ScoringWeights::new(1.0, 2.0, 3.0).expect("valid weights");
    let scored = scorer.score(&candidate, &profile, RICHMOND_MARKET, weights);
    // interest 1.0, popularity 0.5, penalty 0.0
    assert!((scored.score - 2.0).abs() < TOLERANCE, "got {}", scored.score);
    assert!(scored.components.distance_km.abs() < TOLERANCE);
}

#[rstest]
fn zero_weights_give_zero_score(scorer: PreferenceScorer) {
    let candidate = poi("castle", 54.4039, -1.7394, ["history"]);
    let profile = InterestProfile::custom(["history"]);
    let weights = ScoringWeights::new(0.0, 0.0, 0.0).expect("valid weights");
    let scored = scorer.score(&candidate, &profile, RICHMOND_MARKET, weights);
    assert!(scored.score.abs() < TOLERANCE);
}

#[rstest]
fn distance_can_drive_scores_negative() {
    let scorer = PreferenceScorer::new().with_penalty_radius(0.1);
    let candidate = poi("far", 54.5, -1.7367, ["scenic"]);
    let profile = InterestProfile::custom(["history"]);
    let weights = ScoringWeights::new(0.0, 0.0, 1.0).expect("valid weights");
    let scored = scorer.score(&candidate, &profile, RICHMOND_MARKET, weights);
    assert!((scored.score + 1.0).abs() < TOLERANCE);
}

#[rstest]
fn ranking_prefers_matching_interests(scorer: PreferenceScorer) {
    let pois = richmond_pois();
    let profile = InterestProfile::custom(["scenic", "georgian", "engineering"]);
    let ranked = rank_pois(
        &scorer,
        &pois,
        &profile,
        RICHMOND_MARKET,
        ScoringWeights::default(),
        None,
    );
    let ids: Vec<&str> = ranked.iter().map(|entry| entry.poi.id.as_str()).collect();
    assert_eq!(ids.first(), Some(&"bridge"));
    assert_eq!(ids.len(), 3);
}

#[rstest]
fn ranking_keeps_input_order_for_ties(scorer: PreferenceScorer) {
    let pois = vec![
        poi("first", 54.4025, -1.7367, ["scenic"]),
        poi("second", 54.4025, -1.7367, ["scenic"]),
    ];
    let profile = InterestProfile::custom(["scenic"]);
    let ranked = rank_pois(
        &scorer,
        &pois,
        &profile,
        RICHMOND_MARKET,
        ScoringWeights::default(),
        None,
    );
    let ids: Vec<&str> = ranked.iter().map(|entry| entry.poi.id.as_str()).collect();
    assert_eq!(ids, vec!["first", "second"]);
}

#[rstest]
fn ranking_skips_unroutable_candidates(scorer: PreferenceScorer) {
    let pois = vec![
        poi("nowhere", f64::NAN, -1.7367, ["scenic"]),
        poi("falls", 54.4015, -1.7375, ["scenic"]),
    ];
    let profile = InterestProfile::custom(["scenic"]);
    let ranked = rank_pois(
        &scorer,
        &pois,
        &profile,
        RICHMOND_MARKET,
        ScoringWeights::default(),
        Some(5),
    );
    assert_eq!(ranked.len(), 1);
}

/// Delegates to the preference scorer but reports NaN for `poisoned`.
struct NanScorer(PreferenceScorer);

impl Scorer for NanScorer {
    fn score<'a>(
        &self,
        poi: &'a PointOfInterest,
        profile: &InterestProfile,
        position: Coord<f64>,
        weights: ScoringWeights,
    ) -> ScoredPoi<'a> {
        let mut scored = self.0.score(poi, profile, position, weights);
        if poi.id == "poisoned" {
            scored.score = f64::NAN;
        }
        scored
    }
}

#[rstest]
fn ranking_drops_non_finite_scores(scorer: PreferenceScorer) {
    let pois = vec![
        poi("poisoned", 54.4028, -1.735, ["scenic"]),
        poi("falls", 54.4015, -1.7375, ["scenic"]),
    ];
    let profile = InterestProfile::custom(["scenic"]);
    let ranked = rank_pois(
        &NanScorer(scorer),
        &pois,
        &profile,
        RICHMOND_MARKET,
        ScoringWeights::default(),
        None,
    );
    let ids: Vec<&str> = ranked.iter().map(|entry| entry.poi.id.as_str()).collect();
    assert_eq!(ids, vec!["falls"]);
}

#[rstest]
fn ranking_of_empty_pool_is_empty(scorer: PreferenceScorer) {
    let profile = InterestProfile::custom(["scenic"]);
    let ranked = rank_pois(
        &scorer,
        &[],
        &profile,
        RICHMOND_MARKET,
        ScoringWeights::default(),
        Some(3),
    );
    assert!(ranked.is_empty());
}

#[rstest]
fn report_lists_entries_with_components(scorer: PreferenceScorer) {
    let pois = richmond_pois();
    let profile = InterestProfile::custom(["ruins"]);
    let ranked = rank_pois(
        &scorer,
        &pois,
        &profile,
        RICHMOND_MARKET,
        ScoringWeights::default(),
        Some(2),
    );
    let text = RankingReport::new(&ranked, &profile).to_string();
    assert!(text.starts_with("Top 2 POIs for profile: custom"));
    assert!(text.contains("1. "));
    assert!(text.contains("2. "));
    assert!(!text.contains("3. "));
    assert!(text.contains("Interest match: "));
    assert!(text.contains("Popularity: 0.500"));
}
