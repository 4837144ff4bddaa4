//! Regression tests for preference routing across interest profiles.
#![expect(
    clippy::expect_used,
    reason = "regression tests use expect for readable failures"
)]

use ramble_core::distance::lat_lng;
use ramble_core::{InterestProfile, PlanRequest, Planner, PointOfInterest, ScoringWeights};
use ramble_planner::GreedyPlanner;
use ramble_planner::test_support::eastward_row;
use ramble_scorer::PreferenceScorer;
use rstest::{fixture, rstest};

#[fixture]
fn planner() -> GreedyPlanner {
    GreedyPlanner::with_scorer(PreferenceScorer::default())
}

fn plan_for(planner: &GreedyPlanner, pois: &[PointOfInterest], interest: &str) -> Vec<String> {
    let request = PlanRequest::new(lat_lng(54.4025, -1.7367), 45.0)
        .with_preferences(InterestProfile::custom([interest]), ScoringWeights::default());
    planner
        .plan(pois, &request)
        .expect("preference planning succeeds")
        .poi_ids()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

#[rstest]
fn disjoint_profiles_choose_different_routes(planner: GreedyPlanner) {
    let pois = eastward_row(54.4025, -1.7367, 6, 0.2);
    let history = plan_for(&planner, &pois, "history");
    let nature = plan_for(&planner, &pois, "nature");
    assert_eq!(history.first().map(String::as_str), Some("row-1"));
    assert_eq!(nature.first().map(String::as_str), Some("row-2"));
    assert_ne!(history, nature);
}

/// The loop ends at the first unaffordable choice rather than trying the
/// next candidate, so a cheaper stop can be left unvisited.
#[rstest]
fn route_ends_at_first_unaffordable_choice(planner: GreedyPlanner) {
    let pois = vec![
        PointOfInterest::new("abbey", "Easby Abbey", lat_lng(54.3935, -1.7110))
            .with_tags(["history"]),
        PointOfInterest::new("green", "The Green", lat_lng(54.4030, -1.7370)),
    ];
    let request = PlanRequest::new(lat_lng(54.4025, -1.7367), 15.0)
        .with_preferences(InterestProfile::custom(["history"]), ScoringWeights::default());
    let route = planner.plan(&pois, &request).expect("planning succeeds");
    assert!(route.stops.is_empty());

    let nearest_only = GreedyPlanner::new()
        .plan(&pois, &PlanRequest::new(lat_lng(54.4025, -1.7367), 15.0))
        .expect("planning succeeds");
    assert_eq!(nearest_only.poi_ids(), vec!["green"]);
}
