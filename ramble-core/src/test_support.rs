//! Fixtures shared by unit, behaviour and property tests across the
//! workspace.

use geo::Coord;

use crate::distance::{haversine_km, lat_lng};
use crate::{InterestProfile, PointOfInterest, ScoreComponents, ScoredPoi, Scorer, ScoringWeights};

/// Start location used by the Richmond walking scenarios: the market place.
pub const RICHMOND_MARKET: Coord<f64> = lat_lng(54.4025, -1.7367);

/// Build a tagged point of interest whose name echoes its id.
#[must_use]
pub fn poi<I, S>(id: &str, lat: f64, lng: f64, tags: I) -> PointOfInterest
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    PointOfInterest::new(id, id, lat_lng(lat, lng)).with_tags(tags)
}

/// Three well-known sites around Richmond market place.
#[must_use]
pub fn richmond_pois() -> Vec<PointOfInterest> {
    vec![
        PointOfInterest::new("castle", "Richmond Castle", lat_lng(54.4039, -1.7394))
            .with_tags(["history", "medieval", "military", "ruins"]),
        PointOfInterest::new("greyfriars", "Greyfriars Tower", lat_lng(54.4028, -1.735))
            .with_tags(["religious", "ruins", "medieval", "haunted"]),
        PointOfInterest::new("bridge", "Richmond Bridge", lat_lng(54.4042, -1.7402))
            .with_tags(["scenic", "georgian", "engineering"]),
    ]
}

/// Scorer that prefers distant POIs, used to check that planners follow
/// whatever the scorer says rather than distance.
#[derive(Debug, Copy, Clone, Default)]
pub struct FarthestFirstScorer;

impl Scorer for FarthestFirstScorer {
    fn score<'a>(
        &self,
        poi: &'a PointOfInterest,
        _profile: &InterestProfile,
        position: Coord<f64>,
        _weights: ScoringWeights,
    ) -> ScoredPoi<'a> {
        let distance_km = haversine_km(position, poi.location);
        ScoredPoi {
            poi,
            score: distance_km,
            components: ScoreComponents {
                interest_match: 0.0,
                popularity: 0.0,
                distance_km,
                distance_penalty: 0.0,
            },
        }
    }
}
