//! Facade crate for the Ramble walking-tour engine.
//!
//! This crate re-exports the core domain types and exposes the preference
//! scorer and greedy planner behind feature flags.

#![forbid(unsafe_code)]

pub use ramble_core::{
    Enrichment, InterestProfile, PlanError, PlanRequest, Planner, PointOfInterest,
    ProfileRegistry, RouteResult, RouteStop, RouteSummary, ScoreComponents, ScoredPoi, Scorer,
    ScoringWeights, SelectionPolicy, WeightsError, distance,
};

#[cfg(feature = "serde")]
pub use ramble_core::catalogue::{Catalogue, CatalogueError};

#[cfg(feature = "scorer")]
pub use ramble_scorer::{PreferenceScorer, RankingReport, rank_pois};

#[cfg(feature = "planner")]
pub use ramble_planner::GreedyPlanner;
