//! Core domain types for the Ramble walking-tour engine.
//!
//! The crate defines the vocabulary shared by the scorer, the planner and
//! the command-line front end: points of interest, interest profiles,
//! scoring weights, route results and the [`Scorer`] and [`Planner`]
//! capabilities. It also hosts the great-circle distance model and the
//! human-readable route summary.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "serde")]
pub mod catalogue;
pub mod distance;
pub mod planner;
pub mod poi;
pub mod profile;
pub mod route;
pub mod scorer;
pub mod summary;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use planner::{PlanError, PlanRequest, Planner, SelectionPolicy};
pub use poi::{Enrichment, PointOfInterest, Tags};
pub use profile::{DEFAULT_PROFILE, InterestProfile, ProfileRegistry};
pub use route::{RouteResult, RouteStop};
pub use scorer::{ScoreComponents, ScoredPoi, Scorer, ScoringWeights, WeightsError};
pub use summary::RouteSummary;
