//! Option types and resolution helpers shared by `plan` and `rank`.

use clap::ValueEnum;
use ramble_core::{DEFAULT_PROFILE, InterestProfile, ProfileRegistry, ScoringWeights};
use serde::{Deserialize, Serialize};

use crate::CliError;

/// How the next stop is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Strategy {
    /// Always walk to the closest unvisited POI.
    Nearest,
    /// Walk to the best-scoring unvisited POI for the profile.
    Preference,
}

/// How a planned route is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Human-readable summary.
    #[default]
    Summary,
    /// Pretty-printed JSON `RouteResult`.
    Json,
}

/// Resolve the visitor profile from an explicit interest list or a name.
///
/// Interests win over a profile name; unknown names fall back to the
/// default profile.
pub(crate) fn resolve_profile(
    profile: Option<&str>,
    interests: Option<&[String]>,
) -> InterestProfile {
    match interests {
        Some(list) if !list.is_empty() => InterestProfile::custom(list),
        _ => ProfileRegistry::builtin()
            .resolve(profile.unwrap_or(DEFAULT_PROFILE))
            .clone(),
    }
}

/// Build validated weights, filling gaps from the defaults.
pub(crate) fn resolve_weights(
    alpha: Option<f64>,
    beta: Option<f64>,
    delta: Option<f64>,
) -> Result<ScoringWeights, CliError> {
    let defaults = ScoringWeights::default();
    Ok(ScoringWeights::new(
        alpha.unwrap_or(defaults.alpha),
        beta.unwrap_or(defaults.beta),
        delta.unwrap_or(defaults.delta),
    )?)
}
