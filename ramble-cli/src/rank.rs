//! Rank command implementation for the Ramble CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use geo::Coord;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use ramble_core::distance::lat_lng;
use ramble_core::{InterestProfile, ScoringWeights};
use ramble_scorer::{PreferenceScorer, RankingReport, rank_pois};
use serde::{Deserialize, Serialize};

use crate::catalogue::{load_catalogue, require_existing};
use crate::options::{resolve_profile, resolve_weights};
use crate::{
    ARG_ALPHA, ARG_BETA, ARG_CATALOGUE, ARG_DELTA, ARG_INTERESTS, ARG_PROFILE, ARG_START_LAT,
    ARG_START_LNG, ARG_TOP, CliError, ENV_RANK_CATALOGUE, ENV_RANK_START_LAT, ENV_RANK_START_LNG,
};

/// Number of POIs listed when `--top` is not given.
const DEFAULT_TOP: usize = 10;

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every POI in a JSON catalogue for a visitor profile \
                 as seen from a location, and list the best matches with the \
                 signals behind each score.",
    about = "Rank POIs for a visitor profile"
)]
#[ortho_config(prefix = "RAMBLE")]
pub(crate) struct RankArgs {
    /// Path to a JSON POI catalogue.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
    /// Latitude to score from, in decimal degrees.
    #[arg(long = ARG_START_LAT, value_name = "deg", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) start_lat: Option<f64>,
    /// Longitude to score from, in decimal degrees.
    #[arg(long = ARG_START_LNG, value_name = "deg", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) start_lng: Option<f64>,
    /// Built-in visitor profile name.
    #[arg(long = ARG_PROFILE, value_name = "name")]
    #[serde(default)]
    pub(crate) profile: Option<String>,
    /// Comma-separated custom interests; overrides --profile.
    #[arg(long = ARG_INTERESTS, value_name = "tags", value_delimiter = ',')]
    #[serde(default)]
    pub(crate) interests: Option<Vec<String>>,
    /// Number of POIs to list (default 10).
    #[arg(long = ARG_TOP, value_name = "count")]
    #[serde(default)]
    pub(crate) top: Option<usize>,
    /// Weight of the interest match.
    #[arg(long = ARG_ALPHA, value_name = "weight")]
    #[serde(default)]
    pub(crate) alpha: Option<f64>,
    /// Weight of popularity.
    #[arg(long = ARG_BETA, value_name = "weight")]
    #[serde(default)]
    pub(crate) beta: Option<f64>,
    /// Weight of the distance penalty.
    #[arg(long = ARG_DELTA, value_name = "weight")]
    #[serde(default)]
    pub(crate) delta: Option<f64>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    pub(crate) catalogue: Utf8PathBuf,
    pub(crate) position: Coord<f64>,
    pub(crate) profile: InterestProfile,
    pub(crate) weights: ScoringWeights,
    pub(crate) top: usize,
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let catalogue = args.catalogue.ok_or(CliError::MissingArgument {
            field: ARG_CATALOGUE,
            env: ENV_RANK_CATALOGUE,
        })?;
        let start_lat = args.start_lat.ok_or(CliError::MissingArgument {
            field: ARG_START_LAT,
            env: ENV_RANK_START_LAT,
        })?;
        let start_lng = args.start_lng.ok_or(CliError::MissingArgument {
            field: ARG_START_LNG,
            env: ENV_RANK_START_LNG,
        })?;
        Ok(Self {
            catalogue,
            position: lat_lng(start_lat, start_lng),
            profile: resolve_profile(args.profile.as_deref(), args.interests.as_deref()),
            weights: resolve_weights(args.alpha, args.beta, args.delta)?,
            top: args.top.unwrap_or(DEFAULT_TOP),
        })
    }
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(crate) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.catalogue)?;
    let pois = load_catalogue(&config.catalogue)?;
    let ranked = rank_pois(
        &PreferenceScorer::default(),
        &pois,
        &config.profile,
        config.position,
        config.weights,
        Some(config.top),
    );
    let report = RankingReport::new(&ranked, &config.profile);
    writeln!(writer, "{report}").map_err(CliError::WriteOutput)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
