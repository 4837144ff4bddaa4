//! Plan command implementation for the Ramble CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use ramble_core::distance::{DEFAULT_VISIT_MINUTES, lat_lng};
use ramble_core::{PlanRequest, Planner, RouteResult};
use ramble_planner::GreedyPlanner;
use ramble_scorer::PreferenceScorer;
use serde::{Deserialize, Serialize};

use crate::catalogue::{load_catalogue, require_existing};
use crate::options::{OutputFormat, Strategy, resolve_profile, resolve_weights};
use crate::{
    ARG_ALPHA, ARG_BETA, ARG_CATALOGUE, ARG_DELTA, ARG_DURATION, ARG_FORMAT, ARG_INTERESTS,
    ARG_PROFILE, ARG_RETURN_TO_START, ARG_START_LAT, ARG_START_LNG, ARG_STRATEGY,
    ARG_VISIT_MINUTES, CliError, ENV_PLAN_CATALOGUE, ENV_PLAN_DURATION, ENV_PLAN_START_LAT,
    ENV_PLAN_START_LNG,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a walking route from a start location through the POIs \
                 in a JSON catalogue, stopping before the time budget runs \
                 out. Routes pick the nearest POI by default, or the \
                 best-scoring POI for a profile with --strategy preference.",
    about = "Plan a time-boxed walking route"
)]
#[ortho_config(prefix = "RAMBLE")]
pub(crate) struct PlanArgs {
    /// Path to a JSON POI catalogue.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
    /// Start latitude in decimal degrees.
    #[arg(long = ARG_START_LAT, value_name = "deg", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) start_lat: Option<f64>,
    /// Start longitude in decimal degrees.
    #[arg(long = ARG_START_LNG, value_name = "deg", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) start_lng: Option<f64>,
    /// Time budget in minutes.
    #[arg(long = ARG_DURATION, value_name = "minutes")]
    #[serde(default)]
    pub(crate) duration: Option<f64>,
    /// Minutes spent at each stop (default 5).
    #[arg(long = ARG_VISIT_MINUTES, value_name = "minutes")]
    #[serde(default)]
    pub(crate) visit_minutes: Option<f64>,
    /// Walk back to the start when the budget allows.
    #[arg(
        long = ARG_RETURN_TO_START,
        value_name = "bool",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) return_to_start: Option<bool>,
    /// Built-in visitor profile name.
    #[arg(long = ARG_PROFILE, value_name = "name")]
    #[serde(default)]
    pub(crate) profile: Option<String>,
    /// Comma-separated custom interests; overrides --profile.
    #[arg(long = ARG_INTERESTS, value_name = "tags", value_delimiter = ',')]
    #[serde(default)]
    pub(crate) interests: Option<Vec<String>>,
    /// Stop selection strategy.
    #[arg(long = ARG_STRATEGY, value_enum)]
    #[serde(default)]
    pub(crate) strategy: Option<Strategy>,
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
    /// Output format.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON catalogue.
    pub(crate) catalogue: Utf8PathBuf,
    /// Planner request assembled from the options.
    pub(crate) request: PlanRequest,
    /// Output format.
    pub(crate) format: OutputFormat,
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let catalogue = args.catalogue.ok_or(CliError::MissingArgument {
            field: ARG_CATALOGUE,
            env: ENV_PLAN_CATALOGUE,
        })?;
        let start_lat = args.start_lat.ok_or(CliError::MissingArgument {
            field: ARG_START_LAT,
            env: ENV_PLAN_START_LAT,
        })?;
        let start_lng = args.start_lng.ok_or(CliError::MissingArgument {
            field: ARG_START_LNG,
            env: ENV_PLAN_START_LNG,
        })?;
        let duration = args.duration.ok_or(CliError::MissingArgument {
            field: ARG_DURATION,
            env: ENV_PLAN_DURATION,
        })?;

        let mut request = PlanRequest::new(lat_lng(start_lat, start_lng), duration)
            .with_visit_minutes(args.visit_minutes.unwrap_or(DEFAULT_VISIT_MINUTES))
            .with_return_to_start(args.return_to_start.unwrap_or(false));

        let wants_preferences = args.profile.is_some() || args.interests.is_some();
        let strategy = args.strategy.unwrap_or(if wants_preferences {
            Strategy::Preference
        } else {
            Strategy::Nearest
        });
        if strategy == Strategy::Preference {
            let profile = resolve_profile(args.profile.as_deref(), args.interests.as_deref());
            let weights = resolve_weights(args.alpha, args.beta, args.delta)?;
            request = request.with_preferences(profile, weights);
        }

        Ok(Self {
            catalogue,
            request,
            format: args.format.unwrap_or_default(),
        })
    }
}

/// Builds a planner instance for the current invocation.
pub(crate) trait PlannerBuilder {
    fn build(&self, config: &PlanConfig) -> Box<dyn Planner>;
}

pub(crate) struct DefaultPlannerBuilder;

impl PlannerBuilder for DefaultPlannerBuilder {
    fn build(&self, _config: &PlanConfig) -> Box<dyn Planner> {
        Box::new(GreedyPlanner::with_scorer(PreferenceScorer::default()))
    }
}

pub(crate) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &DefaultPlannerBuilder, &mut stdout)
}

pub(crate) fn run_plan_with(
    args: PlanArgs,
    builder: &dyn PlannerBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let route = execute_plan(&config, builder)?;
    write_route(writer, &route, config.format)
}

fn execute_plan(config: &PlanConfig, builder: &dyn PlannerBuilder) -> Result<RouteResult, CliError> {
    require_existing(&config.catalogue)?;
    let pois = load_catalogue(&config.catalogue)?;
    let planner = builder.build(config);
    Ok(planner.plan(&pois, &config.request)?)
}

fn write_route(
    writer: &mut dyn Write,
    route: &RouteResult,
    format: OutputFormat,
) -> Result<(), CliError> {
    let payload = match format {
        OutputFormat::Summary => route.summary().to_string(),
        OutputFormat::Json => {
            serde_json::to_string_pretty(route).map_err(CliError::SerialiseRoute)?
        }
    };
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
