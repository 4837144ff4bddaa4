//! Command-line interface for planning Ramble walking tours.
//!
//! Two subcommands share one catalogue loader: `plan` builds a time-boxed
//! route and `rank` lists the best-scoring POIs for a visitor profile. Every
//! option can come from CLI flags, configuration files or `RAMBLE_*`
//! environment variables.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod catalogue;
mod error;
mod options;
mod plan;
mod rank;

pub use error::CliError;

use plan::PlanArgs;
use rank::RankArgs;

pub(crate) const ARG_CATALOGUE: &str = "catalogue";
pub(crate) const ARG_START_LAT: &str = "start-lat";
pub(crate) const ARG_START_LNG: &str = "start-lng";
pub(crate) const ARG_DURATION: &str = "duration";
pub(crate) const ARG_VISIT_MINUTES: &str = "visit-minutes";
pub(crate) const ARG_RETURN_TO_START: &str = "return-to-start";
pub(crate) const ARG_PROFILE: &str = "profile";
pub(crate) const ARG_INTERESTS: &str = "interests";
pub(crate) const ARG_STRATEGY: &str = "strategy";
pub(crate) const ARG_ALPHA: &str = "alpha";
pub(crate) const ARG_BETA: &str = "beta";
pub(crate) const ARG_DELTA: &str = "delta";
pub(crate) const ARG_FORMAT: &str = "format";
pub(crate) const ARG_TOP: &str = "top";

pub(crate) const ENV_PLAN_CATALOGUE: &str = "RAMBLE_CMDS_PLAN_CATALOGUE";
pub(crate) const ENV_PLAN_START_LAT: &str = "RAMBLE_CMDS_PLAN_START_LAT";
pub(crate) const ENV_PLAN_START_LNG: &str = "RAMBLE_CMDS_PLAN_START_LNG";
pub(crate) const ENV_PLAN_DURATION: &str = "RAMBLE_CMDS_PLAN_DURATION";
pub(crate) const ENV_RANK_CATALOGUE: &str = "RAMBLE_CMDS_RANK_CATALOGUE";
pub(crate) const ENV_RANK_START_LAT: &str = "RAMBLE_CMDS_RANK_START_LAT";
pub(crate) const ENV_RANK_START_LNG: &str = "RAMBLE_CMDS_RANK_START_LNG";

/// Run the Ramble CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments are invalid, configuration cannot be
/// merged, the catalogue cannot be read, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => plan::run_plan(args),
        Command::Rank(args) => rank::run_rank(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "ramble",
    about = "Plan time-boxed walking tours over a POI catalogue",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan a walking route within a time budget.
    Plan(PlanArgs),
    /// Rank POIs for a visitor profile.
    Rank(RankArgs),
}

#[cfg(test)]
mod tests;
