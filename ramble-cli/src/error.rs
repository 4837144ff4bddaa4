//! Error types emitted by the Ramble CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use ramble_core::catalogue::CatalogueError;
use ramble_core::{PlanError, WeightsError};
use thiserror::Error;

/// Errors emitted by the Ramble CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// The catalogue path does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Argument naming the path.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// The catalogue path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Argument naming the path.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// The catalogue path could not be inspected.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Argument naming the path.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Opening the catalogue failed.
    #[error("failed to open POI catalogue at {path:?}: {source}")]
    OpenCatalogue {
        /// Catalogue path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Catalogue JSON could not be decoded.
    #[error("failed to parse POI catalogue at {path:?}: {source}")]
    ParseCatalogue {
        /// Catalogue path.
        path: Utf8PathBuf,
        /// Source error from the catalogue decoder.
        #[source]
        source: CatalogueError,
    },
    /// Scoring weights were rejected.
    #[error("invalid scoring weights: {0}")]
    InvalidWeights(#[from] WeightsError),
    /// The planner rejected the request.
    #[error("planner failed: {0}")]
    Plan(#[from] PlanError),
    /// Serialising the route failed.
    #[error("failed to serialise route: {0}")]
    SerialiseRoute(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
