//! Catalogue path validation and loading shared by all subcommands.

use std::io::BufReader;

use camino::Utf8Path;
use ramble_core::PointOfInterest;
use ramble_core::catalogue::Catalogue;
use ramble_fs::open_utf8_file;

use crate::{ARG_CATALOGUE, CliError};

/// Fail early with a precise error when the catalogue path is unusable.
pub(crate) fn require_existing(path: &Utf8Path) -> Result<(), CliError> {
    match ramble_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field: ARG_CATALOGUE,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field: ARG_CATALOGUE,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field: ARG_CATALOGUE,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load structured POIs from a JSON catalogue on disk.
pub(crate) fn load_catalogue(path: &Utf8Path) -> Result<Vec<PointOfInterest>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenCatalogue {
        path: path.to_path_buf(),
        source,
    })?;
    let catalogue = Catalogue::from_reader(BufReader::new(file)).map_err(|source| {
        CliError::ParseCatalogue {
            path: path.to_path_buf(),
            source,
        }
    })?;
    if catalogue.skipped() > 0 {
        log::info!(
            "ignored {} catalogue records without id or coordinates in {path}",
            catalogue.skipped()
        );
    }
    Ok(catalogue.into_pois())
}
