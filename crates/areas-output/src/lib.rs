//! Writing and reading the service area JSON artifact.
//!
//! The artifact is written to a sibling temporary file and renamed into
//! place, so a failed run never leaves a partial document at the destination.

mod error;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use areas_model::Dataset;

pub use error::{OutputError, Result};

/// Serialize a dataset as pretty-printed JSON (two-space indentation).
pub fn dataset_to_json(dataset: &Dataset) -> Result<String> {
    serde_json::to_string_pretty(dataset).map_err(OutputError::Serialize)
}

/// Write `dataset` to `path`, creating parent directories as needed.
pub fn write_dataset(path: &Path, dataset: &Dataset) -> Result<()> {
    let json = dataset_to_json(dataset)?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::write(parent, source))?;
    }

    let staging = staging_path(path);
    debug!(staging = %staging.display(), "writing staged artifact");
    if let Err(source) = fs::write(&staging, json.as_bytes()) {
        let _ = fs::remove_file(&staging);
        return Err(OutputError::write(&staging, source));
    }
    if let Err(source) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(OutputError::write(path, source));
    }

    let counts = dataset.counts();
    info!(
        path = %path.display(),
        states = counts.states,
        districts = counts.districts,
        subdistricts = counts.subdistricts,
        "wrote dataset"
    );
    Ok(())
}

/// Load a previously written artifact.
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let text = fs::read_to_string(path).map_err(|source| OutputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| OutputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dataset.json".to_string());
    path.with_file_name(format!(".{name}.tmp"))
}
