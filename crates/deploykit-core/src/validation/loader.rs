//! Profile loading

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Fatal failures that stop validation before any rule runs
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Profile file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read profile {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse JSON: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },
}

/// Read a profile file and parse it as JSON.
///
/// The document is returned untyped; the validators check each field's
/// shape themselves.
pub fn load_profile(path: impl AsRef<Path>) -> Result<Value, ProfileError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ProfileError::NotFound {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), "Loading profile");
    let content = fs::read_to_string(path).map_err(|source| ProfileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ProfileError::Parse { source })
}
