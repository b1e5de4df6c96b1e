use crate::PackageManifest;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const MANIFEST_FILE_NAME: &str = "package.json";

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Invalid repository URL: {0}")]
    InvalidRepository(String),

    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Persists the generated manifest into a project root.
pub struct ManifestWriter;

impl ManifestWriter {
    /// Writes `package.json` for `name` into `root` and returns the file path.
    /// An existing manifest is overwritten.
    pub fn write(root: &Path, name: &str) -> Result<PathBuf, ManifestError> {
        let manifest = PackageManifest::for_project(name)?;
        Self::write_manifest(root, &manifest)
    }

    pub fn write_manifest(root: &Path, manifest: &PackageManifest) -> Result<PathBuf, ManifestError> {
        let path = root.join(MANIFEST_FILE_NAME);
        let body = manifest.to_json()?;

        fs::write(&path, body).map_err(|source| ManifestError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::debug!("Wrote manifest to {}", path.display());
        Ok(path)
    }
}
