pub mod types;
pub mod writer;

pub use types::*;
pub use writer::{ManifestError, ManifestWriter, MANIFEST_FILE_NAME};

use schemars::JsonSchema;
use semver::Version;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::Url;

/// The `package.json` written into every new project.
///
/// Field order here is the key order on disk; it must stay stable for a given
/// tool version so that regenerated manifests diff cleanly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct PackageManifest {
    /// Package name, identical to the project directory's base name.
    pub name: String,

    #[schemars(schema_with = "types::metadata::version_schema")]
    pub version: Version,

    /// Entry-point filename.
    pub main: String,

    /// Named commands (`npm run <name>`).
    pub scripts: BTreeMap<String, String>,

    pub repository: Url,

    pub author: Author,

    pub license: String,
}

impl PackageManifest {
    /// Builds the canonical manifest for a project called `name`.
    pub fn for_project(name: impl Into<String>) -> Result<Self, ManifestError> {
        let repository = Url::parse(DEFAULT_REPOSITORY)
            .map_err(|e| ManifestError::InvalidRepository(e.to_string()))?;

        Ok(Self {
            name: name.into(),
            version: types::metadata::default_version(),
            main: DEFAULT_MAIN.to_string(),
            scripts: default_scripts(),
            repository,
            author: Author::default(),
            license: DEFAULT_LICENSE.to_string(),
        })
    }

    /// Pretty JSON with two-space indentation and a trailing newline.
    pub fn to_json(&self) -> Result<String, ManifestError> {
        let mut body = serde_json::to_string_pretty(self)?;
        body.push('\n');
        Ok(body)
    }
}
