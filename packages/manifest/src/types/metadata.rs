use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Person or organisation credited in the generated manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct Author {
    pub name: String,
    pub email: String,
    /// Homepage of the author, kept verbatim (no URL normalisation).
    pub url: String,
}

impl Default for Author {
    fn default() -> Self {
        Self {
            name: "Blackburn Labs".to_string(),
            email: "rob@blackburnlabs.com".to_string(),
            url: "http://www.blackburnlabs.com".to_string(),
        }
    }
}

/// SPDX-ish license identifier written into new projects.
/// Proem UI projects are private by default.
pub const DEFAULT_LICENSE: &str = "none";

/// Repository every generated project points back to.
pub const DEFAULT_REPOSITORY: &str = "https://github.com/rwblackburn/proem-ui.git";

/// Entry point of a generated project.
pub const DEFAULT_MAIN: &str = "main.js";

pub(crate) fn default_version() -> semver::Version {
    semver::Version::new(2, 0, 0)
}

pub(crate) fn version_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
    let mut schema = gen.subschema_for::<String>().into_object();
    schema.metadata().description = Some("SemVer version string (e.g. 2.0.0)".to_string());
    schemars::schema::Schema::Object(schema)
}
