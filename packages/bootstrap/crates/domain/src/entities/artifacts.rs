use std::ffi::OsStr;

/// Top-level entries a bootstrap run may create inside the project root.
///
/// Only these names are ever deleted during rollback; matching is by exact
/// file name, nested contents are not inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifactSet {
    names: Vec<String>,
}

impl GeneratedArtifactSet {
    pub const MANIFEST: &'static str = "package.json";
    pub const YARN_LOCKFILE: &'static str = "yarn.lock";
    pub const DEPENDENCY_DIR: &'static str = "node_modules";
    pub const NPM_LOCKFILE: &'static str = "package-lock.json";

    pub fn new() -> Self {
        Self {
            names: [
                Self::MANIFEST,
                Self::YARN_LOCKFILE,
                Self::DEPENDENCY_DIR,
                Self::NPM_LOCKFILE,
            ]
            .iter()
            .map(|n| n.to_string())
            .collect(),
        }
    }

    pub fn contains(&self, name: &OsStr) -> bool {
        self.names.iter().any(|n| OsStr::new(n) == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for GeneratedArtifactSet {
    fn default() -> Self {
        Self::new()
    }
}
