use domain::errors::BootstrapWarning;
use semver::{Version, VersionReq};
use std::fs;
use std::path::Path;

/// Compares installed packages' `engines.node` against the running node.
pub struct EngineChecker;

impl EngineChecker {
    /// One warning per package whose declared node range excludes `node_version`.
    /// Packages without a readable manifest or a parseable range are skipped.
    pub fn check(root: &Path, packages: &[String], node_version: &Version) -> Vec<BootstrapWarning> {
        packages
            .iter()
            .filter_map(|package| {
                let required = Self::required_node(root, package)?;
                let req = match VersionReq::parse(&required) {
                    Ok(req) => req,
                    Err(e) => {
                        tracing::debug!("Ignoring engines.node of {} ({}): {}", package, required, e);
                        return None;
                    }
                };

                if req.matches(node_version) {
                    None
                } else {
                    Some(BootstrapWarning::EngineMismatch {
                        package: package.clone(),
                        required,
                        found: node_version.to_string(),
                    })
                }
            })
            .collect()
    }

    fn required_node(root: &Path, package: &str) -> Option<String> {
        let manifest = root.join("node_modules").join(package).join("package.json");
        let content = fs::read_to_string(manifest).ok()?;
        let value: serde_json::Value = serde_json::from_str(&content).ok()?;
        value
            .get("engines")?
            .get("node")?
            .as_str()
            .map(|s| s.to_string())
    }
}
