use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "PROEM_CONFIG";

/// `~/.proem/config.toml`
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub defaults: Defaults,
}

/// Flags applied to every run. Config can only switch features on; a flag
/// given on the command line always wins.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub use_npm: bool,
    pub use_pnp: bool,
    pub offline: bool,
    pub verbose: bool,
    pub dev: bool,
    pub template: Option<String>,
}

impl UserConfig {
    pub fn path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|home| home.join(".proem").join("config.toml"))
    }

    /// Loads the user config. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = UserConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, UserConfig::default());
    }

    #[test]
    fn test_partial_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[defaults]\nuse_npm = true\ntemplate = \"typescript\"\n").unwrap();

        let config = UserConfig::load_from(&path).unwrap();
        assert_eq!(
            config.defaults,
            Defaults {
                use_npm: true,
                template: Some("typescript".into()),
                ..Defaults::default()
            }
        );
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[defaults\nuse_npm = yes").unwrap();

        let err = UserConfig::load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse"));
    }
}
