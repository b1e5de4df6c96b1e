mod selection;

pub use selection::{
    BackendSelector, Selection, MAX_YARN_PNP_VERSION, MIN_NPM_VERSION, MIN_YARN_PNP_VERSION,
    NPM_BINARY, YARN_BINARY,
};

use semver::Version;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BackendKind {
    Npm,
    Yarn,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Npm => write!(f, "npm"),
            BackendKind::Yarn => write!(f, "yarn"),
        }
    }
}

/// The backend fixed for a run, plus whether Plug'n'Play is on.
///
/// Plug'n'Play can only be switched on through [`BackendChoice::yarn_with_pnp`],
/// which checks the yarn version against the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendChoice {
    backend: BackendKind,
    pnp_enabled: bool,
}

impl BackendChoice {
    pub fn npm() -> Self {
        Self {
            backend: BackendKind::Npm,
            pnp_enabled: false,
        }
    }

    pub fn yarn() -> Self {
        Self {
            backend: BackendKind::Yarn,
            pnp_enabled: false,
        }
    }

    /// `None` when `version` is outside `[MIN_YARN_PNP_VERSION, MAX_YARN_PNP_VERSION)`.
    pub fn yarn_with_pnp(version: &Version) -> Option<Self> {
        if supports_pnp(version) {
            Some(Self {
                backend: BackendKind::Yarn,
                pnp_enabled: true,
            })
        } else {
            None
        }
    }

    pub fn backend(&self) -> BackendKind {
        self.backend
    }

    pub fn pnp_enabled(&self) -> bool {
        self.pnp_enabled
    }
}

pub(crate) fn supports_pnp(version: &Version) -> bool {
    *version >= MIN_YARN_PNP_VERSION && *version < MAX_YARN_PNP_VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pnp_requires_supported_yarn() {
        assert!(BackendChoice::yarn_with_pnp(&Version::new(1, 22, 19)).is_some());
        assert!(BackendChoice::yarn_with_pnp(&Version::new(1, 12, 0)).is_some());
        assert!(BackendChoice::yarn_with_pnp(&Version::new(1, 11, 9)).is_none());
        assert!(BackendChoice::yarn_with_pnp(&Version::new(2, 0, 0)).is_none());
    }

    #[test]
    fn test_plain_choices_have_pnp_off() {
        assert!(!BackendChoice::npm().pnp_enabled());
        assert!(!BackendChoice::yarn().pnp_enabled());
        assert_eq!(BackendChoice::npm().backend().to_string(), "npm");
    }
}
