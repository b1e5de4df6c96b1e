use super::{BackendChoice, BackendKind};
use crate::errors::BootstrapWarning;
use crate::ports::version_probe::VersionProbe;
use crate::system::version::parse_tool_version;
use semver::Version;

pub const YARN_BINARY: &str = "yarnpkg";
pub const NPM_BINARY: &str = "npm";

/// Plug'n'Play shipped in yarn 1.12.
pub const MIN_YARN_PNP_VERSION: Version = Version::new(1, 12, 0);
/// Yarn 2 enables Plug'n'Play by default and rejects the flag.
pub const MAX_YARN_PNP_VERSION: Version = Version::new(2, 0, 0);
/// Older npm releases bootstrap with unsupported tooling.
pub const MIN_NPM_VERSION: Version = Version::new(6, 0, 0);

/// Outcome of backend selection. Warnings are never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub choice: BackendChoice,
    pub warnings: Vec<BootstrapWarning>,
}

pub struct BackendSelector;

impl BackendSelector {
    pub fn select(use_npm: bool, use_pnp: bool, probe: &dyn VersionProbe) -> Selection {
        let mut warnings = Vec::new();

        let yarn_version = if use_npm {
            None
        } else {
            let found = probe.probe(YARN_BINARY);
            if found.is_none() {
                warnings.push(BootstrapWarning::BackendUnavailable {
                    tool: YARN_BINARY.to_string(),
                    fallback: BackendKind::Npm,
                });
            }
            found
        };

        let choice = match yarn_version {
            Some(raw) => {
                tracing::debug!("Using yarn {}", raw);
                if use_pnp {
                    Self::yarn_pnp(&raw, &mut warnings)
                } else {
                    BackendChoice::yarn()
                }
            }
            None => {
                Self::check_npm(probe, &mut warnings);
                if use_pnp {
                    warnings.push(BootstrapWarning::PnpNotOnNpm);
                }
                BackendChoice::npm()
            }
        };

        for warning in &warnings {
            tracing::warn!("{}", warning);
        }

        Selection { choice, warnings }
    }

    fn yarn_pnp(raw: &str, warnings: &mut Vec<BootstrapWarning>) -> BackendChoice {
        let Some(version) = parse_tool_version(raw) else {
            warnings.push(BootstrapWarning::PnpUnknownYarnVersion {
                version: raw.to_string(),
            });
            return BackendChoice::yarn();
        };

        if let Some(choice) = BackendChoice::yarn_with_pnp(&version) {
            return choice;
        }

        if version < MIN_YARN_PNP_VERSION {
            warnings.push(BootstrapWarning::PnpYarnTooOld {
                version: raw.to_string(),
            });
        } else {
            warnings.push(BootstrapWarning::PnpNoLongerNeeded {
                version: raw.to_string(),
            });
        }
        BackendChoice::yarn()
    }

    fn check_npm(probe: &dyn VersionProbe, warnings: &mut Vec<BootstrapWarning>) {
        let Some(raw) = probe.probe(NPM_BINARY) else {
            tracing::debug!("npm did not report a version");
            return;
        };

        match parse_tool_version(&raw) {
            Some(version) if version < MIN_NPM_VERSION => {
                warnings.push(BootstrapWarning::VersionTooOld {
                    tool: NPM_BINARY.to_string(),
                    found: raw,
                    minimum: MIN_NPM_VERSION.to_string(),
                });
            }
            Some(_) => {}
            None => tracing::debug!("Unrecognised npm version: {}", raw),
        }
    }
}
