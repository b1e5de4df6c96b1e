use crate::backend::BackendKind;
use crate::install::{InstallPhase, InvalidTransition};
use crate::safety::ConflictingEntry;
use crate::validation::name::InvalidName;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal outcomes of a bootstrap run. Every variant ends the process with a
/// non-zero status.
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error(transparent)]
    InvalidName(#[from] InvalidName),

    #[error("The directory {} contains files that could conflict", .root.display())]
    UnsafeDirectory {
        root: PathBuf,
        conflicts: Vec<ConflictingEntry>,
    },

    #[error("{phase} install failed{}", .command_line.as_ref().map(|c| format!(" running: {}", c)).unwrap_or_default())]
    InstallPhaseFailure {
        phase: InstallPhase,
        command_line: Option<String>,
        detail: Option<String>,
    },

    #[error("{phase} install failed and {} generated file(s) could not be cleaned up", .remaining.len())]
    RollbackIncomplete {
        phase: InstallPhase,
        command_line: Option<String>,
        /// Entries left in the project root for manual removal.
        remaining: Vec<String>,
    },

    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),

    #[error("Manifest error: {0}")]
    Manifest(#[from] proem_manifest::ManifestError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Soft issues: reported to the user, never abort the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BootstrapWarning {
    #[error("{tool} is not available, falling back to {fallback}")]
    BackendUnavailable { tool: String, fallback: BackendKind },

    #[error("You are using {tool} {found} so the project will be bootstrapped with an old unsupported version of tools. Please update to {tool} {minimum} or higher")]
    VersionTooOld {
        tool: String,
        found: String,
        minimum: String,
    },

    #[error("You are using Yarn {version} together with --use-pnp, but Plug'n'Play is only supported starting from the 1.12 release")]
    PnpYarnTooOld { version: String },

    #[error("The --use-pnp flag is no longer necessary with Yarn {version} and is ignored")]
    PnpNoLongerNeeded { version: String },

    #[error("Could not determine whether Yarn {version} supports Plug'n'Play, installing without it")]
    PnpUnknownYarnVersion { version: String },

    #[error("npm doesn't support Plug'n'Play, falling back to regular installs")]
    PnpNotOnNpm,

    #[error("You appear to be offline, falling back to the local Yarn cache")]
    Offline,

    #[error("--offline only applies to Yarn installs and is ignored with npm")]
    OfflineNotOnNpm,

    #[error("{package} requires node {required} but {found} is installed")]
    EngineMismatch {
        package: String,
        required: String,
        found: String,
    },
}
