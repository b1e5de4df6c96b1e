use crate::backend::BackendKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackageError {
    #[error("Failed to spawn {command}: {reason}")]
    Spawn { command: String, reason: String },
    #[error("Package manager cannot run in {}: {reason}", .cwd.display())]
    WrongDirectory { cwd: PathBuf, reason: String },
}

/// Flags shared by every backend's install command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOptions {
    /// Pin exact versions instead of caret ranges.
    pub exact: bool,
    pub offline: bool,
    pub pnp: bool,
    /// Save as development dependencies.
    pub dev: bool,
    pub verbose: bool,
    /// Project root the install is directed at.
    pub cwd: PathBuf,
}

impl InstallOptions {
    pub fn runtime(cwd: impl Into<PathBuf>) -> Self {
        Self {
            exact: true,
            offline: false,
            pnp: false,
            dev: false,
            verbose: false,
            cwd: cwd.into(),
        }
    }
}

/// How a finished install command went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub succeeded: bool,
    /// The full command line, e.g. `npm install --save-exact ...`.
    pub command_line: String,
}

/// A package-manager backend. Implementations differ only in the command line
/// they construct; success is decided by the exit status alone.
pub trait PackageManager {
    fn kind(&self) -> BackendKind;

    fn install(
        &self,
        packages: &[String],
        options: &InstallOptions,
    ) -> Result<InstallOutcome, PackageError>;

    /// Checks run once before the first install; the default has none.
    fn preflight(&self, _cwd: &std::path::Path) -> Result<(), PackageError> {
        Ok(())
    }
}
