use domain::backend::BackendKind;
use domain::ports::package_manager::{InstallOutcome, PackageError, PackageManager};
use std::path::Path;
use std::process::Command;

pub mod npm;
pub mod yarn;

pub use npm::NpmAdapter;
pub use yarn::YarnAdapter;

/// The adapter for a selected backend.
pub fn backend_for(kind: BackendKind) -> Box<dyn PackageManager> {
    match kind {
        BackendKind::Npm => Box::new(NpmAdapter::new()),
        BackendKind::Yarn => Box::new(YarnAdapter::new()),
    }
}

/// Runs `binary args...` in `cwd` with inherited stdio and waits for it.
///
/// A missing binary or a spawn failure is an error; a non-zero exit status is
/// an unsuccessful outcome.
pub(crate) fn run_command(
    binary: &str,
    args: &[String],
    cwd: &Path,
) -> Result<InstallOutcome, PackageError> {
    let command_line = format!("{} {}", binary, args.join(" "));

    let program = which::which(binary).map_err(|e| PackageError::Spawn {
        command: command_line.clone(),
        reason: e.to_string(),
    })?;

    tracing::debug!("Running `{}` in {}", command_line, cwd.display());

    let status = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .status()
        .map_err(|e| PackageError::Spawn {
            command: command_line.clone(),
            reason: e.to_string(),
        })?;

    Ok(InstallOutcome {
        succeeded: status.success(),
        command_line,
    })
}
