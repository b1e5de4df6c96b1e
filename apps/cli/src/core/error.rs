use proem_bootstrap::domain::errors::BootstrapError;
use proem_bootstrap::domain::validation::name::InvalidName;
use std::process::ExitCode;
use thiserror::Error;

const BIN_NAME: &str = "create-proem-app";

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Please specify the project directory")]
    MissingProjectDirectory,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),

    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Returns a themed, actionable suggestion for the error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CliError::MissingProjectDirectory => Some(format!(
                "For example: {} {}. Run {} to see all options.",
                console::style(BIN_NAME).cyan(),
                console::style("my-proem-app").green(),
                console::style(format!("{} --help", BIN_NAME)).cyan()
            )),
            CliError::Config(_) => Some(
                "Check ~/.proem/config.toml (or $PROEM_CONFIG) for syntax errors.".to_string(),
            ),
            CliError::Bootstrap(BootstrapError::InvalidName(_)) => {
                Some("Please choose a different project name.".to_string())
            }
            CliError::Bootstrap(BootstrapError::UnsafeDirectory { .. }) => Some(
                "Either try using a new directory name, or remove the files listed above."
                    .to_string(),
            ),
            CliError::Bootstrap(BootstrapError::RollbackIncomplete { .. }) => {
                Some("The files listed above need to be deleted manually.".to_string())
            }
            CliError::Bootstrap(BootstrapError::InstallPhaseFailure { .. }) => {
                Some("Run again with --verbose for the package manager's full output.".to_string())
            }
            _ => None,
        }
    }

    /// Lines printed between the error and the suggestion.
    pub fn details(&self) -> Vec<String> {
        let CliError::Bootstrap(err) = self else {
            return Vec::new();
        };

        match err {
            BootstrapError::InvalidName(InvalidName::NamingRules { report, .. }) => report
                .violations
                .iter()
                .map(|v| format!("  {} {}", console::style("*").red(), v))
                .collect(),
            BootstrapError::InvalidName(InvalidName::DependencyCollision { reserved, .. }) => {
                let mut lines = vec!["  Due to the way npm works, these names are not allowed:".to_string()];
                lines.extend(
                    reserved
                        .iter()
                        .map(|name| format!("    {}", console::style(name).cyan())),
                );
                lines
            }
            BootstrapError::UnsafeDirectory { conflicts, .. } => conflicts
                .iter()
                .map(|entry| {
                    if entry.is_directory {
                        format!("  {}", console::style(format!("{}/", entry.name)).blue())
                    } else {
                        format!("  {}", entry.name)
                    }
                })
                .collect(),
            BootstrapError::InstallPhaseFailure {
                command_line, detail, ..
            } => command_line
                .iter()
                .map(|c| format!("  {} has failed.", console::style(c).cyan()))
                .chain(detail.iter().map(|d| format!("  {}", d)))
                .collect(),
            BootstrapError::RollbackIncomplete {
                command_line,
                remaining,
                ..
            } => command_line
                .iter()
                .map(|c| format!("  {} has failed.", console::style(c).cyan()))
                .chain(remaining.iter().map(|name| format!("  {}", name)))
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn render(&self) {
        eprintln!("\n{} {}", console::style("Error:").red().bold(), self);
        for line in self.details() {
            eprintln!("{}", line);
        }
        if let Some(s) = self.suggestion() {
            eprintln!("{} {}", console::style("  help:").dim(), s);
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proem_bootstrap::domain::install::InstallPhase;
    use proem_bootstrap::domain::safety::ConflictingEntry;
    use std::path::PathBuf;

    fn plain(lines: Vec<String>) -> Vec<String> {
        lines
            .into_iter()
            .map(|l| console::strip_ansi_codes(&l).into_owned())
            .collect()
    }

    #[test]
    fn test_conflicts_mark_directories() {
        let err = CliError::from(BootstrapError::UnsafeDirectory {
            root: PathBuf::from("/tmp/my-app"),
            conflicts: vec![
                ConflictingEntry {
                    name: "index.js".into(),
                    is_directory: false,
                },
                ConflictingEntry {
                    name: "src".into(),
                    is_directory: true,
                },
            ],
        });

        assert_eq!(plain(err.details()), vec!["  index.js", "  src/"]);
        assert!(err.suggestion().is_some());
    }

    #[test]
    fn test_failed_command_is_shown() {
        let err = CliError::from(BootstrapError::InstallPhaseFailure {
            phase: InstallPhase::Runtime,
            command_line: Some("npm install --save-exact react".into()),
            detail: None,
        });

        assert_eq!(
            plain(err.details()),
            vec!["  npm install --save-exact react has failed."]
        );
    }

    #[test]
    fn test_missing_directory_hint() {
        let hint = CliError::MissingProjectDirectory.suggestion().unwrap();
        assert!(console::strip_ansi_codes(&hint).contains("create-proem-app my-proem-app"));
    }
}
