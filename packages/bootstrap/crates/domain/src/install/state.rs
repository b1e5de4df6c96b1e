use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstallPhase {
    Runtime,
    Development,
}

impl fmt::Display for InstallPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallPhase::Runtime => write!(f, "Runtime"),
            InstallPhase::Development => write!(f, "Development"),
        }
    }
}

/// Result of one install phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallPhaseResult {
    pub phase: InstallPhase,
    pub succeeded: bool,
    pub failing_command_line: Option<String>,
}

/// States of the two-phase install.
///
/// ```text
/// Pending -> InstallingRuntime -> InstallingDev -> Done
///                    |                  |
///                    +---> Failed <-----+
///                            |
///                       RollingBack -> Aborted
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstallState {
    Pending,
    InstallingRuntime,
    InstallingDev,
    Done,
    Failed {
        phase: InstallPhase,
        command_line: Option<String>,
    },
    RollingBack,
    Aborted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstallEvent {
    Begin,
    /// The runtime phase finished; `dev_mode` decides whether a second phase runs.
    RuntimeInstalled { dev_mode: bool },
    DevInstalled,
    PhaseFailed { command_line: Option<String> },
    RollbackStarted,
    RollbackFinished,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid install transition from {from:?} on {event:?}")]
pub struct InvalidTransition {
    pub from: InstallState,
    pub event: InstallEvent,
}

impl InstallState {
    /// The full transition table. Anything not listed is rejected.
    pub fn transition(self, event: InstallEvent) -> Result<InstallState, InvalidTransition> {
        use InstallEvent as E;
        use InstallState as S;

        match (self, event) {
            (S::Pending, E::Begin) => Ok(S::InstallingRuntime),

            (S::InstallingRuntime, E::RuntimeInstalled { dev_mode: true }) => Ok(S::InstallingDev),
            (S::InstallingRuntime, E::RuntimeInstalled { dev_mode: false }) => Ok(S::Done),
            (S::InstallingRuntime, E::PhaseFailed { command_line }) => Ok(S::Failed {
                phase: InstallPhase::Runtime,
                command_line,
            }),

            (S::InstallingDev, E::DevInstalled) => Ok(S::Done),
            (S::InstallingDev, E::PhaseFailed { command_line }) => Ok(S::Failed {
                phase: InstallPhase::Development,
                command_line,
            }),

            (S::Failed { .. }, E::RollbackStarted) => Ok(S::RollingBack),
            (S::RollingBack, E::RollbackFinished) => Ok(S::Aborted),

            (from, event) => Err(InvalidTransition { from, event }),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, InstallState::Done | InstallState::Aborted)
    }

    /// The phase currently running, if any.
    pub fn phase(&self) -> Option<InstallPhase> {
        match self {
            InstallState::InstallingRuntime => Some(InstallPhase::Runtime),
            InstallState::InstallingDev => Some(InstallPhase::Development),
            _ => None,
        }
    }
}

impl fmt::Display for InstallState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallState::Pending => write!(f, "PENDING"),
            InstallState::InstallingRuntime => write!(f, "INSTALLING_RUNTIME"),
            InstallState::InstallingDev => write!(f, "INSTALLING_DEV"),
            InstallState::Done => write!(f, "DONE"),
            InstallState::Failed { .. } => write!(f, "FAILED"),
            InstallState::RollingBack => write!(f, "ROLLING_BACK"),
            InstallState::Aborted => write!(f, "ABORTED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(events: Vec<InstallEvent>) -> Result<InstallState, InvalidTransition> {
        events
            .into_iter()
            .try_fold(InstallState::Pending, |state, event| state.transition(event))
    }

    #[test]
    fn test_runtime_only_path() {
        let state = run(vec![
            InstallEvent::Begin,
            InstallEvent::RuntimeInstalled { dev_mode: false },
        ])
        .unwrap();
        assert_eq!(state, InstallState::Done);
        assert!(state.is_terminal());
    }

    #[test]
    fn test_dev_path() {
        let state = run(vec![
            InstallEvent::Begin,
            InstallEvent::RuntimeInstalled { dev_mode: true },
        ])
        .unwrap();
        assert_eq!(state, InstallState::InstallingDev);
        assert_eq!(state.phase(), Some(InstallPhase::Development));
        assert_eq!(state.transition(InstallEvent::DevInstalled).unwrap(), InstallState::Done);
    }

    #[test]
    fn test_failure_path_from_dev() {
        let state = run(vec![
            InstallEvent::Begin,
            InstallEvent::RuntimeInstalled { dev_mode: true },
            InstallEvent::PhaseFailed {
                command_line: Some("npm install --save-dev".into()),
            },
        ])
        .unwrap();
        assert_eq!(
            state,
            InstallState::Failed {
                phase: InstallPhase::Development,
                command_line: Some("npm install --save-dev".into()),
            }
        );

        let state = state
            .transition(InstallEvent::RollbackStarted)
            .and_then(|s| s.transition(InstallEvent::RollbackFinished))
            .unwrap();
        assert_eq!(state, InstallState::Aborted);
        assert!(state.is_terminal());
    }

    #[test]
    fn test_dev_cannot_follow_failure() {
        let failed = run(vec![
            InstallEvent::Begin,
            InstallEvent::PhaseFailed { command_line: None },
        ])
        .unwrap();
        assert!(failed.clone().transition(InstallEvent::DevInstalled).is_err());
        assert!(failed
            .transition(InstallEvent::RuntimeInstalled { dev_mode: true })
            .is_err());
    }

    #[test]
    fn test_terminal_states_reject_events() {
        assert!(InstallState::Done.transition(InstallEvent::Begin).is_err());
        assert!(InstallState::Aborted
            .transition(InstallEvent::RollbackStarted)
            .is_err());
        assert!(InstallState::Pending
            .transition(InstallEvent::RollbackStarted)
            .is_err());
    }
}
