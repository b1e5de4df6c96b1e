use crate::context::RunContext;
use crate::rollback::{Rollback, RollbackReport};
use domain::entities::artifacts::GeneratedArtifactSet;
use domain::entities::catalog::DependencyCatalog;
use domain::entities::request::ProjectRequest;
use domain::errors::BootstrapError;
use domain::install::{InstallEvent, InstallPhase, InstallPhaseResult, InstallState};
use domain::ports::package_manager::{InstallOptions, PackageError, PackageManager};

/// Why an install phase did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseFailure {
    pub phase: InstallPhase,
    pub command_line: Option<String>,
    /// Set when the command never ran to completion.
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrchestrationReport {
    /// Always `Done` or `Aborted`.
    pub final_state: InstallState,
    pub phases: Vec<InstallPhaseResult>,
    pub failure: Option<PhaseFailure>,
    pub rollback: Option<RollbackReport>,
}

impl OrchestrationReport {
    pub fn succeeded(&self) -> bool {
        self.final_state == InstallState::Done
    }
}

/// Drives the two-phase install and rolls back generated files on failure.
pub struct InstallOrchestrator<'a> {
    backend: &'a dyn PackageManager,
    catalog: &'a DependencyCatalog,
    artifacts: GeneratedArtifactSet,
}

impl<'a> InstallOrchestrator<'a> {
    pub fn new(backend: &'a dyn PackageManager, catalog: &'a DependencyCatalog) -> Self {
        Self {
            backend,
            catalog,
            artifacts: GeneratedArtifactSet::new(),
        }
    }

    pub fn with_artifacts(mut self, artifacts: GeneratedArtifactSet) -> Self {
        self.artifacts = artifacts;
        self
    }

    /// Runs the state machine from `Pending` to a terminal state.
    ///
    /// A failed phase is not an `Err`: it ends in `Aborted` with the failure
    /// and rollback recorded in the report. `Err` means the machine itself was
    /// driven incorrectly.
    pub fn run(
        &self,
        request: &ProjectRequest,
        base: &InstallOptions,
        ctx: &mut RunContext,
    ) -> Result<OrchestrationReport, BootstrapError> {
        let root = request.root_path();
        let mut phases = Vec::new();
        let mut failure = None;
        let mut rollback = None;
        let mut state = InstallState::Pending;

        while !state.is_terminal() {
            let event = match &state {
                InstallState::Pending => InstallEvent::Begin,

                InstallState::InstallingRuntime => {
                    let mut options = base.clone();
                    options.exact = true;
                    options.dev = false;
                    options.cwd = root.to_path_buf();

                    let (result, detail) =
                        self.run_phase(InstallPhase::Runtime, self.catalog.runtime(), &options, true);
                    let event = Self::phase_event(&result, InstallEvent::RuntimeInstalled {
                        dev_mode: request.dev_mode(),
                    });
                    if !result.succeeded {
                        failure = Some(PhaseFailure {
                            phase: InstallPhase::Runtime,
                            command_line: result.failing_command_line.clone(),
                            detail,
                        });
                    }
                    phases.push(result);
                    event
                }

                InstallState::InstallingDev => {
                    let mut options = base.clone();
                    options.exact = true;
                    options.dev = true;
                    options.cwd = root.to_path_buf();

                    let (result, detail) = self.run_phase(
                        InstallPhase::Development,
                        self.catalog.development(),
                        &options,
                        false,
                    );
                    let event = Self::phase_event(&result, InstallEvent::DevInstalled);
                    if !result.succeeded {
                        failure = Some(PhaseFailure {
                            phase: InstallPhase::Development,
                            command_line: result.failing_command_line.clone(),
                            detail,
                        });
                    }
                    phases.push(result);
                    event
                }

                InstallState::Failed { phase, command_line } => {
                    tracing::warn!(
                        "{} install failed{}",
                        phase,
                        command_line
                            .as_ref()
                            .map(|c| format!(" running: {}", c))
                            .unwrap_or_default()
                    );
                    InstallEvent::RollbackStarted
                }

                InstallState::RollingBack => {
                    rollback = Some(Rollback::run(root, &self.artifacts, ctx));
                    InstallEvent::RollbackFinished
                }

                InstallState::Done | InstallState::Aborted => break,
            };

            let next = state.clone().transition(event)?;
            tracing::info!("{} -> {}", state, next);
            state = next;
        }

        Ok(OrchestrationReport {
            final_state: state,
            phases,
            failure,
            rollback,
        })
    }

    fn phase_event(result: &InstallPhaseResult, on_success: InstallEvent) -> InstallEvent {
        if result.succeeded {
            on_success
        } else {
            InstallEvent::PhaseFailed {
                command_line: result.failing_command_line.clone(),
            }
        }
    }

    fn run_phase(
        &self,
        phase: InstallPhase,
        packages: &[String],
        options: &InstallOptions,
        preflight: bool,
    ) -> (InstallPhaseResult, Option<String>) {
        tracing::info!(
            "Installing {} {} packages with {}",
            packages.len(),
            phase,
            self.backend.kind()
        );

        let outcome = if preflight {
            self.backend
                .preflight(&options.cwd)
                .and_then(|_| self.backend.install(packages, options))
        } else {
            self.backend.install(packages, options)
        };

        match outcome {
            Ok(outcome) if outcome.succeeded => (
                InstallPhaseResult {
                    phase,
                    succeeded: true,
                    failing_command_line: None,
                },
                None,
            ),
            Ok(outcome) => (
                InstallPhaseResult {
                    phase,
                    succeeded: false,
                    failing_command_line: Some(outcome.command_line),
                },
                None,
            ),
            Err(e) => {
                let command_line = match &e {
                    PackageError::Spawn { command, .. } => Some(command.clone()),
                    PackageError::WrongDirectory { .. } => None,
                };
                (
                    InstallPhaseResult {
                        phase,
                        succeeded: false,
                        failing_command_line: command_line,
                    },
                    Some(e.to_string()),
                )
            }
        }
    }
}
