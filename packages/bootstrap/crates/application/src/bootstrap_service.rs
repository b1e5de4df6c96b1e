use crate::context::RunContext;
use crate::install_orchestrator::{InstallOrchestrator, OrchestrationReport};
use domain::backend::{BackendChoice, BackendKind, BackendSelector};
use domain::entities::artifacts::GeneratedArtifactSet;
use domain::entities::catalog::DependencyCatalog;
use domain::entities::request::ProjectRequest;
use domain::errors::{BootstrapError, BootstrapWarning};
use domain::install::{InstallPhase, InstallPhaseResult, InstallState};
use domain::ports::package_manager::{InstallOptions, PackageManager};
use domain::ports::version_probe::VersionProbe;
use domain::safety::DirectorySafetyChecker;
use domain::system::version::parse_tool_version;
use domain::template::{TemplateIdentifier, TemplateResolver};
use domain::validation::name::NameValidator;
use infrastructure::{backend_for, CommandVersionProbe, ConnectivityProbe, EngineChecker};
use proem_manifest::ManifestWriter;
use std::path::PathBuf;

const NODE_BINARY: &str = "node";

type BackendFactory = Box<dyn Fn(BackendKind) -> Box<dyn PackageManager>>;
type Connectivity = Box<dyn Fn() -> bool>;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    pub final_state: InstallState,
    pub backend: BackendChoice,
    /// Computed for the run; the installer does not fetch it.
    pub template: TemplateIdentifier,
    pub phases: Vec<InstallPhaseResult>,
    pub warnings: Vec<BootstrapWarning>,
    pub working_dir: PathBuf,
}

/// Wires validation, safety, manifest, backend selection and install together.
pub struct BootstrapService {
    catalog: DependencyCatalog,
    artifacts: GeneratedArtifactSet,
    probe: Box<dyn VersionProbe>,
    backends: BackendFactory,
    connectivity: Connectivity,
    check_engines: bool,
}

impl BootstrapService {
    pub fn new(
        probe: Box<dyn VersionProbe>,
        backends: impl Fn(BackendKind) -> Box<dyn PackageManager> + 'static,
    ) -> Self {
        Self {
            catalog: DependencyCatalog::default(),
            artifacts: GeneratedArtifactSet::new(),
            probe,
            backends: Box::new(backends),
            connectivity: Box::new(|| true),
            check_engines: false,
        }
    }

    /// Real processes, real network.
    pub fn system() -> Self {
        Self::new(Box::new(CommandVersionProbe::new()), backend_for)
            .with_connectivity(|| ConnectivityProbe::new().is_online())
            .with_engine_check(true)
    }

    pub fn with_catalog(mut self, catalog: DependencyCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_connectivity(mut self, connectivity: impl Fn() -> bool + 'static) -> Self {
        self.connectivity = Box::new(connectivity);
        self
    }

    pub fn with_engine_check(mut self, enabled: bool) -> Self {
        self.check_engines = enabled;
        self
    }

    pub fn catalog(&self) -> &DependencyCatalog {
        &self.catalog
    }

    pub fn run(
        &self,
        request: &ProjectRequest,
        ctx: &mut RunContext,
    ) -> Result<BootstrapReport, BootstrapError> {
        let root = request.root_path();

        NameValidator::new(&self.catalog).validate(request.name())?;

        let verdict = DirectorySafetyChecker::check(root)?;
        if !verdict.safe {
            return Err(BootstrapError::UnsafeDirectory {
                root: root.to_path_buf(),
                conflicts: verdict.conflicting_entries,
            });
        }

        tracing::info!("Creating a new proem app in {}", root.display());
        ManifestWriter::write(root, request.name())?;

        let selection = BackendSelector::select(request.use_npm(), request.use_pnp(), self.probe.as_ref());
        ctx.extend_warnings(selection.warnings);
        let choice = selection.choice;

        let offline = match choice.backend() {
            BackendKind::Yarn if request.offline() => true,
            BackendKind::Yarn if !(self.connectivity)() => {
                ctx.warn(BootstrapWarning::Offline);
                true
            }
            BackendKind::Npm if request.offline() => {
                ctx.warn(BootstrapWarning::OfflineNotOnNpm);
                false
            }
            _ => false,
        };

        let template = TemplateResolver::resolve(request.template_ref(), ctx.original_cwd());
        tracing::debug!("Template resolved to {}", template);

        ctx.set_working_dir(root);

        let options = InstallOptions {
            exact: true,
            offline,
            pnp: choice.pnp_enabled(),
            dev: false,
            verbose: request.verbose(),
            cwd: root.to_path_buf(),
        };

        let backend = (self.backends)(choice.backend());
        let report = InstallOrchestrator::new(backend.as_ref(), &self.catalog)
            .with_artifacts(self.artifacts.clone())
            .run(request, &options, ctx)?;

        if !report.succeeded() {
            return Err(Self::failure_error(report));
        }

        if self.check_engines {
            self.check_node_engines(request, ctx);
        }

        Ok(BootstrapReport {
            final_state: report.final_state,
            backend: choice,
            template,
            phases: report.phases,
            warnings: ctx.warnings().to_vec(),
            working_dir: ctx.working_dir().to_path_buf(),
        })
    }

    fn check_node_engines(&self, request: &ProjectRequest, ctx: &mut RunContext) {
        let Some(node) = self.probe.probe(NODE_BINARY).as_deref().and_then(parse_tool_version)
        else {
            tracing::debug!("Skipping engine check, node version unknown");
            return;
        };

        for warning in EngineChecker::check(request.root_path(), self.catalog.runtime(), &node) {
            ctx.warn(warning);
        }
    }

    fn failure_error(report: OrchestrationReport) -> BootstrapError {
        let (phase, command_line, detail) = match report.failure {
            Some(f) => (f.phase, f.command_line, f.detail),
            None => (InstallPhase::Runtime, None, None),
        };

        match report.rollback {
            Some(rollback) if !rollback.is_complete() => BootstrapError::RollbackIncomplete {
                phase,
                command_line,
                remaining: rollback.remaining,
            },
            _ => BootstrapError::InstallPhaseFailure {
                phase,
                command_line,
                detail,
            },
        }
    }
}
