use crate::core::error::CliError;
use crate::ui;
use proem_bootstrap::application::{BootstrapService, RunContext};
use proem_bootstrap::domain::system::workspace::normalize;
use proem_bootstrap::domain::ProjectRequest;
use std::path::PathBuf;
use std::process::ExitCode;

/// Bootstraps a project into `project_directory`.
#[derive(Debug, Clone, Default)]
pub struct CreateCommand {
    pub project_directory: PathBuf,
    pub verbose: bool,
    pub dev: bool,
    pub use_npm: bool,
    pub use_pnp: bool,
    pub offline: bool,
    pub template: Option<String>,
}

impl CreateCommand {
    pub fn request(&self, original_cwd: &std::path::Path) -> ProjectRequest {
        let root = normalize(&original_cwd.join(&self.project_directory));

        ProjectRequest::new(root)
            .with_verbose(self.verbose)
            .with_dev_mode(self.dev)
            .with_template(self.template.clone())
            .with_npm(self.use_npm)
            .with_pnp(self.use_pnp)
            .with_offline(self.offline)
    }

    pub async fn execute(self) -> Result<ExitCode, CliError> {
        let ctx = RunContext::from_process()?;
        let request = self.request(ctx.original_cwd());

        ui::intro()?;
        ui::creating(request.root_path())?;

        // Package managers inherit the terminal and block until they exit
        let (result, ctx, request) = tokio::task::spawn_blocking(move || {
            let mut ctx = ctx;
            let result = BootstrapService::system().run(&request, &mut ctx);
            (result, ctx, request)
        })
        .await
        .map_err(|e| CliError::Runtime(e.to_string()))?;

        ui::warnings(ctx.warnings())?;

        match result {
            Ok(report) => {
                ui::success(&report, request.name(), request.root_path())?;
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                tracing::debug!("Run ended in {}", ctx.working_dir().display());
                ui::aborted()?;
                Err(e.into())
            }
        }
    }
}
