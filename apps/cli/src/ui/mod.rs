use proem_bootstrap::application::BootstrapReport;
use proem_bootstrap::domain::errors::BootstrapWarning;
use proem_bootstrap::domain::install::InstallPhase;
use proem_bootstrap::domain::BackendKind;
use std::io;
use std::path::Path;

pub mod theme;

pub use theme::Theme;

pub fn intro() -> io::Result<()> {
    cliclack::intro(console::style(" create-proem-app ").on_cyan().black())
}

pub fn creating(root: &Path) -> io::Result<()> {
    cliclack::log::step(format!(
        "Creating a new proem app in {}",
        Theme::primary(root.display())
    ))
}

pub fn warnings(warnings: &[BootstrapWarning]) -> io::Result<()> {
    for warning in warnings {
        cliclack::log::warning(warning.to_string())?;
    }
    Ok(())
}

pub fn success(report: &BootstrapReport, name: &str, root: &Path) -> io::Result<()> {
    let backend = report.backend.backend();
    let mode = if report.backend.pnp_enabled() {
        " (Plug'n'Play)"
    } else {
        ""
    };

    for phase in &report.phases {
        let label = match phase.phase {
            InstallPhase::Runtime => "production",
            InstallPhase::Development => "development",
        };
        cliclack::log::success(format!("Installed {} packages with {}{}", label, backend, mode))?;
    }
    cliclack::log::info(format!("Template: {}", Theme::muted(&report.template)))?;

    let run = match backend {
        BackendKind::Yarn => "yarn",
        BackendKind::Npm => "npm run",
    };
    cliclack::outro(format!(
        "Success! Created {} at {}\n\n  {} {}\n  {} start",
        Theme::bold(name),
        Theme::primary(root.display()),
        Theme::command("cd"),
        root.display(),
        Theme::command(run),
    ))
}

pub fn aborted() -> io::Result<()> {
    cliclack::outro_cancel("Aborting installation.")
}
