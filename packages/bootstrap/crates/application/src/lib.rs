pub mod bootstrap_service;
pub mod context;
pub mod install_orchestrator;
pub mod rollback;

pub use bootstrap_service::{BootstrapReport, BootstrapService};
pub use context::RunContext;
pub use install_orchestrator::{InstallOrchestrator, OrchestrationReport, PhaseFailure};
pub use rollback::{Rollback, RollbackReport};
