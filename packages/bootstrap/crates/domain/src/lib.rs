pub mod backend;
pub mod entities;
pub mod errors;
pub mod install;
pub mod ports;
pub mod safety;
pub mod system;
pub mod template;
pub mod validation;

pub use backend::{BackendChoice, BackendKind, BackendSelector, Selection};
pub use entities::artifacts::GeneratedArtifactSet;
pub use entities::catalog::DependencyCatalog;
pub use entities::request::ProjectRequest;
pub use errors::{BootstrapError, BootstrapWarning};
pub use install::{InstallEvent, InstallPhase, InstallPhaseResult, InstallState};
pub use ports::package_manager::{InstallOptions, InstallOutcome, PackageError, PackageManager};
pub use ports::version_probe::VersionProbe;
pub use safety::{ConflictingEntry, DirectorySafetyChecker, SafetyVerdict};
pub use template::{TemplateIdentifier, TemplateResolver, TemplateSpec};
pub use validation::name::{InvalidName, NameValidator};
