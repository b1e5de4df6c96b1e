mod state;

pub use state::{InstallEvent, InstallPhase, InstallPhaseResult, InstallState, InvalidTransition};
