pub mod adapters;
pub mod system;

pub use adapters::{backend_for, NpmAdapter, YarnAdapter};
pub use system::engines::EngineChecker;
pub use system::network::ConnectivityProbe;
pub use system::probe::CommandVersionProbe;
