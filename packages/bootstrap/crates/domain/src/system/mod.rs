pub mod platform;
pub mod version;
pub mod workspace;

pub use platform::{PlatformDetector, PlatformInfo};
pub use version::parse_tool_version;
