pub mod metadata;
pub mod scripts;

pub use metadata::*;
pub use scripts::default_scripts;
