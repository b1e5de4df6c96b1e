pub mod package_manager;
pub mod version_probe;
