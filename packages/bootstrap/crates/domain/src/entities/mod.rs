pub mod artifacts;
pub mod catalog;
pub mod request;
