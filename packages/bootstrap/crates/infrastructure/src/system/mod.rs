pub mod engines;
pub mod network;
pub mod probe;
