//! Facade over the bootstrap layers.

pub use application;
pub use domain;
pub use infrastructure;
