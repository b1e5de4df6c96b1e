pub mod create;
pub mod info;
