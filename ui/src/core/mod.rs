pub mod config;
pub mod file;
pub mod format;
pub mod platform;
