//! Configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, FileExecutorConfig, FileReplConfig, FileSessionConfig};
pub use loader::ConfigLoader;
