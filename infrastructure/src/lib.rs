//! Infrastructure layer for roundtable
//!
//! Adapters for the application-layer ports: an OpenAI-compatible HTTP
//! role executor and the TOML configuration loader.

pub mod config;
pub mod openai;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig};
pub use openai::{ExecutorConfig, OpenAiExecutor, OpenAiSetupError};
