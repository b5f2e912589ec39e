//! OpenAI-compatible executor adapter

pub mod executor;
pub mod protocol;

pub use executor::{ExecutorConfig, OpenAiExecutor, OpenAiSetupError};
