//! Role executor port
//!
//! Defines the single-shot completion interface the engine runs personas
//! against. Transport, retries, rate limiting, and timeouts are all the
//! adapter's concern; the engine treats any failure as round-aborting.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during an executor invocation
#[derive(Error, Debug)]
pub enum ExecutorError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Empty response body")]
    EmptyResponse,
}

/// Single-shot text completion against a persona
///
/// One invocation, one response: `instructions` carries the persona's
/// fixed directive, `prompt` the constructed request for this occurrence.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait RoleExecutor: Send + Sync {
    async fn execute(&self, instructions: &str, prompt: &str) -> Result<String, ExecutorError>;
}
