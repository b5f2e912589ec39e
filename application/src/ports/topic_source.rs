//! Topic source port
//!
//! Supplies the next topic between rounds. How input is collected
//! (multi-line editing, termination markers, history) is entirely the
//! adapter's concern; the engine only sees the outcome.

use async_trait::async_trait;
use thiserror::Error;

/// Outcome of asking the operator for the next topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicRequest {
    /// Fresh topic text for the next round
    New(String),
    /// No input given; rerun with the previous topic
    Continue,
    /// Operator ended the session
    Cancelled,
}

/// Errors that can occur while collecting a topic
#[derive(Error, Debug)]
pub enum TopicSourceError {
    #[error("I/O error: {0}")]
    Io(String),
}

/// Source of operator-supplied topics
#[async_trait]
pub trait TopicSource: Send + Sync {
    async fn next_topic(&self) -> Result<TopicRequest, TopicSourceError>;
}
