//! Application layer for roundtable
//!
//! This crate contains use cases and port definitions. It depends only
//! on the domain layer; adapters for the ports live in infrastructure
//! and presentation.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    role_executor::{ExecutorError, RoleExecutor},
    round_observer::{NoObserver, RoundObserver},
    topic_source::{TopicRequest, TopicSource, TopicSourceError},
};
pub use use_cases::classify_topic::{ClassificationError, ClassifyTopic};
pub use use_cases::run_round::{RoundOutcome, RunRoundError, RunRoundUseCase};
pub use use_cases::run_session::{RunSessionError, RunSessionUseCase};
