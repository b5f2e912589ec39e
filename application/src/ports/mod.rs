//! Ports (interfaces) consumed by the use cases

pub mod role_executor;
pub mod round_observer;
pub mod topic_source;
