//! Use cases orchestrating the domain through the ports

pub mod classify_topic;
pub mod run_round;
pub mod run_session;
