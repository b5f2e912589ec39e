//! Domain layer for roundtable
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Panel
//!
//! A panel is a fixed set of **roles** (personas with immutable
//! instructions) governed by a **taxonomy**: every category label maps to
//! an ordered sequence of role occurrences, and exactly one role is
//! designated the **closer**, whose final-position occurrence produces
//! the user-facing synthesis.
//!
//! ## Round
//!
//! One round classifies a topic, resolves the category's sequence, and
//! runs each occurrence in order against the growing [`Transcript`].

pub mod core;
pub mod panel;
pub mod prompt;
pub mod transcript;
pub mod util;

// Re-export commonly used types
pub use crate::core::{error::DomainError, topic::Topic};
pub use panel::{
    role::Role,
    taxonomy::{ResolvedSequence, Taxonomy, TaxonomyBuilder},
};
pub use prompt::{template::PromptTemplate, variant::PromptVariant};
pub use transcript::{Transcript, TranscriptEntry};
pub use util::log_preview;
