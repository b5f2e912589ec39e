//! Prompt construction for classifier and role occurrences

pub mod template;
pub mod variant;

pub use template::PromptTemplate;
pub use variant::PromptVariant;
