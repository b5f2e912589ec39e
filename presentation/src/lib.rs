//! Presentation layer for roundtable
//!
//! CLI definition, console progress reporting, transcript formatting,
//! and the interactive topic source.

pub mod cli;
pub mod input;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat, TaxonomyChoice};
pub use input::console::ConsoleTopicSource;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ConsoleReporter;
