//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Which built-in taxonomy governs the session
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TaxonomyChoice {
    /// General problem-solving panel (thinking hats)
    Hats,
    /// Software-development panel (developer lenses)
    Lenses,
}

impl TaxonomyChoice {
    /// Catalog identifier of the chosen taxonomy
    pub fn id(self) -> &'static str {
        match self {
            TaxonomyChoice::Hats => "hats",
            TaxonomyChoice::Lenses => "lenses",
        }
    }
}

/// Output format for the final transcript
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// The whole transcript, entry by entry
    Full,
    /// Only the last synthesis
    Final,
    /// JSON output
    Json,
}

/// CLI arguments for roundtable
#[derive(Parser, Debug)]
#[command(name = "roundtable")]
#[command(version, about = "A fixed panel of personas analyzes your topic in rounds")]
#[command(long_about = r#"
Roundtable classifies your topic into a category, looks up that
category's ordered sequence of panel roles, and runs the roles one after
another, each reading the discussion so far and adding its own take.
Rounds repeat with fresh topics until you cancel (Ctrl-C at the prompt).

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./roundtable.toml     Project-level config
3. ~/.config/roundtable/config.toml   Global config

Example:
  roundtable "fix the null pointer crash in the login flow"
  roundtable --taxonomy lenses "should we split the billing service?"
  roundtable --model gpt-4o --output json "name the new product"
"#)]
pub struct Cli {
    /// The topic to analyze (prompted for interactively when omitted)
    pub topic: Option<String>,

    /// Taxonomy to run (overrides the config file)
    #[arg(short, long, value_enum)]
    pub taxonomy: Option<TaxonomyChoice>,

    /// Model for all executor calls (overrides the config file)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format for the final transcript
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress per-occurrence progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
