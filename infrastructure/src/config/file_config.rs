//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

use crate::openai::ExecutorConfig;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Executor endpoint and model
    pub executor: FileExecutorConfig,
    /// Session settings
    pub session: FileSessionConfig,
    /// Interactive input settings
    pub repl: FileReplConfig,
}

/// `[executor]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExecutorConfig {
    pub model: String,
    pub base_url: String,
    pub api_key_env: String,
    pub temperature: Option<f32>,
}

impl Default for FileExecutorConfig {
    fn default() -> Self {
        let defaults = ExecutorConfig::default();
        Self {
            model: defaults.model,
            base_url: defaults.base_url,
            api_key_env: defaults.api_key_env,
            temperature: defaults.temperature,
        }
    }
}

impl From<FileExecutorConfig> for ExecutorConfig {
    fn from(file: FileExecutorConfig) -> Self {
        Self {
            base_url: file.base_url,
            model: file.model,
            api_key_env: file.api_key_env,
            temperature: file.temperature,
        }
    }
}

/// `[session]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Built-in taxonomy to run (`"hats"` or `"lenses"`)
    pub taxonomy: String,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            taxonomy: "hats".to_string(),
        }
    }
}

/// `[repl]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    pub show_progress: bool,
    /// Overrides the default history location under the data directory
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}
