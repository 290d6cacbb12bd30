use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Explicit configuration values for a resolution run. Injected into the
/// resolver instead of being read from process-global state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Settings {
    pub logging: LogConfig,
    pub project: ProjectConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Active deployment environment name, e.g. "dev".
    pub env: String,
    /// Project root; seed overrides live under `<root>/seed/tfvars`.
    pub root: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            env: "dev".to_owned(),
            root: PathBuf::from("."),
        }
    }
}
