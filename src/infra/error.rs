use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("failed to probe tfvars candidate at {path}: {source}")]
    PathProbe {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to list seed directory at {path}: {source}")]
    SeedDirList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read settings file at {path}: {source}")]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file at {path}: {source}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to initialize logging: {0}")]
    LoggingInit(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}
