use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::infra::{
    config::{file_config::FileSettings, Settings},
    error::ResolveError,
};

const DEFAULT_SETTINGS_PATH: &str = "layervars.toml";

pub fn load(path: Option<&Path>) -> Result<Settings, ResolveError> {
    let settings_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH));

    let mut settings = Settings::default();

    if !settings_path.exists() {
        return Ok(settings);
    }

    let raw = fs::read_to_string(&settings_path).map_err(|source| ResolveError::SettingsRead {
        path: settings_path.clone(),
        source,
    })?;

    let file_settings: FileSettings =
        toml::from_str(&raw).map_err(|source| ResolveError::SettingsParse {
            path: settings_path,
            source,
        })?;

    file_settings.merge_into(&mut settings);
    Ok(settings)
}
