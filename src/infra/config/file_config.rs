use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{LogConfig, ProjectConfig, Settings};

#[derive(Debug, Deserialize, Default)]
pub struct FileSettings {
    pub logging: Option<FileLogConfig>,
    pub project: Option<FileProjectConfig>,
}

impl FileSettings {
    pub fn merge_into(self, settings: &mut Settings) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut settings.logging);
        }

        if let Some(project) = self.project {
            project.merge_into(&mut settings.project);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileProjectConfig {
    pub env: Option<String>,
    pub root: Option<PathBuf>,
}

impl FileProjectConfig {
    fn merge_into(self, config: &mut ProjectConfig) {
        if let Some(env) = self.env {
            config.env = env;
        }

        if let Some(root) = self.root {
            config.root = root;
        }
    }
}
