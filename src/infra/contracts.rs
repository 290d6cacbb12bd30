use anyhow::Result;

use crate::infra::config::Settings;

pub trait ConfigAdapter {
    fn load(&self) -> Result<Settings>;
}
