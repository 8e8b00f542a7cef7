use super::config::{AppConfigCache, Settings};
use super::errors::ConfigErr;
use log::info;

#[derive(Debug, Clone)]
pub struct State {
    pub cfg_cache: AppConfigCache,
}

impl State {
    pub fn config(&self) -> Result<Settings, ConfigErr> {
        self.cfg_cache.get_config::<Settings>()?.ensure_complete()
    }

    pub fn new() -> Result<Self, ConfigErr> {
        let config_cache = AppConfigCache::new()?;
        let cfg = config_cache.get_config::<Settings>()?.ensure_complete()?;

        info!(
            "Classification service: {}, timeout {}s",
            cfg.classifier_url(),
            cfg.classifier_timeout_secs
        );

        Ok(Self {
            cfg_cache: config_cache,
        })
    }
}
