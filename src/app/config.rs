use super::errors::ConfigErr;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment};
use serde::Deserialize;

const DEFAULT_ENV_VAR_PREFIX: &str = "PREDICTOR";

#[derive(Debug, Clone)]
pub struct AppConfigCache {
    config: Config,
}

impl AppConfigCache {
    pub fn new() -> Result<Self, ConfigErr> {
        let builder = Self::with_defaults(ConfigBuilder::<DefaultState>::default())?
            .add_source(Environment::with_prefix(DEFAULT_ENV_VAR_PREFIX).separator("__"));

        Self::from_builder(builder)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigErr> {
        let config_cache = Self {
            config: builder.build().map_err(ConfigErr::Read)?,
        };

        Ok(config_cache)
    }

    pub fn get_config<'d, T: Deserialize<'d>>(&self) -> Result<T, ConfigErr> {
        self.config
            .clone()
            .try_deserialize()
            .map_err(ConfigErr::Read)
    }

    fn with_defaults(
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigErr> {
        builder
            .set_default("classifier_host", "localhost")
            .and_then(|b| b.set_default("classifier_port", 8000_i64))
            .and_then(|b| b.set_default("classifier_timeout_secs", 10_i64))
            .and_then(|b| b.set_default("http_port", 8080_i64))
            .map_err(ConfigErr::Read)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub classifier_host: String,
    pub classifier_port: u16,
    pub classifier_timeout_secs: u64,
    pub http_port: u16,
}

impl Settings {
    pub fn classifier_url(&self) -> String {
        format!("http://{}:{}", self.classifier_host, self.classifier_port)
    }

    pub fn ensure_complete(self) -> Result<Self, ConfigErr> {
        if self.classifier_host.trim().is_empty() {
            return Err(ConfigErr::MissingSetting("classifier_host".to_owned()));
        }
        if self.classifier_timeout_secs == 0 {
            return Err(ConfigErr::MissingSetting(
                "classifier_timeout_secs".to_owned(),
            ));
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn defaults() -> ConfigBuilder<DefaultState> {
        AppConfigCache::with_defaults(ConfigBuilder::<DefaultState>::default()).unwrap()
    }

    #[test]
    fn test_default_settings() {
        let cache = AppConfigCache::from_builder(defaults()).unwrap();

        let settings = cache.get_config::<Settings>().unwrap();

        assert_eq!(
            Settings {
                classifier_host: "localhost".to_owned(),
                classifier_port: 8000,
                classifier_timeout_secs: 10,
                http_port: 8080,
            },
            settings
        );
        assert_eq!("http://localhost:8000", settings.classifier_url());
    }

    #[test]
    fn test_overridden_settings() {
        let builder = defaults()
            .set_override("classifier_host", "ids-backend")
            .unwrap()
            .set_override("classifier_port", "9000")
            .unwrap();
        let cache = AppConfigCache::from_builder(builder).unwrap();

        let settings = cache.get_config::<Settings>().unwrap();

        assert_eq!("http://ids-backend:9000", settings.classifier_url());
    }

    #[test]
    fn test_blank_host_is_rejected() {
        let builder = defaults().set_override("classifier_host", " ").unwrap();
        let settings = AppConfigCache::from_builder(builder)
            .unwrap()
            .get_config::<Settings>()
            .unwrap();

        assert!(matches!(
            settings.ensure_complete(),
            Err(ConfigErr::MissingSetting(field)) if field == "classifier_host"
        ));
    }
}
