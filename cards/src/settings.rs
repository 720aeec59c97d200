use config::{Config, Environment, File, FileFormat};
use monitoring::MonitoringConfig;
use serde::Deserialize;

use crate::card::CardConfig;

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub monitoring: MonitoringConfig,
    #[serde(default)]
    pub cards: Vec<CardConfig>,
}

impl Settings {
    /// Reads the given TOML file, overridable with `CARDS__`-prefixed variables,
    /// e.g. `CARDS__MONITORING__LOGS__DEFAULT_LEVEL=debug`.
    pub fn load(path: &str) -> crate::Result<Self> {
        let builder = Config::builder()
            .add_source(File::with_name(path))
            .add_source(Environment::with_prefix("CARDS").separator("__"));

        let settings: Settings = builder.build()?.try_deserialize()?;
        tracing::info!(path, cards = settings.cards.len(), "Settings loaded");

        Ok(settings)
    }

    pub fn from_toml(toml: &str) -> crate::Result<Self> {
        Ok(Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()?)
    }

    pub fn init_monitoring(&self) -> crate::Result<()> {
        self.monitoring
            .init()
            .map_err(|e| crate::Error::Monitoring(e.to_string()))
    }
}
