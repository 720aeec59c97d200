use std::error::Error;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    pub app_name: String,
    pub logs: EnvFilterConfig,
    pub format: LogFormat,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct EnvFilterConfig {
    pub default_level: String,
    pub filters: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl TryInto<EnvFilter> for EnvFilterConfig {
    type Error = tracing_subscriber::filter::ParseError;

    fn try_into(self) -> Result<EnvFilter, Self::Error> {
        EnvFilter::builder()
            .with_default_directive(self.default_level.parse()?)
            .parse(self.filters.join(","))
    }
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            app_name: "dashboard-cards".to_owned(),
            logs: EnvFilterConfig::default(),
            format: LogFormat::Text,
        }
    }
}

impl Default for EnvFilterConfig {
    fn default() -> Self {
        Self {
            default_level: "info".to_owned(),
            filters: vec![],
        }
    }
}

impl MonitoringConfig {
    //Installs the global subscriber. Fails if one is already set.
    pub fn init(&self) -> Result<(), Box<dyn Error>> {
        let logging_filter: EnvFilter = self.logs.clone().try_into()?;

        match self.format {
            LogFormat::Text => tracing_subscriber::registry()
                .with(tracing_subscriber::fmt::layer())
                .with(logging_filter)
                .try_init()?,
            LogFormat::Json => tracing_subscriber::registry()
                .with(tracing_subscriber::fmt::layer().json())
                .with(logging_filter)
                .try_init()?,
        }

        tracing::info!(app = %self.app_name, "Monitoring initialized");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_filter_from_config() {
        let config = EnvFilterConfig {
            default_level: "warn".to_owned(),
            filters: vec!["cards=debug".to_owned()],
        };

        let filter: Result<EnvFilter, _> = config.try_into();
        assert!(filter.is_ok());
    }

    #[test]
    fn rejects_unknown_level() {
        let config = EnvFilterConfig {
            default_level: "cards=loud".to_owned(),
            filters: vec![],
        };

        let filter: Result<EnvFilter, _> = config.try_into();
        assert!(filter.is_err());
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: MonitoringConfig = serde_json::from_value(serde_json::json!({
            "app_name": "cards",
            "logs": { "default_level": "info" }
        }))
        .unwrap();

        assert_eq!(config.format, LogFormat::Text);
        assert!(config.logs.filters.is_empty());
    }

    #[test]
    fn fills_missing_sections_from_defaults() {
        let config: MonitoringConfig = serde_json::from_value(serde_json::json!({
            "logs": { "filters": ["cards=trace"] }
        }))
        .unwrap();

        assert_eq!(config.app_name, "dashboard-cards");
        assert_eq!(config.logs.default_level, "info");
        assert_eq!(config.logs.filters, vec!["cards=trace"]);
    }
}
