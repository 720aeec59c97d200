pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("error loading settings")]
    Config(#[from] config::ConfigError),
    #[error("deserialisation failed")]
    Deserialisation(#[from] serde_json::error::Error),
    #[error("error initializing monitoring: {0}")]
    Monitoring(String),
}
