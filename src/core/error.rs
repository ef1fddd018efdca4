use thiserror::Error;

#[derive(Error, Debug)]
pub enum TacticsError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Unknown policy: {0}")]
    UnknownPolicy(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TacticsError>;
