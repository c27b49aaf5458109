
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerbcladError {
    #[error("Malformed {kind}: {text:?}")]
    MalformedIdentifier { kind: &'static str, text: String },
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Load error: {0}")]
    Load(String),
    #[error("Capacity exceeded: {0}")]
    Capacity(String),
}

pub type Result<T> = std::result::Result<T, VerbcladError>;

// Helper conversions
impl From<config::ConfigError> for VerbcladError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
impl From<serde_json::Error> for VerbcladError {
    fn from(e: serde_json::Error) -> Self { Self::Load(e.to_string()) }
}
impl From<std::io::Error> for VerbcladError {
    fn from(e: std::io::Error) -> Self { Self::Load(e.to_string()) }
}
