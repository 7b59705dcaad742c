use thiserror::Error;

/// Failures while loading a slider showcase description.
///
/// The controller itself never fails; these only cover reading and parsing
/// configuration from disk.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The showcase file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The showcase file is not valid TOML or has mistyped values.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result alias for showcase loading.
pub type Result<T> = std::result::Result<T, ConfigError>;
