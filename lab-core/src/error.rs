//! Error types for `lab-core`.
//!
//! Only configuration loading can fail. The simulator and the classifier
//! accept every input and never return an error.

/// Result type alias for `lab-core`.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
