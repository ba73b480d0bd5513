use thiserror::Error;

/// Errors raised while constructing core values.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
}

/// Errors reported by the registry operations.
///
/// None of these are fatal: callers present the message and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("the URL must start with http:// or https://: {0}")]
    InvalidUrl(String),
    #[error("invalid short URL format: {0:?}")]
    InvalidShortUrl(String),
    #[error("short URL does not exist: {0}")]
    UnknownCode(String),
}
