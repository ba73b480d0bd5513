use crate::error::RegistryError;
use crate::shortcode::ShortCode;
use std::fmt::Display;

/// Authority short URLs are issued under unless configured otherwise.
pub const DEFAULT_BASE_URL: &str = "http://miacortador.com";

const ACCEPTED_SCHEMES: [&str; 2] = ["http://", "https://"];

/// The prefix every issued short URL starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a base URL, dropping any trailing `/`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self(base_url.trim_end_matches('/').to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Generates the full short URL for `code`.
    pub fn join(&self, code: &ShortCode) -> String {
        format!("{}/{}", self.0, code)
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl From<&str> for BaseUrl {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for BaseUrl {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl Display for BaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Checks that `url` can be shortened: it must start with `http://` or `https://`.
pub fn validate_long_url(url: &str) -> Result<(), RegistryError> {
    if ACCEPTED_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
        Ok(())
    } else {
        Err(RegistryError::InvalidUrl(url.to_owned()))
    }
}

/// Returns the candidate code of a short URL: everything after the last `/`.
///
/// Input without a `/` is taken whole. An empty segment is an error.
pub fn trailing_segment(short_url: &str) -> Result<&str, RegistryError> {
    let segment = match short_url.rfind('/') {
        Some(idx) => &short_url[idx + 1..],
        None => short_url,
    };

    if segment.is_empty() {
        return Err(RegistryError::InvalidShortUrl(short_url.to_owned()));
    }

    Ok(segment)
}
