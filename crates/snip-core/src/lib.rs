//! Core types for the snip URL registry.
//!
//! This crate provides the domain types shared by the code generators,
//! the registry and the console front end.

pub mod error;
pub mod record;
pub mod shortcode;
pub mod url;

pub use error::{CoreError, RegistryError};
pub use record::UrlRecord;
pub use shortcode::{ShortCode, ALPHABET, DEFAULT_CODE_LENGTH};
pub use url::{trailing_segment, validate_long_url, BaseUrl, DEFAULT_BASE_URL};
