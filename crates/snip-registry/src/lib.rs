//! The snip URL registry.
//!
//! [`Registry`] keeps long URLs and their short codes in two coupled maps
//! and issues unique codes by rejection sampling. [`SharedRegistry`] wraps it
//! behind a lock for callers that need concurrent access.

pub mod policy;
pub mod registry;
pub mod shared;

pub use policy::{CodePolicy, RegistryConfig, DEFAULT_MAX_ATTEMPTS};
pub use registry::{Expanded, Registry, ShortenStatus, Shortened};
pub use shared::SharedRegistry;
pub use snip_core::RegistryError;

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
