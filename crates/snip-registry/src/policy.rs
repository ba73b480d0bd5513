use snip_core::{BaseUrl, DEFAULT_CODE_LENGTH};
use typed_builder::TypedBuilder;

/// Collisions tolerated at one length before codes grow by a character.
pub const DEFAULT_MAX_ATTEMPTS: usize = 16;

/// Governs the rejection-sampling loop that issues new codes.
///
/// Codes start at `length` characters. After `max_attempts` consecutive
/// draws collide with issued codes, the length grows by one and the count
/// starts over. Zero in either field is treated as one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TypedBuilder)]
pub struct CodePolicy {
    #[builder(default = DEFAULT_CODE_LENGTH)]
    length: usize,
    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,
}

impl CodePolicy {
    pub fn length(&self) -> usize {
        self.length.max(1)
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts.max(1)
    }
}

impl Default for CodePolicy {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Settings a [`crate::Registry`] is constructed with.
#[derive(Debug, Clone, Default, TypedBuilder)]
pub struct RegistryConfig {
    /// Prefix of every issued short URL.
    #[builder(default, setter(into))]
    pub base_url: BaseUrl,
    #[builder(default)]
    pub policy: CodePolicy,
}
