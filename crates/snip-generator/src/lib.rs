//! Short code generators.
//!
//! A generator only draws candidates; checking them for uniqueness is the
//! registry's job.

pub mod random;
pub mod seq;

pub use random::RandomGenerator;
pub use seq::SeqGenerator;

use snip_core::ShortCode;

/// Trait for drawing candidate short codes.
///
/// Implementations are pure generators that don't interact with storage.
/// Every character of a generated code must come from [`snip_core::ALPHABET`].
pub trait Generator: Send + Sync + 'static {
    /// Draws a candidate code of `length` characters.
    ///
    /// The result may collide with codes already issued.
    fn generate(&mut self, length: usize) -> ShortCode;
}
