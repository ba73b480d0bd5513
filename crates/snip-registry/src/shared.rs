use crate::registry::{Expanded, Registry, Shortened};
use crate::Result;
use parking_lot::RwLock;
use snip_core::UrlRecord;
use snip_generator::{Generator, RandomGenerator};
use std::sync::Arc;

/// A cloneable, thread-safe handle to a [`Registry`].
///
/// `shorten` holds the write lock for the whole call, so the check for an
/// existing code, the draw and both inserts happen under one exclusion
/// scope. `expand` only takes the read lock and runs alongside other
/// readers, never alongside a `shorten`.
#[derive(Debug)]
pub struct SharedRegistry<G = RandomGenerator> {
    inner: Arc<RwLock<Registry<G>>>,
}

impl<G> Clone for SharedRegistry<G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<G: Generator> SharedRegistry<G> {
    pub fn new(registry: Registry<G>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// See [`Registry::shorten`].
    pub fn shorten(&self, long_url: &str) -> Result<Shortened> {
        self.inner.write().shorten(long_url)
    }

    /// See [`Registry::expand`].
    pub fn expand(&self, short_url: &str) -> Result<Expanded> {
        self.inner.read().expand(short_url)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Returns a copy of the record for a code.
    pub fn get(&self, code: &str) -> Option<UrlRecord> {
        self.inner.read().get(code).cloned()
    }
}

impl<G: Generator> From<Registry<G>> for SharedRegistry<G> {
    fn from(registry: Registry<G>) -> Self {
        Self::new(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ShortenStatus;
    use snip_generator::SeqGenerator;
    use std::collections::HashSet;

    #[test]
    fn clones_share_state() {
        let registry = SharedRegistry::new(Registry::with_generator(SeqGenerator::new()));
        let other = registry.clone();

        let shortened = registry.shorten("https://example.com").unwrap();
        let expanded = other.expand(&shortened.short_url).unwrap();

        assert_eq!(expanded.long_url, "https://example.com");
        assert_eq!(other.len(), 1);
        assert!(!other.is_empty());
        assert_eq!(
            other.get(shortened.code.as_str()).unwrap().original_url,
            "https://example.com"
        );
    }

    #[test]
    fn handle_is_send_and_sync_for_every_generator() {
        fn assert_send_sync<T: Send + Sync>() {}
        fn assert_for<G: Generator>() {
            assert_send_sync::<SharedRegistry<G>>();
        }
        assert_for::<SeqGenerator>();
        assert_for::<RandomGenerator>();
    }

    #[test]
    fn seq_backed_handle_crosses_threads() {
        let registry = SharedRegistry::new(Registry::with_generator(SeqGenerator::new()));

        let handle = {
            let registry = registry.clone();
            std::thread::spawn(move || registry.shorten("https://example.com").unwrap())
        };
        let shortened = handle.join().unwrap();

        assert_eq!(shortened.code.as_str(), "AAAAAA");
        assert_eq!(
            registry.expand(&shortened.short_url).unwrap().long_url,
            "https://example.com"
        );
    }

    #[test]
    fn concurrent_shorten_of_same_url_issues_one_code() {
        let registry = SharedRegistry::from(Registry::new());

        let results: Vec<Shortened> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let registry = registry.clone();
                    s.spawn(move || registry.shorten("https://example.com/same").unwrap())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let codes: HashSet<_> = results.iter().map(|r| r.code.clone()).collect();
        assert_eq!(codes.len(), 1);
        assert_eq!(
            results
                .iter()
                .filter(|r| r.status == ShortenStatus::Created)
                .count(),
            1
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn concurrent_writers_and_readers() {
        let registry = SharedRegistry::from(Registry::new());

        std::thread::scope(|s| {
            for t in 0..4 {
                let registry = registry.clone();
                s.spawn(move || {
                    for i in 0..50 {
                        let url = format!("https://example.com/{}/{}", t, i);
                        let shortened = registry.shorten(&url).unwrap();
                        assert_eq!(registry.expand(&shortened.short_url).unwrap().long_url, url);
                    }
                });
            }
        });

        assert_eq!(registry.len(), 200);
    }
}
