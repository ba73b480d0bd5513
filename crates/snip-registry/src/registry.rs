use crate::policy::{CodePolicy, RegistryConfig};
use crate::Result;
use snip_core::{
    trailing_segment, validate_long_url, BaseUrl, RegistryError, ShortCode, UrlRecord,
};
use snip_generator::{Generator, RandomGenerator};
use std::collections::HashMap;
use std::fmt::Display;
use tracing::{debug, trace, warn};

/// How a successful [`Registry::shorten`] call was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortenStatus {
    /// A new code was issued for the URL.
    Created,
    /// The URL already had a code; nothing changed.
    AlreadyShortened,
}

impl ShortenStatus {
    /// A sentence suitable for showing to the user.
    pub fn message(&self) -> &'static str {
        match self {
            ShortenStatus::Created => "URL shortened successfully.",
            ShortenStatus::AlreadyShortened => "This URL had already been shortened.",
        }
    }
}

impl Display for ShortenStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShortenStatus::Created => f.write_str("created"),
            ShortenStatus::AlreadyShortened => f.write_str("already shortened"),
        }
    }
}

/// The outcome of [`Registry::shorten`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortened {
    pub short_url: String,
    pub code: ShortCode,
    pub status: ShortenStatus,
}

/// The outcome of [`Registry::expand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expanded {
    pub long_url: String,
    pub code: ShortCode,
}

impl Expanded {
    pub fn message(&self) -> &'static str {
        "URL expanded successfully."
    }
}

/// An in-memory, bidirectional map between long URLs and short codes.
///
/// Both maps are always inverse views of the same set of records: every
/// URL has at most one code, every code belongs to exactly one URL, and
/// records are never removed.
///
/// The registry is single-threaded; see [`crate::SharedRegistry`] for a
/// handle that can be used from several threads.
#[derive(Debug)]
pub struct Registry<G = RandomGenerator> {
    base_url: BaseUrl,
    policy: CodePolicy,
    generator: G,
    url_to_code: HashMap<String, ShortCode>,
    code_to_url: HashMap<ShortCode, UrlRecord>,
}

impl Registry<RandomGenerator> {
    /// Creates an empty registry with the default base URL and policy,
    /// drawing codes from an OS-seeded [`RandomGenerator`].
    pub fn new() -> Self {
        Self::with_generator(RandomGenerator::new())
    }
}

impl Default for Registry<RandomGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Generator> Registry<G> {
    /// Creates an empty registry with the default settings and a custom generator.
    pub fn with_generator(generator: G) -> Self {
        Self::with_config(RegistryConfig::default(), generator)
    }

    /// Creates an empty registry.
    pub fn with_config(config: RegistryConfig, generator: G) -> Self {
        Self {
            base_url: config.base_url,
            policy: config.policy,
            generator,
            url_to_code: HashMap::new(),
            code_to_url: HashMap::new(),
        }
    }

    /// Shortens `long_url`, reusing its code if it was shortened before.
    ///
    /// Fails with [`RegistryError::InvalidUrl`] unless the URL starts with
    /// `http://` or `https://`; the registry is left untouched in that case.
    pub fn shorten(&mut self, long_url: &str) -> Result<Shortened> {
        validate_long_url(long_url)?;

        if let Some(code) = self.url_to_code.get(long_url) {
            debug!(code = %code, url = %long_url, "URL already shortened");
            return Ok(Shortened {
                short_url: self.base_url.join(code),
                code: code.clone(),
                status: ShortenStatus::AlreadyShortened,
            });
        }

        let code = self.unique_code();
        let record = UrlRecord::new(long_url, code.clone());

        // Both maps are written here and nowhere else.
        self.url_to_code.insert(long_url.to_owned(), code.clone());
        self.code_to_url.insert(code.clone(), record);
        debug!(code = %code, url = %long_url, "Issued short code");

        Ok(Shortened {
            short_url: self.base_url.join(&code),
            code,
            status: ShortenStatus::Created,
        })
    }

    /// Resolves a short URL back to the long URL it was issued for.
    ///
    /// The code is the text after the last `/` of `short_url`; the authority
    /// in front of it is not checked.
    pub fn expand(&self, short_url: &str) -> Result<Expanded> {
        let candidate = trailing_segment(short_url)?;

        match self.code_to_url.get(candidate) {
            Some(record) => {
                trace!(code = %record.code, "Short code hit");
                Ok(Expanded {
                    long_url: record.original_url.clone(),
                    code: record.code.clone(),
                })
            }
            None => {
                debug!(code = %candidate, "Unknown short code");
                Err(RegistryError::UnknownCode(candidate.to_owned()))
            }
        }
    }

    /// Draws candidates until one is not yet issued.
    ///
    /// The caller must have exclusive access for the whole call so that no
    /// other insert can race the membership check.
    fn unique_code(&mut self) -> ShortCode {
        let max_attempts = self.policy.max_attempts();
        let mut length = self.policy.length();
        let mut attempts = 0;

        loop {
            let candidate = self.generator.generate(length);
            if !self.code_to_url.contains_key(candidate.as_str()) {
                return candidate;
            }

            attempts += 1;
            trace!(code = %candidate, attempts, "Rejected colliding short code");

            if attempts >= max_attempts {
                length += 1;
                attempts = 0;
                warn!(
                    length,
                    max_attempts, "Too many short code collisions, growing code length"
                );
            }
        }
    }
}

impl<G> Registry<G> {
    /// Number of records held.
    pub fn len(&self) -> usize {
        self.code_to_url.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code_to_url.is_empty()
    }

    /// Looks up the record for a code.
    pub fn get(&self, code: &str) -> Option<&UrlRecord> {
        self.code_to_url.get(code)
    }

    /// Looks up the code issued for a long URL, if any.
    pub fn code_for(&self, long_url: &str) -> Option<&ShortCode> {
        self.url_to_code.get(long_url)
    }

    /// Iterates over all records in no particular order.
    pub fn records(&self) -> impl Iterator<Item = &UrlRecord> {
        self.code_to_url.values()
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    pub fn policy(&self) -> &CodePolicy {
        &self.policy
    }
}
